// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `ospfNbrOptions`: the options field of the neighbor's hello packets

use bitflags::bitflags;

// Option bits as carried in OSPFv2 hello packets.
bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NbrOptions: u8 {
        /// Neighbor operates on TOS metrics other than TOS 0
        const TOS = 0x01;
        /// Area accepts external information (not a stub area)
        const EXTERNAL = 0x02;
        /// Neighbor routes IP multicast
        const MULTICAST = 0x04;
        /// Area is an NSSA
        const NSSA = 0x08;

        const _ = !0;
    }
}

const LABELS: [(NbrOptions, &str); 4] = [
    (NbrOptions::TOS, "non TOS 0 service metrics accepted"),
    (NbrOptions::EXTERNAL, "not a stub area"),
    (NbrOptions::MULTICAST, "IP multicast routing capable"),
    (NbrOptions::NSSA, "is NSSA"),
];

pub const UNKNOWN_LABEL: &str = "unknown";

impl NbrOptions {
    /// Interpret the raw column value. The agent reports the option field as a
    /// one-octet string; anything else cannot be interpreted.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            return None;
        };
        u8::try_from(u32::from(first))
            .ok()
            .map(NbrOptions::from_bits_retain)
    }

    /// Labels of the known option bits that are set, in bit order
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        LABELS
            .into_iter()
            .filter(move |(bit, _)| self.contains(*bit))
            .map(|(_, label)| label)
    }

    #[must_use]
    pub fn label(self) -> String {
        let label = self.labels().collect::<Vec<_>>().join(", ");
        if label.is_empty() {
            UNKNOWN_LABEL.to_string()
        } else {
            label
        }
    }
}

/// Label for a possibly uninterpretable options value
#[must_use]
pub fn options_label(options: Option<NbrOptions>) -> String {
    options.map_or_else(|| UNKNOWN_LABEL.to_string(), NbrOptions::label)
}
