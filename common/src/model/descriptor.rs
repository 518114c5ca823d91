//! Metadata the host's card picker reads from `window.customCards`.

use serde::Serialize;

/// Custom element name of the card.
pub const CARD_TYPE: &str = "jellyseerr-requests-card";

/// Rows the card asks the host layout for.
pub const CARD_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: bool,
}

impl CardDescriptor {
    pub fn jellyseerr() -> Self {
        Self {
            card_type: CARD_TYPE,
            name: "Jellyseerr Requests Card",
            description: "Review pending Jellyseerr media requests and approve or deny them.",
            preview: false,
        }
    }
}
