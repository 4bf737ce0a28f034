use serde::{Deserialize, Serialize};

use crate::models::slide::Position;

/// Whether a signature renders as a name/handle block or as a page counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    #[default]
    Text,
    Page,
}

/// One of the five fixed signature anchors on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSlot {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: SignatureKind,
    pub position: Position,
    pub name: String,
    pub handle: String,
    pub is_verified: bool,
    pub show_avatar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub avatar_border_color: String,
    pub avatar_border_width: u32,
    pub avatar_border_radius: u32,
    pub show_frame: bool,
}

impl SignatureSlot {
    fn new(enabled: bool, kind: SignatureKind, position: Position, name: &str, handle: &str) -> Self {
        Self {
            enabled,
            kind,
            position,
            name: name.to_string(),
            handle: handle.to_string(),
            is_verified: false,
            show_avatar: false,
            avatar: None,
            avatar_border_color: "#ffffff".to_string(),
            avatar_border_width: 1,
            avatar_border_radius: 50,
            show_frame: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSlots {
    pub top_left: SignatureSlot,
    pub top_right: SignatureSlot,
    pub center_low: SignatureSlot,
    pub bottom_left: SignatureSlot,
    pub bottom_right: SignatureSlot,
}

impl SignatureSlots {
    /// Slot defaults for a brand; the top-left block carries the brand identity.
    pub fn for_brand(name: &str, handle: &str) -> Self {
        let mut top_left =
            SignatureSlot::new(true, SignatureKind::Text, Position::ORIGIN, name, handle);
        top_left.is_verified = true;

        let mut top_right = SignatureSlot::new(
            true,
            SignatureKind::Page,
            Position::new(360.0, 0.0),
            "Top right",
            "subtext",
        );
        top_right.is_verified = true;
        top_right.avatar_border_color = "#8c8c8c".to_string();

        Self {
            top_left,
            top_right,
            center_low: SignatureSlot::new(
                false,
                SignatureKind::Text,
                Position::new(120.0, 400.0),
                "Center",
                "subtext",
            ),
            bottom_left: SignatureSlot::new(
                false,
                SignatureKind::Text,
                Position::new(0.0, 480.0),
                "Bottom left",
                "subtext",
            ),
            bottom_right: SignatureSlot::new(
                false,
                SignatureKind::Text,
                Position::new(280.0, 480.0),
                "Bottom right",
                "subtext",
            ),
        }
    }
}

/// Translucent box drawn behind slide text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    pub enabled: bool,
    pub background_color: String,
    /// Percent, 0..=100.
    pub opacity: u8,
    pub border_color: String,
    pub border_radius: u32,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            background_color: "#FFFFFF".to_string(),
            opacity: 10,
            border_color: "rgba(255, 255, 255, 0.2)".to_string(),
            border_radius: 12,
        }
    }
}

/// Per-slide overrides of signature positions. A missing entry falls back to
/// the branding slot's own position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePositions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_low: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<Position>,
}

impl SignaturePositions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlays the entries present in `other`, keeping the rest.
    pub fn merge(&mut self, other: SignaturePositions) {
        self.top_left = other.top_left.or(self.top_left);
        self.top_right = other.top_right.or(self.top_right);
        self.center_low = other.center_low.or(self.center_low);
        self.bottom_left = other.bottom_left.or(self.bottom_left);
        self.bottom_right = other.bottom_right.or(self.bottom_right);
    }
}
