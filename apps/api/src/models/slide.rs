use serde::{Deserialize, Serialize};

use crate::models::signature::SignaturePositions;

// ────────────────────────────────────────────────────────────────────────────
// Closed vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// One of the five fixed arrangements of headline, subheadline and image.
///
/// Serialised with the long kebab names; the short `img` spellings written by
/// older saved data are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "full-bg")]
    FullBg,
    #[serde(rename = "text-top-image-bottom", alias = "text-top-img-bottom")]
    TextTopImageBottom,
    #[serde(rename = "image-top-text-bottom", alias = "img-top-text-bottom")]
    ImageTopTextBottom,
    #[serde(rename = "image-right-text-left", alias = "img-right-text-left")]
    ImageRightTextLeft,
    #[serde(
        rename = "headline-image-subheadline",
        alias = "headline-img-subheadline"
    )]
    HeadlineImageSubheadline,
}

impl LayoutType {
    /// Every variant, in declaration order. Random layout draws index into this.
    pub const ALL: [LayoutType; 5] = [
        LayoutType::FullBg,
        LayoutType::TextTopImageBottom,
        LayoutType::ImageTopTextBottom,
        LayoutType::ImageRightTextLeft,
        LayoutType::HeadlineImageSubheadline,
    ];
}

/// Background color slot of a slide. Indexes into the branding palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundTier {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl BackgroundTier {
    pub fn is_primary(&self) -> bool {
        matches!(self, BackgroundTier::Primary)
    }
}

/// The three configured background colors of the branding palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTiers {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl Default for BackgroundTiers {
    fn default() -> Self {
        Self {
            primary: "#FFFFFF".to_string(),
            secondary: "#333333".to_string(),
            tertiary: "#242F9C".to_string(),
        }
    }
}

impl BackgroundTiers {
    pub fn color_for(&self, tier: BackgroundTier) -> &str {
        match tier {
            BackgroundTier::Primary => &self.primary,
            BackgroundTier::Secondary => &self.secondary,
            BackgroundTier::Tertiary => &self.tertiary,
        }
    }
}

/// 2D offset of an element relative to its layout anchor, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slide descriptor
// ────────────────────────────────────────────────────────────────────────────

/// One planned slide. Produced wholesale by the batch planner, later edited in
/// place (id is preserved across edits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDescriptor {
    pub id: String,
    pub headline: String,
    pub subheadline: String,
    pub layout: LayoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub background_tier: BackgroundTier,
    #[serde(default)]
    pub headline_position: Position,
    #[serde(default)]
    pub subheadline_position: Position,
    #[serde(default)]
    pub image_position: Position,
    #[serde(default, skip_serializing_if = "SignaturePositions::is_empty")]
    pub signature_positions: SignaturePositions,
}

impl SlideDescriptor {
    /// A blank full-background slide with the given id.
    pub fn blank(id: String) -> Self {
        Self {
            id,
            headline: String::new(),
            subheadline: String::new(),
            layout: LayoutType::FullBg,
            image: None,
            background_tier: BackgroundTier::Primary,
            headline_position: Position::ORIGIN,
            subheadline_position: Position::ORIGIN,
            image_position: Position::ORIGIN,
            signature_positions: SignaturePositions::default(),
        }
    }
}
