use serde::{Deserialize, Serialize};

use crate::models::signature::{ContainerStyle, SignatureSlots};
use crate::models::slide::{BackgroundTiers, SlideDescriptor};

/// Supported slide count range exposed by the UI.
pub const MIN_SLIDES: usize = 1;
pub const MAX_SLIDES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "9:16")]
    Story,
}

impl AspectRatio {
    /// Export size in pixels, `(width, height)`.
    pub fn export_size(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1080, 1080),
            AspectRatio::Portrait => (1080, 1350),
            AspectRatio::Story => (1080, 1920),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub background: BackgroundTiers,
    pub primary_color: String,
    pub secondary_color: String,
    pub highlight_color: String,
    pub name: String,
    pub handle: String,
    pub image_radius: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub show_avatar: bool,
    #[serde(default)]
    pub container: ContainerStyle,
    #[serde(default = "default_signatures")]
    pub signatures: SignatureSlots,
}

fn default_signatures() -> SignatureSlots {
    Branding::default().signatures
}

impl Default for Branding {
    fn default() -> Self {
        let name = "Your Brand";
        let handle = "@yourbrand";
        Self {
            background: BackgroundTiers::default(),
            primary_color: "#1A1A1A".to_string(),
            secondary_color: "#4A4A4A".to_string(),
            highlight_color: "#242F9C".to_string(),
            name: name.to_string(),
            handle: handle.to_string(),
            image_radius: 14,
            avatar: None,
            is_verified: true,
            show_avatar: false,
            container: ContainerStyle::default(),
            signatures: SignatureSlots::for_brand(name, handle),
        }
    }
}

/// The full editable carousel: settings plus the current slide batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub aspect_ratio: AspectRatio,
    pub slide_count: usize,
    pub branding: Branding,
    #[serde(default)]
    pub slides: Vec<SlideDescriptor>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::default(),
            slide_count: MAX_SLIDES,
            branding: Branding::default(),
            slides: Vec::new(),
        }
    }
}

/// Clamps a requested slide count into the supported range.
pub fn clamp_slide_count(requested: usize) -> usize {
    requested.clamp(MIN_SLIDES, MAX_SLIDES)
}
