use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::slide::{LayoutType, Position, SlideDescriptor};

/// Number of preset slots. Fixed; the persisted array is always this long.
pub const PRESET_SLOTS: usize = 5;

/// A saved snapshot of one slide's layout and element geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub layout: LayoutType,
    #[serde(default)]
    pub headline_position: Position,
    #[serde(default)]
    pub subheadline_position: Position,
    #[serde(default)]
    pub image_position: Position,
    pub saved_at: DateTime<Utc>,
}

impl Preset {
    /// Captures layout and positions from an existing slide.
    pub fn capture(name: impl Into<String>, slide: &SlideDescriptor) -> Self {
        Self {
            name: name.into(),
            layout: slide.layout,
            headline_position: slide.headline_position,
            subheadline_position: slide.subheadline_position,
            image_position: slide.image_position,
            saved_at: Utc::now(),
        }
    }

    /// Overwrites a slide's layout and geometry. Everything else is left alone.
    pub fn apply_to(&self, slide: &mut SlideDescriptor) {
        slide.layout = self.layout;
        slide.headline_position = self.headline_position;
        slide.subheadline_position = self.subheadline_position;
        slide.image_position = self.image_position;
    }
}

/// One slot of the preset list; `None` is an empty slot.
pub type PresetSlot = Option<Preset>;
