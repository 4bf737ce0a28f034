// Slide batch planning.
// `batch`, `tiers` and `images` are pure: configuration snapshots plus one
// injected random source in, a fresh slide list out. `handlers` wires them to
// the stores.

pub mod batch;
pub mod handlers;
pub mod images;
pub mod tiers;

use serde::{Deserialize, Serialize};

use crate::models::preset::PresetSlot;
use crate::models::slide::{BackgroundTiers, SlideDescriptor};

pub use batch::plan;

/// Chance that a non-cover slide reuses a saved preset.
pub const DEFAULT_PRESET_APPLY_PROBABILITY: f64 = 0.4;
/// Chance of drawing two secondary-tier slides instead of one.
pub const DEFAULT_DOUBLE_SECONDARY_PROBABILITY: f64 = 0.5;

/// Probability knobs of the planner. Both values must lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanTuning {
    pub preset_apply_probability: f64,
    pub double_secondary_probability: f64,
}

impl Default for PlanTuning {
    fn default() -> Self {
        Self {
            preset_apply_probability: DEFAULT_PRESET_APPLY_PROBABILITY,
            double_secondary_probability: DEFAULT_DOUBLE_SECONDARY_PROBABILITY,
        }
    }
}

/// Inputs of one planning call. Everything is borrowed; nothing is mutated.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    pub slide_count: usize,
    pub existing_slides: &'a [SlideDescriptor],
    pub background: &'a BackgroundTiers,
    pub image_pool: &'a [String],
    pub presets: &'a [PresetSlot],
}
