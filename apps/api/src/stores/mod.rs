// Stores the planner reads from and writes to.
// Carousel config and presets persist as JSON files under DATA_DIR; the image
// pool lives only in memory for the running process.

pub mod carousel;
pub mod handlers;
pub mod image_pool;
pub mod persist;
pub mod presets;

use thiserror::Error;

pub use carousel::{CarouselStore, SettingsPatch, SlidePatch};
pub use image_pool::ImagePool;
pub use presets::PresetStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preset slot {0} does not exist (valid slots: 0-4)")]
    SlotOutOfRange(usize),

    #[error("Slide {0} does not exist")]
    SlideOutOfRange(usize),
}
