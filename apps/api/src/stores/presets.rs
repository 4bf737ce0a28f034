use std::path::PathBuf;

use tracing::info;

use crate::models::preset::{Preset, PresetSlot, PRESET_SLOTS};
use crate::stores::persist::{load_or_default, write_json, PRESETS_FILE};
use crate::stores::StoreError;

/// Five fixed preset slots, persisted as a null-padded JSON array.
#[derive(Debug, Clone)]
pub struct PresetStore {
    slots: Vec<PresetSlot>,
    path: PathBuf,
}

impl PresetStore {
    /// Loads `presets.json` from `data_dir`. Arrays of the wrong length are
    /// padded with empty slots or truncated.
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = data_dir.into().join(PRESETS_FILE);
        let mut slots: Vec<PresetSlot> = load_or_default(&path).await?;
        slots.resize(PRESET_SLOTS, None);
        info!(
            "Preset store loaded: {} of {} slots used",
            slots.iter().filter(|s| s.is_some()).count(),
            PRESET_SLOTS
        );
        Ok(Self { slots, path })
    }

    /// Snapshot of all five slots.
    pub fn list(&self) -> Vec<PresetSlot> {
        self.slots.clone()
    }

    pub async fn save(&mut self, slot: usize, preset: Preset) -> Result<(), StoreError> {
        let mut next = self.slots.clone();
        let entry = next
            .get_mut(slot)
            .ok_or(StoreError::SlotOutOfRange(slot))?;
        info!("Saving preset '{}' into slot {slot}", preset.name);
        *entry = Some(preset);
        self.commit(next).await
    }

    pub async fn delete(&mut self, slot: usize) -> Result<(), StoreError> {
        let mut next = self.slots.clone();
        let entry = next
            .get_mut(slot)
            .ok_or(StoreError::SlotOutOfRange(slot))?;
        *entry = None;
        self.commit(next).await?;
        info!("Cleared preset slot {slot}");
        Ok(())
    }

    /// Writes the new slots first; memory only changes once the file does.
    async fn commit(&mut self, next: Vec<PresetSlot>) -> Result<(), StoreError> {
        write_json(&self.path, &next).await?;
        self.slots = next;
        Ok(())
    }
}
