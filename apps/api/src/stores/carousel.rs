use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::content::distribute_text;
use crate::models::carousel::{clamp_slide_count, AspectRatio, Branding, CarouselConfig};
use crate::models::signature::SignaturePositions;
use crate::models::slide::{BackgroundTier, LayoutType, Position, SlideDescriptor};
use crate::stores::persist::{load_or_default, write_json, CAROUSEL_FILE};
use crate::stores::StoreError;

/// Partial update of the carousel settings. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub aspect_ratio: Option<AspectRatio>,
    pub slide_count: Option<usize>,
    pub branding: Option<Branding>,
}

/// In-place edit of one slide. The id is never editable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePatch {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub layout: Option<LayoutType>,
    pub image: Option<String>,
    pub background_tier: Option<BackgroundTier>,
    pub headline_position: Option<Position>,
    pub subheadline_position: Option<Position>,
    pub image_position: Option<Position>,
    /// Merged into the slide's overrides; entries not named are kept.
    pub signature_positions: Option<SignaturePositions>,
}

/// The configuration store: branding, aspect ratio, slide count and the
/// current slide batch, persisted as one JSON document.
#[derive(Debug, Clone)]
pub struct CarouselStore {
    config: CarouselConfig,
    path: PathBuf,
}

impl CarouselStore {
    pub async fn load(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = data_dir.into().join(CAROUSEL_FILE);
        let mut config: CarouselConfig = load_or_default(&path).await?;
        config.slide_count = clamp_slide_count(config.slide_count);
        info!(
            "Carousel config loaded: {} slides requested, {} in batch",
            config.slide_count,
            config.slides.len()
        );
        Ok(Self { config, path })
    }

    pub fn snapshot(&self) -> CarouselConfig {
        self.config.clone()
    }

    /// Applies a settings patch. Slide count is clamped to the supported range.
    pub async fn update_settings(
        &mut self,
        patch: SettingsPatch,
    ) -> Result<CarouselConfig, StoreError> {
        let mut next = self.config.clone();
        if let Some(ratio) = patch.aspect_ratio {
            next.aspect_ratio = ratio;
        }
        if let Some(count) = patch.slide_count {
            next.slide_count = clamp_slide_count(count);
        }
        if let Some(branding) = patch.branding {
            next.branding = branding;
        }
        self.commit(next).await?;
        Ok(self.snapshot())
    }

    /// Replaces the whole slide list with a freshly planned batch.
    pub async fn replace_slides(
        &mut self,
        slides: Vec<SlideDescriptor>,
    ) -> Result<(), StoreError> {
        info!("Replacing slide batch ({} slides)", slides.len());
        let mut next = self.config.clone();
        next.slides = slides;
        self.commit(next).await
    }

    pub async fn update_slide(
        &mut self,
        index: usize,
        patch: SlidePatch,
    ) -> Result<SlideDescriptor, StoreError> {
        let mut next = self.config.clone();
        let slide = next
            .slides
            .get_mut(index)
            .ok_or(StoreError::SlideOutOfRange(index))?;

        if let Some(v) = patch.headline {
            slide.headline = v;
        }
        if let Some(v) = patch.subheadline {
            slide.subheadline = v;
        }
        if let Some(v) = patch.layout {
            slide.layout = v;
        }
        if let Some(v) = patch.image {
            slide.image = Some(v);
        }
        if let Some(v) = patch.background_tier {
            slide.background_tier = v;
        }
        if let Some(v) = patch.headline_position {
            slide.headline_position = v;
        }
        if let Some(v) = patch.subheadline_position {
            slide.subheadline_position = v;
        }
        if let Some(v) = patch.image_position {
            slide.image_position = v;
        }
        if let Some(v) = patch.signature_positions {
            slide.signature_positions.merge(v);
        }

        let updated = slide.clone();
        self.commit(next).await?;
        Ok(updated)
    }

    /// Rewrites slide texts from the two-lines-per-slide text form.
    pub async fn apply_text(&mut self, text: &str) -> Result<Vec<SlideDescriptor>, StoreError> {
        let mut next = self.config.clone();
        next.slides = distribute_text(text, next.slide_count, &next.slides);
        self.commit(next).await?;
        Ok(self.config.slides.clone())
    }

    /// Writes `next` to disk, then makes it the in-memory state. A failed write
    /// leaves memory untouched.
    async fn commit(&mut self, next: CarouselConfig) -> Result<(), StoreError> {
        write_json(&self.path, &next).await?;
        self.config = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::signature::SignatureKind;

    #[tokio::test]
    async fn test_defaults_when_nothing_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = CarouselStore::load(dir.path()).await.unwrap();
        let config = store.snapshot();
        assert_eq!(config.slide_count, 10);
        assert_eq!(config.aspect_ratio, AspectRatio::Portrait);
        assert!(config.slides.is_empty());
    }

    #[tokio::test]
    async fn test_slide_count_is_clamped_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CarouselStore::load(dir.path()).await.unwrap();
        let config = store
            .update_settings(SettingsPatch {
                slide_count: Some(25),
                aspect_ratio: Some(AspectRatio::Story),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(config.slide_count, 10);

        store
            .update_settings(SettingsPatch {
                slide_count: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();
        let reloaded = CarouselStore::load(dir.path()).await.unwrap().snapshot();
        assert_eq!(reloaded.slide_count, 1);
        assert_eq!(reloaded.aspect_ratio, AspectRatio::Story);
    }

    #[tokio::test]
    async fn test_update_slide_preserves_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CarouselStore::load(dir.path()).await.unwrap();
        store
            .replace_slides(vec![SlideDescriptor::blank("keep".to_string())])
            .await
            .unwrap();
        let updated = store
            .update_slide(
                0,
                SlidePatch {
                    headline: Some("Edited".to_string()),
                    image_position: Some(Position::new(3.0, 4.0)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, "keep");
        assert_eq!(updated.headline, "Edited");
        assert_eq!(updated.image_position, Position::new(3.0, 4.0));
    }

    #[tokio::test]
    async fn test_update_missing_slide_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CarouselStore::load(dir.path()).await.unwrap();
        assert!(matches!(
            store.update_slide(3, SlidePatch::default()).await,
            Err(StoreError::SlideOutOfRange(3))
        ));
    }

    #[tokio::test]
    async fn test_apply_text_uses_slide_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CarouselStore::load(dir.path()).await.unwrap();
        store
            .update_settings(SettingsPatch {
                slide_count: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        let slides = store.apply_text("A\na\nB\nb\nC\nc").await.unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].headline, "B");
    }

    #[tokio::test]
    async fn test_signatures_and_overrides_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CarouselStore::load(dir.path()).await.unwrap();

        let mut branding = Branding::default();
        branding.avatar = Some("data:image/png;base64,AAAA".to_string());
        branding.container.enabled = true;
        branding.container.opacity = 40;
        branding.signatures.bottom_right.enabled = true;
        branding.signatures.bottom_right.kind = SignatureKind::Page;
        branding.signatures.bottom_right.show_frame = true;
        store
            .update_settings(SettingsPatch {
                branding: Some(branding.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        store
            .replace_slides(vec![SlideDescriptor::blank("s1".to_string())])
            .await
            .unwrap();
        store
            .update_slide(
                0,
                SlidePatch {
                    signature_positions: Some(SignaturePositions {
                        top_left: Some(Position::new(10.0, 20.0)),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let updated = store
            .update_slide(
                0,
                SlidePatch {
                    signature_positions: Some(SignaturePositions {
                        bottom_right: Some(Position::new(300.0, 500.0)),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            updated.signature_positions.top_left,
            Some(Position::new(10.0, 20.0))
        );

        let reloaded = CarouselStore::load(dir.path()).await.unwrap().snapshot();
        assert_eq!(reloaded.branding, branding);
        assert_eq!(
            reloaded.slides[0].signature_positions,
            updated.signature_positions
        );
    }

    #[tokio::test]
    async fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        tokio::fs::create_dir(&data_dir).await.unwrap();
        let mut store = CarouselStore::load(data_dir.clone()).await.unwrap();
        store
            .replace_slides(vec![SlideDescriptor::blank("keep".to_string())])
            .await
            .unwrap();

        // A plain file where the data directory was makes every write fail.
        tokio::fs::remove_dir_all(&data_dir).await.unwrap();
        tokio::fs::write(&data_dir, b"not a directory").await.unwrap();

        let before = store.snapshot();
        assert!(store
            .update_settings(SettingsPatch {
                slide_count: Some(3),
                ..Default::default()
            })
            .await
            .is_err());
        assert!(store
            .update_slide(
                0,
                SlidePatch {
                    headline: Some("lost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .is_err());
        assert!(store.replace_slides(Vec::new()).await.is_err());
        assert!(store.apply_text("A\na").await.is_err());
        assert_eq!(store.snapshot(), before);
    }
}
