//! Axum route handler for batch generation.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::slide::SlideDescriptor;
use crate::planner::{plan, PlanRequest};
use crate::state::AppState;

/// A planned slide with its tier resolved to a palette color for rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSlide {
    #[serde(flatten)]
    pub slide: SlideDescriptor,
    pub background_color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSlidesResponse {
    pub slides: Vec<RenderedSlide>,
    /// Export canvas size for the configured aspect ratio.
    pub export_width: u32,
    pub export_height: u32,
}

/// POST /api/slides/generate
///
/// Plans a fresh batch from the current config, image pool and presets (all
/// read fresh) and replaces the stored slide list. Overlapping calls are
/// rejected with 409.
pub async fn handle_generate_slides(
    State(state): State<AppState>,
) -> Result<Json<GenerateSlidesResponse>, AppError> {
    let _guard = state
        .generate_lock
        .try_lock()
        .map_err(|_| AppError::Conflict("Slide generation already in progress".to_string()))?;

    let config = state.carousel.read().await.snapshot();
    let presets = state.presets.read().await.list();
    let pool = state.images.read().await.list();

    let slides = {
        let mut rng = StdRng::from_os_rng();
        let request = PlanRequest {
            slide_count: config.slide_count,
            existing_slides: &config.slides,
            background: &config.branding.background,
            image_pool: &pool,
            presets: &presets,
        };
        plan(&request, &state.config.plan_tuning, &mut rng)
    };

    info!(
        "Generated {} slides ({} pool images, {} presets)",
        slides.len(),
        pool.len(),
        presets.iter().filter(|p| p.is_some()).count()
    );

    state
        .carousel
        .write()
        .await
        .replace_slides(slides.clone())
        .await?;

    let palette = &config.branding.background;
    let slides = slides
        .into_iter()
        .map(|slide| RenderedSlide {
            background_color: palette.color_for(slide.background_tier).to_string(),
            slide,
        })
        .collect();

    let (export_width, export_height) = config.aspect_ratio.export_size();
    Ok(Json(GenerateSlidesResponse {
        slides,
        export_width,
        export_height,
    }))
}
