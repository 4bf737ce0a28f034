//! Axum route handlers for the carousel config, slides, presets and image pool.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::slides_to_text;
use crate::errors::{AppError, AppJson};
use crate::models::carousel::CarouselConfig;
use crate::models::preset::{Preset, PresetSlot};
use crate::models::slide::SlideDescriptor;
use crate::state::AppState;
use crate::stores::{SettingsPatch, SlidePatch};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SlideText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePresetRequest {
    pub slide_index: usize,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<PresetSlot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddImagesRequest {
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveImageRequest {
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Config and slides
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<CarouselConfig> {
    Json(state.carousel.read().await.snapshot())
}

/// PATCH /api/config
pub async fn handle_update_config(
    State(state): State<AppState>,
    AppJson(patch): AppJson<SettingsPatch>,
) -> Result<Json<CarouselConfig>, AppError> {
    let config = state.carousel.write().await.update_settings(patch).await?;
    Ok(Json(config))
}

/// PATCH /api/slides/:index
pub async fn handle_update_slide(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    AppJson(patch): AppJson<SlidePatch>,
) -> Result<Json<SlideDescriptor>, AppError> {
    let slide = state
        .carousel
        .write()
        .await
        .update_slide(index, patch)
        .await?;
    Ok(Json(slide))
}

/// GET /api/slides/text
pub async fn handle_get_slide_text(State(state): State<AppState>) -> Json<SlideText> {
    let config = state.carousel.read().await.snapshot();
    Json(SlideText {
        text: slides_to_text(&config.slides),
    })
}

/// PUT /api/slides/text
pub async fn handle_put_slide_text(
    State(state): State<AppState>,
    AppJson(body): AppJson<SlideText>,
) -> Result<Json<Vec<SlideDescriptor>>, AppError> {
    let slides = state.carousel.write().await.apply_text(&body.text).await?;
    Ok(Json(slides))
}

// ────────────────────────────────────────────────────────────────────────────
// Presets
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/presets
pub async fn handle_list_presets(State(state): State<AppState>) -> Json<PresetListResponse> {
    Json(PresetListResponse {
        presets: state.presets.read().await.list(),
    })
}

/// PUT /api/presets/:slot
///
/// Captures layout and positions of the current slide at `slide_index`.
pub async fn handle_save_preset(
    State(state): State<AppState>,
    Path(slot): Path<usize>,
    AppJson(request): AppJson<SavePresetRequest>,
) -> Result<Json<Preset>, AppError> {
    let config = state.carousel.read().await.snapshot();
    let slide = config.slides.get(request.slide_index).ok_or_else(|| {
        AppError::NotFound(format!("Slide {} does not exist", request.slide_index))
    })?;

    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("Preset {}", slot + 1));
    let preset = Preset::capture(name, slide);

    state.presets.write().await.save(slot, preset.clone()).await?;
    Ok(Json(preset))
}

/// DELETE /api/presets/:slot
pub async fn handle_delete_preset(
    State(state): State<AppState>,
    Path(slot): Path<usize>,
) -> Result<StatusCode, AppError> {
    state.presets.write().await.delete(slot).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Image pool
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/images
pub async fn handle_list_images(State(state): State<AppState>) -> Json<ImageListResponse> {
    Json(ImageListResponse {
        images: state.images.read().await.list(),
    })
}

/// POST /api/images
pub async fn handle_add_images(
    State(state): State<AppState>,
    AppJson(request): AppJson<AddImagesRequest>,
) -> Result<Json<ImageListResponse>, AppError> {
    if request.images.is_empty() {
        return Err(AppError::Validation("images cannot be empty".to_string()));
    }
    let mut pool = state.images.write().await;
    pool.add(request.images);
    Ok(Json(ImageListResponse {
        images: pool.list(),
    }))
}

/// POST /api/images/remove
pub async fn handle_remove_image(
    State(state): State<AppState>,
    AppJson(request): AppJson<RemoveImageRequest>,
) -> Result<Json<ImageListResponse>, AppError> {
    let mut pool = state.images.write().await;
    if !pool.remove(&request.image) {
        return Err(AppError::NotFound("Image is not in the pool".to_string()));
    }
    Ok(Json(ImageListResponse {
        images: pool.list(),
    }))
}

/// DELETE /api/images
pub async fn handle_clear_images(State(state): State<AppState>) -> StatusCode {
    state.images.write().await.clear();
    StatusCode::NO_CONTENT
}
