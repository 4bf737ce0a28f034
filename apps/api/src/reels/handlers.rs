//! Axum route handler for reel suggestions.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, ChatMessage};
use crate::reels::models::{normalize_clips, ClipLength, RawReelResponse, ReelRequest, ReelResponse};
use crate::reels::prompts::{build_reels_prompt, MAX_CLIPS};
use crate::state::AppState;

/// POST /api/generate-reels
///
/// Multipart form: `video` (file), `duration`, `prompt`, `theme`,
/// `interactiveSubtitles`. Returns AI-suggested clips; no video is cut.
pub async fn handle_generate_reels(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReelResponse>, AppError> {
    let llm = state.llm()?;
    let request = read_reel_form(multipart).await?;

    info!(
        "Reel suggestions for '{}' ({}, {} bytes, {})",
        request.file_name,
        request.content_type.as_deref().unwrap_or("unknown type"),
        request.size_bytes,
        request.clip_length.as_str()
    );

    let messages = [
        ChatMessage::system(JSON_ONLY_SYSTEM),
        ChatMessage::user(build_reels_prompt(&request)),
    ];
    let raw: RawReelResponse = complete_json(llm, &messages).await?;

    let mut clips = normalize_clips(raw.clips, request.clip_length);
    clips.truncate(MAX_CLIPS);
    info!("Model proposed {} clips", clips.len());

    Ok(Json(ReelResponse { clips }))
}

/// Reads and validates the reel upload form.
async fn read_reel_form(mut multipart: Multipart) -> Result<ReelRequest, AppError> {
    let mut video: Option<(String, Option<String>, usize)> = None;
    let mut clip_length = ClipLength::default();
    let mut prompt = String::new();
    let mut theme = String::new();
    let mut interactive_subtitles = true;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "video" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                if let Some(ct) = &content_type {
                    if !ct.starts_with("video/") {
                        return Err(AppError::Validation(format!(
                            "video must be a video file, got '{ct}'"
                        )));
                    }
                }
                let size = count_bytes(field).await?;
                if size == 0 {
                    return Err(AppError::Validation("video file is empty".to_string()));
                }
                video = Some((file_name, content_type, size));
            }
            "duration" => {
                let raw = read_text(field).await?;
                if !raw.trim().is_empty() {
                    clip_length = ClipLength::parse(&raw).ok_or_else(|| {
                        AppError::Validation(format!("Unknown duration '{raw}'"))
                    })?;
                }
            }
            "prompt" => prompt = read_text(field).await?,
            "theme" => theme = read_text(field).await?,
            "interactiveSubtitles" => {
                let raw = read_text(field).await?;
                interactive_subtitles = match raw.trim() {
                    "" | "true" => true,
                    "false" => false,
                    other => {
                        return Err(AppError::Validation(format!(
                            "interactiveSubtitles must be true or false, got '{other}'"
                        )))
                    }
                };
            }
            _ => {}
        }
    }

    let (file_name, content_type, size_bytes) =
        video.ok_or_else(|| AppError::Validation("video file is required".to_string()))?;

    Ok(ReelRequest {
        file_name,
        content_type,
        size_bytes,
        clip_length,
        prompt,
        theme,
        interactive_subtitles,
    })
}

/// Drains a file field, keeping only its length. Chunks are dropped as they
/// arrive, so memory stays flat whatever the upload size.
async fn count_bytes(mut field: Field<'_>) -> Result<usize, AppError> {
    let mut size = 0;
    while let Some(chunk) = field.chunk().await? {
        size += chunk.len();
    }
    Ok(size)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    Ok(field.text().await?)
}
