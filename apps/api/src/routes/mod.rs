pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::planner::handlers::handle_generate_slides;
use crate::reels::handlers::handle_generate_reels;
use crate::state::AppState;
use crate::stores::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    let image_limit = DefaultBodyLimit::max(state.config.max_image_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Language-model pass-throughs
        .route("/api/chat", post(handle_chat))
        .route(
            "/api/generate-reels",
            post(handle_generate_reels).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Carousel config and slides
        .route(
            "/api/config",
            get(handlers::handle_get_config)
                .patch(handlers::handle_update_config)
                .layer(image_limit),
        )
        .route("/api/slides/generate", post(handle_generate_slides))
        .route(
            "/api/slides/text",
            get(handlers::handle_get_slide_text).put(handlers::handle_put_slide_text),
        )
        .route(
            "/api/slides/:index",
            patch(handlers::handle_update_slide).layer(image_limit),
        )
        // Presets
        .route("/api/presets", get(handlers::handle_list_presets))
        .route(
            "/api/presets/:slot",
            put(handlers::handle_save_preset).delete(handlers::handle_delete_preset),
        )
        // Image pool
        .route(
            "/api/images",
            get(handlers::handle_list_images)
                .post(handlers::handle_add_images)
                .delete(handlers::handle_clear_images)
                .layer(image_limit),
        )
        .route(
            "/api/images/remove",
            post(handlers::handle_remove_image).layer(image_limit),
        )
        .with_state(state)
}
