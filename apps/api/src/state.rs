use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::ChatBackend;
use crate::stores::{CarouselStore, ImagePool, PresetStore, StoreError};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured.
    pub llm: Option<Arc<dyn ChatBackend>>,
    pub carousel: Arc<RwLock<CarouselStore>>,
    pub presets: Arc<RwLock<PresetStore>>,
    pub images: Arc<RwLock<ImagePool>>,
    /// Single-flight guard for batch generation.
    pub generate_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Loads the durable stores from `config.data_dir`.
    pub async fn load(
        config: Config,
        llm: Option<Arc<dyn ChatBackend>>,
    ) -> Result<Self, StoreError> {
        let carousel = CarouselStore::load(&config.data_dir).await?;
        let presets = PresetStore::load(&config.data_dir).await?;
        Ok(Self {
            config,
            llm,
            carousel: Arc::new(RwLock::new(carousel)),
            presets: Arc::new(RwLock::new(presets)),
            images: Arc::new(RwLock::new(ImagePool::new())),
            generate_lock: Arc::new(Mutex::new(())),
        })
    }

    /// The configured chat backend, or the error the LLM endpoints report
    /// when no key was provided.
    pub fn llm(&self) -> Result<&dyn ChatBackend, AppError> {
        self.llm.as_deref().ok_or_else(|| {
            AppError::NotConfigured("OPENAI_API_KEY not configured on server.".to_string())
        })
    }
}
