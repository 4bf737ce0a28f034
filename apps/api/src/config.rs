use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;
use crate::planner::{
    PlanTuning, DEFAULT_DOUBLE_SECONDARY_PROBABILITY, DEFAULT_PRESET_APPLY_PROBABILITY,
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent key leaves the server up; the LLM endpoints then report it.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Body cap for the reel video upload.
    pub max_upload_bytes: usize,
    /// Body cap for JSON routes that carry data-URI images.
    pub max_image_bytes: usize,
    pub plan_tuning: PlanTuning,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            data_dir: PathBuf::from(
                std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            ),
            max_upload_bytes: megabytes_env("MAX_UPLOAD_MB", 512)?,
            max_image_bytes: megabytes_env("MAX_IMAGE_MB", 50)?,
            plan_tuning: PlanTuning {
                preset_apply_probability: probability_env(
                    "PRESET_APPLY_PROBABILITY",
                    DEFAULT_PRESET_APPLY_PROBABILITY,
                )?,
                double_secondary_probability: probability_env(
                    "DOUBLE_SECONDARY_PROBABILITY",
                    DEFAULT_DOUBLE_SECONDARY_PROBABILITY,
                )?,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn megabytes_env(key: &str, default_mb: usize) -> Result<usize> {
    let mb = match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a whole number of megabytes"))?,
        Err(_) => default_mb,
    };
    Ok(mb * 1024 * 1024)
}

fn probability_env(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => parse_probability(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_probability(key: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number"))?;
    if !(0.0..=1.0).contains(&value) {
        bail!("{key} must be between 0 and 1, got {value}");
    }
    Ok(value)
}
