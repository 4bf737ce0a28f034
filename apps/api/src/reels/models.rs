use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target clip length buckets offered by the reels tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipLength {
    #[default]
    #[serde(rename = "<30s")]
    UnderThirtySeconds,
    #[serde(rename = "30s~59s")]
    HalfMinute,
    #[serde(rename = "60s~89s")]
    OneMinute,
    #[serde(rename = "90s~3m")]
    UpToThreeMinutes,
    #[serde(rename = "3m~5m")]
    UpToFiveMinutes,
    #[serde(rename = "5m~10m")]
    UpToTenMinutes,
    #[serde(rename = "10m~15m")]
    UpToFifteenMinutes,
}

impl ClipLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipLength::UnderThirtySeconds => "<30s",
            ClipLength::HalfMinute => "30s~59s",
            ClipLength::OneMinute => "60s~89s",
            ClipLength::UpToThreeMinutes => "90s~3m",
            ClipLength::UpToFiveMinutes => "3m~5m",
            ClipLength::UpToTenMinutes => "5m~10m",
            ClipLength::UpToFifteenMinutes => "10m~15m",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_value(Value::String(raw.trim().to_string())).ok()
    }
}

/// What the uploaded form asked for, plus metadata about the video itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelRequest {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
    pub clip_length: ClipLength,
    pub prompt: String,
    pub theme: String,
    pub interactive_subtitles: bool,
}

/// A clip as the model returned it. Every field is optional; see [`normalize_clips`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClip {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub score: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReelResponse {
    #[serde(default)]
    pub clips: Vec<RawClip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReelResponse {
    pub clips: Vec<Clip>,
}

/// Fills gaps in model output: missing ids become the 1-based position,
/// blank titles become `Clip n`, scores are clamped to 0..=100, a missing
/// duration falls back to the requested length bucket.
pub fn normalize_clips(raw: Vec<RawClip>, requested: ClipLength) -> Vec<Clip> {
    raw.into_iter()
        .enumerate()
        .map(|(i, clip)| {
            let n = i + 1;
            let id = match clip.id {
                Some(Value::String(s)) if !s.trim().is_empty() => s,
                Some(Value::Number(num)) => num.to_string(),
                _ => n.to_string(),
            };
            let title = clip
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| format!("Clip {n}"));
            let duration = clip
                .duration
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| requested.as_str().to_string());
            let score = clip
                .score
                .filter(|s| s.is_finite())
                .map(|s| s.round().clamp(0.0, 100.0) as u8)
                .unwrap_or(0);
            let description = clip.description.filter(|d| !d.trim().is_empty());
            Clip {
                id,
                title,
                duration,
                score,
                description,
            }
        })
        .collect()
}
