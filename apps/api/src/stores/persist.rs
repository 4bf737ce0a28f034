//! JSON file persistence shared by the durable stores.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::stores::StoreError;

/// File name of the carousel configuration document.
pub const CAROUSEL_FILE: &str = "carousel.json";
/// File name of the preset slot array.
pub const PRESETS_FILE: &str = "presets.json";

/// Loads a JSON document, falling back to `T::default()` when the file is
/// missing. A file that exists but does not parse is logged and replaced by
/// the default on the next write.
pub async fn load_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No stored data at {}, starting empty", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(
                "Stored data at {} is unreadable ({e}); using defaults",
                path.display()
            );
            Ok(T::default())
        }
    }
}

/// Writes a JSON document via a temp file + rename so readers never see a
/// partial file.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_vec_pretty(value)?;
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, body).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let value: Vec<String> = load_or_default(&dir.path().join("none.json")).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();
        let value: Vec<String> = load_or_default(&path).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        write_json(&path, &vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        let value: Vec<String> = load_or_default(&path).await.unwrap();
        assert_eq!(value, vec!["a", "b"]);
        assert!(!tmp_path(&path).exists());
    }
}
