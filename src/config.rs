use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Run configuration, read once at startup from `session.json`.
/// Field names follow the session file's camelCase keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub lang: String,
    pub country: String,

    /// Directory receiving one JSON file per chart.
    pub charts_path: PathBuf,
    /// Directory receiving one JSON file per app detail record.
    pub full_details_path: PathBuf,
    /// File receiving the combined, sorted app-id list.
    pub charts_json_path: PathBuf,

    /// Milliseconds between the start of two fetches in the same lane.
    pub download_delay: u64,
    /// Number of independent detail-fetch lanes.
    pub simultaneous_downloads: usize,
    /// Maximum number of entries kept per chart.
    pub list_num: usize,
}

impl Session {
    /// Reads and validates the session file, failing fast on any missing or
    /// unusable field.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!("couldn't read {}: {e}", path.display()))
        })?;
        let session: Session = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<()> {
        if self.simultaneous_downloads == 0 {
            return Err(Error::Config(
                "simultaneousDownloads must be at least 1".into(),
            ));
        }
        if self.download_delay == 0 {
            return Err(Error::Config("downloadDelay must be at least 1 ms".into()));
        }
        if self.list_num == 0 {
            return Err(Error::Config("listNum must be at least 1".into()));
        }
        Ok(())
    }
}
