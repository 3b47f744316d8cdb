use std::path::PathBuf;

use serde::Serialize;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::Result;

/// JSON persistence under a base directory, one file per key.
#[derive(Debug, Clone)]
pub struct Store {
    base: PathBuf,
}

impl Store {
    /// Opens a store rooted at `base`, creating the directory if missing.
    pub async fn open(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        tokio::fs::create_dir_all(&base).await?;
        Ok(Self { base })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }

    /// Serializes `doc` and writes it under `key`, replacing any previous
    /// file with the same key.
    pub async fn put<T: Serialize>(&self, key: &str, doc: &T) -> Result<()> {
        let bytes = serde_json::to_vec(doc)?;
        let mut file = File::create(self.path_for(key)).await?;
        file.write_all(&bytes).await?;
        Ok(())
    }
}
