//! Rectangle store — two JSON files on disk, validated against size limits.
//!
//! DESIGN
//! ======
//! The canonical rectangle and the administrative size limits each live in
//! a small JSON file, created with defaults on first startup. An internal
//! async mutex serializes every read-validate-write cycle so a rectangle
//! write can never interleave with a limits change. Limits gate future
//! writes only; changing them does not re-validate the stored rectangle.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use geometry::rect::{Size, SizeLocation};

const RECTANGLE_FILE: &str = "rectangle-config.json";
const LIMITS_FILE: &str = "size-limits.json";

/// Rectangle seeded when no config file exists yet.
const DEFAULT_SIZE_LOCATION: SizeLocation = SizeLocation { x: 0, y: 0, width: 100, height: 100 };
/// Limits seeded when no limits file exists yet.
const DEFAULT_LIMITS: Size = Size { width: 400, height: 400 };

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The rectangle's width or height exceeds the current limits. The
    /// message is the wire-visible rejection body.
    #[error("Size exceeds limits")]
    LimitExceeded,
    #[error("store file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed store for the rectangle and its limits.
pub struct JsonStore {
    rectangle_path: PathBuf,
    limits_path: PathBuf,
    /// Serializes read-validate-write cycles across handlers.
    io_lock: Mutex<()>,
}

impl JsonStore {
    /// Store rooted at `data_dir`; no files are touched until
    /// [`JsonStore::ensure_defaults`] runs.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            rectangle_path: data_dir.join(RECTANGLE_FILE),
            limits_path: data_dir.join(LIMITS_FILE),
            io_lock: Mutex::new(()),
        }
    }

    /// Seed either file with its default when missing. Existing files are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the files cannot be probed or
    /// written.
    pub async fn ensure_defaults(&self) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        if !fs::try_exists(&self.rectangle_path).await? {
            write_json(&self.rectangle_path, &DEFAULT_SIZE_LOCATION).await?;
        }
        if !fs::try_exists(&self.limits_path).await? {
            write_json(&self.limits_path, &DEFAULT_LIMITS).await?;
        }
        Ok(())
    }

    /// Read the canonical rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] / [`StoreError::Serde`] when the config
    /// file is missing or malformed.
    pub async fn size_location(&self) -> Result<SizeLocation, StoreError> {
        let _guard = self.io_lock.lock().await;
        read_json(&self.rectangle_path).await
    }

    /// Validate `rect` against the current limits and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LimitExceeded`] when width or height exceeds
    /// the stored limits; [`StoreError::Io`] / [`StoreError::Serde`] on
    /// file problems.
    pub async fn set_size_location(&self, rect: SizeLocation) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        let limits: Size = read_json(&self.limits_path).await?;
        if rect.width > limits.width || rect.height > limits.height {
            return Err(StoreError::LimitExceeded);
        }
        write_json(&self.rectangle_path, &rect).await
    }

    /// Replace the size limits.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] / [`StoreError::Serde`] on file problems.
    pub async fn set_limits(&self, limits: Size) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().await;
        write_json(&self.limits_path, &limits).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    fs::write(path, json).await?;
    Ok(())
}
