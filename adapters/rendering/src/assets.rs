//! Image queueing and load bookkeeping.

use std::{collections::HashMap, path::PathBuf};

use thiserror::Error;

use crate::ImageHandle;

/// Pixel dimensions reported by a loader.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ImageSize {
    /// Creates a new size descriptor.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Reasons a single image failed to load.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read image at {path}")]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The bytes carry a supported signature but could not be decoded.
    #[error("failed to decode image at {path}")]
    Decode {
        /// Path of the image.
        path: PathBuf,
        /// Decoder failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The bytes are not in a format the backend decodes.
    #[error("image at {path} is not a supported format")]
    UnsupportedFormat {
        /// Path of the image.
        path: PathBuf,
    },
}

/// Registry of images queued before the game starts.
///
/// Loading is a one-shot join: every queued path is attempted once, failures
/// are counted rather than propagated, and completion is reported exactly
/// once when `success_count + error_count` reaches the queue length.
#[derive(Debug, Default)]
pub struct AssetManager {
    queue: Vec<String>,
    cache: HashMap<String, ImageHandle>,
    success_count: usize,
    error_count: usize,
}

impl AssetManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` to the download queue.
    pub fn queue_download(&mut self, path: impl Into<String>) {
        self.queue.push(path.into());
    }

    /// Paths queued so far, in queue order.
    #[must_use]
    pub fn queued(&self) -> &[String] {
        &self.queue
    }

    /// Number of images that loaded.
    #[must_use]
    pub const fn success_count(&self) -> usize {
        self.success_count
    }

    /// Number of images that failed to load.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether every queued image has been attempted.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.queue.len() == self.success_count + self.error_count
    }

    /// Attempts every queued image with `loader`, then calls `on_complete`.
    ///
    /// Failed loads are reported through `tracing` and do not stop the
    /// remaining attempts.
    pub fn download_all<L, C>(&mut self, mut loader: L, on_complete: C)
    where
        L: FnMut(&str) -> Result<ImageSize, AssetError>,
        C: FnOnce(&AssetManager),
    {
        let mut on_complete = Some(on_complete);
        let pending: Vec<String> = self
            .queue
            .iter()
            .filter(|path| !self.cache.contains_key(*path))
            .cloned()
            .collect();

        for path in pending {
            match loader(&path) {
                Ok(size) => self.record_success(path, size),
                Err(error) => self.record_error(path, &error),
            }
            if self.is_done() {
                if let Some(callback) = on_complete.take() {
                    callback(self);
                }
            }
        }

        if self.is_done() {
            if let Some(callback) = on_complete.take() {
                callback(self);
            }
        }
    }

    /// Returns the handle registered for `path`.
    ///
    /// Paths that were never queued or failed to load yield a missing handle.
    #[must_use]
    pub fn get_image(&self, path: &str) -> ImageHandle {
        self.cache
            .get(path)
            .cloned()
            .unwrap_or_else(|| ImageHandle::missing(path))
    }

    fn record_success(&mut self, path: String, size: ImageSize) {
        self.success_count += 1;
        let handle = ImageHandle::loaded(path.clone(), size);
        let _ = self.cache.insert(path, handle);
    }

    fn record_error(&mut self, path: String, error: &AssetError) {
        self.error_count += 1;
        tracing::warn!(%path, %error, "image failed to load");
        let handle = ImageHandle::missing(path.clone());
        let _ = self.cache.insert(path, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn manager(paths: &[&str]) -> AssetManager {
        let mut assets = AssetManager::new();
        for path in paths {
            assets.queue_download(*path);
        }
        assets
    }

    #[test]
    fn completion_fires_once_after_every_attempt() {
        let mut assets = manager(&["img/tower.png", "img/explosion.png", "img/extra.png"]);
        let completions = Cell::new(0);
        let mut attempts = 0;

        assets.download_all(
            |path| {
                attempts += 1;
                if path == "img/extra.png" {
                    Err(AssetError::UnsupportedFormat { path: path.into() })
                } else {
                    Ok(ImageSize::new(20.0, 20.0))
                }
            },
            |assets| {
                assert!(assets.is_done());
                completions.set(completions.get() + 1);
            },
        );

        assert_eq!(attempts, 3);
        assert_eq!(completions.get(), 1);
        assert_eq!(assets.success_count(), 2);
        assert_eq!(assets.error_count(), 1);
    }

    #[test]
    fn failed_images_resolve_to_missing_handles() {
        let mut assets = manager(&["img/tower.png"]);
        assets.download_all(
            |path| {
                Err(AssetError::Io {
                    path: path.into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            },
            |_| {},
        );

        let handle = assets.get_image("img/tower.png");
        assert!(!handle.is_loaded());
        assert_eq!(handle.width(), 0.0);
    }

    #[test]
    fn loaded_images_report_their_size() {
        let mut assets = manager(&["img/explosion.png"]);
        assets.download_all(|_| Ok(ImageSize::new(408.0, 24.0)), |_| {});

        let handle = assets.get_image("img/explosion.png");
        assert!(handle.is_loaded());
        assert_eq!(handle.width(), 408.0);
        assert_eq!(handle.height(), 24.0);
    }

    #[test]
    fn empty_queue_completes_immediately() {
        let mut assets = AssetManager::new();
        let mut completed = false;
        assets.download_all(|_| Ok(ImageSize::default()), |_| completed = true);
        assert!(completed);
    }

    #[test]
    fn unknown_paths_are_missing() {
        let assets = AssetManager::new();
        assert_eq!(
            assets.get_image("img/nowhere.png"),
            ImageHandle::missing("img/nowhere.png")
        );
    }
}
