//! Configuration types

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AnselError, AnselResult};

/// Top-level configuration, resolved once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gallery: GalleryConfig,
    pub remote: RemoteConfig,
}

/// `[gallery]` section - what to build and where
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Gallery builder command (resolved via PATH)
    pub command: String,
    /// Photo source directory, passed to the builder as-is
    pub photos: PathBuf,
    /// Build output directory; relative paths resolve against the
    /// working directory
    pub output: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            command: "fgallery".to_string(),
            photos: PathBuf::from("photos"),
            output: PathBuf::from("build"),
        }
    }
}

/// `[remote]` section - where the site goes
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Remote target descriptor in the host:path form rsync understands
    pub target: Option<String>,
    /// Public URL of the deployed site; descriptive only
    pub site_url: Option<String>,
}

impl Config {
    /// Absolute build output directory.
    pub fn build_dir(&self) -> AnselResult<PathBuf> {
        if self.gallery.output.is_absolute() {
            return Ok(self.gallery.output.clone());
        }
        Ok(std::env::current_dir()?.join(&self.gallery.output))
    }

    /// The remote target descriptor, or the fatal configuration error.
    pub fn remote_target(&self) -> AnselResult<&str> {
        self.remote
            .target
            .as_deref()
            .ok_or(AnselError::MissingRemoteTarget)
    }
}
