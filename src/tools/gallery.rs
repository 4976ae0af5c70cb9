//! Gallery builder invocation
//!
//! The builder is an external program taking a photo source directory
//! and an output directory as positional arguments. Everything it does
//! between those two paths is its own business.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{AnselError, AnselResult};

/// Capability for producing a static site tree from a photo directory
pub trait GalleryBuilder {
    /// Name of this builder (for logging)
    fn name(&self) -> &str;

    /// Check if the builder is available on the system
    fn is_available(&self) -> bool;

    /// Build the gallery, blocking until the external process exits
    fn build(&self, photos_dir: &Path, output_dir: &Path) -> AnselResult<()>;
}

/// Gallery builder backed by the fgallery command
pub struct FgalleryBuilder {
    command: String,
    quiet: bool,
}

impl FgalleryBuilder {
    pub fn new(command: impl Into<String>, quiet: bool) -> Self {
        Self {
            command: command.into(),
            quiet,
        }
    }

    /// Check if a builder command can be spawned at all
    pub fn check_available(command: &str) -> bool {
        // fgallery without arguments prints usage and exits non-zero,
        // but if we can spawn it, it's installed
        Command::new(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl GalleryBuilder for FgalleryBuilder {
    fn name(&self) -> &str {
        &self.command
    }

    fn is_available(&self) -> bool {
        Self::check_available(&self.command)
    }

    fn build(&self, photos_dir: &Path, output_dir: &Path) -> AnselResult<()> {
        let mut cmd = Command::new(&self.command);
        cmd.arg(photos_dir).arg(output_dir).stdin(Stdio::inherit());

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| AnselError::BuilderNotFound {
            command: self.command.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(AnselError::BuilderFailed {
                code: status.code(),
            });
        }

        Ok(())
    }
}
