//! Deploy pipeline
//!
//! Sequences two side-effecting external operations and propagates
//! failure immediately:
//! 1. `build` - gallery builder writes the site tree into the build dir
//! 2. `deploy_site` - transfer agent mirrors the build dir to the remote
//!
//! `deploy` is the two in order. The hand-off is the build directory on
//! the local filesystem; the writer finishes before the reader starts,
//! so no locking is involved. There is no rollback: a transfer that
//! fails partway leaves the remote in whatever state rsync left it.

use std::path::Path;

use crate::config::Config;
use crate::error::{AnselError, AnselResult};
use crate::tools::{GalleryBuilder, TransferAgent, TransferOptions};

use super::options::DeployOptions;

/// Deploy pipeline, parameterized by its external tool capabilities
pub struct Deployer<'a, B, T>
where
    B: GalleryBuilder,
    T: TransferAgent,
{
    config: &'a Config,
    builder: B,
    transfer: T,
}

impl<'a, B, T> Deployer<'a, B, T>
where
    B: GalleryBuilder,
    T: TransferAgent,
{
    pub fn new(config: &'a Config, builder: B, transfer: T) -> Self {
        Self {
            config,
            builder,
            transfer,
        }
    }

    /// Build the gallery into the configured output directory.
    ///
    /// Repeated calls repeat the external invocation with identical
    /// arguments; nothing is cached between calls.
    pub fn build(&self) -> AnselResult<()> {
        let output_dir = self.config.build_dir()?;
        self.builder.build(&self.config.gallery.photos, &output_dir)
    }

    /// Mirror the build directory's contents to the remote target.
    ///
    /// The remote target must be configured and the build directory must
    /// exist and be non-empty; both are checked before the transfer
    /// agent is invoked.
    pub fn deploy_site(&self, options: &DeployOptions) -> AnselResult<()> {
        let remote_dest = self.config.remote_target()?;

        let local_root = self.config.build_dir()?;
        if !dir_is_populated(&local_root) {
            return Err(AnselError::BuildOutputMissing { path: local_root });
        }

        let transfer_options = TransferOptions {
            dry_run: options.dry_run,
            quiet: options.quiet,
            ..TransferOptions::default()
        };
        self.transfer
            .transfer(&local_root, remote_dest, &transfer_options)
    }

    /// Build, then deploy. Strictly sequential, fail-fast.
    ///
    /// The remote target is validated before the build starts; `build`
    /// invoked alone never requires it.
    pub fn deploy(&self, options: &DeployOptions) -> AnselResult<()> {
        self.config.remote_target()?;
        self.build()?;
        self.deploy_site(options)
    }
}

/// True if the directory exists and contains at least one entry
fn dir_is_populated(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
