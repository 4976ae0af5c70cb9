//! Rsync transfer agent
//!
//! Uses rsync over ssh for efficient incremental transfers. Only
//! changed files cross the wire, and remote files absent locally are
//! left alone (no `--delete`).

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{AnselError, AnselResult};

use super::transfer::{TransferAgent, TransferOptions};

/// Transfer agent backed by rsync
pub struct RsyncTransfer;

impl RsyncTransfer {
    /// Check if rsync is installed and available
    pub fn check_available() -> bool {
        Command::new("rsync")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Build the rsync argument vector.
    fn args(local_root: &Path, remote_dest: &str, options: &TransferOptions) -> Vec<OsString> {
        let mut flags = String::from("-");
        if options.archive {
            flags.push('a');
        }
        flags.push('v');
        if options.compress {
            flags.push('z');
        }

        let mut args: Vec<OsString> = vec![flags.into()];
        if options.progress {
            args.push("--progress".into());
        }
        if options.dry_run {
            args.push("--dry-run".into());
        }
        args.push("-e".into());
        args.push("ssh".into());
        args.push(format!("{}/", local_root.display()).into()); // trailing slash = copy contents
        args.push(remote_dest.into());
        args
    }
}

impl TransferAgent for RsyncTransfer {
    fn name(&self) -> &str {
        "rsync"
    }

    fn is_available(&self) -> bool {
        Self::check_available()
    }

    fn transfer(
        &self,
        local_root: &Path,
        remote_dest: &str,
        options: &TransferOptions,
    ) -> AnselResult<()> {
        let mut cmd = Command::new("rsync");
        cmd.args(Self::args(local_root, remote_dest, options))
            .stdin(Stdio::inherit()); // Allow password input

        if options.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd
            .status()
            .map_err(|e| AnselError::TransferNotFound { source: e })?;

        if !status.success() {
            return Err(AnselError::TransferFailed {
                code: status.code(),
            });
        }

        Ok(())
    }
}
