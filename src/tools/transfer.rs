//! Remote transfer capability
//!
//! Defines the interface for mirroring a local directory to a remote
//! host. Transfers are additive: nothing is ever deleted remotely.

use std::path::Path;

use crate::error::AnselResult;

/// Options for a transfer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    /// Archive mode (recursive, preserve permissions and times)
    pub archive: bool,
    /// Compress during transfer
    pub compress: bool,
    /// Show per-file progress
    pub progress: bool,
    /// Ask the agent to report what it would do without transferring
    pub dry_run: bool,
    /// Suppress the agent's output streams (JSON mode)
    pub quiet: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            archive: true,
            compress: true,
            progress: true,
            dry_run: false,
            quiet: false,
        }
    }
}

/// Capability for mirroring a local directory to a remote destination
pub trait TransferAgent {
    /// Name of this transfer method (for logging)
    fn name(&self) -> &str;

    /// Check if this transfer method is available on the system
    fn is_available(&self) -> bool;

    /// Transfer the *contents* of `local_root` to `remote_dest`,
    /// blocking until the external process exits
    ///
    /// `remote_dest` is a host:path descriptor and must reach the agent
    /// unmodified.
    fn transfer(
        &self,
        local_root: &Path,
        remote_dest: &str,
        options: &TransferOptions,
    ) -> AnselResult<()>;
}
