//! Ansel - static photo gallery build and deploy tool
//!
//! Ansel drives an external gallery builder (fgallery) to turn a
//! directory of photos into a static site, then mirrors the build
//! directory to a remote host with rsync over ssh. It is a sequencer,
//! not a gallery engine: both hard parts belong to the external tools.

pub mod config;
pub mod deploy;
pub mod error;
pub mod tools;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use deploy::{DeployOptions, Deployer};
pub use error::{AnselError, AnselResult};
pub use tools::{FgalleryBuilder, GalleryBuilder, RsyncTransfer, TransferAgent, TransferOptions};
