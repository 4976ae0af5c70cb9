//! Deploy Module
//!
//! Orchestrates the build-then-sync deployment flow.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `use_case` - Core pipeline logic (`Deployer`)
//!
//! ## Usage
//!
//! ```ignore
//! use ansel::deploy::{DeployOptions, Deployer};
//!
//! let deployer = Deployer::new(&config, builder, transfer);
//! deployer.deploy(&DeployOptions::new())?;
//! ```

mod options;
mod use_case;

pub use options::DeployOptions;
pub use use_case::Deployer;
