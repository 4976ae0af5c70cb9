//! Configuration
//!
//! Resolved once at startup from an optional `ansel.toml` plus
//! environment overrides, then passed by reference into the deploy
//! pipeline. Unknown keys warn instead of failing.

mod loader;
mod types;


pub use loader::{load_or_default, load_with_warnings, ConfigWarning, CONFIG_FILE};
pub use types::{Config, GalleryConfig, RemoteConfig};
