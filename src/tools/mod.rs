//! External tool capabilities
//!
//! fgallery and rsync are driven as blocking child processes. The traits
//! here are the seam: tests substitute recording fakes returning
//! synthetic exit statuses instead of shelling out.

mod gallery;
mod rsync;
mod transfer;

pub use gallery::{FgalleryBuilder, GalleryBuilder};
pub use rsync::RsyncTransfer;
pub use transfer::{TransferAgent, TransferOptions};
