//! Persistence seam for the listing
//!
//! The listing keeps everything in memory. Committing an import and bulk
//! deleting both go through [`AlbumsBackend`] so a real store can be slotted
//! in; until then [`LogOnlyBackend`] records what would have been sent.

use crate::album::Album;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

pub trait AlbumsBackend {
    /// Persist rows committed from an import
    fn save_imported(&self, rows: &[Album]) -> Result<(), BackendError>;

    /// Delete albums by id
    fn delete_albums(&self, ids: &[String]) -> Result<(), BackendError>;
}

/// Backend that only logs. Nothing is saved and nothing is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogOnlyBackend;

impl AlbumsBackend for LogOnlyBackend {
    fn save_imported(&self, rows: &[Album]) -> Result<(), BackendError> {
        let titles: Vec<&str> = rows.iter().map(|a| a.title.as_str()).collect();
        info!("Finalizing import with {} rows: {:?}", rows.len(), titles);
        Ok(())
    }

    fn delete_albums(&self, ids: &[String]) -> Result<(), BackendError> {
        info!("Bulk delete requested for {} albums: {:?}", ids.len(), ids);
        Ok(())
    }
}
