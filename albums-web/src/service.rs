//! Listing service: owns the listing store and runs work that must outlive pages

use crate::config;
use albums_core::{ListingConfig, LogOnlyBackend, SelectedFile};
use albums_ui::stores::ListingState;
use dioxus::html::FileData;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tracing::info;

/// Provided as context by the layout, next to the store it wraps
#[derive(Clone)]
pub struct ListingService {
    pub state: Store<ListingState>,
    pub config: ListingConfig,
}

impl ListingService {
    pub fn new(state: Store<ListingState>) -> Self {
        Self {
            state,
            config: config::listing_config(),
        }
    }

    /// Read a picked file and stage its rows for preview.
    ///
    /// The read runs in the root scope: a task owned by the listing page would
    /// be dropped on navigation and leave the import stuck in `Reading`.
    pub fn read_file(&self, file: FileData) {
        let mut state = self.state;
        let config = self.config.clone();
        let selected = SelectedFile::new(file.name());
        let ticket = state.write().begin_file_read(selected.clone());

        spawn_forever(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    state
                        .write()
                        .complete_file_read(ticket, &selected, &bytes, &config);
                }
                Err(e) => {
                    state
                        .write()
                        .fail_file_read(ticket, &selected, &e.to_string());
                }
            }
        });
    }

    pub fn finalize_import(&self) {
        let mut state = self.state;
        state.write().finalize_import(&LogOnlyBackend);
    }

    pub fn bulk_delete(&self) {
        let request = self.state.read().bulk_delete(&LogOnlyBackend);
        info!("Bulk delete requested for {} albums", request.ids.len());
    }
}
