//! Albums listing store
//!
//! Holds the main collection together with the table state (global filter,
//! row selection) and the import flow. Mutations that touch more than one of
//! these, like committing an import, live here so the invariants between them
//! hold no matter which shell drives the view.

use crate::display_types::TableRow;
use albums_core::import::read_albums;
use albums_core::table::filtered_indices;
use albums_core::{
    Album, AlbumsBackend, BulkDelete, FileInputHandle, ImportEvent, ImportFlow, ListingConfig,
    RowSelection, SelectedFile,
};
use dioxus::prelude::*;
use tracing::{error, info, warn};

/// State for the albums listing
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListingState {
    /// Main collection, newest imports first
    pub albums: Vec<Album>,
    /// Global search text
    pub global_filter: String,
    /// Selected rows, keyed by position in `albums`
    pub selection: RowSelection,
    /// Import phase and staged preview rows
    pub import: ImportFlow,
    /// Owner of the file input element
    pub file_input: FileInputHandle,
}

impl ListingState {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums,
            ..Default::default()
        }
    }

    // --- Table ---

    pub fn set_global_filter(&mut self, filter: String) {
        self.global_filter = filter;
    }

    /// Rows passing the global filter, with their selection state
    pub fn visible_rows(&self) -> Vec<TableRow> {
        filtered_indices(&self.albums, &self.global_filter)
            .into_iter()
            .map(|index| TableRow {
                index,
                album: self.albums[index].clone(),
                selected: self.selection.is_selected(index),
            })
            .collect()
    }

    pub fn toggle_row(&mut self, index: usize) {
        if index < self.albums.len() {
            self.selection.toggle(index);
        }
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        self.selection.set_all(self.albums.len(), selected);
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.albums.len())
    }

    /// "Delete Selected" is only offered while something is selected
    pub fn show_bulk_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn find_album(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id.as_deref() == Some(id))
    }

    // --- Import ---

    /// Start reading a newly picked file. Returns the ticket for its read.
    pub fn begin_file_read(&mut self, file: SelectedFile) -> u64 {
        info!("Reading {} ({:?})", file.name, file.kind);
        self.import.select_file(file)
    }

    /// Parse the bytes of a finished read and stage the valid rows.
    ///
    /// Parse errors are logged and stage nothing. Returns false when a newer
    /// file was picked while this one was being read.
    pub fn complete_file_read(
        &mut self,
        ticket: u64,
        file: &SelectedFile,
        bytes: &[u8],
        config: &ListingConfig,
    ) -> bool {
        let rows = match read_albums(file, bytes, config) {
            Ok(rows) => rows,
            Err(e) => {
                error!("Failed to import {}: {}", file.name, e);
                Vec::new()
            }
        };
        let staged = rows.len();
        let applied = self.import.complete_read(ticket, rows);
        if applied {
            info!("Staged {} rows from {} for preview", staged, file.name);
        } else {
            warn!("Discarded read of {}: a newer file was selected", file.name);
        }
        applied
    }

    /// The browser could not read the file at all
    pub fn fail_file_read(&mut self, ticket: u64, file: &SelectedFile, reason: &str) {
        error!("Failed to read {}: {}", file.name, reason);
        self.import.complete_read(ticket, Vec::new());
    }

    pub fn edit_preview_title(&mut self, index: usize, title: String) {
        self.import.dispatch(ImportEvent::EditTitle { index, title });
    }

    pub fn remove_preview_row(&mut self, index: usize) {
        self.import.dispatch(ImportEvent::RemoveRow(index));
    }

    /// Commit the preview rows ahead of the existing albums.
    ///
    /// No dedup against existing ids. Clears the preview, the file input and
    /// the row selection (its keys are positions, which just shifted).
    /// Returns the number of rows committed.
    pub fn finalize_import(&mut self, backend: &dyn AlbumsBackend) -> usize {
        if !self.import.can_finalize() {
            return 0;
        }
        self.import.dispatch(ImportEvent::BeginFinalize);
        let rows = self.import.finalizing_rows().to_vec();

        if let Err(e) = backend.save_imported(&rows) {
            error!("Saving imported albums failed: {}", e);
        }

        let committed = rows.len();
        self.albums.splice(0..0, rows);
        self.import.dispatch(ImportEvent::FinishFinalize);
        self.file_input.reset();
        self.selection.clear();
        info!(
            "Committed {} imported albums, listing now has {}",
            committed,
            self.albums.len()
        );
        committed
    }

    // --- Bulk delete ---

    /// Collect the ids of the selected rows and hand them to the backend.
    ///
    /// The listing itself is left untouched.
    pub fn bulk_delete(&self, backend: &dyn AlbumsBackend) -> BulkDelete {
        let request = BulkDelete::collect(&self.albums, &self.selection);
        if request.without_id > 0 {
            warn!(
                "{} selected albums have no id and cannot be deleted",
                request.without_id
            );
        }
        if let Err(e) = backend.delete_albums(&request.ids) {
            error!("Bulk delete failed: {}", e);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use albums_core::{BackendError, ImportPhase};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBackend {
        saved: RefCell<Vec<Vec<Album>>>,
        deleted: RefCell<Vec<Vec<String>>>,
    }

    impl AlbumsBackend for RecordingBackend {
        fn save_imported(&self, rows: &[Album]) -> Result<(), BackendError> {
            self.saved.borrow_mut().push(rows.to_vec());
            Ok(())
        }

        fn delete_albums(&self, ids: &[String]) -> Result<(), BackendError> {
            self.deleted.borrow_mut().push(ids.to_vec());
            Ok(())
        }
    }

    struct FailingBackend;

    impl AlbumsBackend for FailingBackend {
        fn save_imported(&self, _rows: &[Album]) -> Result<(), BackendError> {
            Err(BackendError::Rejected("offline".into()))
        }

        fn delete_albums(&self, _ids: &[String]) -> Result<(), BackendError> {
            Err(BackendError::Rejected("offline".into()))
        }
    }

    fn listing() -> ListingState {
        ListingState::new(vec![
            Album::new("1", "Head Hunters"),
            Album::new("2", "Thrust"),
            Album::new("3", "Sextant"),
        ])
    }

    fn titles(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.title.as_str()).collect()
    }

    fn stage_csv(state: &mut ListingState, csv: &str) {
        let file = SelectedFile::new("import.csv");
        let ticket = state.begin_file_read(file.clone());
        assert!(state.complete_file_read(
            ticket,
            &file,
            csv.as_bytes(),
            &ListingConfig::default()
        ));
    }

    #[test]
    fn test_finalize_prepends_preview_in_order() {
        let mut state = listing();
        stage_csv(&mut state, "id,title\n9,Mwandishi\n,\n10,Crossings\n");
        assert_eq!(titles(state.import.preview_rows()), vec!["Mwandishi", "Crossings"]);

        let backend = RecordingBackend::default();
        assert_eq!(state.finalize_import(&backend), 2);

        assert_eq!(
            titles(&state.albums),
            vec!["Mwandishi", "Crossings", "Head Hunters", "Thrust", "Sextant"]
        );
        assert_eq!(state.import.phase(), &ImportPhase::Idle);
        assert_eq!(backend.saved.borrow().len(), 1);
        assert_eq!(backend.saved.borrow()[0].len(), 2);
    }

    #[test]
    fn test_finalize_resets_file_input_and_selection() {
        let mut state = listing();
        state.toggle_row(0);
        let key_before = state.file_input.key();
        stage_csv(&mut state, "title\nFlood\n");

        state.finalize_import(&RecordingBackend::default());

        assert_ne!(state.file_input.key(), key_before);
        assert!(state.selection.is_empty());
        assert!(!state.show_bulk_delete());
    }

    #[test]
    fn test_finalize_commits_locally_when_save_fails() {
        let mut state = listing();
        stage_csv(&mut state, "title\nV.S.O.P.\n");
        assert_eq!(state.finalize_import(&FailingBackend), 1);
        assert_eq!(state.albums.len(), 4);
    }

    #[test]
    fn test_finalize_without_file_is_noop() {
        let mut state = listing();
        let key_before = state.file_input.key();
        assert_eq!(state.finalize_import(&RecordingBackend::default()), 0);
        assert_eq!(state.albums.len(), 3);
        assert_eq!(state.file_input.key(), key_before);
    }

    #[test]
    fn test_finalize_after_removing_all_rows() {
        let mut state = listing();
        stage_csv(&mut state, "title\nOnly\n");
        state.remove_preview_row(0);
        assert!(state.import.can_finalize());
        assert_eq!(state.finalize_import(&RecordingBackend::default()), 0);
        assert_eq!(state.albums.len(), 3);
        assert_eq!(state.import.phase(), &ImportPhase::Idle);
    }

    #[test]
    fn test_preview_edit_is_committed() {
        let mut state = listing();
        stage_csv(&mut state, "title\nEmpyrean\nInventions\n");
        state.edit_preview_title(0, "Empyrean Isles".into());
        state.finalize_import(&RecordingBackend::default());
        assert_eq!(state.albums[0].title, "Empyrean Isles");
        assert_eq!(state.albums[1].title, "Inventions");
    }

    #[test]
    fn test_parse_error_stages_nothing() {
        let mut state = listing();
        let file = SelectedFile::new("broken.xlsx");
        let ticket = state.begin_file_read(file.clone());
        assert!(state.complete_file_read(ticket, &file, b"not a zip", &ListingConfig::default()));
        assert!(state.import.preview_rows().is_empty());
        assert!(state.import.can_finalize());
    }

    #[test]
    fn test_failed_read_stages_nothing() {
        let mut state = listing();
        let file = SelectedFile::new("albums.csv");
        let ticket = state.begin_file_read(file.clone());
        state.fail_file_read(ticket, &file, "permission denied");
        assert!(matches!(state.import.phase(), ImportPhase::Previewing { .. }));
        assert!(state.import.preview_rows().is_empty());
    }

    #[test]
    fn test_abandoned_read_recovers_on_next_selection() {
        let mut state = listing();
        let first = SelectedFile::new("slow.csv");
        let stale = state.begin_file_read(first.clone());
        assert!(matches!(state.import.phase(), ImportPhase::Reading { .. }));

        stage_csv(&mut state, "title\nMaiden Voyage\n");
        assert_eq!(titles(state.import.preview_rows()), vec!["Maiden Voyage"]);

        assert!(!state.complete_file_read(
            stale,
            &first,
            b"title\nStale\n",
            &ListingConfig::default()
        ));
        assert_eq!(titles(state.import.preview_rows()), vec!["Maiden Voyage"]);
    }

    #[test]
    fn test_finalize_while_reading_returns_to_idle() {
        let mut state = listing();
        let file = SelectedFile::new("slow.csv");
        let ticket = state.begin_file_read(file.clone());
        let key_before = state.file_input.key();

        assert_eq!(state.finalize_import(&RecordingBackend::default()), 0);
        assert_eq!(state.import.phase(), &ImportPhase::Idle);
        assert_ne!(state.file_input.key(), key_before);

        assert!(!state.complete_file_read(
            ticket,
            &file,
            b"title\nLate\n",
            &ListingConfig::default()
        ));
        assert_eq!(state.albums.len(), 3);
        assert!(!state.import.can_finalize());
    }

    #[test]
    fn test_filter_without_match_hides_all_rows() {
        let mut state = listing();
        state.set_global_filter("Coltrane".into());
        assert!(state.visible_rows().is_empty());

        state.set_global_filter(String::new());
        assert_eq!(state.visible_rows().len(), 3);
    }

    #[test]
    fn test_visible_rows_keep_collection_index() {
        let mut state = listing();
        state.toggle_row(2);
        state.set_global_filter("sext".into());
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 2);
        assert!(rows[0].selected);
    }

    #[test]
    fn test_bulk_delete_visibility_follows_selection() {
        let mut state = listing();
        assert!(!state.show_bulk_delete());
        state.toggle_row(1);
        assert!(state.show_bulk_delete());
        state.toggle_row(1);
        assert!(!state.show_bulk_delete());
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut state = listing();
        state.toggle_row(7);
        assert!(!state.show_bulk_delete());
    }

    #[test]
    fn test_select_all_includes_filtered_rows() {
        let mut state = listing();
        state.set_global_filter("Thrust".into());
        state.set_all_selected(true);
        assert!(state.is_all_selected());
        assert_eq!(state.selection.indices().count(), 3);
        state.set_all_selected(false);
        assert!(!state.show_bulk_delete());
    }

    #[test]
    fn test_bulk_delete_only_reports_ids() {
        let mut state = listing();
        state.toggle_row(0);
        state.toggle_row(2);

        let backend = RecordingBackend::default();
        let request = state.bulk_delete(&backend);

        assert_eq!(request.ids, vec!["1", "3"]);
        assert_eq!(backend.deleted.borrow()[0], vec!["1", "3"]);
        assert_eq!(state.albums.len(), 3);
    }

    #[test]
    fn test_find_album_by_id() {
        let state = listing();
        assert_eq!(state.find_album("2").map(|a| a.title.as_str()), Some("Thrust"));
        assert!(state.find_album("42").is_none());
    }
}
