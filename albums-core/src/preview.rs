use crate::album::Album;

/// Staged import rows the user can edit or drop before committing.
///
/// Pure data structure: index-based edits, no I/O. Out-of-range indices are
/// ignored rather than panicking, since they can only come from a stale UI
/// event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewRows {
    rows: Vec<Album>,
}

impl PreviewRows {
    pub fn new(rows: Vec<Album>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Album] {
        &self.rows
    }

    /// Replace the title of one row. Returns false if `index` is out of range.
    pub fn edit_title(&mut self, index: usize, title: String) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.title = title;
                true
            }
            None => false,
        }
    }

    /// Remove a row. Returns the removed row if `index` was valid.
    pub fn remove(&mut self, index: usize) -> Option<Album> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn into_rows(self) -> Vec<Album> {
        self.rows
    }
}
