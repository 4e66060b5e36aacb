//! Table model: columns, global filter and row selection

use crate::album::Album;
use std::collections::BTreeSet;

/// Columns of the albums table, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    /// Row selection checkbox; the header holds the select-all box
    Select,
    /// Album title, the only filterable column
    Title,
    /// Link to the album detail page
    Details,
}

pub const COLUMNS: [Column; 3] = [Column::Select, Column::Title, Column::Details];

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Select => "",
            Column::Title => "Title",
            Column::Details => "id",
        }
    }

    /// Text the global filter is matched against, if this column takes part
    pub fn filter_text<'a>(&self, album: &'a Album) -> Option<&'a str> {
        match self {
            Column::Title => Some(&album.title),
            Column::Select | Column::Details => None,
        }
    }
}

/// Whether a row passes the global filter.
///
/// A blank filter passes everything. Otherwise the trimmed filter must appear,
/// case-insensitively, in the text of some filterable column.
pub fn matches_global_filter(album: &Album, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    COLUMNS
        .iter()
        .filter_map(|column| column.filter_text(album))
        .any(|text| text.to_lowercase().contains(&needle))
}

/// Row positions that pass the filter, in collection order
pub fn filtered_indices(albums: &[Album], filter: &str) -> Vec<usize> {
    albums
        .iter()
        .enumerate()
        .filter(|(_, album)| matches_global_filter(album, filter))
        .map(|(index, _)| index)
        .collect()
}

/// Selected rows, keyed by row position in the main collection.
///
/// Keys are positions, so the owner must [`clear`](Self::clear) the selection
/// whenever the collection is reordered or grows at the front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSelection {
    selected: BTreeSet<usize>,
}

impl RowSelection {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// True when there is at least one row and every row is selected
    pub fn is_all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && (0..row_count).all(|index| self.selected.contains(&index))
    }

    /// Select or clear every row, including rows hidden by the filter
    pub fn set_all(&mut self, row_count: usize, selected: bool) {
        if selected {
            self.selected = (0..row_count).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

/// Targets of a bulk delete request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkDelete {
    /// Ids of the selected rows, in collection order
    pub ids: Vec<String>,
    /// Selected rows that have no id to delete by
    pub without_id: usize,
}

impl BulkDelete {
    pub fn collect(albums: &[Album], selection: &RowSelection) -> Self {
        let mut request = BulkDelete::default();
        for album in selection.indices().filter_map(|index| albums.get(index)) {
            match &album.id {
                Some(id) => request.ids.push(id.clone()),
                None => request.without_id += 1,
            }
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn albums() -> Vec<Album> {
        vec![
            Album::new("1", "Mingus Ah Um"),
            Album::new("2", "Blues & Roots"),
            Album::new("3", "The Black Saint and the Sinner Lady"),
        ]
    }

    #[test]
    fn test_blank_filter_matches_all() {
        assert_eq!(filtered_indices(&albums(), ""), vec![0, 1, 2]);
        assert_eq!(filtered_indices(&albums(), "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        assert_eq!(filtered_indices(&albums(), "BLUES"), vec![1]);
        assert_eq!(filtered_indices(&albums(), "ah"), vec![0]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        assert!(filtered_indices(&albums(), "Coltrane").is_empty());
    }

    #[test]
    fn test_filter_ignores_details_column() {
        // Ids and the "View Details" link text are not searchable
        assert!(filtered_indices(&albums(), "2").is_empty());
        assert!(filtered_indices(&albums(), "details").is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut s = RowSelection::default();
        s.toggle(1);
        assert!(s.is_selected(1));
        s.toggle(2);
        assert_eq!(s.indices().collect::<Vec<_>>(), vec![1, 2]);
        s.toggle(1);
        s.toggle(2);
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_all() {
        let mut s = RowSelection::default();
        assert!(!s.is_all_selected(0));
        s.set_all(3, true);
        assert!(s.is_all_selected(3));
        s.toggle(0);
        assert!(!s.is_all_selected(3));
        s.set_all(3, false);
        assert!(s.is_empty());
    }

    #[test]
    fn test_bulk_delete_collects_ids_in_order() {
        let mut list = albums();
        list.push(Album {
            title: "Imported".into(),
            ..Default::default()
        });
        let mut s = RowSelection::default();
        s.toggle(3);
        s.toggle(2);
        s.toggle(0);
        let request = BulkDelete::collect(&list, &s);
        assert_eq!(request.ids, vec!["1", "3"]);
        assert_eq!(request.without_id, 1);
    }
}
