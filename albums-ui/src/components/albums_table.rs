//! Albums table with row selection

use crate::components::{Checkbox, TextLink};
use crate::display_types::TableRow;
use albums_core::{Column, COLUMNS};
use dioxus::prelude::*;

/// Albums table view (pure, props-based).
///
/// `rows` are already filtered; each carries its position in the main collection.
#[component]
pub fn AlbumsTableView(
    rows: Vec<TableRow>,
    /// Whether the header checkbox shows as checked
    all_selected: bool,
    /// Called with the main-collection index of the toggled row
    on_toggle_row: EventHandler<usize>,
    on_toggle_all: EventHandler<bool>,
    /// Called with the album id when "View Details" is clicked
    on_view_details: EventHandler<String>,
) -> Element {
    rsx! {
        table { class: "min-w-full border-collapse border border-gray-200",
            thead {
                tr {
                    for column in COLUMNS {
                        th {
                            key: "{column:?}",
                            class: "border border-gray-300 p-2 text-left",
                            if column == Column::Select {
                                div { class: "flex justify-center",
                                    Checkbox {
                                        checked: all_selected,
                                        aria_label: "Select all albums".to_string(),
                                        onchange: move |checked| on_toggle_all.call(checked),
                                    }
                                }
                            } else {
                                "{column.header()}"
                            }
                        }
                    }
                }
            }
            tbody {
                for row in rows {
                    AlbumRow {
                        key: "{row.index}",
                        row,
                        on_toggle_row,
                        on_view_details,
                    }
                }
            }
        }
    }
}

#[component]
fn AlbumRow(
    row: TableRow,
    on_toggle_row: EventHandler<usize>,
    on_view_details: EventHandler<String>,
) -> Element {
    let index = row.index;

    rsx! {
        tr { class: if row.selected { "bg-indigo-50" } else { "" },
            for column in COLUMNS {
                td { key: "{column:?}", class: "border border-gray-300 p-2",
                    {
                        match column {
                            Column::Select => rsx! {
                                div { class: "flex justify-center",
                                    Checkbox {
                                        checked: row.selected,
                                        aria_label: format!("Select {}", row.album.title),
                                        onchange: move |_| on_toggle_row.call(index),
                                    }
                                }
                            },
                            Column::Title => rsx! { "{row.album.title}" },
                            Column::Details => match row.album.id.clone() {
                                Some(id) => rsx! {
                                    TextLink { onclick: move |_| on_view_details.call(id.clone()), "View Details" }
                                },
                                None => rsx! {},
                            },
                        }
                    }
                }
            }
        }
    }
}
