//! Header naming shared by the CSV and XLSX parsers

use std::collections::HashMap;

/// Key used for header cells with no text
const EMPTY_HEADER: &str = "__EMPTY";

/// Turn raw header cells into unique record keys.
///
/// Blank headers become `__EMPTY`, `__EMPTY_1`, ... and repeated names get
/// `_1`, `_2`, ... appended in column order, so no column silently overwrites
/// another.
pub(crate) fn unique_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .map(|cell| {
            let base = match cell.as_ref() {
                "" => EMPTY_HEADER.to_string(),
                text => text.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}_{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_distinct_names() {
        assert_eq!(unique_headers(["id", "title"]), vec!["id", "title"]);
    }

    #[test]
    fn suffixes_duplicates_and_blanks() {
        assert_eq!(
            unique_headers(["title", "", "title", "", "title"]),
            vec!["title", "__EMPTY", "title_1", "__EMPTY_1", "title_2"]
        );
    }
}
