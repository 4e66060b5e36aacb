/// Handle owning the file input control of the import bar.
///
/// The view keys the `<input type="file">` on [`key`](Self::key); calling
/// [`reset`](Self::reset) changes the key, so the element is recreated with an
/// empty value. No document-level lookup of the element is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileInputHandle {
    generation: u64,
}

impl FileInputHandle {
    pub fn key(&self) -> String {
        format!("file-input-{}", self.generation)
    }

    pub fn reset(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_changes_key() {
        let mut handle = FileInputHandle::default();
        let before = handle.key();
        handle.reset();
        assert_ne!(handle.key(), before);
    }
}
