//! Thread-safe sink for records produced by per-file workers.

use parking_lot::Mutex;

use crate::core::data::AnnotationRecord;

/// Something with a source position to order output by.
pub trait Located {
    fn position(&self) -> (&str, usize, usize);
}

impl Located for AnnotationRecord {
    fn position(&self) -> (&str, usize, usize) {
        (&self.location_file, self.location_line, self.location_column)
    }
}

/// Shared append-only collection. Arrival order is not meaningful; use
/// [`Catalog::into_sorted`] for deterministic output.
#[derive(Debug)]
pub struct Catalog<T> {
    entries: Mutex<Vec<T>>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Located> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&self, entries: impl IntoIterator<Item = T>) {
        self.entries.lock().extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries ordered by file, line, then column.
    pub fn into_sorted(self) -> Vec<T> {
        let mut entries = self.entries.into_inner();
        entries.sort_by(|a, b| a.position().cmp(&b.position()));
        entries
    }
}
