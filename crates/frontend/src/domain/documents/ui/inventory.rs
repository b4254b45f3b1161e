//! Document Manager - list state.
//!
//! Plain data, no signals or DOM, so the list behavior is testable on its
//! own. The view holds a `FileInventory` inside a signal and mutates it
//! through these methods.

use contracts::files::FilesIndex;

#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub name: String,
    /// Set while the row plays its fade-out; the row is dropped once the
    /// animation has had time to finish.
    pub removing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileInventory {
    pub rows: Vec<FileRow>,
    /// Combined stored size in bytes, as reported by the backend listing.
    pub total_size: u64,
}

impl FileInventory {
    pub fn from_index(index: FilesIndex) -> Self {
        Self {
            rows: index
                .files
                .into_iter()
                .map(|name| FileRow {
                    name,
                    removing: false,
                })
                .collect(),
            total_size: index.total_size,
        }
    }

    /// Append a row for `name`. An existing row keeps its place: the
    /// backend overwrites the stored file on re-upload, so one row per
    /// name. Returns whether a row was added.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.rows.iter().any(|row| row.name == name) {
            return false;
        }
        self.rows.push(FileRow {
            name,
            removing: false,
        });
        true
    }

    pub fn mark_removing(&mut self, name: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.name == name) {
            row.removing = true;
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.rows.retain(|row| row.name != name);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(names: &[&str]) -> FileInventory {
        FileInventory::from_index(FilesIndex {
            files: names.iter().map(|n| n.to_string()).collect(),
            total_size: 0,
        })
    }

    #[test]
    fn add_appends_new_row() {
        let mut inv = inventory(&["a.pdf"]);
        assert!(inv.add("b.pdf"));
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.rows[1].name, "b.pdf");
    }

    #[test]
    fn add_is_idempotent_per_name() {
        let mut inv = inventory(&["a.pdf"]);
        assert!(!inv.add("a.pdf"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_drops_exactly_the_named_row() {
        let mut inv = inventory(&["a.txt", "b.txt", "c.txt"]);
        inv.remove("b.txt");
        let names: Vec<_> = inv.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "c.txt"]);
    }

    #[test]
    fn mark_removing_touches_only_the_named_row() {
        let mut inv = inventory(&["a.pdf", "b.pdf"]);
        inv.mark_removing("a.pdf");
        assert!(inv.rows[0].removing);
        assert!(!inv.rows[1].removing);
    }

    #[test]
    fn remove_of_unknown_name_is_a_no_op() {
        let mut inv = inventory(&["a.pdf"]);
        inv.remove("missing.pdf");
        assert_eq!(inv.len(), 1);
    }
}
