//! Directory enumeration
//!
//! Enumerates a single directory (no recursion), filtering out the
//! `.`/`..` pseudo-entries and producing a byte-wise sorted
//! [`EntryList`] of names, optionally color-decorated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::color::{ColorConfig, EntryColor};
use crate::core::entries::EntryList;
use crate::core::error::{ListError, ListResult};

/// Pseudo-entries representing the directory itself and its parent,
/// always excluded from results. `fs::read_dir` does not yield them on
/// the supported platforms; the filter states the contract anyway.
fn is_pseudo_entry(name: &str) -> bool {
    name == "." || name == ".."
}

/// Enumerator for one directory.
///
/// Construction performs a counting pass over the directory and stores
/// the tally; [`DirLister::list_entries`] re-reads the directory when
/// called. The two reads are separate snapshots: a directory mutated in
/// between yields a list whose length differs from [`DirLister::count`],
/// which the growable [`EntryList`] absorbs.
#[derive(Debug)]
pub struct DirLister {
    path: PathBuf,
    decor: Option<EntryColor>,
    count: usize,
}

impl DirLister {
    /// Count the entries of `path` and resolve the color configuration.
    /// The resolved color is fixed for the lister's lifetime.
    ///
    /// Fails with [`ListError::Open`] when the path does not exist, is
    /// not a directory, or cannot be read.
    pub fn new(path: impl Into<PathBuf>, color: ColorConfig) -> ListResult<Self> {
        let path = path.into();
        let count = count_entries(&path)?;
        Ok(Self {
            path,
            decor: color.enabled.then(|| color.resolved()),
            count,
        })
    }

    /// Entry count from the construction-time pass.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Read the directory and return its entry names, sorted ascending
    /// by byte-wise comparison of the raw names. Decoration, when
    /// enabled, is applied after sorting so escape bytes never affect
    /// the ordering.
    ///
    /// Returns the full list or an error; never a partial listing.
    pub fn list_entries(&self) -> ListResult<EntryList> {
        let mut list = EntryList::with_capacity(self.count)?;

        for entry in open_dir(&self.path)? {
            let entry = entry.map_err(|source| ListError::Read {
                path: self.path.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_pseudo_entry(&name) {
                continue;
            }
            list.push(name);
        }

        list.sort();

        if let Some(color) = self.decor {
            list = list
                .into_iter()
                .map(|name| color.decorate(&name))
                .collect();
        }

        Ok(list)
    }
}

fn open_dir(path: &Path) -> ListResult<fs::ReadDir> {
    fs::read_dir(path).map_err(|source| ListError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn count_entries(path: &Path) -> ListResult<usize> {
    let mut count = 0;
    for entry in open_dir(path)? {
        let entry = entry.map_err(|source| ListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !is_pseudo_entry(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::strip;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn plain() -> ColorConfig {
        ColorConfig::default()
    }

    fn colored(index: i32) -> ColorConfig {
        ColorConfig {
            enabled: true,
            index,
        }
    }

    #[test]
    fn test_count_matches_entries() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("one.txt")).unwrap();
        File::create(temp.path().join("two.txt")).unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        assert_eq!(lister.count(), 3);
        assert_eq!(lister.list_entries().unwrap().len(), 3);
    }

    #[test]
    fn test_list_is_sorted_byte_wise() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("banana")).unwrap();
        File::create(temp.path().join("Apple")).unwrap();
        File::create(temp.path().join("cherry")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        let list = lister.list_entries().unwrap();
        assert_eq!(list.names(), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_empty_dir_yields_empty_list() {
        let temp = tempdir().unwrap();
        let lister = DirLister::new(temp.path(), plain()).unwrap();
        assert_eq!(lister.count(), 0);
        assert!(lister.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_is_open_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("no-such-dir");
        let err = DirLister::new(&missing, plain()).unwrap_err();
        assert!(matches!(err, ListError::Open { .. }));
    }

    #[test]
    fn test_file_path_is_open_error() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        File::create(&file).unwrap();
        let err = DirLister::new(&file, plain()).unwrap_err();
        assert!(matches!(err, ListError::Open { .. }));
    }

    #[test]
    fn test_list_is_idempotent() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("x")).unwrap();
        File::create(temp.path().join("y")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        let first = lister.list_entries().unwrap();
        let second = lister.list_entries().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decorated_names_strip_to_raw() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("b.txt")).unwrap();
        File::create(temp.path().join("a.txt")).unwrap();

        let lister = DirLister::new(temp.path(), colored(5)).unwrap();
        let list = lister.list_entries().unwrap();

        assert_eq!(list.names()[0], "\x1b[35ma.txt\x1b[0m");
        let raw: Vec<_> = list.iter().map(|n| strip(n)).collect();
        assert_eq!(raw, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_sort_uses_raw_names_when_decorated() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("zebra")).unwrap();
        File::create(temp.path().join("alpha")).unwrap();

        let lister = DirLister::new(temp.path(), colored(13)).unwrap();
        let list = lister.list_entries().unwrap();

        let raw: Vec<_> = list.iter().map(|n| strip(n)).collect();
        let mut sorted = raw.clone();
        sorted.sort_unstable();
        assert_eq!(raw, sorted);
    }

    #[test]
    fn test_out_of_range_index_matches_default() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("f")).unwrap();

        let reset = DirLister::new(temp.path(), colored(25)).unwrap();
        let default = DirLister::new(temp.path(), colored(2)).unwrap();
        assert_eq!(
            reset.list_entries().unwrap(),
            default.list_entries().unwrap()
        );
    }

    #[test]
    fn test_list_grows_past_construction_count() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("before")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        assert_eq!(lister.count(), 1);

        File::create(temp.path().join("after")).unwrap();
        let list = lister.list_entries().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.names(), ["after", "before"]);
    }

    #[test]
    fn test_list_shrinks_below_construction_count() {
        let temp = tempdir().unwrap();
        let victim = temp.path().join("gone");
        File::create(&victim).unwrap();
        File::create(temp.path().join("kept")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        assert_eq!(lister.count(), 2);

        fs::remove_file(&victim).unwrap();
        let list = lister.list_entries().unwrap();
        assert_eq!(list.names(), ["kept"]);
    }

    #[test]
    fn test_hidden_entries_are_listed() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join(".hidden")).unwrap();
        File::create(temp.path().join("visible")).unwrap();

        let lister = DirLister::new(temp.path(), plain()).unwrap();
        assert_eq!(lister.list_entries().unwrap().names(), [".hidden", "visible"]);
    }

    #[test]
    fn test_is_pseudo_entry() {
        assert!(is_pseudo_entry("."));
        assert!(is_pseudo_entry(".."));
        assert!(!is_pseudo_entry("..."));
        assert!(!is_pseudo_entry(".gitignore"));
    }
}
