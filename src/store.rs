//! In-memory virtual folder tree behind the file manager.
//!
//! Paths are `/`-separated folder names; the empty string is the root.
//! Timestamps come from the caller, so nothing here touches a clock.

use std::collections::BTreeMap;

use thiserror::Error;

pub mod names;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("folder '/{0}' does not exist")]
    FolderNotFound(String),
    #[error("file '{0}' does not exist")]
    FileNotFound(String),
    #[error("'{0}' already exists")]
    AlreadyExists(String),
    #[error("invalid name '{0}'")]
    InvalidName(String),
}

/// One stored file. Its name lives in the owning folder's map.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub data: Vec<u8>,
    pub modified_ms: f64,
}

#[derive(Debug, Clone, Default)]
struct FolderNode {
    files: BTreeMap<String, StoredFile>,
    folders: BTreeMap<String, FolderNode>,
}

/// A file row in a folder listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size: u64,
    pub modified_ms: f64,
}

/// A folder row in a folder listing or the whole-tree walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderSummary {
    pub name: String,
    pub path: String,
    pub file_count: usize,
}

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// The contents of one folder, sorted by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub files: Vec<FileSummary>,
    pub folders: Vec<FolderSummary>,
}

#[derive(Debug, Default)]
pub struct FileStore {
    root: FolderNode,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, path: &str) -> Option<&FolderNode> {
        let mut node = &self.root;
        for seg in names::segments(path) {
            node = node.folders.get(seg)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &str) -> Option<&mut FolderNode> {
        let mut node = &mut self.root;
        for seg in names::segments(path) {
            node = node.folders.get_mut(seg)?;
        }
        Some(node)
    }

    pub fn folder_exists(&self, path: &str) -> bool {
        self.node(path).is_some()
    }

    /// Files and direct subfolders of one folder. Each subfolder row
    /// carries its direct file count.
    pub fn listing(&self, path: &str) -> Result<Listing, StoreError> {
        let node = self
            .node(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        let files = node
            .files
            .iter()
            .map(|(name, file)| FileSummary {
                name: name.clone(),
                size: file.data.len() as u64,
                modified_ms: file.modified_ms,
            })
            .collect();
        let folders = node
            .folders
            .iter()
            .map(|(name, folder)| FolderSummary {
                name: name.clone(),
                path: names::join(path, name),
                file_count: folder.files.len(),
            })
            .collect();
        Ok(Listing { files, folders })
    }

    /// Every folder in the tree, parents before children.
    pub fn all_folders(&self) -> Vec<FolderSummary> {
        let mut out = Vec::new();
        Self::walk(&self.root, "", &mut out);
        out
    }

    fn walk(node: &FolderNode, path: &str, out: &mut Vec<FolderSummary>) {
        for (name, folder) in &node.folders {
            let full = names::join(path, name);
            out.push(FolderSummary {
                name: name.clone(),
                path: full.clone(),
                file_count: folder.files.len(),
            });
            Self::walk(folder, &full, out);
        }
    }

    /// Stores a file in `path`, overwriting any file of the same name.
    /// Returns the name actually stored after cleaning.
    pub fn save(
        &mut self,
        path: &str,
        raw_name: &str,
        data: Vec<u8>,
        modified_ms: f64,
    ) -> Result<String, StoreError> {
        let name = names::clean(raw_name)
            .ok_or_else(|| StoreError::InvalidName(raw_name.to_string()))?;
        let node = self
            .node_mut(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        node.files
            .insert(name.clone(), StoredFile { data, modified_ms });
        Ok(name)
    }

    pub fn file(&self, path: &str, name: &str) -> Result<&StoredFile, StoreError> {
        let node = self
            .node(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        node.files
            .get(name)
            .ok_or_else(|| StoreError::FileNotFound(name.to_string()))
    }

    /// Relocates one file. The file keeps its name; an existing file at
    /// the destination is overwritten.
    pub fn move_file(&mut self, from: &str, to: &str, name: &str) -> Result<(), StoreError> {
        if !self.folder_exists(to) {
            return Err(StoreError::FolderNotFound(to.to_string()));
        }
        let file = self
            .node_mut(from)
            .ok_or_else(|| StoreError::FolderNotFound(from.to_string()))?
            .files
            .remove(name)
            .ok_or_else(|| StoreError::FileNotFound(name.to_string()))?;
        if let Some(dest) = self.node_mut(to) {
            dest.files.insert(name.to_string(), file);
        }
        Ok(())
    }

    pub fn delete_file(&mut self, path: &str, name: &str) -> Result<(), StoreError> {
        let node = self
            .node_mut(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        node.files
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::FileNotFound(name.to_string()))
    }

    /// Creates a subfolder. Creating a folder that already exists is not
    /// an error.
    pub fn create_folder(&mut self, path: &str, raw_name: &str) -> Result<String, StoreError> {
        let name = names::clean(raw_name)
            .ok_or_else(|| StoreError::InvalidName(raw_name.to_string()))?;
        let node = self
            .node_mut(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        node.folders.entry(name.clone()).or_default();
        Ok(name)
    }

    pub fn rename_folder(
        &mut self,
        path: &str,
        old: &str,
        raw_new: &str,
    ) -> Result<String, StoreError> {
        let new = names::clean(raw_new)
            .ok_or_else(|| StoreError::InvalidName(raw_new.to_string()))?;
        let node = self
            .node_mut(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        if new == old {
            return Ok(new);
        }
        if node.folders.contains_key(&new) {
            return Err(StoreError::AlreadyExists(new));
        }
        let folder = node
            .folders
            .remove(old)
            .ok_or_else(|| StoreError::FolderNotFound(names::join(path, old)))?;
        node.folders.insert(new.clone(), folder);
        Ok(new)
    }

    /// Deletes a subfolder and everything underneath it.
    pub fn delete_folder(&mut self, path: &str, name: &str) -> Result<(), StoreError> {
        let node = self
            .node_mut(path)
            .ok_or_else(|| StoreError::FolderNotFound(path.to_string()))?;
        node.folders
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::FolderNotFound(names::join(path, name)))
    }
}

/// Breadcrumb trail for a folder path, one entry per segment with the
/// cumulative path.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    let mut prefix = String::new();
    for seg in names::segments(path) {
        prefix = names::join(&prefix, seg);
        crumbs.push(Breadcrumb {
            name: seg.to_string(),
            path: prefix.clone(),
        });
    }
    crumbs
}

/// Human-readable size, matching the listing's kilobyte format.
pub fn size_display(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_folders(folders: &[&str]) -> FileStore {
        let mut store = FileStore::new();
        for path in folders {
            let (parent, name) = match path.rfind('/') {
                Some(idx) => (&path[..idx], &path[idx + 1..]),
                None => ("", *path),
            };
            store.create_folder(parent, name).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_root_listing() {
        let store = FileStore::new();
        let listing = store.listing("").unwrap();
        assert!(listing.files.is_empty());
        assert!(listing.folders.is_empty());
    }

    #[test]
    fn test_listing_missing_folder_errors() {
        let store = FileStore::new();
        assert_eq!(
            store.listing("nope"),
            Err(StoreError::FolderNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_save_and_list_round_trip() {
        let mut store = FileStore::new();
        store.save("", "hello.txt", b"hello".to_vec(), 1_000.0).unwrap();

        let listing = store.listing("").unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "hello.txt");
        assert_eq!(listing.files[0].size, 5);
        assert_eq!(listing.files[0].modified_ms, 1_000.0);
    }

    #[test]
    fn test_save_cleans_name() {
        let mut store = FileStore::new();
        let stored = store.save("", "a/b.txt", b"x".to_vec(), 0.0).unwrap();
        assert!(!stored.contains('/'));
        assert!(store.file("", &stored).is_ok());
    }

    #[test]
    fn test_save_rejects_invalid_name() {
        let mut store = FileStore::new();
        assert_eq!(
            store.save("", "  ", b"x".to_vec(), 0.0),
            Err(StoreError::InvalidName("  ".to_string()))
        );
    }

    #[test]
    fn test_save_into_missing_folder_errors() {
        let mut store = FileStore::new();
        assert_eq!(
            store.save("missing", "a.txt", b"x".to_vec(), 0.0),
            Err(StoreError::FolderNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let mut store = FileStore::new();
        store.save("", "a.txt", b"old".to_vec(), 1.0).unwrap();
        store.save("", "a.txt", b"newer".to_vec(), 2.0).unwrap();

        let listing = store.listing("").unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].size, 5);
        assert_eq!(listing.files[0].modified_ms, 2.0);
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let mut store = FileStore::new();
        store.create_folder("", "docs").unwrap();
        store.save("docs", "keep.txt", b"keep".to_vec(), 0.0).unwrap();

        store.create_folder("", "docs").unwrap();
        assert!(store.file("docs", "keep.txt").is_ok());
    }

    #[test]
    fn test_folder_file_counts_are_direct_only() {
        let mut store = store_with_folders(&["docs", "docs/img"]);
        store.save("docs", "a.txt", b"a".to_vec(), 0.0).unwrap();
        store.save("docs", "b.txt", b"b".to_vec(), 0.0).unwrap();
        store.save("docs/img", "c.png", b"c".to_vec(), 0.0).unwrap();

        let listing = store.listing("").unwrap();
        assert_eq!(listing.folders.len(), 1);
        assert_eq!(listing.folders[0].name, "docs");
        assert_eq!(listing.folders[0].path, "docs");
        assert_eq!(listing.folders[0].file_count, 2);
    }

    #[test]
    fn test_rename_folder_keeps_contents() {
        let mut store = store_with_folders(&["old"]);
        store.save("old", "a.txt", b"a".to_vec(), 0.0).unwrap();

        let renamed = store.rename_folder("", "old", "new").unwrap();
        assert_eq!(renamed, "new");
        assert!(!store.folder_exists("old"));
        assert!(store.file("new", "a.txt").is_ok());
    }

    #[test]
    fn test_rename_folder_collision_errors() {
        let mut store = store_with_folders(&["a", "b"]);
        assert_eq!(
            store.rename_folder("", "a", "b"),
            Err(StoreError::AlreadyExists("b".to_string()))
        );
    }

    #[test]
    fn test_rename_missing_folder_errors() {
        let mut store = FileStore::new();
        assert!(matches!(
            store.rename_folder("", "ghost", "real"),
            Err(StoreError::FolderNotFound(_))
        ));
    }

    #[test]
    fn test_delete_folder_is_recursive() {
        let mut store = store_with_folders(&["docs", "docs/img"]);
        store.save("docs/img", "pic.png", b"p".to_vec(), 0.0).unwrap();

        store.delete_folder("", "docs").unwrap();
        assert!(!store.folder_exists("docs"));
        assert!(!store.folder_exists("docs/img"));
    }

    #[test]
    fn test_delete_file() {
        let mut store = FileStore::new();
        store.save("", "a.txt", b"a".to_vec(), 0.0).unwrap();

        store.delete_file("", "a.txt").unwrap();
        assert_eq!(
            store.delete_file("", "a.txt"),
            Err(StoreError::FileNotFound("a.txt".to_string()))
        );
    }

    #[test]
    fn test_move_file_between_folders() {
        let mut store = store_with_folders(&["inbox", "archive"]);
        store.save("inbox", "a.txt", b"a".to_vec(), 7.0).unwrap();

        store.move_file("inbox", "archive", "a.txt").unwrap();
        assert!(store.file("inbox", "a.txt").is_err());
        let moved = store.file("archive", "a.txt").unwrap();
        assert_eq!(moved.data, b"a");
        assert_eq!(moved.modified_ms, 7.0);
    }

    #[test]
    fn test_move_file_to_missing_folder_errors() {
        let mut store = FileStore::new();
        store.save("", "a.txt", b"a".to_vec(), 0.0).unwrap();

        assert_eq!(
            store.move_file("", "nowhere", "a.txt"),
            Err(StoreError::FolderNotFound("nowhere".to_string()))
        );
        // The file stays put on failure.
        assert!(store.file("", "a.txt").is_ok());
    }

    #[test]
    fn test_move_missing_file_errors() {
        let mut store = store_with_folders(&["archive"]);
        assert_eq!(
            store.move_file("", "archive", "ghost.txt"),
            Err(StoreError::FileNotFound("ghost.txt".to_string()))
        );
    }

    #[test]
    fn test_all_folders_walks_parents_first() {
        let store = store_with_folders(&["a", "a/x", "b"]);
        let paths: Vec<String> = store.all_folders().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, vec!["a", "a/x", "b"]);
    }

    #[test]
    fn test_breadcrumbs_accumulate_paths() {
        assert!(breadcrumbs("").is_empty());

        let crumbs = breadcrumbs("docs/img/icons");
        let pairs: Vec<(&str, &str)> = crumbs
            .iter()
            .map(|c| (c.name.as_str(), c.path.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("docs", "docs"),
                ("img", "docs/img"),
                ("icons", "docs/img/icons"),
            ]
        );
    }

    #[test]
    fn test_size_display_two_decimals() {
        assert_eq!(size_display(1536), "1.50 KB");
        assert_eq!(size_display(0), "0.00 KB");
        assert_eq!(size_display(5), "0.00 KB");
    }
}
