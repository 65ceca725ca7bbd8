//! Persistence of the tag list in a flat, line-oriented file.
//!
//! Every mutation rewrites the whole file: add and remove read the current
//! tags under an exclusive lock, modify them in memory and write the result to
//! a temporary sibling that is renamed over the store file.

use crate::error::{Result, StoreError};
use crate::store::Tag;
use crate::store::lock::StoreLock;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Tag store backed by a single file
#[derive(Debug, Clone)]
pub struct TagStore {
    /// Path to the tag file
    path: PathBuf,
}

impl TagStore {
    /// Create a store for the file at `path`. The file is not touched until
    /// the first read or write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all tags in file order.
    ///
    /// A missing file is an empty store. Lines are trimmed and blank lines
    /// skipped; duplicates already present in the file are kept as they are.
    pub fn read_tags(&self) -> Result<Vec<Tag>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Tag file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
                .into());
            }
        };

        let mut tags = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            match Tag::new(line) {
                Ok(tag) => tags.push(tag),
                Err(StoreError::EmptyTag) => {}
                Err(e) => log::warn!(
                    "Skipping line {} of {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ),
            }
        }
        log::debug!("Read {} tag(s) from {}", tags.len(), self.path.display());
        Ok(tags)
    }

    /// Overwrite the store with `tags`, one per line, in the given order
    pub fn write_tags(&self, tags: &[Tag]) -> Result<()> {
        let mut contents = String::new();
        for tag in tags {
            contents.push_str(tag.as_str());
            contents.push('\n');
        }

        let temp_path = sibling_path(&self.path, "tmp");
        let write_failed = |source: std::io::Error| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        {
            let mut file = fs::File::create(&temp_path).map_err(write_failed)?;
            file.write_all(contents.as_bytes()).map_err(write_failed)?;
            file.sync_all().map_err(write_failed)?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_failed(e).into());
        }

        log::debug!("Wrote {} tag(s) to {}", tags.len(), self.path.display());
        Ok(())
    }

    /// Whether `tag` is present in the store
    pub fn contains(&self, tag: &Tag) -> Result<bool> {
        Ok(self.read_tags()?.contains(tag))
    }

    /// Append `tag`, failing with [`StoreError::Duplicate`] if already present
    pub fn add_tag(&self, tag: &Tag) -> Result<()> {
        let _lock = self.lock()?;

        let mut tags = self.read_tags()?;
        if tags.contains(tag) {
            return Err(StoreError::Duplicate {
                tag: tag.to_string(),
            }
            .into());
        }

        tags.push(tag.clone());
        self.write_tags(&tags)
    }

    /// Remove `tag`, failing with [`StoreError::NotFound`] if absent.
    ///
    /// Every line equal to `tag` is dropped; other tags keep their order.
    pub fn remove_tag(&self, tag: &Tag) -> Result<()> {
        let _lock = self.lock()?;

        let tags = self.read_tags()?;
        let remaining: Vec<Tag> = tags.iter().filter(|t| *t != tag).cloned().collect();

        if remaining.len() == tags.len() {
            return Err(StoreError::NotFound {
                tag: tag.to_string(),
            }
            .into());
        }

        self.write_tags(&remaining)
    }

    fn lock(&self) -> Result<StoreLock> {
        Ok(StoreLock::acquire(&sibling_path(&self.path, "lock"))?)
    }
}

/// `<file>.<suffix>` next to `path`, e.g. `.rtag` -> `.rtag.lock`
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RtagError;
    use tempfile::TempDir;

    fn tag(name: &str) -> Tag {
        Tag::new(name).expect("valid tag")
    }

    fn store_in(temp_dir: &TempDir) -> TagStore {
        TagStore::new(temp_dir.path().join(".rtag"))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);

        assert!(store.read_tags().expect("read").is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_adds_preserve_insertion_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);

        for name in ["web", "api", "worker", "db"] {
            store.add_tag(&tag(name)).expect("add");
        }

        let tags = store.read_tags().expect("read");
        assert_eq!(tags, vec![tag("web"), tag("api"), tag("worker"), tag("db")]);
        assert_eq!(
            fs::read_to_string(store.path()).expect("read file"),
            "web\napi\nworker\ndb\n"
        );
    }

    #[test]
    fn test_duplicate_add_leaves_store_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        store.add_tag(&tag("v1")).expect("add");
        let before = fs::read(store.path()).expect("read file");

        let result = store.add_tag(&tag("v1"));

        assert!(matches!(
            result,
            Err(RtagError::Store(StoreError::Duplicate { ref tag })) if tag == "v1"
        ));
        assert_eq!(fs::read(store.path()).expect("read file"), before);
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        store.add_tag(&tag("v1")).expect("add");
        let before = fs::read(store.path()).expect("read file");

        let result = store.remove_tag(&tag("v2"));

        assert!(matches!(
            result,
            Err(RtagError::Store(StoreError::NotFound { .. }))
        ));
        assert_eq!(fs::read(store.path()).expect("read file"), before);
    }

    #[test]
    fn test_remove_from_empty_store_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);

        assert!(matches!(
            store.remove_tag(&tag("v1")),
            Err(RtagError::Store(StoreError::NotFound { .. }))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        for name in ["a", "b", "c", "d"] {
            store.add_tag(&tag(name)).expect("add");
        }

        store.remove_tag(&tag("b")).expect("remove");

        assert_eq!(
            store.read_tags().expect("read"),
            vec![tag("a"), tag("c"), tag("d")]
        );
    }

    #[test]
    fn test_remove_last_tag_leaves_empty_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        store.add_tag(&tag("v1")).expect("add");

        store.remove_tag(&tag("v1")).expect("remove");

        assert!(store.read_tags().expect("read").is_empty());
        assert_eq!(fs::read_to_string(store.path()).expect("read file"), "");
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_stripped() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        fs::write(store.path(), "\n  v1  \n\n\tv2\r\n\n").expect("seed file");

        let tags = store.read_tags().expect("read");
        assert_eq!(tags, vec![tag("v1"), tag("v2")]);

        store.write_tags(&tags).expect("write");
        assert_eq!(fs::read_to_string(store.path()).expect("read file"), "v1\nv2\n");
    }

    #[test]
    fn test_line_with_embedded_carriage_return_is_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        fs::write(store.path(), "v1\na\rb\nv2\n").expect("seed file");

        assert_eq!(store.read_tags().expect("read"), vec![tag("v1"), tag("v2")]);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        fs::write(store.path(), "one\ntwo\nthree\n").expect("seed file");

        store.write_tags(&store.read_tags().expect("read")).expect("write");

        assert_eq!(
            fs::read_to_string(store.path()).expect("read file"),
            "one\ntwo\nthree\n"
        );
    }

    #[test]
    fn test_existing_duplicates_are_not_deduplicated_on_read() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);
        fs::write(store.path(), "v1\nv1\nv2\n").expect("seed file");

        assert_eq!(store.read_tags().expect("read").len(), 3);
    }

    #[test]
    fn test_only_store_and_lock_file_left_behind() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = store_in(&temp_dir);

        store.add_tag(&tag("v1")).expect("add");
        store.remove_tag(&tag("v1")).expect("remove");

        let mut names: Vec<String> = fs::read_dir(temp_dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![".rtag".to_string(), ".rtag.lock".to_string()]);
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A directory where the file should be cannot be read as text.
        let store = TagStore::new(temp_dir.path());

        assert!(matches!(
            store.read_tags(),
            Err(RtagError::Store(StoreError::ReadFailed { .. }))
        ));
    }

    #[test]
    fn test_sibling_path_appends_suffix() {
        assert_eq!(
            sibling_path(Path::new("dir/.rtag"), "lock"),
            PathBuf::from("dir/.rtag.lock")
        );
        assert_eq!(
            sibling_path(Path::new("tags.txt"), "tmp"),
            PathBuf::from("tags.txt.tmp")
        );
    }
}
