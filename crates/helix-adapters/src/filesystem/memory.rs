//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use helix_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HelixError, HelixResult},
};

/// In-memory filesystem for testing.
///
/// Cloning shares the same backing store.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.read().files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// Full snapshot of every file, for comparing two runs.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.read().files.clone()
    }

    // A poisoned lock only means another test thread panicked mid-write.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> HelixResult<()> {
        let mut inner = self.write();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> HelixResult<()> {
        let mut inner = self.write();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(fs_error(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_file(&self, path: &Path) -> HelixResult<()> {
        match self.write().files.remove(path) {
            Some(_) => Ok(()),
            None => Err(fs_error(path, "No such file")),
        }
    }

    fn remove_dir(&self, path: &Path) -> HelixResult<()> {
        let mut inner = self.write();

        if !inner.directories.contains(path) {
            return Err(fs_error(path, "No such directory"));
        }
        let occupied = inner.files.keys().any(|p| p.starts_with(path))
            || inner.directories.iter().any(|p| p != path && p.starts_with(path));
        if occupied {
            return Err(fs_error(path, "Directory not empty"));
        }

        inner.directories.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> HelixResult<()> {
        let mut inner = self.write();

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn fs_error(path: &Path, reason: &str) -> HelixError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), b"x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), b"x").unwrap();
        assert_eq!(fs.read_file(Path::new("a/b.txt")).unwrap(), b"x");
    }

    #[test]
    fn remove_dir_all_drops_nested_entries() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("svc/internal")).unwrap();
        fs.write_file(Path::new("svc/internal/x.go"), b"").unwrap();

        fs.remove_dir_all(Path::new("svc")).unwrap();
        assert!(!fs.exists(Path::new("svc/internal")));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn remove_dir_only_takes_empty_directories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("svc/internal")).unwrap();
        fs.write_file(Path::new("svc/internal/x.go"), b"").unwrap();

        assert!(fs.remove_dir(Path::new("svc")).is_err());
        assert!(fs.remove_dir(Path::new("svc/internal")).is_err());

        fs.remove_file(Path::new("svc/internal/x.go")).unwrap();
        fs.remove_dir(Path::new("svc/internal")).unwrap();
        fs.remove_dir(Path::new("svc")).unwrap();
        assert!(!fs.exists(Path::new("svc")));
        assert!(fs.remove_dir(Path::new("svc")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("d")).unwrap();
        assert!(other.exists(Path::new("d")));
    }
}
