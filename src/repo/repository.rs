//! Core Git repository wrapper.
//!
//! This wraps `git2::Repository` with the handful of high-level queries the
//! report layer needs: layout properties, classified references, and the
//! reachable-object walk. Everything above this module works with the
//! domain types from [`crate::repo::types`] and never touches git2 directly.

use std::path::Path;

use git2::Repository;

use crate::repo::error::{RepoError, RepoResult};
use crate::repo::refs::RefScanner;
use crate::repo::types::ClassifiedRef;
use crate::repo::walk::ObjectWalk;

/// The main repository wrapper.
pub struct Repo {
    inner: Repository,
}

impl Repo {
    /// Open the repository containing `path`, searching upward the way git
    /// itself does.
    pub fn discover(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let inner = Repository::discover(path)
            .map_err(|_| RepoError::NotARepository(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Open the repository at exactly `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let inner = Repository::open(path)
            .map_err(|_| RepoError::NotARepository(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Whether the repository has no working tree.
    pub fn is_bare(&self) -> bool {
        self.inner.is_bare()
    }

    /// Whether the repository has truncated history.
    pub fn is_shallow(&self) -> bool {
        self.inner.is_shallow()
    }

    /// The object-hash algorithm name (`sha1` or `sha256`).
    ///
    /// git records a non-default algorithm in `extensions.objectformat`;
    /// absence of the key means sha1.
    pub fn object_format(&self) -> String {
        self.config_or("extensions.objectformat", "sha1")
    }

    /// The reference-storage backend name (`files` or `reftable`).
    ///
    /// git records a non-default backend in `extensions.refstorage`;
    /// absence of the key means the loose/packed files backend.
    pub fn references_format(&self) -> String {
        self.config_or("extensions.refstorage", "files")
    }

    /// Every regular reference, classified by namespace and resolved to
    /// its direct target.
    pub fn classified_refs(&self) -> RepoResult<Vec<ClassifiedRef>> {
        RefScanner::scan(&self.inner)
    }

    /// Start a reachable-object traversal rooted at ids pushed by the caller.
    pub fn object_walk(&self) -> ObjectWalk<'_> {
        ObjectWalk::new(&self.inner)
    }

    fn config_or(&self, key: &str, default: &str) -> String {
        self.inner
            .config()
            .and_then(|config| config.get_string(key))
            .unwrap_or_else(|_| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let sub = dir.path().join("a/b");
        std::fs::create_dir_all(&sub).unwrap();

        let repo = Repo::discover(&sub).unwrap();
        assert!(!repo.is_bare());
    }

    #[test]
    fn test_discover_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let result = Repo::discover(dir.path());
        assert!(matches!(result, Err(RepoError::NotARepository(_))));
    }

    #[test]
    fn test_layout_flags() {
        let plain = TempDir::new().unwrap();
        Repository::init(plain.path()).unwrap();
        let repo = Repo::open(plain.path()).unwrap();
        assert!(!repo.is_bare());
        assert!(!repo.is_shallow());

        let bare = TempDir::new().unwrap();
        Repository::init_bare(bare.path()).unwrap();
        let repo = Repo::open(bare.path()).unwrap();
        assert!(repo.is_bare());
    }

    #[test]
    fn test_format_defaults() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let repo = Repo::open(dir.path()).unwrap();

        assert_eq!(repo.object_format(), "sha1");
        assert_eq!(repo.references_format(), "files");
    }

    #[test]
    fn test_format_from_extensions_config() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        raw.config()
            .unwrap()
            .set_str("extensions.objectformat", "sha256")
            .unwrap();
        raw.config()
            .unwrap()
            .set_str("extensions.refstorage", "reftable")
            .unwrap();

        let repo = Repo::open(dir.path()).unwrap();
        assert_eq!(repo.object_format(), "sha256");
        assert_eq!(repo.references_format(), "reftable");
    }
}
