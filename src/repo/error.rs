//! Repository layer error types
//!
//! All errors that can occur while reading a repository are defined here.
//! We use `thiserror` for ergonomic error definition and better error messages.

use std::path::PathBuf;

use thiserror::Error;

use crate::repo::types::ObjectId;

/// the main error type for repository access
#[derive(Debug, Error)]
pub enum RepoError {
    /// error from the underlying Git library
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// no repository found at or above the given path
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// an object in the graph has a type outside commit/tree/blob/tag.
    /// This is a contract breach with the object database, not a user error.
    #[error("unexpected object type for {0}")]
    UnexpectedObjectType(ObjectId),

    /// I/O error (filesystem level)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// result type alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
