//! Repository access layer.
//!
//! This module is the only place that talks to git2. The report layer
//! consumes three things from it and nothing else:
//!
//! - layout accessors on [`Repo`] (bareness, shallow-ness, format names),
//! - [`Repo::classified_refs`], a sequence of references already tagged
//!   with their [`RefKind`],
//! - [`Repo::object_walk`], a deduplicating traversal that delivers
//!   type-tagged batches of reachable objects to an [`ObjectSink`].

mod error;
mod refs;
mod repository;
mod types;
mod walk;

// Re-export public API
pub use error::{RepoError, RepoResult};
pub use repository::Repo;
pub use types::{ClassifiedRef, ObjectId, ObjectKind, RefKind};
pub use walk::{ObjectSink, ObjectWalk};
