//! Core type-safe wrappers around git primitives for the repository layer.

use std::fmt;

use git2::Oid;

/// A content-addressed object identifier.
///
/// The inner `Oid` is only accessible within the repository module, so upper
/// layers can carry identifiers around without depending on git2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) Oid);

impl ObjectId {
    pub(crate) fn new(oid: Oid) -> Self {
        Self(oid)
    }

    /// raw Oid (for internal use only)
    pub(crate) fn raw(&self) -> Oid {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a typed object in the repository graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Commit,
    Tree,
    Blob,
    Tag,
}

/// The classification of a reference, decided by its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `refs/heads/*`
    Branch,
    /// `refs/remotes/*`
    Remote,
    /// `refs/tags/*`
    Tag,
    /// anything else under `refs/` (notes, stash, custom namespaces)
    Other,
}

/// A reference that has already been classified and resolved to its
/// direct target. For an annotated tag ref the target is the tag object
/// itself, not the peeled commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRef {
    pub name: String,
    pub kind: RefKind,
    pub target: ObjectId,
}
