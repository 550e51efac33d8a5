//! Counter records for references and reachable objects.
//!
//! Both records start at zero, are filled by exactly one counting pass,
//! and are never decremented. Totals are always computed from the leaf
//! fields, never stored, so the table and keyvalue renderings cannot
//! disagree on a sum.

use crate::repo::{ObjectKind, RefKind};

/// Reference counts by classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefCounters {
    pub branches: u64,
    pub remotes: u64,
    pub tags: u64,
    pub others: u64,
}

impl RefCounters {
    /// Tally one reference into exactly one bucket.
    pub fn record(&mut self, kind: RefKind) {
        match kind {
            RefKind::Branch => self.branches += 1,
            RefKind::Remote => self.remotes += 1,
            RefKind::Tag => self.tags += 1,
            RefKind::Other => self.others += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.branches + self.remotes + self.tags + self.others
    }
}

/// Reachable-object counts by type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObjectCounters {
    pub tags: u64,
    pub commits: u64,
    pub trees: u64,
    pub blobs: u64,
}

impl ObjectCounters {
    /// Add a batch of newly discovered objects to one bucket.
    pub fn add(&mut self, kind: ObjectKind, count: u64) {
        match kind {
            ObjectKind::Tag => self.tags += count,
            ObjectKind::Commit => self.commits += count,
            ObjectKind::Tree => self.trees += count,
            ObjectKind::Blob => self.blobs += count,
        }
    }

    pub fn total(&self) -> u64 {
        self.tags + self.commits + self.trees + self.blobs
    }
}

/// The complete statistics for one report.
///
/// This is the sole unit of truth every renderer consumes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepoStats {
    pub refs: RefCounters,
    pub objects: ObjectCounters,
}
