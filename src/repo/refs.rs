//! Classified reference listing.
//!
//! Git refs are pointers to objects. This module lists the regular refs
//! (everything under `refs/`, so HEAD and other pseudorefs are excluded)
//! and tags each with its [`RefKind`] so the report layer never has to
//! inspect ref names itself.

use git2::Repository;

use crate::repo::error::RepoResult;
use crate::repo::types::{ClassifiedRef, ObjectId, RefKind};

/// Lists and classifies references.
pub(crate) struct RefScanner;

impl RefScanner {
    /// Classify a full ref name by its namespace.
    pub(crate) fn classify(name: &str) -> RefKind {
        if name.starts_with("refs/heads/") {
            RefKind::Branch
        } else if name.starts_with("refs/remotes/") {
            RefKind::Remote
        } else if name.starts_with("refs/tags/") {
            RefKind::Tag
        } else {
            RefKind::Other
        }
    }

    /// List every regular reference with its classification and direct
    /// target. Broken or unresolvable refs are skipped, matching what
    /// `for-each-ref` style listings do.
    pub(crate) fn scan(repo: &Repository) -> RepoResult<Vec<ClassifiedRef>> {
        let mut result = Vec::new();

        for reference in repo.references()? {
            let reference = match reference {
                Ok(r) => r,
                Err(e) => {
                    log::debug!("skipping unreadable ref: {e}");
                    continue;
                }
            };

            let name = match reference.name() {
                Some(n) if n.starts_with("refs/") => n.to_string(),
                _ => continue,
            };

            // Follow symbolic refs to a direct one; a ref that resolves to
            // nothing is broken and gets skipped like an unreadable one.
            let target = match reference.resolve().ok().and_then(|r| r.target()) {
                Some(oid) => oid,
                None => {
                    log::debug!("skipping broken ref: {name}");
                    continue;
                }
            };

            result.push(ClassifiedRef {
                kind: Self::classify(&name),
                name,
                target: ObjectId::new(target),
            });
        }

        Ok(result)
    }
}
