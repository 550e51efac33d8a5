//! Reachable-object traversal.
//!
//! Given a set of root object ids, [`ObjectWalk`] visits every object they
//! transitively point to, exactly once, and hands type-tagged batches of
//! newly discovered ids to an [`ObjectSink`]. The walk owns deduplication:
//! an object reachable along several paths is delivered a single time, so
//! consumers can add up batch sizes without keeping their own seen-set.

use std::collections::HashSet;

use git2::{ObjectType, Oid, Repository};

use crate::repo::error::{RepoError, RepoResult};
use crate::repo::types::{ObjectId, ObjectKind};

/// Receives batches of newly discovered objects, grouped by kind.
pub trait ObjectSink {
    fn on_objects(&mut self, kind: ObjectKind, ids: &[ObjectId]);
}

/// A one-shot traversal over the object graph.
pub struct ObjectWalk<'repo> {
    repo: &'repo Repository,
    roots: Vec<Oid>,
    seen: HashSet<Oid>,
}

impl<'repo> ObjectWalk<'repo> {
    pub(crate) fn new(repo: &'repo Repository) -> Self {
        Self {
            repo,
            roots: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Register a traversal root. Duplicate roots are fine; the seen-set
    /// collapses them during the walk.
    pub fn push_root(&mut self, id: ObjectId) {
        self.roots.push(id.raw());
    }

    /// Walk the graph from all registered roots, delivering each reachable
    /// object to `sink` exactly once.
    pub fn run(&mut self, sink: &mut dyn ObjectSink) -> RepoResult<()> {
        let mut pending = std::mem::take(&mut self.roots);
        pending.reverse();

        while let Some(oid) = pending.pop() {
            if !self.seen.insert(oid) {
                continue;
            }

            let object = self.repo.find_object(oid, None)?;
            let id = ObjectId::new(oid);

            match object.kind() {
                Some(ObjectType::Tag) => {
                    let tag = object
                        .into_tag()
                        .map_err(|_| RepoError::UnexpectedObjectType(id))?;
                    sink.on_objects(ObjectKind::Tag, &[id]);
                    pending.push(tag.target_id());
                }
                Some(ObjectType::Commit) => {
                    let commit = object
                        .into_commit()
                        .map_err(|_| RepoError::UnexpectedObjectType(id))?;
                    sink.on_objects(ObjectKind::Commit, &[id]);
                    pending.push(commit.tree_id());
                    pending.extend(commit.parent_ids());
                }
                Some(ObjectType::Tree) => {
                    let tree = object
                        .into_tree()
                        .map_err(|_| RepoError::UnexpectedObjectType(id))?;
                    sink.on_objects(ObjectKind::Tree, &[id]);

                    // Batch the blobs directly contained in this tree;
                    // subtrees are visited on their own turn.
                    let mut blobs = Vec::new();
                    for entry in tree.iter() {
                        match entry.kind() {
                            Some(ObjectType::Blob) => {
                                if self.seen.insert(entry.id()) {
                                    blobs.push(ObjectId::new(entry.id()));
                                }
                            }
                            Some(ObjectType::Tree) => pending.push(entry.id()),
                            // Gitlink entries point outside this repository.
                            Some(ObjectType::Commit) => {}
                            _ => {}
                        }
                    }
                    if !blobs.is_empty() {
                        sink.on_objects(ObjectKind::Blob, &blobs);
                    }
                }
                Some(ObjectType::Blob) => {
                    sink.on_objects(ObjectKind::Blob, &[id]);
                }
                _ => return Err(RepoError::UnexpectedObjectType(id)),
            }
        }

        Ok(())
    }
}
