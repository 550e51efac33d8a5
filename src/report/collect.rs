//! The stats collector.
//!
//! Two sequential aggregation passes over one input, a slice of classified
//! references: the first tallies the references themselves, the second
//! registers every reference target as a traversal root and counts the
//! objects the walk discovers. Deduplication belongs to the walk; this
//! module only adds up batch sizes.

use crate::progress::ProgressSink;
use crate::repo::{ClassifiedRef, ObjectId, ObjectKind, ObjectSink, Repo, RepoResult};
use crate::report::counters::{ObjectCounters, RefCounters, RepoStats};

/// Run both counting passes and assemble the report statistics.
pub fn collect(
    repo: &Repo,
    refs: &[ClassifiedRef],
    progress: &mut dyn ProgressSink,
) -> RepoResult<RepoStats> {
    let mut stats = RepoStats::default();
    count_references(&mut stats.refs, refs, progress);
    count_objects(repo, &mut stats.objects, refs, progress)?;
    Ok(stats)
}

/// Tally every classified reference into its bucket, reporting the
/// 1-based index as progress.
pub fn count_references(
    counters: &mut RefCounters,
    refs: &[ClassifiedRef],
    progress: &mut dyn ProgressSink,
) {
    progress.start("Counting references", Some(refs.len() as u64));
    for (index, reference) in refs.iter().enumerate() {
        counters.record(reference.kind);
        progress.update(index as u64 + 1);
    }
    progress.stop();
    log::debug!("counted {} references", counters.total());
}

/// Count every object reachable from the references' targets.
pub fn count_objects(
    repo: &Repo,
    counters: &mut ObjectCounters,
    refs: &[ClassifiedRef],
    progress: &mut dyn ProgressSink,
) -> RepoResult<()> {
    let mut walk = repo.object_walk();
    for reference in refs {
        walk.push_root(reference.target);
    }

    progress.start("Counting objects", None);
    let result = walk.run(&mut ObjectCountSink {
        counters: &mut *counters,
        progress: &mut *progress,
    });
    progress.stop();
    result?;

    log::debug!("counted {} reachable objects", counters.total());
    Ok(())
}

/// Adds each delivered batch to the matching bucket and reports the
/// running total across all buckets.
struct ObjectCountSink<'a> {
    counters: &'a mut ObjectCounters,
    progress: &'a mut dyn ProgressSink,
}

impl ObjectSink for ObjectCountSink<'_> {
    fn on_objects(&mut self, kind: ObjectKind, ids: &[ObjectId]) {
        self.counters.add(kind, ids.len() as u64);
        self.progress.update(self.counters.total());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::RefKind;
    use git2::{Oid, Repository, Signature};
    use tempfile::TempDir;

    /// Records the sequence of progress calls for contract checks.
    #[derive(Default)]
    struct RecordingProgress {
        starts: Vec<(String, Option<u64>)>,
        updates: Vec<u64>,
        stops: usize,
    }

    impl ProgressSink for RecordingProgress {
        fn start(&mut self, title: &str, total: Option<u64>) {
            self.starts.push((title.to_string(), total));
        }
        fn update(&mut self, completed: u64) {
            self.updates.push(completed);
        }
        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn classified(kind: RefKind) -> ClassifiedRef {
        ClassifiedRef {
            name: "refs/test".to_string(),
            kind,
            target: ObjectId::new(Oid::zero()),
        }
    }

    fn setup_repo() -> (TempDir, Repo) {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();

        let blob = raw.blob(b"hello").unwrap();
        let mut builder = raw.treebuilder(None).unwrap();
        builder.insert("hello.txt", blob, 0o100644).unwrap();
        let tree_id = builder.write().unwrap();
        let tree = raw.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test", "test@test.com").unwrap();
        let commit = raw
            .commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .unwrap();

        let object = raw.find_object(commit, None).unwrap();
        raw.tag("v1", &object, &sig, "release", false).unwrap();
        raw.reference("refs/tags/light", commit, false, "").unwrap();

        let repo = Repo::open(dir.path()).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_count_references_sums_to_input_length() {
        let refs = vec![
            classified(RefKind::Branch),
            classified(RefKind::Branch),
            classified(RefKind::Tag),
            classified(RefKind::Other),
        ];

        let mut counters = RefCounters::default();
        let mut progress = RecordingProgress::default();
        count_references(&mut counters, &refs, &mut progress);

        assert_eq!(counters.branches, 2);
        assert_eq!(counters.tags, 1);
        assert_eq!(counters.others, 1);
        assert_eq!(counters.remotes, 0);
        assert_eq!(counters.total(), refs.len() as u64);

        assert_eq!(
            progress.starts,
            vec![("Counting references".to_string(), Some(4))]
        );
        assert_eq!(progress.updates, vec![1, 2, 3, 4]);
        assert_eq!(progress.stops, 1);
    }

    #[test]
    fn test_count_references_zero_items_still_stops_once() {
        let mut counters = RefCounters::default();
        let mut progress = RecordingProgress::default();
        count_references(&mut counters, &[], &mut progress);

        assert_eq!(counters.total(), 0);
        assert_eq!(progress.starts.len(), 1);
        assert!(progress.updates.is_empty());
        assert_eq!(progress.stops, 1);
    }

    #[test]
    fn test_count_objects_zero_roots_still_stops_once() {
        let (_dir, repo) = setup_repo();
        let mut counters = ObjectCounters::default();
        let mut progress = RecordingProgress::default();
        count_objects(&repo, &mut counters, &[], &mut progress).unwrap();

        assert_eq!(counters.total(), 0);
        assert_eq!(
            progress.starts,
            vec![("Counting objects".to_string(), None)]
        );
        assert_eq!(progress.stops, 1);
    }

    #[test]
    fn test_collect_full_repository() {
        let (_dir, repo) = setup_repo();
        let refs = repo.classified_refs().unwrap();

        let mut progress = RecordingProgress::default();
        let stats = collect(&repo, &refs, &mut progress).unwrap();

        // One branch, an annotated and a lightweight tag.
        assert_eq!(stats.refs.branches, 1);
        assert_eq!(stats.refs.tags, 2);
        assert_eq!(stats.refs.remotes, 0);
        assert_eq!(stats.refs.others, 0);

        // One commit with one tree and one blob, plus the tag object.
        assert_eq!(stats.objects.commits, 1);
        assert_eq!(stats.objects.trees, 1);
        assert_eq!(stats.objects.blobs, 1);
        assert_eq!(stats.objects.tags, 1);

        // Both passes completed.
        assert_eq!(progress.stops, 2);
        assert_eq!(progress.starts.len(), 2);
    }

    #[test]
    fn test_object_pass_updates_are_monotonic() {
        let (_dir, repo) = setup_repo();
        let refs = repo.classified_refs().unwrap();

        let mut counters = ObjectCounters::default();
        let mut progress = RecordingProgress::default();
        count_objects(&repo, &mut counters, &refs, &mut progress).unwrap();

        // Updates report the running total, so they never decrease and the
        // last one equals the final count.
        assert!(progress.updates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.updates.last(), Some(&counters.total()));
    }

    #[test]
    fn test_collect_does_not_double_count_shared_targets() {
        let (_dir, repo) = setup_repo();
        let refs = repo.classified_refs().unwrap();

        // The branch and the lightweight tag point at the same commit; the
        // annotated tag reaches it through the tag object. Reachable
        // objects must still be counted once each.
        let mut progress = RecordingProgress::default();
        let stats = collect(&repo, &refs, &mut progress).unwrap();
        assert_eq!(stats.objects.total(), 4);
    }
}
