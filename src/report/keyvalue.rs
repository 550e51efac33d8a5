//! Flat keyvalue/NUL rendering of the stats counters.
//!
//! Eight fixed lines, one per leaf counter, in a hand-specified order. The
//! computed totals and the table's structural rows are deliberately absent
//! from this form. Two delimiter profiles share the line set: keyvalue is
//! `key=value\n`, nul is `key\nvalue\0`.

use std::io::{self, Write};

use crate::report::counters::RepoStats;

/// Emit the eight stats records and flush, so downstream pipe consumers
/// see complete output before the process exits.
pub fn write_stats(
    out: &mut impl Write,
    stats: &RepoStats,
    key_delim: char,
    record_delim: char,
) -> io::Result<()> {
    let records = [
        ("references.branches.count", stats.refs.branches),
        ("references.tags.count", stats.refs.tags),
        ("references.remotes.count", stats.refs.remotes),
        ("references.others.count", stats.refs.others),
        ("objects.commits.count", stats.objects.commits),
        ("objects.trees.count", stats.objects.trees),
        ("objects.blobs.count", stats.objects.blobs),
        ("objects.tags.count", stats.objects.tags),
    ];

    for (key, value) in records {
        write!(out, "{key}{key_delim}{value}{record_delim}")?;
    }
    out.flush()
}
