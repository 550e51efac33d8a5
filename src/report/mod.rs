//! Statistics aggregation and multi-format rendering.
//!
//! This module turns repository data into reports:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │    fields    │     │   collect    │
//! │ (info keys)  │     │ (counting)   │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │ RepoStats
//!        │             ┌──────┴───────┐
//!        ▼             ▼              ▼
//!   keyvalue/nul     table       keyvalue/nul
//!   (quoted info)  (aligned)    (eight records)
//! ```
//!
//! Every renderer reads from the same [`RepoStats`], so the table and the
//! flat encodings cannot disagree on a number. [`OutputFormat`] picks the
//! encoding and checks subcommand compatibility.

mod collect;
mod counters;
mod fields;
mod format;
mod keyvalue;
mod quote;
mod table;

// Re-export public API
pub use collect::{collect, count_objects, count_references};
pub use counters::{ObjectCounters, RefCounters, RepoStats};
pub use fields::{resolve, write_value, InfoField, UnknownKey};
pub use format::OutputFormat;
pub use keyvalue::write_stats;
pub use quote::c_quote;
pub use table::{stats_table, Table};
