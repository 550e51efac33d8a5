//! repo-report - layout and statistics reports for Git repositories
//!
//! This crate answers two questions about a repository: what are its
//! static layout properties (hash algorithm, reference backend, bareness,
//! shallow-ness), and how large it is (references by kind, reachable
//! objects by type). Reports render as an aligned table, `key=value`
//! lines, or NUL-terminated records.
//!
//! # Example
//!
//! ```no_run
//! use repo_report::progress::NoProgress;
//! use repo_report::repo::Repo;
//! use repo_report::report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Repo::discover(".")?;
//! let refs = repo.classified_refs()?;
//! let stats = report::collect(&repo, &refs, &mut NoProgress)?;
//! report::stats_table(&stats).write(&mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod progress;
pub mod repo;
pub mod report;
