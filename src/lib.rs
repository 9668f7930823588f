//! Typed client for the Subversion command-line tool.
//!
//! Operations on a local working copy (add, commit, update, status, remove,
//! revert, cleanup) are exposed as methods on [`LocalClient`] instead of raw
//! `svn` invocations. Status output is parsed from `svn status --xml`, and
//! cleanup can remove unversioned and ignored files without relying on
//! svn 1.9's `--remove-unversioned`/`--remove-ignored`.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::client::LocalClient;
pub use areas::runner::{CommandOutput, CommandRunner, SvnConfig, SvnRunner};
pub use artifacts::depth::Depth;
pub use artifacts::status::parser::StatusEntries;
pub use artifacts::status::status_entry::{StatusEntry, UNCOMMITTED_REVISION};
pub use artifacts::status::status_type::StatusType;
pub use errors::{SvnError, SvnResult};
