//! Subversion command implementations
//!
//! Each module extends `LocalClient` with one subcommand. All but `status` and
//! `cleanup` are plain argument marshaling over the command runner:
//!
//! - `add`, `commit`, `update`, `remove`, `revert`: thin wrappers over the matching `svn` subcommand
//! - `status`: XML status query returning lazily parsed entries
//! - `cleanup`: native cleanup, or removal of unversioned/ignored entries from disk

pub mod add;
pub mod cleanup;
pub mod commit;
pub mod remove;
pub mod revert;
pub mod status;
pub mod update;
