//! Working copy components
//!
//! - `client`: The working copy bound client every operation hangs off
//! - `runner`: Invocation of the external `svn` binary
//! - `workspace`: Filesystem operations on the working copy

pub mod client;
pub mod runner;
pub mod workspace;
