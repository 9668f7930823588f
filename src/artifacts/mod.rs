//! Subversion data types
//!
//! - `depth`: The `--depth` option shared by tree-walking subcommands
//! - `status`: Status records and the XML status parser

pub mod depth;
pub mod status;
