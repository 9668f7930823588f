//! Working copy status reporting
//!
//! This module turns the XML produced by `svn status --no-ignore --xml` into typed records.
//!
//! ## Components
//!
//! - `status_type`: Normalized status codes and the raw code lookup table
//! - `status_entry`: A single status record
//! - `parser`: Streaming XML parser yielding status records in document order

pub mod parser;
pub mod status_entry;
pub mod status_type;
