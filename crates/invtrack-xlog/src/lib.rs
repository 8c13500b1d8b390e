//! invtrack-xlog: downstream consumer of episode inventory metadata.
//!
//! Episodes are logged one per line in an append-only, tab-separated
//! `key=value` "xlogfile". The inventory metadata fields carry
//! JSON-encoded string values. This crate finds the line for a recorded
//! session, pulls out the inventory fields, and parses them — flagging
//! invalid JSON per field instead of failing the whole record.

pub mod metadata;
pub mod xlog;

pub use metadata::extract_inventory_metadata;
pub use xlog::{XlogError, derive_xlog_path, find_session, parse_fields};
