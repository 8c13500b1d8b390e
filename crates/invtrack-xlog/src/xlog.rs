//! xlogfile parsing and per-session lookup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised before any metadata aggregation is attempted.
#[derive(Error, Debug)]
pub enum XlogError {
    #[error("ttyrec not found: {0}")]
    TtyrecNotFound(PathBuf),

    #[error("xlogfile not found: {0}")]
    XlogNotFound(PathBuf),

    #[error("no entry with ttyrecname={session} in {xlog}")]
    SessionNotFound { session: String, xlog: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Split one xlogfile line into its fields. Parts are tab-separated
/// `key=value` pairs, split on the first `=`; parts without one are
/// skipped.
pub fn parse_fields(line: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for part in line.split('\t') {
        if let Some((key, value)) = part.split_once('=') {
            fields.insert(key.to_string(), value.to_string());
        }
    }
    fields
}

/// Scan `xlog_path` for the episode whose `ttyrecname` field equals
/// `ttyrec_name` and return its fields.
pub fn find_session(
    xlog_path: &Path,
    ttyrec_name: &str,
) -> Result<HashMap<String, String>, XlogError> {
    if !xlog_path.exists() {
        return Err(XlogError::XlogNotFound(xlog_path.to_path_buf()));
    }
    let file = File::open(xlog_path).map_err(|source| XlogError::Io {
        path: xlog_path.to_path_buf(),
        source,
    })?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| XlogError::Io {
            path: xlog_path.to_path_buf(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields = parse_fields(line);
        if fields.get("ttyrecname").map(String::as_str) == Some(ttyrec_name) {
            return Ok(fields);
        }
    }
    Err(XlogError::SessionNotFound {
        session: ttyrec_name.to_string(),
        xlog: xlog_path.to_path_buf(),
    })
}

/// Derive the xlogfile path from a ttyrec path. A ttyrec is named like
/// `nle.<pid>.0.ttyrec3.bz2`; the matching xlogfile sits next to it as
/// `nle.<pid>.xlogfile`.
pub fn derive_xlog_path(ttyrec_path: &Path) -> PathBuf {
    let file_name = ttyrec_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base: Vec<&str> = file_name.split('.').take(2).collect();
    let parent = ttyrec_path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}.xlogfile", base.join(".")))
}
