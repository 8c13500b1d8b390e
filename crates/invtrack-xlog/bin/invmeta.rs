//! Inspect the inventory metadata recorded for one session.
//!
//! Given a ttyrec path, finds the matching xlogfile line and prints the
//! parsed inventory metadata as pretty JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use invtrack_xlog::{XlogError, derive_xlog_path, extract_inventory_metadata, find_session};

/// Look up inventory metadata for a recorded session
#[derive(Parser, Debug)]
#[command(name = "invmeta")]
#[command(author, version, about = "Look up inventory metadata for a recorded session", long_about = None)]
struct Args {
    /// Path to the session's ttyrec file
    #[arg(long = "ttyrec")]
    ttyrec: PathBuf,

    /// Path to the matching xlogfile (derived from the ttyrec when omitted)
    #[arg(long = "xlog")]
    xlog: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.ttyrec.exists() {
        return Err(XlogError::TtyrecNotFound(args.ttyrec).into());
    }
    let xlog_path = args
        .xlog
        .unwrap_or_else(|| derive_xlog_path(&args.ttyrec));

    let ttyrec_name = args
        .ttyrec
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fields = find_session(&xlog_path, &ttyrec_name)?;
    let metadata = extract_inventory_metadata(&fields);

    println!("ttyrec: {}", args.ttyrec.display());
    println!("xlog  : {}", xlog_path.display());
    if metadata.is_empty() {
        println!("no inventory metadata fields in this record");
    } else {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    }
    Ok(())
}
