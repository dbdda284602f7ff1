//! Parsers for cytogenetic band input.
//!
//! This module provides:
//!
//! - **Band names**: Split ISCN names like `p36.33` into arm, region, band and subband
//! - **Cytoband tables**: Read UCSC `cytoBand.txt` (plain or gzipped) into rows
//!
//! ## Example
//!
//! ```rust,no_run
//! use cytoband_hierarchy::parsing::cytoband::read_cytoband_file;
//! use std::path::Path;
//!
//! let table = read_cytoband_file(Path::new("cytoBand.txt.gz")).unwrap();
//! println!("{} rows, {} malformed", table.rows.len(), table.malformed);
//! ```

use thiserror::Error;

pub mod band;
pub mod cytoband;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cytoband table: {0}")]
    InvalidFormat(String),
}
