//! Construction and linking of the cytogenetic band hierarchy.
//!
//! The hierarchy runs chromosome → arm → region → band → subband. Sibling order at
//! every level comes from the order rows were seen in, except at the top level, which
//! always follows the karyotype (1..22, X, Y).
//!
//! ## Example
//!
//! ```rust
//! use cytoband_hierarchy::hierarchy::builder::{BandHierarchy, BuildOptions};
//! use cytoband_hierarchy::parsing::cytoband::parse_cytoband_text;
//!
//! let table = parse_cytoband_text("chr1\t0\t2300000\tp36.33\tgneg\nchr1\t2300000\t5300000\tp36.32\tgpos25\n").unwrap();
//! let hierarchy = BandHierarchy::build(&table, &BuildOptions::default()).unwrap();
//!
//! assert_eq!(hierarchy.get("1p36.33").unwrap().next(), Some("1p36.32"));
//! ```
//!
//! ## Modules
//!
//! - [`tree`]: Node arena with idempotent `ensure_*` operations
//! - [`order`]: First-seen order lists per sibling scope
//! - [`linking`]: Previous/next threading and karyotype order
//! - [`centromere`]: Optional p/q cross-links
//! - [`builder`]: The ingest → link → cross-link pipeline

pub mod builder;
pub mod centromere;
pub mod linking;
pub mod order;
pub mod tree;
