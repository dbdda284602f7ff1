//! # cytoband-hierarchy
//!
//! A library for turning UCSC cytoBand tables into a linked, assembly-agnostic band
//! terminology.
//!
//! Cytogenetic band names such as `p36.33` encode a path: arm `p`, region `3`, band `6`,
//! subband `33`. This crate rebuilds that path as a tree per chromosome, threads
//! previous/next links through every set of siblings in genomic order, and renders the
//! result as a FHIR R4 `CodeSystem`.
//!
//! ## Features
//!
//! - **Band name parsing**: ISCN-style names into arm, region, band and subband
//! - **Sibling linking**: previous/next at every level, karyotype order for chromosomes
//! - **Centromere cross-linking**: optional p/q joins at subband, band or region level
//! - **Gzip input**: `cytoBand.txt.gz` is read directly
//! - **Atomic output**: the document replaces its target in one step
//!
//! ## Example
//!
//! ```rust
//! use cytoband_hierarchy::{BandHierarchy, BuildOptions, CodeSystem, CodeSystemMetadata};
//! use cytoband_hierarchy::parsing::cytoband::parse_cytoband_text;
//!
//! let text = "chr1\t0\t2300000\tp36.33\tgneg\nchr1\t2300000\t5300000\tp36.32\tgpos25\n";
//! let table = parse_cytoband_text(text).unwrap();
//! let hierarchy = BandHierarchy::build(&table, &BuildOptions::default()).unwrap();
//!
//! let cs = CodeSystem::from_hierarchy(&hierarchy, &CodeSystemMetadata::default());
//! assert_eq!(cs.count, 6);
//! assert_eq!(cs.find("1p36.33").unwrap().linked_code("next"), Some("1p36.32"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Node and enum types shared across the crate
//! - [`parsing`]: cytoBand table reader and band name parser
//! - [`hierarchy`]: Tree construction, ordering and linking
//! - [`codesystem`]: FHIR `CodeSystem` model and writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod codesystem;
pub mod core;
pub mod hierarchy;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use codesystem::{CodeSystem, CodeSystemMetadata};
pub use core::node::{HierarchyNode, NodeId};
pub use core::types::*;
pub use hierarchy::builder::{BandHierarchy, BuildOptions, BuildSummary};
