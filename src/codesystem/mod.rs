//! Terminology-resource output for the band hierarchy.
//!
//! A built [`BandHierarchy`](crate::hierarchy::builder::BandHierarchy) is rendered as a
//! FHIR R4 `CodeSystem`: nested `concept` entries with a `kind` property and
//! `previous`/`next` Codings scoped to the document URL. No coordinates or stains are
//! written, so the same document applies across reference builds.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cytoband_hierarchy::codesystem::{CodeSystem, CodeSystemMetadata};
//! use cytoband_hierarchy::hierarchy::builder::{BandHierarchy, BuildOptions};
//! use cytoband_hierarchy::parsing::cytoband::read_cytoband_file;
//! use std::path::Path;
//!
//! let table = read_cytoband_file(Path::new("cytoBand.txt")).unwrap();
//! let hierarchy = BandHierarchy::build(&table, &BuildOptions::default()).unwrap();
//! let cs = CodeSystem::from_hierarchy(&hierarchy, &CodeSystemMetadata::default());
//! cs.save(Path::new("codesystem.json")).unwrap();
//! ```

use thiserror::Error;

pub mod document;
pub mod store;

pub use document::{
    CodeSystem, CodeSystemMetadata, Coding, Concept, ConceptProperty, PropertyDefinition,
    PropertyType, PropertyValue,
};

#[derive(Error, Debug)]
pub enum CodeSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
