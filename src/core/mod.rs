//! Core data types for the cytogenetic band hierarchy.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`HierarchyNode`]: A chromosome, arm, region, band, or subband concept
//! - [`NodeId`]: Arena index of a node
//! - [`SiblingLinks`]: Previous/next references between sibling nodes
//! - [`NodeKind`], [`Arm`]: Structural classification
//! - [`CrossLinkLevel`], [`DuplicateSubbandPolicy`]: Build-time choices
//!
//! ## Codes
//!
//! Every node code is the concatenation of its ancestors' codes with a local segment:
//!
//! | Level      | Local segment | Example   |
//! |------------|---------------|-----------|
//! | chromosome | label         | `1`       |
//! | arm        | `p` / `q`     | `1p`      |
//! | region     | first digit   | `1p3`     |
//! | band       | second digit  | `1p36`    |
//! | subband    | `.` + digits  | `1p36.33` |

pub mod node;
pub mod types;

pub use node::{HierarchyNode, NodeId, SiblingLinks};
pub use types::{Arm, CrossLinkLevel, DuplicateSubbandPolicy, NodeKind};
