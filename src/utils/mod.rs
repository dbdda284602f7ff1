//! Shared helpers for chromosome labels and input lines.

pub mod validation;
