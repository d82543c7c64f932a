//! Domain-level structures for classification results.
//!
//! This module groups the types that represent classification concepts:
//! the label table mapping class indices to names and the recognition
//! records returned to callers.

pub mod labels;
pub mod recognition;

pub use labels::{LabelTable, UNKNOWN_LABEL};
pub use recognition::Recognition;
