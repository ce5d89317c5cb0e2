//! Data model for extracted sections.
//!
//! Every value here is created and consumed within a single extraction
//! call. Nothing is cached or shared between calls.

mod section;
mod stats;

pub use section::{Section, TypeHint, PREAMBLE_HEADING};
pub use stats::{ExtractionResult, ExtractionStats};
