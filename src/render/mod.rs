//! Rendering of extracted sections.
//!
//! The in-process output of the crate is `Vec<Section>`. These renderers
//! serve callers that need the sections as text: JSON for the
//! summarization step, Markdown and plain text for people.

mod json;
mod markdown;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownOptions};
pub use text::to_text;
