//! # pdfsect
//!
//! Section extraction for research PDFs.
//!
//! This library turns a paper into an ordered list of sections, each with
//! its heading, its discovery position, its body text and a coarse type
//! hint derived from the heading. The output is meant to be handed to a
//! summarization step.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsect::{extract_sections, render};
//!
//! let sections = extract_sections("paper.pdf");
//! for section in &sections {
//!     println!("{} [{}]: {} words", section.heading, section.type_hint, section.word_count());
//! }
//!
//! let json = render::to_json(&sections, render::JsonFormat::Pretty)?;
//! println!("{}", json);
//! # Ok::<(), pdfsect::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Loader**: text of every selected page, in page order
//! - **Normalizer**: strips URLs, distributor notices, page numbers and
//!   stray `Author` / `Title` / `Abstract` labels
//! - **Heading detector**: a line rule unioned with a title-case sentence pass
//! - **Splitter**: cuts the text at heading lines
//! - **Classifier**: tags every section from its heading keywords
//!
//! Extraction never fails: a missing or unreadable file yields an empty
//! list. Use [`PdfLoader::try_load`] or [`normalize::try_normalize`] when
//! the failure itself matters.

pub mod classify;
pub mod error;
pub mod heading;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod observer;
pub mod pipeline;
pub mod render;
pub mod split;

// Re-export commonly used types
pub use classify::classify;
pub use error::{Error, Result};
pub use heading::{
    HeadingDetector, HeadingReport, HeadingSet, SentenceSegmenter, UnicodeSentenceSegmenter,
};
pub use loader::{ErrorMode, LoadOptions, LoadedText, PageSelection, PdfLoader};
pub use model::{ExtractionResult, ExtractionStats, Section, TypeHint, PREAMBLE_HEADING};
pub use normalize::{NormalizeOptions, TextNormalizer};
pub use observer::{ExtractionObserver, LogObserver, NoopObserver, Stage};
pub use pipeline::{ExtractOptions, SectionExtractor};
pub use render::{JsonFormat, MarkdownOptions};
pub use split::split_sections;

use std::path::Path;

/// Extract sections from a PDF file.
///
/// # Arguments
///
/// * `path` - Path to the PDF file
///
/// # Returns
///
/// Sections in discovery order. Empty when the file is missing, is not a
/// PDF, or contains no extractable text.
///
/// # Example
///
/// ```no_run
/// use pdfsect::extract_sections;
///
/// let sections = extract_sections("paper.pdf");
/// println!("Sections: {}", sections.len());
/// ```
pub fn extract_sections<P: AsRef<Path>>(path: P) -> Vec<Section> {
    SectionExtractor::new().extract_file(path)
}

/// Extract sections from a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfsect::{extract_sections_with_options, ExtractOptions, PageSelection};
///
/// let options = ExtractOptions::new()
///     .with_pages(PageSelection::Range(1..=10))
///     .rule_headings_only();
/// let sections = extract_sections_with_options("paper.pdf", options);
/// ```
pub fn extract_sections_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Vec<Section> {
    SectionExtractor::with_options(options).extract_file(path)
}

/// Extract sections from text that was already pulled out of a document.
///
/// # Example
///
/// ```
/// use pdfsect::{sections_from_text, TypeHint};
///
/// let sections = sections_from_text("Introduction\nThis strategy uses momentum.\n");
/// assert_eq!(sections[0].heading, "Introduction");
/// assert_eq!(sections[0].type_hint, TypeHint::Background);
/// ```
pub fn sections_from_text(raw: &str) -> Vec<Section> {
    SectionExtractor::new().extract_text(raw)
}

/// Load the raw text of a PDF file, or `""` if it cannot be read.
pub fn load_text<P: AsRef<Path>>(path: P) -> String {
    PdfLoader::new().load(path)
}

/// Extract sections from a PDF file on the blocking thread pool.
///
/// # Example
///
/// ```no_run
/// # async fn run() {
/// let sections = pdfsect::extract_sections_async("paper.pdf").await;
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn extract_sections_async<P: AsRef<Path>>(path: P) -> Vec<Section> {
    let path = path.as_ref().to_path_buf();
    match tokio::task::spawn_blocking(move || extract_sections(path)).await {
        Ok(sections) => sections,
        Err(e) => {
            log::error!("Extraction task failed: {}", e);
            Vec::new()
        }
    }
}
