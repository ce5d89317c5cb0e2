//! Error types for pdfsect.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the strict (`try_*`) entry points.
///
/// The section extraction boundary itself never returns these: every stage
/// logs the error and degrades to its empty value instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version string we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A normalization or heading pattern failed to compile.
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    /// The sentence segmenter could not process the text.
    #[error("Sentence segmentation error: {0}")]
    Segmentation(String),

    /// Error while rendering sections (JSON, Markdown, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
