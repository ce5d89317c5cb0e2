//! PDF text loading.
//!
//! The loader pulls the text out of every selected page, in page order,
//! and joins the pages with a newline. Pages without extractable text
//! (scanned images, blank pages) contribute nothing.

mod header;
mod options;

pub use header::{sniff_bytes, sniff_path, PdfVersion};
pub use options::{ErrorMode, LoadOptions, PageSelection};

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

/// Text pulled out of a PDF, with page accounting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedText {
    /// Page texts joined with `\n`
    pub text: String,

    /// Total pages in the document
    pub page_count: u32,

    /// Selected pages that produced any text
    pub pages_with_text: u32,
}

impl LoadedText {
    /// Whether no page produced text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// PDF text loader backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct PdfLoader {
    options: LoadOptions,
}

impl PdfLoader {
    /// Create a loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom options.
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load the text of a PDF file, degrading to an empty string on failure.
    ///
    /// Missing, unreadable and corrupt files are logged and yield `""`, so
    /// callers simply end up with zero sections.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> String {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(loaded) => loaded.text,
            Err(e) => {
                log::error!("Failed to load PDF {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Load the text of an in-memory PDF, degrading to an empty string on failure.
    pub fn load_bytes(&self, data: &[u8]) -> String {
        match self.try_load_bytes(data) {
            Ok(loaded) => loaded.text,
            Err(e) => {
                log::error!("Failed to load PDF from memory: {}", e);
                String::new()
            }
        }
    }

    /// Load the text of a PDF file, reporting failures.
    pub fn try_load<P: AsRef<Path>>(&self, path: P) -> Result<LoadedText> {
        let path = path.as_ref();
        let version = sniff_path(path)?;
        log::debug!("Loading {} ({})", path.display(), version);

        let mut doc = LopdfDocument::load(path)?;
        self.extract(&mut doc)
    }

    /// Load the text of an in-memory PDF, reporting failures.
    pub fn try_load_bytes(&self, data: &[u8]) -> Result<LoadedText> {
        sniff_bytes(data)?;
        let mut doc = LopdfDocument::load_mem(data)?;
        self.extract(&mut doc)
    }

    fn extract(&self, doc: &mut LopdfDocument) -> Result<LoadedText> {
        unlock(doc)?;

        let pages = doc.get_pages();
        let page_count = pages.len() as u32;

        if let PageSelection::Range(range) = &self.options.pages {
            if *range.start() > page_count {
                return Err(Error::PageOutOfRange(*range.start(), page_count));
            }
        }

        let mut loaded = LoadedText {
            page_count,
            ..LoadedText::default()
        };

        for &page_num in pages.keys() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            let page_text = match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(Error::TextExtract(format!("Page {}: {}", page_num, e)));
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    continue;
                }
            };

            if page_text.trim().is_empty() {
                log::debug!("Page {} has no extractable text", page_num);
                continue;
            }

            loaded.text.push_str(&page_text);
            loaded.text.push('\n');
            loaded.pages_with_text += 1;
        }

        log::debug!(
            "Loaded {} chars from {}/{} pages",
            loaded.text.len(),
            loaded.pages_with_text,
            page_count
        );

        Ok(loaded)
    }
}

/// Decrypt a document protected only by an owner password.
///
/// Such documents have an empty user password and open without prompting
/// in any viewer. Anything else is reported as encrypted.
fn unlock(doc: &mut LopdfDocument) -> Result<()> {
    if !doc.is_encrypted() {
        return Ok(());
    }

    match doc.decrypt("") {
        Ok(()) => {
            log::debug!("Decrypted document with the empty user password");
            Ok(())
        }
        Err(e) => {
            log::debug!("Cannot decrypt document: {}", e);
            Err(Error::Encrypted)
        }
    }
}
