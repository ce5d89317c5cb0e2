//! Extraction options.

use crate::loader::{ErrorMode, LoadOptions, PageSelection};
use crate::normalize::NormalizeOptions;

/// Options for the whole extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// PDF loading
    pub load: LoadOptions,

    /// Text normalization
    pub normalize: NormalizeOptions,

    /// Run the sentence pass of heading detection
    pub sentence_pass: bool,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.load.pages = pages;
        self
    }

    /// Set the per-page error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.load.error_mode = mode;
        self
    }

    /// Set load options.
    pub fn with_load(mut self, load: LoadOptions) -> Self {
        self.load = load;
        self
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    /// Enable or disable the sentence pass.
    pub fn with_sentence_pass(mut self, enabled: bool) -> Self {
        self.sentence_pass = enabled;
        self
    }

    /// Detect headings with the rule pass only.
    pub fn rule_headings_only(mut self) -> Self {
        self.sentence_pass = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            normalize: NormalizeOptions::default(),
            sentence_pass: true,
        }
    }
}
