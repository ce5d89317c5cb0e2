//! Extraction result with statistics.

use serde::{Deserialize, Serialize};

use super::Section;

/// Result of one extraction run: the sections plus what happened on the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Sections in discovery order
    pub sections: Vec<Section>,

    /// Statistics collected by the pipeline
    pub stats: ExtractionStats,
}

impl ExtractionResult {
    /// Create a result from sections and statistics.
    pub fn new(sections: Vec<Section>, stats: ExtractionStats) -> Self {
        Self { sections, stats }
    }

    /// Whether extraction yielded nothing.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Consume the result, keeping only the sections.
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

/// Statistics collected during section extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages in the source document
    pub page_count: u32,

    /// Pages that produced any text
    pub pages_with_text: u32,

    /// Characters of raw extracted text
    pub raw_chars: usize,

    /// Characters left after normalization
    pub normalized_chars: usize,

    /// Distinct headings in the heading set
    pub heading_count: usize,

    /// Headings contributed by the rule pass
    pub rule_headings: usize,

    /// Headings contributed by the sentence pass
    pub sentence_headings: usize,

    /// Sections emitted
    pub section_count: usize,

    /// Sections dropped because their body was empty
    pub dropped_sections: usize,

    /// Whitespace-separated words across all emitted sections
    pub word_count: usize,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the emitted sections.
    pub fn record_sections(&mut self, sections: &[Section]) {
        self.section_count = sections.len();
        self.word_count = sections.iter().map(Section::word_count).sum();
    }
}
