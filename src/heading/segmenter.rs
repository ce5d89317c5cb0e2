//! Sentence boundary detection used by the heading sentence pass.

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Splits text into sentences.
///
/// Any boundary detector can back the sentence pass as long as it exposes
/// this one operation. A failing segmenter never fails extraction: the
/// detector logs the error and falls back to rule headings.
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into sentences, in document order.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Short name used in log messages.
    fn name(&self) -> &str {
        "custom"
    }
}

impl std::fmt::Debug for dyn SentenceSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SentenceSegmenter({})", self.name())
    }
}

impl<F> SentenceSegmenter for F
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        self(text)
    }
}

/// Unicode (UAX #29) sentence boundaries.
///
/// Line feeds are paragraph separators under UAX #29, so a sentence never
/// spans two lines of normalized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &str {
        "unicode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_unicode_sentences() {
        let sentences = UnicodeSentenceSegmenter::new()
            .segment("We buy winners. We sell losers! Does it work?")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["We buy winners.", "We sell losers!", "Does it work?"]
        );
    }

    #[test]
    fn test_line_breaks_split_sentences() {
        let sentences = UnicodeSentenceSegmenter::new()
            .segment("Moving Average Crossover\nWe compute averages.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["Moving Average Crossover", "We compute averages."]
        );
    }

    #[test]
    fn test_closure_segmenter() {
        let by_line = |text: &str| -> Result<Vec<String>> {
            Ok(text.lines().map(str::to_string).collect())
        };
        assert_eq!(by_line.segment("a\nb").unwrap(), vec!["a", "b"]);
        assert_eq!(by_line.name(), "custom");

        let failing = |_: &str| -> Result<Vec<String>> { Err(Error::Segmentation("down".into())) };
        assert!(failing.segment("text").is_err());
    }
}
