//! Heading detection.
//!
//! Two independent passes over normalized text produce heading
//! candidates:
//!
//! - the **rule pass** matches short capitalized lines, optionally
//!   prefixed by an outline number (`2.`, `3.1`, `4.2.`);
//! - the **sentence pass** segments the text into sentences and keeps
//!   short title-case ones.
//!
//! The union is a set keyed by heading text. Both passes are heuristics;
//! body lines that happen to look like titles become headings too.

mod segmenter;

pub use segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};

use std::collections::BTreeSet;
use std::sync::Arc;

use regex::Regex;

use crate::error::Result;

/// Distinct heading strings. Identity is the text itself.
pub type HeadingSet = BTreeSet<String>;

/// Optional outline number, then a capital and at least three more
/// letters, spaces or hyphens.
const HEADING_RULE_PATTERN: &str = r"^(?:\d{1,2}(?:\.\d{1,2})?\.?\s*)?[A-Z][A-Za-z\s\-]{3,}$";

/// Word-count bounds for a sentence to pass as a title.
const MIN_TITLE_WORDS: usize = 2;
const MAX_TITLE_WORDS: usize = 10;

/// Headings found by each pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingReport {
    /// Lines matched by the rule pass
    pub rule: HeadingSet,

    /// Sentences accepted by the sentence pass
    pub sentence: HeadingSet,

    /// Whether the sentence pass ran to completion
    pub sentence_pass_ran: bool,
}

impl HeadingReport {
    /// Union of both passes.
    pub fn headings(&self) -> HeadingSet {
        self.rule.union(&self.sentence).cloned().collect()
    }

    /// Consume the report, returning the union of both passes.
    pub fn into_headings(self) -> HeadingSet {
        let mut headings = self.rule;
        headings.extend(self.sentence);
        headings
    }
}

/// Rule pass plus optional sentence pass.
#[derive(Clone)]
pub struct HeadingDetector {
    rule: Regex,
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
}

impl HeadingDetector {
    /// Detector with the default Unicode sentence segmenter.
    pub fn new() -> Result<Self> {
        Self::with_segmenter(UnicodeSentenceSegmenter::new())
    }

    /// Detector with a custom sentence segmenter.
    pub fn with_segmenter<S: SentenceSegmenter + 'static>(segmenter: S) -> Result<Self> {
        Self::build(Some(Arc::new(segmenter)))
    }

    /// Detector with a shared sentence segmenter, or none at all.
    pub fn build(segmenter: Option<Arc<dyn SentenceSegmenter>>) -> Result<Self> {
        Ok(Self {
            rule: Regex::new(HEADING_RULE_PATTERN)?,
            segmenter,
        })
    }

    /// Detector that only runs the rule pass.
    pub fn rule_only() -> Result<Self> {
        Self::build(None)
    }

    /// Whether a sentence segmenter is configured.
    pub fn has_sentence_pass(&self) -> bool {
        self.segmenter.is_some()
    }

    /// Detect the heading set of `text`.
    pub fn detect(&self, text: &str) -> HeadingSet {
        self.detect_detailed(text).into_headings()
    }

    /// Detect headings, keeping each pass's contribution apart.
    pub fn detect_detailed(&self, text: &str) -> HeadingReport {
        let mut report = HeadingReport {
            rule: self.rule_pass(text),
            ..HeadingReport::default()
        };

        let Some(segmenter) = &self.segmenter else {
            log::debug!("Sentence pass disabled; using rule headings only");
            return report;
        };

        match segmenter.segment(text) {
            Ok(sentences) => {
                report.sentence = sentences
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| is_title_sentence(s))
                    .map(str::to_string)
                    .collect();
                report.sentence_pass_ran = true;
            }
            Err(e) => {
                log::warn!(
                    "Sentence pass ({}) failed, using rule headings only: {}",
                    segmenter.name(),
                    e
                );
            }
        }

        report
    }

    fn rule_pass(&self, text: &str) -> HeadingSet {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && self.rule.is_match(line))
            .map(str::to_string)
            .collect()
    }
}

impl std::fmt::Debug for HeadingDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadingDetector")
            .field("rule", &self.rule.as_str())
            .field("segmenter", &self.segmenter.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// Short sentence whose every word starts with an uppercase letter.
pub fn is_title_sentence(sentence: &str) -> bool {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    (MIN_TITLE_WORDS..=MAX_TITLE_WORDS).contains(&words.len())
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}
