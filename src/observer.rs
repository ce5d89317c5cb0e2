//! Progress observers for section extraction.
//!
//! An observer is handed to a single extraction call and receives progress
//! callbacks as the pipeline moves through its stages. It is never stored
//! globally and never influences the result.
//!
//! # Example
//!
//! ```
//! use pdfsect::observer::{ExtractionObserver, Stage};
//! use pdfsect::SectionExtractor;
//!
//! #[derive(Default)]
//! struct StageRecorder(Vec<Stage>);
//!
//! impl ExtractionObserver for StageRecorder {
//!     fn on_stage(&mut self, stage: Stage) {
//!         self.0.push(stage);
//!     }
//! }
//!
//! let extractor = SectionExtractor::new();
//! let mut recorder = StageRecorder::default();
//! extractor.run_text_observed("Introduction\nWe buy winners.", &mut recorder);
//! assert_eq!(recorder.0.first(), Some(&Stage::Normalize));
//! ```

use crate::heading::HeadingReport;
use crate::model::{ExtractionStats, Section};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Pulling text out of the PDF
    Load,
    /// Stripping boilerplate
    Normalize,
    /// Rule and sentence passes
    DetectHeadings,
    /// Splitting at headings and classifying sections
    Split,
}

impl Stage {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Load => "Loading PDF",
            Stage::Normalize => "Normalizing text",
            Stage::DetectHeadings => "Detecting headings",
            Stage::Split => "Splitting sections",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives progress callbacks from the extraction pipeline.
///
/// Every method has an empty default implementation.
pub trait ExtractionObserver: Send {
    /// A stage is about to start.
    fn on_stage(&mut self, stage: Stage) {
        let _ = stage;
    }

    /// Raw text has been loaded.
    ///
    /// # Arguments
    /// * `page_count` - Total pages in the document
    /// * `chars` - Length of the raw text in bytes
    fn on_document_loaded(&mut self, page_count: u32, chars: usize) {
        let _ = (page_count, chars);
    }

    /// Heading detection finished.
    fn on_headings(&mut self, report: &HeadingReport) {
        let _ = report;
    }

    /// A section is about to be returned.
    fn on_section(&mut self, section: &Section) {
        let _ = section;
    }

    /// A stage degraded instead of failing.
    fn on_warning(&mut self, stage: Stage, message: &str) {
        let _ = (stage, message);
    }

    /// Extraction finished.
    fn on_finished(&mut self, stats: &ExtractionStats) {
        let _ = stats;
    }
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Observer that forwards progress to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ExtractionObserver for LogObserver {
    fn on_stage(&mut self, stage: Stage) {
        log::debug!("{}...", stage);
    }

    fn on_document_loaded(&mut self, page_count: u32, chars: usize) {
        log::debug!("Loaded {} chars from {} pages", chars, page_count);
    }

    fn on_headings(&mut self, report: &HeadingReport) {
        log::debug!(
            "Detected {} rule headings and {} sentence headings",
            report.rule.len(),
            report.sentence.len()
        );
    }

    fn on_section(&mut self, section: &Section) {
        log::debug!(
            "Section {} \"{}\" ({}, {} words)",
            section.position,
            section.heading,
            section.type_hint,
            section.word_count()
        );
    }

    fn on_warning(&mut self, stage: Stage, message: &str) {
        log::warn!("{}: {}", stage, message);
    }
}

/// Observer that fans callbacks out to several observers, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn ExtractionObserver>>,
}

impl CompositeObserver {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer to the chain.
    pub fn with_observer<O: ExtractionObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Number of chained observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ExtractionObserver for CompositeObserver {
    fn on_stage(&mut self, stage: Stage) {
        for observer in &mut self.observers {
            observer.on_stage(stage);
        }
    }

    fn on_document_loaded(&mut self, page_count: u32, chars: usize) {
        for observer in &mut self.observers {
            observer.on_document_loaded(page_count, chars);
        }
    }

    fn on_headings(&mut self, report: &HeadingReport) {
        for observer in &mut self.observers {
            observer.on_headings(report);
        }
    }

    fn on_section(&mut self, section: &Section) {
        for observer in &mut self.observers {
            observer.on_section(section);
        }
    }

    fn on_warning(&mut self, stage: Stage, message: &str) {
        for observer in &mut self.observers {
            observer.on_warning(stage, message);
        }
    }

    fn on_finished(&mut self, stats: &ExtractionStats) {
        for observer in &mut self.observers {
            observer.on_finished(stats);
        }
    }
}
