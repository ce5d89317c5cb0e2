//! The extraction pipeline.
//!
//! Loader → normalizer → heading detector → splitter, with the type
//! classifier applied to every section. Each stage fails soft: it logs,
//! tells the observer, and hands the next stage its empty value. The
//! pipeline therefore always returns a well-formed, possibly empty, list.

mod options;

pub use options::ExtractOptions;

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::heading::{HeadingDetector, HeadingReport, SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::loader::{LoadedText, PdfLoader};
use crate::model::{ExtractionResult, ExtractionStats, Section};
use crate::normalize::TextNormalizer;
use crate::observer::{ExtractionObserver, NoopObserver, Stage};
use crate::split::split_detailed;

/// Turns a PDF (or its raw text) into ordered, typed sections.
///
/// The extractor holds configuration only. Every call builds its own text
/// buffers and heading set, so one extractor can serve many documents.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    options: ExtractOptions,
    segmenter: Arc<dyn SentenceSegmenter>,
    loader: PdfLoader,
    normalizer: Option<TextNormalizer>,
    detector: Option<HeadingDetector>,
}

impl SectionExtractor {
    /// Extractor with default options and the Unicode sentence segmenter.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self::assemble(options, Arc::new(UnicodeSentenceSegmenter::new()))
    }

    /// Replace the sentence segmenter used by the sentence pass.
    pub fn with_segmenter<S: SentenceSegmenter + 'static>(self, segmenter: S) -> Self {
        Self::assemble(self.options, Arc::new(segmenter))
    }

    fn assemble(options: ExtractOptions, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        let normalizer = TextNormalizer::new(options.normalize)
            .map_err(|e| log::error!("Text normalizer unavailable: {}", e))
            .ok();

        let pass = options.sentence_pass.then(|| Arc::clone(&segmenter));
        let detector = HeadingDetector::build(pass)
            .map_err(|e| log::error!("Heading detector unavailable: {}", e))
            .ok();

        Self {
            loader: PdfLoader::with_options(options.load.clone()),
            options,
            segmenter,
            normalizer,
            detector,
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Name of the configured sentence segmenter.
    pub fn segmenter_name(&self) -> &str {
        self.segmenter.name()
    }

    /// Extract sections from a PDF file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Vec<Section> {
        self.run_file_observed(path, &mut NoopObserver).sections
    }

    /// Extract sections from an in-memory PDF.
    pub fn extract_bytes(&self, data: &[u8]) -> Vec<Section> {
        self.run_bytes_observed(data, &mut NoopObserver).sections
    }

    /// Extract sections from already-loaded raw text.
    pub fn extract_text(&self, raw: &str) -> Vec<Section> {
        self.run_text_observed(raw, &mut NoopObserver).sections
    }

    /// Extract sections and statistics from a PDF file.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> ExtractionResult {
        self.run_file_observed(path, &mut NoopObserver)
    }

    /// Extract sections and statistics from raw text.
    pub fn run_text(&self, raw: &str) -> ExtractionResult {
        self.run_text_observed(raw, &mut NoopObserver)
    }

    /// Extract from a PDF file, reporting progress to `observer`.
    pub fn run_file_observed<P: AsRef<Path>>(
        &self,
        path: P,
        observer: &mut dyn ExtractionObserver,
    ) -> ExtractionResult {
        let path = path.as_ref();
        match self.try_run_file_observed(path, observer) {
            Ok(result) => result,
            Err(e) => {
                let message = format!("Failed to load {}: {}", path.display(), e);
                log::error!("{}", message);
                observer.on_warning(Stage::Load, &message);
                self.run_loaded(LoadedText::default(), observer)
            }
        }
    }

    /// Extract from a PDF file, returning load failures instead of
    /// degrading to an empty result.
    ///
    /// Only the loader can fail here; later stages still degrade softly.
    pub fn try_run_file_observed<P: AsRef<Path>>(
        &self,
        path: P,
        observer: &mut dyn ExtractionObserver,
    ) -> Result<ExtractionResult> {
        let path = path.as_ref();
        log::info!("Analyzing PDF: {}", path.display());

        observer.on_stage(Stage::Load);
        let loaded = self.loader.try_load(path)?;
        Ok(self.run_loaded(loaded, observer))
    }

    /// Extract from an in-memory PDF, reporting progress to `observer`.
    pub fn run_bytes_observed(
        &self,
        data: &[u8],
        observer: &mut dyn ExtractionObserver,
    ) -> ExtractionResult {
        log::info!("Analyzing PDF from memory ({} bytes)", data.len());

        observer.on_stage(Stage::Load);
        let loaded = self.loader.try_load_bytes(data).unwrap_or_else(|e| {
            let message = format!("Failed to load PDF: {}", e);
            log::error!("{}", message);
            observer.on_warning(Stage::Load, &message);
            LoadedText::default()
        });

        self.run_loaded(loaded, observer)
    }

    /// Extract from raw text, reporting progress to `observer`.
    pub fn run_text_observed(
        &self,
        raw: &str,
        observer: &mut dyn ExtractionObserver,
    ) -> ExtractionResult {
        self.process(raw, ExtractionStats::new(), observer)
    }

    fn run_loaded(
        &self,
        loaded: LoadedText,
        observer: &mut dyn ExtractionObserver,
    ) -> ExtractionResult {
        observer.on_document_loaded(loaded.page_count, loaded.text.len());

        let stats = ExtractionStats {
            page_count: loaded.page_count,
            pages_with_text: loaded.pages_with_text,
            ..ExtractionStats::new()
        };

        let result = self.process(&loaded.text, stats, observer);
        log::info!("Extracted {} sections.", result.sections.len());
        result
    }

    fn process(
        &self,
        raw: &str,
        mut stats: ExtractionStats,
        observer: &mut dyn ExtractionObserver,
    ) -> ExtractionResult {
        stats.raw_chars = raw.len();

        observer.on_stage(Stage::Normalize);
        let normalized = match &self.normalizer {
            Some(normalizer) => normalizer.normalize(raw),
            None => {
                observer.on_warning(Stage::Normalize, "normalizer unavailable; text dropped");
                String::new()
            }
        };
        stats.normalized_chars = normalized.len();
        log::debug!("Normalized {} -> {} chars", raw.len(), normalized.len());

        observer.on_stage(Stage::DetectHeadings);
        let report = match &self.detector {
            Some(detector) => {
                let report = detector.detect_detailed(&normalized);
                if detector.has_sentence_pass() && !report.sentence_pass_ran {
                    observer.on_warning(
                        Stage::DetectHeadings,
                        "sentence pass failed; using rule headings only",
                    );
                }
                report
            }
            None => {
                observer.on_warning(Stage::DetectHeadings, "heading detector unavailable");
                HeadingReport::default()
            }
        };
        observer.on_headings(&report);
        stats.rule_headings = report.rule.len();
        stats.sentence_headings = report.sentence.len();

        let headings = report.into_headings();
        stats.heading_count = headings.len();

        observer.on_stage(Stage::Split);
        let outcome = split_detailed(&normalized, &headings);
        for section in &outcome.sections {
            observer.on_section(section);
        }
        stats.dropped_sections = outcome.dropped;
        stats.record_sections(&outcome.sections);

        observer.on_finished(&stats);
        ExtractionResult::new(outcome.sections, stats)
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
