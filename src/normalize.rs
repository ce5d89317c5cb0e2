//! Text normalization ahead of heading detection.
//!
//! Raw PDF text carries URLs, distributor watermarks, page numbers and
//! stray structural labels. The normalizer strips those and collapses
//! blank lines so that each remaining line is either a heading candidate
//! or body text.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Watermark some academic distributors stamp on every page.
pub const BOILERPLATE_MARKER: &str = "Electronic copy available at:";

const URL_PATTERN: &str = r"https?://\S+";
const BOILERPLATE_PATTERN: &str = r"(?i)electronic copy available at:.*";
// `[^\S\n]` is any whitespace but the line break, NBSP included.
const PAGE_NUMBER_PATTERN: &str = r"(?mi)^[^\S\n]*(?:page[^\S\n]+)?[-–—]?[^\S\n]*\d+(?:[^\S\n]+of[^\S\n]+\d+)?[^\S\n]*[-–—]?[^\S\n]*$";
const MULTI_NEWLINE_PATTERN: &str = r"\n{2,}";
const LABEL_PATTERN: &str = r"(?mi)^[^\S\n]*(?:author|title|abstract)[^\S\n]*$";

const LIGATURES: &[(&str, &str)] = &[
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "st"),
    ("\u{FB06}", "st"),
];

/// Options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form before the rewrites
    pub normalize_unicode: bool,

    /// Expand typographic ligatures (ﬁ, ﬂ, ...) before the rewrites
    pub fix_ligatures: bool,
}

impl NormalizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the boilerplate rewrites, no Unicode pre-pass.
    pub fn rewrites_only() -> Self {
        Self {
            normalize_unicode: false,
            fix_ligatures: false,
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable ligature expansion.
    pub fn with_ligatures(mut self, enabled: bool) -> Self {
        self.fix_ligatures = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
        }
    }
}

/// Compiled normalization rewrites.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    options: NormalizeOptions,
    url: Regex,
    boilerplate: Regex,
    page_number: Regex,
    multi_newline: Regex,
    label: Regex,
}

impl TextNormalizer {
    /// Compile the normalizer.
    pub fn new(options: NormalizeOptions) -> Result<Self> {
        Ok(Self {
            options,
            url: Regex::new(URL_PATTERN)?,
            boilerplate: Regex::new(BOILERPLATE_PATTERN)?,
            page_number: Regex::new(PAGE_NUMBER_PATTERN)?,
            multi_newline: Regex::new(MULTI_NEWLINE_PATTERN)?,
            label: Regex::new(LABEL_PATTERN)?,
        })
    }

    /// Options in effect.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize `text`.
    ///
    /// Rewrites run in a fixed order: URLs, distributor boilerplate, bare
    /// page-number lines, blank-line collapse, then the `Author` / `Title` /
    /// `Abstract` label lines. The result is trimmed and never contains two
    /// consecutive newlines.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = self.prepare(text);

        result = self.url.replace_all(&result, "").into_owned();
        result = self.boilerplate.replace_all(&result, "").into_owned();
        result = self.page_number.replace_all(&result, "").into_owned();
        result = self.multi_newline.replace_all(&result, "\n").into_owned();
        result = self.label.replace_all(&result, "").into_owned();

        // Label removal leaves empty lines behind.
        result = self.multi_newline.replace_all(&result, "\n").into_owned();

        result.trim().to_string()
    }

    fn prepare(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                if result.contains(ligature) {
                    result = result.replace(ligature, replacement);
                }
            }
        }

        result
    }
}

/// Normalize `text`, reporting pattern failures.
pub fn try_normalize(text: &str, options: NormalizeOptions) -> Result<String> {
    Ok(TextNormalizer::new(options)?.normalize(text))
}

/// Normalize `text`, degrading to an empty string if the normalizer
/// cannot be built.
pub fn normalize(text: &str, options: NormalizeOptions) -> String {
    match try_normalize(text, options) {
        Ok(normalized) => normalized,
        Err(e) => {
            log::error!("Text normalization failed: {}", e);
            String::new()
        }
    }
}
