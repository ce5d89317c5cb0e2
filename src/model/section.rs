//! Section records handed to the summarization step.

use serde::{Deserialize, Serialize};

use crate::classify::classify;

/// Heading given to text that precedes the first detected heading.
pub const PREAMBLE_HEADING: &str = "Preamble";

/// Coarse semantic category of a section, derived from its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeHint {
    /// Introductory material
    Background,
    /// Methods and approach
    Methodology,
    /// Results
    Findings,
    /// Discussion
    Interpretation,
    /// Conclusions
    Summary,
    /// Anything else
    #[default]
    General,
}

impl TypeHint {
    /// Derive the type hint for a heading.
    pub fn classify(heading: &str) -> Self {
        classify(heading)
    }

    /// The lowercase label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeHint::Background => "background",
            TypeHint::Methodology => "methodology",
            TypeHint::Findings => "findings",
            TypeHint::Interpretation => "interpretation",
            TypeHint::Summary => "summary",
            TypeHint::General => "general",
        }
    }
}

impl std::fmt::Display for TypeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous span of document text attributed to one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text, verbatim from the document (or `"Preamble"`)
    pub heading: String,

    /// Discovery order: 0 for the preamble, 1.. for real headings
    pub position: u32,

    /// Body text
    pub text: String,

    /// Category derived from the heading
    pub type_hint: TypeHint,
}

impl Section {
    /// Create an empty section; the type hint is derived from the heading.
    pub fn new(heading: impl Into<String>, position: u32) -> Self {
        let heading = heading.into();
        let type_hint = classify(&heading);
        Self {
            heading,
            position,
            text: String::new(),
            type_hint,
        }
    }

    /// Create the leading section that collects text before any heading.
    pub fn preamble() -> Self {
        Self::new(PREAMBLE_HEADING, 0)
    }

    /// Whether this is the preamble section.
    pub fn is_preamble(&self) -> bool {
        self.position == 0
    }

    /// Append one body line followed by a single space separator.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push(' ');
    }

    /// Whether the body is empty once trimmed.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Trim trailing separators off the accumulated body.
    pub fn finish(mut self) -> Self {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
        self
    }

    /// Approximate word count of the body.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
