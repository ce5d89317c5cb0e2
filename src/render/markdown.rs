//! Markdown rendering for extracted sections.

use crate::model::Section;

/// Markdown rendering options.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Heading level for section headings (1-6)
    pub heading_level: u8,

    /// Emit an HTML comment with the type hint under each heading
    pub type_hint_comments: bool,
}

impl MarkdownOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading level, clamped to 1-6.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable type hint comments.
    pub fn with_type_hints(mut self, enabled: bool) -> Self {
        self.type_hint_comments = enabled;
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_level: 2,
            type_hint_comments: true,
        }
    }
}

/// Render sections as Markdown.
pub fn to_markdown(sections: &[Section], options: &MarkdownOptions) -> String {
    let marker = "#".repeat(options.heading_level.clamp(1, 6) as usize);
    let mut output = String::new();

    for section in sections {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{} {}\n", marker, section.heading));
        if options.type_hint_comments {
            output.push_str(&format!("<!-- type: {} -->\n", section.type_hint));
        }
        output.push('\n');
        output.push_str(&section.text);
        output.push('\n');
    }

    output
}
