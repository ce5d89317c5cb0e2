//! JSON rendering.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize sections (or a whole extraction result) to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtractionResult, ExtractionStats, Section};

    fn sample() -> Vec<Section> {
        let mut section = Section::new("Results", 1);
        section.push_line("Annualized return of 12%.");
        vec![section.finish()]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(sample().as_slice(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"heading\": \"Results\""));
        assert!(json.contains("\"type_hint\": \"findings\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let parsed: Vec<Section> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_to_json_result_with_stats() {
        let result = ExtractionResult::new(sample(), ExtractionStats::new());
        let json = to_json(&result, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"stats\""));
        assert!(json.contains("\"section_count\""));
    }
}
