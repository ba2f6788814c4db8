//! Error types for the splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Invalid bucket name.
    #[error("Invalid bucket name: '{0}'. Expected an identifier (e.g., Devices)")]
    InvalidBucketName(String),

    /// Override range with start after end.
    #[error("Invalid override range {start}..={end} for bucket '{bucket}': start is after end")]
    InvalidOverrideRange {
        start: usize,
        end: usize,
        bucket: String,
    },

    /// Two override ranges claim the same line.
    #[error("Overlapping override ranges: {first_bucket} ({first_start}..={first_end}) and {second_bucket} ({second_start}..={second_end})")]
    OverlappingOverrides {
        first_bucket: String,
        first_start: usize,
        first_end: usize,
        second_bucket: String,
        second_start: usize,
        second_end: usize,
    },

    /// Region rule with an empty label.
    #[error("Region rule for bucket '{0}' has an empty label")]
    EmptyRegionLabel(String),

    /// Source file is not valid UTF-8.
    #[error("Failed to decode {path} as UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Plan file parsing failed.
    #[error("Failed to parse split plan: {0}")]
    PlanParse(#[from] serde_yaml_ng::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bucket_name_display() {
        let err = SplitterError::InvalidBucketName("bad name".to_string());
        assert!(err.to_string().contains("bad name"));
        assert!(err.to_string().contains("identifier"));
    }

    #[test]
    fn test_overlapping_overrides_display() {
        let err = SplitterError::OverlappingOverrides {
            first_bucket: "Tools".to_string(),
            first_start: 10,
            first_end: 20,
            second_bucket: "Docs".to_string(),
            second_start: 15,
            second_end: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("Tools (10..=20)"));
        assert!(msg.contains("Docs (15..=30)"));
    }

    #[test]
    fn test_invalid_override_range_display() {
        let err = SplitterError::InvalidOverrideRange {
            start: 20,
            end: 10,
            bucket: "Tools".to_string(),
        };
        assert!(err.to_string().contains("20..=10"));
        assert!(err.to_string().contains("start is after end"));
    }
}
