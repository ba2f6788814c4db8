//! Marker constants and validation functions for the splitter.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SplitterError};

/// Marker opening a named region (C# `#region Label`).
pub const REGION_OPEN_MARKER: &str = "#region";

/// Marker closing the currently open region.
pub const REGION_CLOSE_MARKER: &str = "#endregion";

/// Token that closes a type body. A bucket output whose last non-blank
/// line is not this token gets one appended.
pub const BLOCK_CLOSE: &str = "}";

/// Line prefixes that mark a line as part of the header prologue:
/// using directives, namespace declarations, and doc comments.
pub const PROLOGUE_PREFIXES: &[&str] = &["using ", "namespace ", "///"];

/// Bucket name pattern: a C-style identifier, since the name becomes part
/// of the output file name and the partial file is expected to compile.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BUCKET_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Validate a bucket name.
///
/// # Arguments
/// * `name` - The bucket name to validate
///
/// # Returns
/// * `Ok(())` if the name is a valid identifier
/// * `Err(SplitterError::InvalidBucketName)` otherwise
///
/// # Examples
/// ```
/// use partial_splitter::config::validate_bucket_name;
///
/// assert!(validate_bucket_name("Devices").is_ok());
/// assert!(validate_bucket_name("bad name").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> Result<()> {
    if BUCKET_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SplitterError::InvalidBucketName(name.to_string()))
    }
}

/// Build the output path for a bucket document.
///
/// Follows the partial-class file convention: `McpService.cs` with bucket
/// `Devices` becomes `McpService.Devices.cs`, next to the input.
///
/// # Arguments
/// * `input` - Path to the primary source document
/// * `bucket` - Bucket name (should be validated with `validate_bucket_name` first)
#[must_use]
pub fn bucket_output_path(input: &Path, bucket: &str) -> PathBuf {
    debug_assert!(
        BUCKET_NAME_PATTERN.is_match(bucket),
        "bucket should be validated before calling bucket_output_path"
    );
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}.{bucket}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{bucket}"),
    };
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bucket_name_valid() {
        assert!(validate_bucket_name("Devices").is_ok());
        assert!(validate_bucket_name("IoT").is_ok());
        assert!(validate_bucket_name("_private").is_ok());
        assert!(validate_bucket_name("Bucket1").is_ok());
    }

    #[test]
    fn test_validate_bucket_name_invalid() {
        assert!(validate_bucket_name("").is_err());
        assert!(validate_bucket_name("bad name").is_err());
        assert!(validate_bucket_name("1starts-with-digit").is_err());
        assert!(validate_bucket_name("dot.ted").is_err()); // Would mangle the file name
        assert!(validate_bucket_name("slash/y").is_err());
    }

    #[test]
    fn test_bucket_output_path() {
        let path = bucket_output_path(Path::new("services/McpService.cs"), "Devices");
        assert_eq!(path, Path::new("services/McpService.Devices.cs"));
    }

    #[test]
    fn test_bucket_output_path_no_parent() {
        let path = bucket_output_path(Path::new("McpService.cs"), "Tools");
        assert_eq!(path, Path::new("McpService.Tools.cs"));
    }

    #[test]
    fn test_bucket_output_path_no_extension() {
        let path = bucket_output_path(Path::new("dir/Service"), "Tools");
        assert_eq!(path, Path::new("dir/Service.Tools"));
    }
}
