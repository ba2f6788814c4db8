//! Header prologue extraction and declaration rewriting.
//!
//! The prologue is everything before the primary type declaration. Lines
//! that look like using directives, namespace declarations, or doc comments
//! are collected into a reusable header block that every bucket output
//! shares; the declaration itself is rewritten as `partial` so the outputs
//! compile together.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PROLOGUE_PREFIXES;

/// First type keyword on a declaration line. `partial` is inserted in
/// front of it.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TYPE_KEYWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(class|interface|struct|record)\b").expect("valid regex"));

/// Result of scanning the document prologue.
#[derive(Debug, Clone)]
pub struct Prologue {
    /// Header block duplicated into every bucket output: prologue marker
    /// lines, the rewritten declaration, and an opening brace line.
    pub header: Vec<String>,

    /// Prologue lines retained for the primary output, in original order,
    /// with the declaration rewritten. Non-marker lines (blanks, comments)
    /// stay here even though they are not part of the header block.
    pub retained: Vec<String>,

    /// Absolute index of the first body line. Equal to the document length
    /// when no declaration was found.
    pub body_start: usize,
}

/// Rewrite a type declaration as `partial`.
///
/// Inserts `partial ` before the first type keyword, unless the line is
/// already a partial declaration.
#[must_use]
pub fn make_partial(declaration: &str) -> String {
    if declaration.contains("partial ") {
        return declaration.to_string();
    }
    TYPE_KEYWORD_PATTERN
        .replace(declaration, "partial $1")
        .into_owned()
}

/// Scan the document prologue up to the primary type declaration.
///
/// A line belongs to the header when it starts (after leading whitespace)
/// with one of the recognized prologue prefixes. Scanning stops at the
/// first line containing `class_signature`; that line is rewritten with
/// [`make_partial`] and lands in both the retained prologue and the header
/// block, followed by an explicit opening brace line.
///
/// When no line matches the signature the scan falls through to the end:
/// the whole document is retained, the body is empty, and every bucket
/// stays empty. That degenerate outcome is deliberate and only logged.
#[must_use]
pub fn extract_prologue(lines: &[String], class_signature: &str) -> Prologue {
    let mut header: Vec<String> = Vec::new();
    let mut retained: Vec<String> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(class_signature) {
            let declaration = make_partial(line);
            retained.push(declaration.clone());
            header.push(declaration);
            header.push("{".to_string());
            return Prologue {
                header,
                retained,
                body_start: i + 1,
            };
        }

        retained.push(line.clone());
        let trimmed = line.trim_start();
        if PROLOGUE_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            header.push(line.clone());
        }
    }

    tracing::warn!(
        signature = %class_signature,
        "No declaration line found, document is retained unsplit"
    );
    Prologue {
        header,
        retained,
        body_start: lines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_make_partial_class() {
        assert_eq!(
            make_partial("public class McpService : IMcpService"),
            "public partial class McpService : IMcpService"
        );
    }

    #[test]
    fn test_make_partial_interface_and_struct() {
        assert_eq!(
            make_partial("internal interface IThing"),
            "internal partial interface IThing"
        );
        assert_eq!(make_partial("public struct Point"), "public partial struct Point");
    }

    #[test]
    fn test_make_partial_already_partial() {
        let decl = "public partial class McpService";
        assert_eq!(make_partial(decl), decl);
    }

    #[test]
    fn test_make_partial_keyword_inside_identifier_untouched() {
        // "classify" must not be treated as the class keyword
        assert_eq!(
            make_partial("public classify class Foo"),
            "public classify partial class Foo"
        );
    }

    #[test]
    fn test_extract_prologue_collects_markers_and_rewrites() {
        let doc = lines(&[
            "using System;",
            "",
            "namespace Platform.Services;",
            "",
            "/// <summary>Service</summary>",
            "public class McpService : IMcpService",
            "{",
            "    private int _count;",
        ]);
        let prologue = extract_prologue(&doc, "public class McpService");

        assert_eq!(
            prologue.header,
            lines(&[
                "using System;",
                "namespace Platform.Services;",
                "/// <summary>Service</summary>",
                "public partial class McpService : IMcpService",
                "{",
            ])
        );
        // Retained prologue keeps the blank lines the header drops
        assert_eq!(
            prologue.retained,
            lines(&[
                "using System;",
                "",
                "namespace Platform.Services;",
                "",
                "/// <summary>Service</summary>",
                "public partial class McpService : IMcpService",
            ])
        );
        assert_eq!(prologue.body_start, 6);
    }

    #[test]
    fn test_extract_prologue_stops_at_first_signature_match() {
        let doc = lines(&[
            "using A;",
            "public class X : I",
            "public class X : I", // body line, not scanned
        ]);
        let prologue = extract_prologue(&doc, "public class X");
        assert_eq!(prologue.body_start, 2);
        assert_eq!(prologue.retained.len(), 2);
    }

    #[test]
    fn test_extract_prologue_no_declaration_is_degenerate() {
        // Policy choice: a document without the declaration signature is a
        // silent degenerate success, not an error.
        let doc = lines(&["using A;", "int x;"]);
        let prologue = extract_prologue(&doc, "public class Missing");

        assert_eq!(prologue.body_start, 2);
        assert_eq!(prologue.retained, doc);
        assert_eq!(prologue.header, lines(&["using A;"]));
    }

    #[test]
    fn test_extract_prologue_indented_doc_comment() {
        let doc = lines(&["    /// docs", "public class X"]);
        let prologue = extract_prologue(&doc, "public class X");
        assert_eq!(prologue.header[0], "    /// docs");
    }
}
