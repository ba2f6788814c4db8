//! Output assembly: header injection, brace repair, blank-line collapse.
//!
//! Assembly returns proposed output documents instead of touching the file
//! system, so callers (and tests) decide whether to persist.

use std::path::{Path, PathBuf};

use crate::classify::Classification;
use crate::config::{bucket_output_path, BLOCK_CLOSE};
use crate::header::Prologue;

/// One proposed output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDoc {
    /// Destination path. Pre-existing files are overwritten on persist.
    pub path: PathBuf,

    /// Full file content, trailing newline included.
    pub content: String,
}

/// Collapse runs of two or more blank lines into a single blank line.
///
/// A line is blank when it is empty after trimming. Idempotent: applying
/// the collapse twice yields the same result as applying it once.
#[must_use]
pub fn collapse_blank_lines(lines: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut previous_blank = false;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        result.push(line.clone());
        previous_blank = blank;
    }

    result
}

/// Join lines into file content with a trailing newline.
fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Assemble the rewritten primary document and one document per non-empty
/// bucket.
///
/// The primary document is the retained prologue plus unclaimed body lines,
/// with blank runs collapsed, at the input path. Each bucket document is
/// the shared header block plus the bucket's lines verbatim; a closing
/// brace line is appended when the last line (trimmed) is not already one.
#[must_use]
pub fn assemble_outputs(
    input: &Path,
    prologue: &Prologue,
    classification: &Classification,
) -> Vec<OutputDoc> {
    let mut outputs = Vec::with_capacity(classification.buckets.len() + 1);

    let mut main_lines = prologue.retained.clone();
    main_lines.extend(classification.main.iter().cloned());
    outputs.push(OutputDoc {
        path: input.to_path_buf(),
        content: render(&collapse_blank_lines(&main_lines)),
    });

    for (bucket, lines) in &classification.buckets {
        if lines.is_empty() {
            continue;
        }
        let mut doc_lines = prologue.header.clone();
        doc_lines.extend(lines.iter().cloned());
        let has_close = doc_lines
            .last()
            .is_some_and(|last| last.trim() == BLOCK_CLOSE);
        if !has_close {
            doc_lines.push(BLOCK_CLOSE.to_string());
        }
        outputs.push(OutputDoc {
            path: bucket_output_path(input, bucket),
            content: render(&doc_lines),
        });
    }

    outputs
}
