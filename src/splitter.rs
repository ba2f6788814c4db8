//! Main splitting service that ties all components together.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::assemble::{assemble_outputs, OutputDoc};
use crate::classify::classify_body;
use crate::error::{Result, SplitterError};
use crate::header::extract_prologue;
use crate::plan::SplitPlan;

/// Result of splitting one source document.
#[derive(Debug)]
pub struct SplitOutcome {
    /// Proposed outputs: the rewritten primary document first, then one
    /// document per non-empty bucket.
    pub outputs: Vec<OutputDoc>,

    /// Number of bucket documents (primary excluded).
    pub bucket_count: usize,
}

/// Split an in-memory document.
///
/// Pure apart from logging: reads nothing and writes nothing, so the whole
/// transformation can be tested without a file system.
///
/// # Arguments
/// * `input` - Path the document was (or would be) read from; determines output paths
/// * `lines` - Document content as lines
/// * `plan` - Routing tables for this document
#[must_use]
pub fn split_lines(input: &Path, lines: &[String], plan: &SplitPlan) -> SplitOutcome {
    let prologue = extract_prologue(lines, &plan.class_signature);

    // Line-number overrides predate the header scan; one that reaches into
    // the prologue will silently claim nothing there.
    for range in &plan.overrides {
        if range.start < prologue.body_start {
            tracing::warn!(
                bucket = %range.bucket,
                start = range.start,
                body_start = prologue.body_start,
                "Override range starts inside the prologue, those lines are never classified"
            );
        }
    }

    let classification = classify_body(lines, prologue.body_start, plan);
    let bucket_count = classification.buckets.len();
    let outputs = assemble_outputs(input, &prologue, &classification);

    SplitOutcome {
        outputs,
        bucket_count,
    }
}

/// Read, decode, and split a source document.
///
/// The file is read once, strictly decoded as UTF-8, and split in memory.
/// Nothing is written; pass the outcome to [`persist`] to materialize it.
///
/// # Errors
/// * `Io` when the file cannot be read
/// * `Decode` when the content is not valid UTF-8
pub fn split_source(path: &Path, plan: &SplitPlan) -> Result<SplitOutcome> {
    plan.validate()?;

    let raw = fs::read(path)?;
    let text = String::from_utf8(raw).map_err(|source| SplitterError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    Ok(split_lines(path, &lines, plan))
}

/// Persist proposed outputs.
///
/// All contents are fully assembled before this is called, so a failure
/// can only leave already-written files behind, never a torn one: each
/// document is written to a temp file, synced, and renamed into place.
/// The first failure aborts the remaining writes.
pub fn persist(outputs: &[OutputDoc]) -> Result<()> {
    for doc in outputs {
        let file_name = doc
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = doc.path.with_file_name(format!(".{file_name}.tmp"));

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(doc.content.as_bytes())?;
            file.sync_all()?;
        }

        // On Windows, rename fails if the destination already exists
        #[cfg(target_os = "windows")]
        if doc.path.exists() {
            fs::remove_file(&doc.path)?;
        }

        fs::rename(&temp_path, &doc.path)?;
    }

    Ok(())
}
