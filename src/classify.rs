//! Single-pass line classifier and region tracker.
//!
//! Walks the document body in order and assigns every line to exactly one
//! destination: a named bucket or the main remainder. Overrides are checked
//! first and short-circuit marker evaluation, so region markers inside an
//! override window are consumed as plain content and never toggle region
//! state.

use std::collections::BTreeMap;

use crate::config::{REGION_CLOSE_MARKER, REGION_OPEN_MARKER};
use crate::plan::SplitPlan;

/// Tracks the currently open region, a single slot.
///
/// Opening a region while one is open replaces the slot; nested regions
/// cannot be represented and the input is assumed non-nesting.
#[derive(Debug, Default)]
pub struct RegionTracker {
    open: Option<String>,
}

impl RegionTracker {
    /// Create a tracker with no open region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket of the currently open region, if any.
    #[must_use]
    pub fn open_bucket(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Open a region for the given bucket.
    pub fn open(&mut self, bucket: &str) {
        if let Some(previous) = &self.open {
            tracing::warn!(
                previous = %previous,
                bucket = %bucket,
                "Region opened while another is open, single-slot state cannot nest"
            );
        }
        self.open = Some(bucket.to_string());
    }

    /// Close the open region, returning its bucket.
    pub fn close(&mut self) -> Option<String> {
        self.open.take()
    }
}

/// Per-destination line buffers produced by classification.
#[derive(Debug, Default)]
pub struct Classification {
    /// Bucket line buffers, created lazily on first routed line.
    /// `BTreeMap` keeps output order deterministic.
    pub buckets: BTreeMap<String, Vec<String>>,

    /// Body lines not claimed by any override or open region.
    pub main: Vec<String>,
}

impl Classification {
    fn push_bucket(&mut self, bucket: &str, line: &str) {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .push(line.to_string());
    }

    /// Total number of classified lines, across main and all buckets.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.main.len() + self.buckets.values().map(Vec::len).sum::<usize>()
    }
}

/// Extract the label text following a region-open marker, if the line is one.
fn region_open_label(line: &str) -> Option<&str> {
    line.trim().strip_prefix(REGION_OPEN_MARKER).map(str::trim)
}

/// Check whether the line is a region-close marker.
fn is_region_close(line: &str) -> bool {
    line.trim().starts_with(REGION_CLOSE_MARKER)
}

/// Classify the document body, one pass, in order.
///
/// `lines` is the whole document; classification starts at `body_start`.
/// Override intervals in the plan are absolute line indices over the whole
/// document, so indexing stays stable regardless of prologue length.
///
/// The result is a pure function of `(lines, body_start, plan)`: no I/O,
/// no randomness, every body line assigned exactly once.
#[must_use]
pub fn classify_body(lines: &[String], body_start: usize, plan: &SplitPlan) -> Classification {
    let mut result = Classification::default();
    let mut tracker = RegionTracker::new();

    for (i, line) in lines.iter().enumerate().skip(body_start) {
        // Overrides win outright; markers inside the window are opaque text
        if let Some(bucket) = plan.override_for_line(i) {
            result.push_bucket(bucket, line);
            continue;
        }

        if let Some(label) = region_open_label(line) {
            match plan.bucket_for_label(label) {
                Some(bucket) => {
                    tracker.open(bucket);
                    result.push_bucket(bucket, line);
                }
                None => {
                    tracing::warn!(label = %label, "Region label has no bucket mapping");
                    result.main.push(line.to_string());
                }
            }
            continue;
        }

        if is_region_close(line) {
            match tracker.close() {
                Some(bucket) => result.push_bucket(&bucket, line),
                None => result.main.push(line.to_string()),
            }
            continue;
        }

        match tracker.open_bucket() {
            Some(bucket) => {
                let bucket = bucket.to_string();
                result.push_bucket(&bucket, line);
            }
            None => result.main.push(line.to_string()),
        }
    }

    result
}
