//! Split plan: the fixed routing tables supplied at the boundary.
//!
//! A plan carries the region-label-to-bucket rules and the absolute
//! line-range overrides for one source document. Plans are hard-coded
//! tables from the splitter's point of view: they are loaded from a YAML
//! file (or built programmatically), never inferred from the document.

use serde::Deserialize;

use crate::config::validate_bucket_name;
use crate::error::{Result, SplitterError};

/// Maps one region label to a bucket.
///
/// Matching is by substring: the rule applies when `label` occurs anywhere
/// in the text following the `#region` marker. Several rules may name the
/// same bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRule {
    /// Label text to look for in the region marker.
    pub label: String,

    /// Bucket receiving the region's lines.
    pub bucket: String,
}

/// Closed interval of absolute 0-based line indices tied to one bucket.
///
/// Lines inside the range are routed to `bucket` unconditionally, before
/// any region marker evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRange {
    /// First line index covered (inclusive).
    pub start: usize,

    /// Last line index covered (inclusive).
    pub end: usize,

    /// Bucket receiving the range's lines.
    pub bucket: String,
}

impl LineRange {
    /// Check whether the range covers line index `i`.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i <= self.end
    }
}

/// Routing tables for splitting one source document.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitPlan {
    /// Substring identifying the primary type declaration line
    /// (e.g. `public class McpService`).
    pub class_signature: String,

    /// Region rules, in lookup priority order.
    #[serde(default)]
    pub regions: Vec<RegionRule>,

    /// Line-range overrides. Must be pairwise disjoint.
    #[serde(default)]
    pub overrides: Vec<LineRange>,
}

impl SplitPlan {
    /// Create an empty plan for the given declaration signature.
    #[must_use]
    pub fn new(class_signature: impl Into<String>) -> Self {
        Self {
            class_signature: class_signature.into(),
            regions: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Add a region rule.
    #[must_use]
    pub fn with_region(mut self, label: impl Into<String>, bucket: impl Into<String>) -> Self {
        self.regions.push(RegionRule {
            label: label.into(),
            bucket: bucket.into(),
        });
        self
    }

    /// Add a line-range override.
    #[must_use]
    pub fn with_override(mut self, start: usize, end: usize, bucket: impl Into<String>) -> Self {
        self.overrides.push(LineRange {
            start,
            end,
            bucket: bucket.into(),
        });
        self
    }

    /// Parse a plan from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let plan: Self = serde_yaml_ng::from_str(yaml)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Validate bucket names, labels, and override ranges.
    ///
    /// # Errors
    /// * `InvalidBucketName` for a bucket that is not an identifier
    /// * `EmptyRegionLabel` for a rule with a blank label
    /// * `InvalidOverrideRange` when start is after end
    /// * `OverlappingOverrides` when two ranges share a line
    pub fn validate(&self) -> Result<()> {
        for rule in &self.regions {
            validate_bucket_name(&rule.bucket)?;
            if rule.label.trim().is_empty() {
                return Err(SplitterError::EmptyRegionLabel(rule.bucket.clone()));
            }
        }

        for range in &self.overrides {
            validate_bucket_name(&range.bucket)?;
            if range.start > range.end {
                return Err(SplitterError::InvalidOverrideRange {
                    start: range.start,
                    end: range.end,
                    bucket: range.bucket.clone(),
                });
            }
        }

        for (i, a) in self.overrides.iter().enumerate() {
            for b in &self.overrides[i + 1..] {
                if a.start <= b.end && b.start <= a.end {
                    return Err(SplitterError::OverlappingOverrides {
                        first_bucket: a.bucket.clone(),
                        first_start: a.start,
                        first_end: a.end,
                        second_bucket: b.bucket.clone(),
                        second_start: b.start,
                        second_end: b.end,
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolve a region marker label to a bucket name.
    ///
    /// Rules are checked in declared order and the first whose label occurs
    /// as a substring of `marker_label` wins. An ambiguous match (more than
    /// one rule applies) is logged, since substring matching makes rule
    /// order load-bearing.
    #[must_use]
    pub fn bucket_for_label(&self, marker_label: &str) -> Option<&str> {
        let mut matches = self
            .regions
            .iter()
            .filter(|rule| marker_label.contains(rule.label.as_str()));

        let first = matches.next()?;
        if let Some(second) = matches.next() {
            tracing::warn!(
                label = %marker_label,
                winner = %first.bucket,
                also_matched = %second.bucket,
                "Region label matches more than one rule, first rule wins"
            );
        }
        Some(first.bucket.as_str())
    }

    /// Find the override covering absolute line index `i`, if any.
    #[must_use]
    pub fn override_for_line(&self, i: usize) -> Option<&str> {
        self.overrides
            .iter()
            .find(|range| range.contains(i))
            .map(|range| range.bucket.as_str())
    }
}
