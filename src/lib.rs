//! Partial Splitter - Split oversized C# service classes into partial class files.
//!
//! This crate partitions one large C# source file into several smaller
//! partial-class files. A shared header prologue (usings, namespace, doc
//! comments, the class declaration rewritten as `partial`) is duplicated
//! into every output, and the remaining lines are routed either to the
//! rewritten primary file or to named "bucket" files based on two
//! mechanisms:
//!
//! 1. absolute line-range overrides, which always win, and
//! 2. `#region` labels resolved to bucket names through a split plan.
//!
//! # Example
//!
//! ```
//! use partial_splitter::plan::SplitPlan;
//!
//! let plan = SplitPlan::from_yaml(concat!(
//!     "class_signature: public class McpService\n",
//!     "regions:\n",
//!     "  - label: Device Operations\n",
//!     "    bucket: Devices\n",
//! ))
//! .unwrap();
//! assert_eq!(plan.bucket_for_label("Device Operations"), Some("Devices"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Marker constants, validation, and the output naming convention
//! - [`error`]: Error types and Result alias
//! - [`plan`]: Split plan (region rules and line-range overrides)
//! - [`header`]: Header prologue extraction and declaration rewriting
//! - [`classify`]: Single-pass line classifier and region tracker
//! - [`assemble`]: Output assembly (header injection, brace repair, blank-line collapse)
//! - [`splitter`]: Main splitting service and persistence
//! - [`cli`]: Command-line interface

pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod plan;
pub mod splitter;

// Re-export main functions
pub use splitter::{split_lines, split_source};

// Re-export commonly used items
pub use assemble::OutputDoc;
pub use error::{Result, SplitterError};
pub use plan::SplitPlan;
