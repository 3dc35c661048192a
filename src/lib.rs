//! runledger - correlates heterogeneous CI workflow artifacts into a
//! deterministic analysis report
//!
//! This library scans a directory of job artifacts, classifies and parses
//! each file despite inconsistent formats, correlates the records into a
//! sorted execution timeline with aggregate views, and renders a
//! fixed-structure Markdown document.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod correlate;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scanner;
