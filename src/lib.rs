//! Probe file discovery for flash storage verification
//!
//! A verification run writes numbered probe files (`1.fff`, `2.fff`, ...)
//! across a drive and later reads them back. This library provides:
//! - The probe file name grammar, with checked decoding and path building
//! - The `--start-at=NUM` resume parameter
//! - A single-pass directory scan returning a sorted, size-exact id set
//! - Byte count scaling for display
//! - Listing reports in text and JSON

pub mod cli;
pub mod error;
pub mod filename;
pub mod report;
pub mod resume;
pub mod scanner;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::{ProbeError, Result};
pub use filename::{decode, encode, is_probe_file, ProbePath};
pub use report::ListingReport;
pub use resume::{parse_start_at, parse_start_at_value, ResumeRejection, START_AT_TEXT};
pub use scanner::{list_probe_files, ProbeDir};
pub use types::{DiscoveredSet, FileId};
pub use units::{adjust_unit, ScaledBytes};
