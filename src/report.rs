//! Listing reports
//!
//! Turns a discovered set into a report with per-file sizes, rendered as
//! text for people or as JSON for scripts.

use crate::error::{ProbeError, Result};
use crate::scanner::ProbeDir;
use crate::types::{DiscoveredSet, FileId};
use crate::units::ScaledBytes;
use serde::Serialize;
use std::fs;
use std::io::Write;

pub const TOOL_NAME: &str = "flashprobe";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Tool name and version
    pub tool_name: String,
    pub version: String,
    /// Report generation timestamp (RFC 3339)
    pub timestamp: String,
    /// Directory that was scanned
    pub directory: String,
    /// 1-based number of the first file considered, if resuming
    pub start_at: Option<u64>,
}

/// One probe file in the report
#[derive(Debug, Clone, Serialize)]
pub struct ProbeFileEntry {
    pub id: FileId,
    pub name: String,
    pub size_bytes: u64,
}

/// Report for a single listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingReport {
    pub metadata: ReportMetadata,
    pub files: Vec<ProbeFileEntry>,
    pub file_count: usize,
    pub total_bytes: u64,
    /// Total size, scaled, e.g. "1.50 GB"
    pub total_human: String,
}

impl ListingReport {
    /// Builds a report, reading the size of every listed file.
    pub fn build(dir: &ProbeDir, set: &DiscoveredSet, start_at: Option<FileId>) -> Result<Self> {
        let mut files = Vec::new();
        files.try_reserve_exact(set.len())?;

        let mut total_bytes: u64 = 0;
        for &id in set {
            let probe = dir.path_for(id)?;
            let size_bytes = fs::metadata(probe.path())
                .map_err(|source| ProbeError::FileMetadata {
                    path: probe.path().to_path_buf(),
                    source,
                })?
                .len();
            total_bytes = total_bytes.saturating_add(size_bytes);
            files.push(ProbeFileEntry {
                id,
                name: probe.file_name().to_string(),
                size_bytes,
            });
        }

        let metadata = ReportMetadata {
            tool_name: TOOL_NAME.to_string(),
            version: TOOL_VERSION.to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
            directory: dir.path().display().to_string(),
            start_at: start_at.and_then(|id| id.sequence_number()),
        };

        Ok(Self {
            metadata,
            file_count: files.len(),
            files,
            total_bytes,
            total_human: ScaledBytes::new(total_bytes).to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| ProbeError::Report(err.to_string()))
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Directory: {}", self.metadata.directory)?;
        if let Some(start_at) = self.metadata.start_at {
            writeln!(out, "Starting at file: {start_at}")?;
        }
        writeln!(out)?;

        for file in &self.files {
            writeln!(
                out,
                "{:>16}  {:>12}",
                file.name,
                ScaledBytes::new(file.size_bytes).to_string()
            )?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} probe files, {} ({} bytes)",
            self.file_count, self.total_human, self.total_bytes
        )?;
        Ok(())
    }
}

/// Program banner printed ahead of text output
pub fn print_header<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out, "{TOOL_NAME} {name} {TOOL_VERSION}")?;
    writeln!(out, "This is free software; see the source for copying conditions.")?;
    writeln!(out)?;
    Ok(())
}
