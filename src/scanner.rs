//! Probe file discovery
//!
//! A scan reads the directory stream once, keeps the entries whose names
//! decode to an identifier at or above the resume point, and returns them
//! sorted. The result holds exactly as many identifiers as were kept.

use crate::error::{ProbeError, Result};
use crate::filename::{self, ProbePath};
use crate::types::{DiscoveredSet, FileId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Lists the probe files in `path`, skipping identifiers below `start_at`.
///
/// Entries that do not follow the probe grammar are ignored. Failing to
/// open or read the directory is an error, never an empty result.
pub fn list_probe_files(path: &Path, start_at: Option<FileId>) -> Result<DiscoveredSet> {
    let entries = fs::read_dir(path).map_err(|source| ProbeError::DirectoryOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut ids: Vec<FileId> = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let entry = entry.map_err(|source| ProbeError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            skipped += 1;
            continue;
        };
        if !filename::is_probe_file(name) {
            skipped += 1;
            continue;
        }

        let id = match filename::decode(name) {
            Ok(id) => id,
            Err(err) => {
                warn!(name, "skipping probe file without identifier: {err}");
                skipped += 1;
                continue;
            }
        };

        if start_at.is_some_and(|first| id < first) {
            debug!(name, "before resume point");
            skipped += 1;
            continue;
        }

        if ids.len() == ids.capacity() {
            ids.try_reserve(ids.len().max(16))?;
        }
        ids.push(id);
    }

    // Leading zeros let several names share one identifier
    ids.sort_unstable();
    for pair in ids.windows(2) {
        if pair[0] == pair[1] {
            warn!(id = %pair[0], "several names decode to the same probe file, keeping one");
        }
    }
    let before = ids.len();
    ids.dedup();
    skipped += before - ids.len();

    // Shrink to the exact count before freezing
    let mut exact = Vec::new();
    exact.try_reserve_exact(ids.len())?;
    exact.extend_from_slice(&ids);
    drop(ids);

    let set = DiscoveredSet::from_unsorted(exact);
    info!(
        path = %path.display(),
        found = set.len(),
        skipped,
        "probe files listed"
    );
    Ok(set)
}

/// A directory holding probe files
#[derive(Debug, Clone)]
pub struct ProbeDir {
    path: PathBuf,
}

impl ProbeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// See [`list_probe_files`].
    pub fn list(&self, start_at: Option<FileId>) -> Result<DiscoveredSet> {
        list_probe_files(&self.path, start_at)
    }

    /// Path of the probe file for `id`
    pub fn path_for(&self, id: FileId) -> Result<ProbePath> {
        filename::encode(&self.path, id)
    }
}
