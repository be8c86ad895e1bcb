use crate::error::{ProbeError, Result};
use serde::Serialize;

/// Zero-based identifier of a probe file.
///
/// The on-disk name carries the 1-based sequence number, so `FileId(0)`
/// lives in `1.fff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(pub u64);

impl FileId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// 1-based number used in the file name, `None` on overflow
    pub fn sequence_number(&self) -> Option<u64> {
        self.0.checked_add(1)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminator of the legacy list representation
pub const LIST_TERMINATOR: i64 = -1;

/// Strictly ascending, size-exact set of probe file identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiscoveredSet {
    ids: Box<[FileId]>,
}

impl DiscoveredSet {
    /// Sorts and deduplicates `ids`, then freezes them.
    pub(crate) fn from_unsorted(mut ids: Vec<FileId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        Self {
            ids: ids.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[FileId] {
        &self.ids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileId> {
        self.ids.iter()
    }

    pub fn first(&self) -> Option<FileId> {
        self.ids.first().copied()
    }

    pub fn last(&self) -> Option<FileId> {
        self.ids.last().copied()
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Legacy form: every identifier followed by a single `-1`.
    pub fn to_terminated(&self) -> Result<Vec<i64>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.ids.len() + 1)?;
        for id in self.ids.iter() {
            let value = i64::try_from(id.0).map_err(|_| {
                ProbeError::InvalidArgument(format!("identifier {id} does not fit the legacy list"))
            })?;
            out.push(value);
        }
        out.push(LIST_TERMINATOR);
        Ok(out)
    }

    /// Reads a legacy list up to its terminator.
    ///
    /// Values after the terminator are ignored. A missing terminator, a
    /// negative value other than the terminator, or a list that is not
    /// strictly ascending is rejected.
    pub fn from_terminated(list: &[i64]) -> Result<Self> {
        let end = list
            .iter()
            .position(|&v| v == LIST_TERMINATOR)
            .ok_or_else(|| ProbeError::InvalidArgument("list has no terminator".to_string()))?;

        let mut ids = Vec::new();
        ids.try_reserve_exact(end)?;
        for &value in &list[..end] {
            let id = u64::try_from(value)
                .map(FileId)
                .map_err(|_| ProbeError::InvalidArgument(format!("negative identifier {value}")))?;
            if let Some(prev) = ids.last() {
                if id <= *prev {
                    return Err(ProbeError::InvalidArgument(format!(
                        "list is not strictly ascending at {id}"
                    )));
                }
            }
            ids.push(id);
        }

        Ok(Self {
            ids: ids.into_boxed_slice(),
        })
    }
}

impl<'a> IntoIterator for &'a DiscoveredSet {
    type Item = &'a FileId;
    type IntoIter = std::slice::Iter<'a, FileId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
