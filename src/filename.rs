//! Probe file naming: `<sequence number>.fff`
//!
//! The sequence number in a name is 1-based; the identifiers handed around
//! the crate are zero-based, so `1.fff` is `FileId(0)`.

use crate::error::{ProbeError, Result};
use crate::types::FileId;
use std::path::{Path, PathBuf};

/// Suffix every probe file carries
pub const PROBE_SUFFIX: &str = ".fff";

/// Longest path, in bytes and including the NUL, the platform accepts
#[cfg(unix)]
pub const PATH_MAX: usize = libc::PATH_MAX as usize;
#[cfg(not(unix))]
pub const PATH_MAX: usize = 260;

/// Splits `name` into its digit run if it follows the probe grammar.
fn digit_run(name: &str) -> Option<&str> {
    let digits = name.strip_suffix(PROBE_SUFFIX)?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}

/// Returns true iff `name` is one or more decimal digits followed by `.fff`.
pub fn is_probe_file(name: &str) -> bool {
    digit_run(name).is_some()
}

/// Decodes a probe file name into its zero-based identifier.
///
/// Fails if the name does not follow the grammar, if the number does not
/// fit in 64 bits, or if the number is 0.
pub fn decode(name: &str) -> Result<FileId> {
    let invalid = || ProbeError::InvalidFilename(name.to_string());
    let digits = digit_run(name).ok_or_else(invalid)?;

    let mut number: u64 = 0;
    for b in digits.bytes() {
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(b - b'0')))
            .ok_or_else(invalid)?;
    }

    number.checked_sub(1).map(FileId).ok_or_else(invalid)
}

/// Full path of a probe file together with its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePath {
    path: PathBuf,
}

impl ProbePath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name portion of the path, borrowed from it
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ProbePath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Builds `<dir>/<id + 1>.fff`.
pub fn encode(dir: &Path, id: FileId) -> Result<ProbePath> {
    let number = id.sequence_number().ok_or_else(|| {
        ProbeError::InvalidArgument(format!("identifier {id} has no sequence number"))
    })?;
    let path = dir.join(format!("{number}{PROBE_SUFFIX}"));

    let len = path.as_os_str().len();
    if len >= PATH_MAX {
        return Err(ProbeError::PathTooLong {
            len,
            limit: PATH_MAX - 1,
        });
    }

    Ok(ProbePath { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_file_recognition() {
        assert!(is_probe_file("1.fff"));
        assert!(is_probe_file("0.fff"));
        assert!(is_probe_file("0042.fff"));
        assert!(is_probe_file("123456789012345678901234567890.fff"));

        assert!(!is_probe_file(""));
        assert!(!is_probe_file(".fff"));
        assert!(!is_probe_file("abc.fff"));
        assert!(!is_probe_file("1.fff~"));
        assert!(!is_probe_file("1.fffx"));
        assert!(!is_probe_file("1.ff"));
        assert!(!is_probe_file("1.f"));
        assert!(!is_probe_file("1."));
        assert!(!is_probe_file("1"));
        assert!(!is_probe_file("1a2.fff"));
        assert!(!is_probe_file("12 3.fff"));
        assert!(!is_probe_file(" 1.fff"));
        assert!(!is_probe_file("+1.fff"));
        assert!(!is_probe_file("1.FFF"));
        assert!(!is_probe_file("1..fff"));
        // Non-ASCII digits are not decimal digits here
        assert!(!is_probe_file("\u{0661}.fff"));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("1.fff").unwrap(), FileId(0));
        assert_eq!(decode("3.fff").unwrap(), FileId(2));
        assert_eq!(decode("007.fff").unwrap(), FileId(6));
        assert_eq!(
            decode("18446744073709551615.fff").unwrap(),
            FileId(u64::MAX - 1)
        );
    }

    #[test]
    fn test_decode_rejects_invalid_names() {
        assert!(matches!(decode("notes.txt"), Err(ProbeError::InvalidFilename(_))));
        assert!(matches!(decode("1.ff"), Err(ProbeError::InvalidFilename(_))));
        // Sequence numbers start at 1
        assert!(matches!(decode("0.fff"), Err(ProbeError::InvalidFilename(_))));
        // One past u64::MAX
        assert!(matches!(
            decode("18446744073709551616.fff"),
            Err(ProbeError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_encode() {
        let probe = encode(Path::new("/mnt/usb"), FileId(0)).unwrap();
        assert_eq!(probe.path(), Path::new("/mnt/usb/1.fff"));
        assert_eq!(probe.file_name(), "1.fff");

        let probe = encode(Path::new("/mnt/usb"), FileId(41)).unwrap();
        assert_eq!(probe.file_name(), "42.fff");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for n in [0u64, 1, 9, 10, 99, 1_000_000, u64::MAX - 1] {
            let probe = encode(Path::new("dir"), FileId(n)).unwrap();
            assert_eq!(decode(probe.file_name()).unwrap(), FileId(n));
        }
    }

    #[test]
    fn test_encode_rejects_overflow_and_long_paths() {
        assert!(matches!(
            encode(Path::new("dir"), FileId(u64::MAX)),
            Err(ProbeError::InvalidArgument(_))
        ));

        let long_dir = "d".repeat(PATH_MAX);
        assert!(matches!(
            encode(Path::new(&long_dir), FileId(0)),
            Err(ProbeError::PathTooLong { .. })
        ));
    }
}
