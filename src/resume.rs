//! `--start-at=NUM` resume parameter
//!
//! NUM is the 1-based number of the first probe file to process. A rejected
//! parameter never fails the run; it only disables resume filtering.

use crate::types::FileId;
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::debug;

/// Literal prefix of the resume parameter
pub const START_AT_TEXT: &str = "--start-at=";

/// Why a resume parameter was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResumeRejection {
    #[error("parameter does not start with {:?}", START_AT_TEXT)]
    MissingPrefix,

    #[error("{0:?} is not a base-10 integer")]
    NotANumber(String),

    #[error("{0} is not a positive file number")]
    NotPositive(i64),

    #[error("{0:?} is out of range")]
    Overflow(String),
}

/// Parses a full `--start-at=NUM` parameter into an inclusive zero-based
/// lower bound, or a rejection reason.
pub fn try_parse_start_at(param: &str) -> Result<FileId, ResumeRejection> {
    let value = param
        .strip_prefix(START_AT_TEXT)
        .ok_or(ResumeRejection::MissingPrefix)?;
    try_parse_start_at_value(value)
}

/// Same rules as [`try_parse_start_at`] for a bare NUM.
pub fn try_parse_start_at_value(value: &str) -> Result<FileId, ResumeRejection> {
    let number = value.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ResumeRejection::Overflow(value.to_string())
        }
        _ => ResumeRejection::NotANumber(value.to_string()),
    })?;

    // i64::MAX is reserved as the overflow sentinel
    if number == i64::MAX {
        return Err(ResumeRejection::Overflow(value.to_string()));
    }
    if number <= 0 {
        return Err(ResumeRejection::NotPositive(number));
    }

    Ok(FileId((number - 1) as u64))
}

/// Parses a `--start-at=NUM` parameter; `None` means no resume filtering.
pub fn parse_start_at(param: &str) -> Option<FileId> {
    try_parse_start_at(param)
        .map_err(|reason| debug!(param, %reason, "resume parameter ignored"))
        .ok()
}

/// Parses a bare NUM; `None` means no resume filtering.
pub fn parse_start_at_value(value: &str) -> Option<FileId> {
    try_parse_start_at_value(value)
        .map_err(|reason| debug!(value, %reason, "resume value ignored"))
        .ok()
}
