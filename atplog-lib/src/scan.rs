//! Heuristic record recovery scan.
//!
//! The log format has no reliable framing marker, so the scanner probes a
//! fixed-size candidate window at every byte offset past the file header and
//! uses the embedded timestamp as the acceptance test. The cursor advances
//! exactly one byte after every probe, successful or not, so a true record
//! start is never skipped due to misalignment. Overlapping windows may both
//! decode; duplicates are kept.
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::record::Record;
use crate::{Error, Result};

/// Fixed file header length. The header is skipped, never parsed.
pub const HEADER_LEN: usize = 16;
/// Candidate window length probed at each offset. Windows near the end of
/// the stream may be shorter.
pub const WINDOW_LEN: usize = 32;
/// The scan ends once fewer bytes than this remain.
pub const MIN_WINDOW_LEN: usize = 4;

/// Scan `data` for plausible records, in stream order.
///
/// A failed probe never aborts the scan; the only terminating conditions are
/// end-of-stream and the [MIN_WINDOW_LEN] cutoff. Rejected windows are
/// visible at trace level.
///
/// # Errors
/// [Error::FileTooSmall] if `data` cannot hold the file header.
pub fn scan(data: &[u8]) -> Result<Vec<Record>> {
    if data.len() < HEADER_LEN {
        return Err(Error::FileTooSmall {
            actual: data.len(),
            minimum: HEADER_LEN,
        });
    }

    let mut records: Vec<Record> = Vec::new();
    let mut pos = HEADER_LEN;
    while pos < data.len() {
        let end = (pos + WINDOW_LEN).min(data.len());
        let window = &data[pos..end];
        if window.len() < MIN_WINDOW_LEN {
            break;
        }
        match Record::decode(window, pos) {
            Some(record) => records.push(record),
            None => trace!(offset = pos, "window rejected"),
        }
        pos += 1;
    }

    Ok(records)
}

/// Read the file at `path` fully into memory and [scan] it.
///
/// # Errors
/// [Error::Io] if the file cannot be read, otherwise as [scan].
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let data = fs::read(path)?;
    scan(&data)
}
