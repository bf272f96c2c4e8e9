use chrono::NaiveDateTime;
use serde::Serialize;

use crate::timestamp;

pub type RecordType = u8;

/// Record types whose payload starts with a big-endian u16 measurement.
const SCALAR_TYPES: [RecordType; 2] = [0x02, 0x03];

/// Human description for a record type code.
///
/// Codes outside the known set produce a synthesized `unknown(0x..)` form.
#[must_use]
pub fn describe(record_type: RecordType) -> String {
    match record_type {
        0x01 => "journey start".to_string(),
        0x02 => "ATP status".to_string(),
        0x03 => "speed record".to_string(),
        0x04 => "brake application".to_string(),
        0x05 => "balise passage".to_string(),
        0x06 => "driver acknowledgement".to_string(),
        other => format!("unknown(0x{other:02x})"),
    }
}

/// Decoded record payload.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Big-endian u16 measurement (status word, speed in raw units).
    Scalar(u16),
    /// Payload bytes verbatim, for types with no known field layout.
    Raw(Vec<u8>),
}

/// One recovered timestamped event.
///
/// Records are produced in scan order; their timestamps are not necessarily
/// non-decreasing and overlapping records are not deduplicated.
#[derive(Serialize, Debug, Clone)]
pub struct Record {
    /// Stream offset the candidate window was probed at.
    pub offset: usize,
    pub record_type: RecordType,
    pub timestamp: NaiveDateTime,
    pub payload: Payload,
    /// Raw candidate window bytes, including the type and timestamp.
    pub window: Vec<u8>,
}

impl Record {
    /// Minimum candidate length: type byte plus encoded timestamp.
    pub const MIN_LEN: usize = 1 + timestamp::LEN;

    /// Decode a candidate window probed at stream offset `offset`.
    ///
    /// Returns `None` when the window is too short to hold a record or the
    /// embedded timestamp is not plausible. Everything after the timestamp,
    /// up to the window length, is treated as payload.
    #[must_use]
    pub fn decode(window: &[u8], offset: usize) -> Option<Record> {
        if window.len() < Self::MIN_LEN {
            return None;
        }
        let timestamp = timestamp::decode(&window[1..Self::MIN_LEN]).ok()?;
        let record_type = window[0];

        let data = &window[Self::MIN_LEN..];
        let payload = if SCALAR_TYPES.contains(&record_type) {
            // A short payload decodes as zero rather than failing the probe.
            let value = if data.len() >= 2 {
                u16::from_be_bytes([data[0], data[1]])
            } else {
                0
            };
            Payload::Scalar(value)
        } else {
            Payload::Raw(data.to_vec())
        };

        Some(Record {
            offset,
            record_type,
            timestamp,
            payload,
            window: window.to_vec(),
        })
    }

    #[must_use]
    pub fn description(&self) -> String {
        describe(self.record_type)
    }
}
