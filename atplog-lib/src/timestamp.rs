//! Raw timestamp decoding.
//!
//! Records embed their wall-clock time as 6 raw bytes: a year offset from
//! 2000 followed by month, day, hour, minute, and second, each one unsigned
//! byte. The scanner uses timestamp plausibility as its acceptance test, so
//! this decode doubles as the record detector.
use chrono::{NaiveDate, NaiveDateTime};

use crate::{Error, Result};

/// Number of bytes in an encoded timestamp.
pub const LEN: usize = 6;

/// Base year added to the single-byte year offset.
const YEAR_BASE: i32 = 2000;

/// Decode the first [LEN] bytes of `buf` into a calendar timestamp.
///
/// The per-field range check is a cheap pre-filter that rejects most garbage
/// windows without touching the calendar. Calendar construction is the final
/// authority: a combination such as Feb 30 passes the ranges but is still
/// rejected.
///
/// # Errors
/// [Error::NotEnoughData] if `buf` holds fewer than [LEN] bytes, or
/// [Error::InvalidTimestamp] if any field is out of range or the fields do
/// not form a real calendar date.
pub fn decode(buf: &[u8]) -> Result<NaiveDateTime> {
    if buf.len() < LEN {
        return Err(Error::NotEnoughData {
            actual: buf.len(),
            minimum: LEN,
        });
    }
    let (year_offset, month, day) = (buf[0], buf[1], buf[2]);
    let (hour, minute, second) = (buf[3], buf[4], buf[5]);

    let plausible = year_offset <= 99
        && (1..=12).contains(&month)
        && (1..=31).contains(&day)
        && hour <= 23
        && minute <= 59
        && second <= 59;
    if !plausible {
        return Err(Error::InvalidTimestamp);
    }

    NaiveDate::from_ymd_opt(YEAR_BASE + i32::from(year_offset), month.into(), day.into())
        .and_then(|date| date.and_hms_opt(hour.into(), minute.into(), second.into()))
        .ok_or(Error::InvalidTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn valid() {
        let ts = decode(&[0x19, 0x06, 0x0f, 0x08, 0x1e, 0x00]).unwrap();

        let expected = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn range_boundaries() {
        // Largest encodable instant
        assert!(decode(&[99, 12, 31, 23, 59, 58]).is_ok());
        // Smallest
        assert!(decode(&[0, 1, 1, 0, 0, 0]).is_ok());
    }

    #[test_case(&[100, 1, 1, 0, 0, 0]; "year offset over 99")]
    #[test_case(&[25, 0, 1, 0, 0, 0]; "month zero")]
    #[test_case(&[25, 13, 1, 0, 0, 0]; "month over 12")]
    #[test_case(&[25, 1, 0, 0, 0, 0]; "day zero")]
    #[test_case(&[25, 1, 32, 0, 0, 0]; "day over 31")]
    #[test_case(&[25, 1, 1, 24, 0, 0]; "hour over 23")]
    #[test_case(&[25, 1, 1, 0, 60, 0]; "minute over 59")]
    #[test_case(&[25, 1, 1, 0, 0, 60]; "second over 59")]
    fn out_of_range(buf: &[u8]) {
        assert!(matches!(decode(buf), Err(Error::InvalidTimestamp)));
    }

    #[test]
    fn impossible_calendar_date() {
        // Passes the range pre-filter, but February 2025 has no 30th. The
        // calendar gate must reject it.
        let zult = decode(&[25, 2, 30, 12, 0, 0]);
        assert!(matches!(zult, Err(Error::InvalidTimestamp)));
    }

    #[test]
    fn leap_day() {
        assert!(decode(&[24, 2, 29, 0, 0, 0]).is_ok());
        assert!(matches!(
            decode(&[25, 2, 29, 0, 0, 0]),
            Err(Error::InvalidTimestamp)
        ));
    }

    #[test]
    fn short_input() {
        let zult = decode(&[25, 6, 15, 8, 30]);
        assert!(matches!(
            zult,
            Err(Error::NotEnoughData {
                actual: 5,
                minimum: LEN
            })
        ));
    }
}
