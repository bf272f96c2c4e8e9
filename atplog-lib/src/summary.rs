use std::cmp;
use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::record::{Record, RecordType};

#[derive(Debug, Default, Clone, Serialize)]
pub struct TypeSummary {
    pub count: usize,
}

/// Tracks stats on record iteration.
///
/// `first`/`last` stay `None` until a record is added, so summarizing an
/// empty scan never has to compute the range of an empty set.
///
/// # Example
/// ```
/// use atplog::{Record, Summary};
///
/// let dat: &[u8] = &[0x02, 0x19, 0x06, 0x0f, 0x08, 0x1e, 0x00, 0x00, 0x05];
///
/// let mut summary = Summary::default();
/// summary.add(&Record::decode(dat, 16).unwrap());
/// assert_eq!(summary.count, 1);
/// ```
#[derive(Debug, Default, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub types: HashMap<RecordType, TypeSummary>,
}

impl Summary {
    pub fn add(&mut self, record: &Record) {
        self.count += 1;
        self.types.entry(record.record_type).or_default().count += 1;

        self.first = self
            .first
            .map_or(Some(record.timestamp), |cur| Some(cmp::min(record.timestamp, cur)));
        self.last = self
            .last
            .map_or(Some(record.timestamp), |cur| Some(cmp::max(record.timestamp, cur)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn empty_has_no_range() {
        let summary = Summary::default();
        assert_eq!(summary.count, 0);
        assert!(summary.first.is_none());
        assert!(summary.last.is_none());
        assert!(summary.types.is_empty());
    }

    #[test]
    fn tracks_counts_and_range() {
        // Records arrive in scan order, which is not timestamp order.
        let late = Record::decode(&[0x03, 26, 1, 1, 0, 30, 45, 0x01, 0x2c], 16).unwrap();
        let early = Record::decode(&[0x02, 25, 12, 31, 23, 59, 58, 0x00, 0x05], 50).unwrap();
        let other = Record::decode(&[0x03, 25, 12, 31, 23, 59, 59, 0x00, 0x64], 80).unwrap();

        let mut summary = Summary::default();
        for record in [&late, &early, &other] {
            summary.add(record);
        }

        assert_eq!(summary.count, 3);
        assert_eq!(summary.first, Some(early.timestamp));
        assert_eq!(summary.last, Some(late.timestamp));
        assert_eq!(summary.types.len(), 2);
        assert_eq!(summary.types[&0x02].count, 1);
        assert_eq!(summary.types[&0x03].count, 2);
    }
}
