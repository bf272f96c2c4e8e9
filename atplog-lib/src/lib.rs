#![doc = include_str!("../README.md")]

mod error;

pub mod record;
pub mod scan;
pub mod summary;
pub mod timestamp;

pub use error::{Error, Result};
pub use record::{describe, Payload, Record, RecordType};
pub use scan::{scan, scan_file};
pub use summary::Summary;
