// Report totals
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::ResultSet;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// The grand total computed from every bucket's summary.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Sum of every bucket's size, in bytes.
    pub total_size_bytes: u64,
}

impl Report {
    /// The total size in gibibytes.
    pub fn gibibytes(&self) -> f64 {
        self.total_size_bytes as f64 / BYTES_PER_GIB
    }

    /// The notification text.
    pub fn message(&self) -> String {
        format!("Daily S3 size report: {:.2} GiB", self.gibibytes())
    }
}

impl From<&ResultSet> for Report {
    fn from(results: &ResultSet) -> Self {
        let total_size_bytes = results
            .values()
            .map(|summary| summary.total_size_bytes)
            .sum();

        Self {
            total_size_bytes,
        }
    }
}
