//! Accumulated sweep results.
//!
//! One record per estimation run, kept in insertion order (ascending
//! sample size), used directly as plot data by the reporter.

use crate::estimator::PiEstimate;
use serde::{Deserialize, Serialize};

/// One (sample size, estimate, deviation) triple of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Number of points drawn in this run.
    pub samples: u64,
    /// Estimated value of π.
    pub estimate: f64,
    /// Absolute deviation from the true value of π.
    pub deviation: f64,
}

impl From<PiEstimate> for SampleRecord {
    fn from(est: PiEstimate) -> Self {
        Self {
            samples: est.samples,
            estimate: est.estimate,
            deviation: est.deviation(),
        }
    }
}

/// Ordered sequence of sweep records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSeries {
    records: Vec<SampleRecord>,
}

impl ResultSeries {
    /// Create an empty series with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record. The driver pushes in ascending sample-size order.
    pub fn push(&mut self, record: SampleRecord) {
        self.records.push(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    /// First record, if any.
    #[must_use]
    pub fn first(&self) -> Option<&SampleRecord> {
        self.records.first()
    }

    /// Last record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&SampleRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a ResultSeries {
    type Item = &'a SampleRecord;
    type IntoIter = std::slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
