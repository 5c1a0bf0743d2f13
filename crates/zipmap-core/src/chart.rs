//! Bar-chart model: housing units by year built
//!
//! Ten fixed categories, newest first. With a selection the totals are
//! that feature's vintage counts; without one they are the element-wise
//! sum over the whole dataset. The model is replaced in place on every
//! selection change, mirroring an in-place chart data update.

use serde::{Deserialize, Serialize};
use zipmap_io::schema::{ZipDemand, VINTAGE_BUCKETS, VINTAGE_LABELS};
use zipmap_io::DemandDataset;

/// Housing-vintage bar chart data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VintageChart {
    totals: [f64; VINTAGE_BUCKETS],
}

impl VintageChart {
    /// Chart for the whole dataset (no selection)
    pub fn dataset_wide(dataset: &DemandDataset) -> Self {
        Self {
            totals: dataset.vintage_totals(),
        }
    }

    /// Chart for a single selected feature
    pub fn for_selection(demand: &ZipDemand) -> Self {
        Self {
            totals: demand.vintage_counts(),
        }
    }

    /// Replace the data in place for a selection change
    pub fn update(&mut self, selection: Option<&ZipDemand>, dataset: &DemandDataset) {
        *self = match selection {
            Some(demand) => Self::for_selection(demand),
            None => Self::dataset_wide(dataset),
        };
    }

    /// Category labels, newest first
    pub fn labels() -> &'static [&'static str; VINTAGE_BUCKETS] {
        &VINTAGE_LABELS
    }

    /// Totals in label order
    pub fn totals(&self) -> &[f64; VINTAGE_BUCKETS] {
        &self.totals
    }

    /// (label, rounded count) pairs for bar widgets
    pub fn bars(&self) -> Vec<(&'static str, u64)> {
        VINTAGE_LABELS
            .iter()
            .zip(self.totals.iter())
            .map(|(label, total)| (*label, total.max(0.0).round() as u64))
            .collect()
    }
}
