//! Explicit application state
//!
//! A [`MapState`] owns the loaded dataset, the classification bound to
//! its ramp, the chart model, and the current selection. Render
//! functions consume it read-only; the only mutation after load is the
//! selection, which drives panel and chart updates.

use std::path::Path;

use tracing::info;
use zipmap_io::{DemandDataset, ZipArea};

use crate::chart::VintageChart;
use crate::choropleth::{Choropleth, LegendEntry, PolygonStyle};
use crate::colormap::ColorRamp;
use crate::error::MapResult;
use crate::panel;

/// Application state: dataset, classification, selection
#[derive(Debug, Clone)]
pub struct MapState {
    dataset: DemandDataset,
    choropleth: Choropleth,
    chart: VintageChart,
    selection: Option<usize>,
}

impl MapState {
    /// Load the dataset from a file and classify it
    ///
    /// The single load-and-classify path: breaks are computed once per
    /// load, and the initial chart covers the whole dataset.
    pub fn load(path: impl AsRef<Path>, class_count: usize, ramp: ColorRamp) -> MapResult<Self> {
        let dataset = DemandDataset::load(path)?;
        Self::from_dataset(dataset, class_count, ramp)
    }

    /// Build state from an already-parsed dataset
    pub fn from_dataset(
        dataset: DemandDataset,
        class_count: usize,
        ramp: ColorRamp,
    ) -> MapResult<Self> {
        let choropleth = Choropleth::classify(&dataset.market_sizes(), class_count, ramp)?;
        let chart = VintageChart::dataset_wide(&dataset);
        info!(
            areas = dataset.len(),
            classes = class_count,
            "classified demand dataset"
        );
        Ok(Self {
            dataset,
            choropleth,
            chart,
            selection: None,
        })
    }

    /// Select an area by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if let Some(area) = self.dataset.area(index) {
            self.chart.update(Some(&area.demand), &self.dataset);
            self.selection = Some(index);
        }
    }

    /// Select whatever area contains the given lon/lat point
    ///
    /// A click outside every polygon clears the selection, restoring the
    /// dataset-wide chart.
    pub fn select_at(&mut self, lon: f64, lat: f64) -> Option<usize> {
        match self.dataset.area_at(lon, lat) {
            Some(index) => {
                self.select(index);
                Some(index)
            }
            None => {
                self.clear_selection();
                None
            }
        }
    }

    /// Clear the selection and restore dataset-wide chart totals
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.chart.update(None, &self.dataset);
    }

    /// Move the selection forward through the areas, wrapping around
    pub fn select_next(&mut self) {
        let next = match self.selection {
            Some(index) => (index + 1) % self.dataset.len(),
            None => 0,
        };
        self.select(next);
    }

    /// Move the selection backward through the areas, wrapping around
    pub fn select_prev(&mut self) {
        let len = self.dataset.len();
        let prev = match self.selection {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.select(prev);
    }

    /// The loaded dataset
    pub fn dataset(&self) -> &DemandDataset {
        &self.dataset
    }

    /// The classification bound to its ramp
    pub fn choropleth(&self) -> &Choropleth {
        &self.choropleth
    }

    /// The current chart model
    pub fn chart(&self) -> &VintageChart {
        &self.chart
    }

    /// Index of the selected area, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    /// The selected area, if any
    pub fn selected_area(&self) -> Option<&ZipArea> {
        self.selection.and_then(|i| self.dataset.area(i))
    }

    /// Polygon style for one area
    pub fn style_for(&self, area: &ZipArea) -> PolygonStyle {
        self.choropleth.style_for(area.demand.market_size)
    }

    /// Legend rows for the current classification
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.choropleth.legend()
    }

    /// Info panel lines for the current selection
    pub fn info_lines(&self) -> Vec<String> {
        panel::info_lines(self.selected_area().map(|a| &a.demand))
    }
}
