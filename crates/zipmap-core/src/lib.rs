//! zipmap-core - Choropleth model for ZIP-code demand mapping
//!
//! # Key Components
//!
//! - **Colormap**: hex color tokens and ordered ramps
//! - **Choropleth**: percentile class breaks bound to a color ramp,
//!   polygon styling, and legend construction
//! - **VintageChart**: bar-chart model of housing units by year built
//! - **MapState**: explicit application state (dataset, classification,
//!   current selection) consumed by the renderer
//!
//! The rendering surface itself lives in the terminal front end; this
//! crate produces the styles, labels, and totals it draws.

pub mod chart;
pub mod choropleth;
pub mod colormap;
pub mod error;
pub mod format;
pub mod panel;
pub mod state;

pub use chart::VintageChart;
pub use choropleth::{Choropleth, LegendEntry, PolygonStyle};
pub use colormap::{demand_ramp, Color, ColorRamp};
pub use error::{MapError, MapResult};
pub use state::MapState;
