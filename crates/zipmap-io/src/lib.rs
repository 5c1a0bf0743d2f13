//! zipmap-io - Data I/O for zipmap
//!
//! Reads the ZIP-code electricity demand dataset: a GeoJSON feature
//! collection whose features carry a fixed attribute schema (market
//! size, housing units, market share, housing-vintage counts) alongside
//! polygon boundaries.

pub mod geojson_reader;
pub mod schema;

pub use geojson_reader::{Bounds, DemandDataset, IoError, IoResult, ZipArea};
pub use schema::{ZipDemand, VINTAGE_BUCKETS, VINTAGE_LABELS};
