//! zipmap-stats - Statistical classification for zipmap
//!
//! Provides percentile-based class breaks for choropleth mapping:
//! a set of observations is split into a fixed number of classes so
//! that each class holds roughly the same share of the distribution.

pub mod breaks;

pub use breaks::{BreaksError, BreaksResult, ClassBreaks};
