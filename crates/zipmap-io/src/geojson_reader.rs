//! GeoJSON reader for the demand dataset
//!
//! Loads a feature collection from disk, deserializes each feature's
//! attributes into the typed [`ZipDemand`] schema, and converts the
//! geometry into `geo` multipolygons. Non-areal geometries are skipped
//! with a warning; a collection with no usable polygons is an error.

use crate::schema::{ZipDemand, VINTAGE_BUCKETS};
use geo::{Contains, Geometry, MultiPolygon, Point};
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading the dataset
///
/// All variants are terminal: a failed load is logged and the caller
/// stays un-rendered, with no retry.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("dataset file not found: {0}")]
    FileNotFound(String),

    #[error("failed to read dataset: {0}")]
    ReadFailed(String),

    #[error("invalid GeoJSON: {0}")]
    InvalidFormat(String),

    #[error("feature {index} has invalid properties: {message}")]
    InvalidProperties { index: usize, message: String },

    #[error("feature {index} has unusable geometry: {message}")]
    InvalidGeometry { index: usize, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// One ZIP-code area: demand attributes plus boundary polygons
#[derive(Debug, Clone)]
pub struct ZipArea {
    /// Typed feature attributes
    pub demand: ZipDemand,
    /// Boundary geometry in lon/lat coordinates
    pub boundary: MultiPolygon<f64>,
}

/// Geographic extent of the dataset (lon/lat)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    fn extend(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    /// Longitude span
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitude span
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// The loaded demand dataset
///
/// Immutable once loaded; rebuilt only if the file is reloaded.
#[derive(Debug, Clone)]
pub struct DemandDataset {
    areas: Vec<ZipArea>,
    bounds: Bounds,
}

impl DemandDataset {
    /// Load the dataset from a GeoJSON file
    pub fn load(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let text =
            std::fs::read_to_string(path).map_err(|e| IoError::ReadFailed(e.to_string()))?;
        let dataset = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            areas = dataset.len(),
            "loaded demand dataset"
        );
        Ok(dataset)
    }

    /// Parse the dataset from GeoJSON text
    pub fn parse(text: &str) -> IoResult<Self> {
        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| IoError::InvalidFormat(e.to_string()))?;

        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            other => {
                return Err(IoError::InvalidFormat(format!(
                    "expected a FeatureCollection, got {}",
                    match other {
                        GeoJson::Geometry(_) => "a bare Geometry",
                        GeoJson::Feature(_) => "a single Feature",
                        GeoJson::FeatureCollection(_) => unreachable!(),
                    }
                )))
            }
        };

        let mut areas = Vec::with_capacity(collection.features.len());
        let mut bounds = Bounds::empty();

        for (index, feature) in collection.features.into_iter().enumerate() {
            let properties = feature.properties.ok_or_else(|| IoError::InvalidProperties {
                index,
                message: "feature has no properties".to_string(),
            })?;
            let demand: ZipDemand =
                serde_json::from_value(serde_json::Value::Object(properties)).map_err(|e| {
                    IoError::InvalidProperties {
                        index,
                        message: e.to_string(),
                    }
                })?;

            let Some(geometry) = feature.geometry else {
                warn!(index, zip = %demand.zip_code, "feature has no geometry, skipping");
                continue;
            };
            let geometry: Geometry<f64> =
                geometry
                    .value
                    .try_into()
                    .map_err(|e: geojson::Error| IoError::InvalidGeometry {
                        index,
                        message: e.to_string(),
                    })?;
            let boundary = match geometry {
                Geometry::Polygon(p) => MultiPolygon(vec![p]),
                Geometry::MultiPolygon(mp) => mp,
                other => {
                    warn!(
                        index,
                        zip = %demand.zip_code,
                        kind = geometry_kind(&other),
                        "feature is not areal, skipping"
                    );
                    continue;
                }
            };

            for polygon in &boundary {
                for coord in polygon
                    .exterior()
                    .0
                    .iter()
                    .chain(polygon.interiors().iter().flat_map(|r| r.0.iter()))
                {
                    bounds.extend(coord.x, coord.y);
                }
            }

            areas.push(ZipArea { demand, boundary });
        }

        if areas.is_empty() {
            return Err(IoError::InvalidFormat(
                "feature collection contains no polygon features".to_string(),
            ));
        }

        Ok(Self { areas, bounds })
    }

    /// All areas, in file order
    pub fn areas(&self) -> &[ZipArea] {
        &self.areas
    }

    /// One area by index
    pub fn area(&self, index: usize) -> Option<&ZipArea> {
        self.areas.get(index)
    }

    /// Number of areas
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the dataset holds no areas (cannot occur after a
    /// successful load)
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Geographic extent for the initial viewport
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The observation set: market size per area, in area order
    pub fn market_sizes(&self) -> Vec<f64> {
        self.areas.iter().map(|a| a.demand.market_size).collect()
    }

    /// Element-wise sum of vintage counts over all areas
    pub fn vintage_totals(&self) -> [f64; VINTAGE_BUCKETS] {
        let mut totals = [0.0; VINTAGE_BUCKETS];
        for area in &self.areas {
            for (total, count) in totals.iter_mut().zip(area.demand.vintage_counts()) {
                *total += count;
            }
        }
        totals
    }

    /// Index of the area containing the given lon/lat point, if any
    pub fn area_at(&self, lon: f64, lat: f64) -> Option<usize> {
        let point = Point::new(lon, lat);
        self.areas
            .iter()
            .position(|area| area.boundary.contains(&point))
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(zip: &str, market_size: f64, ring: &str) -> String {
        format!(
            r#"{{
                "type": "Feature",
                "properties": {{
                    "ZIP_Code": "{zip}",
                    "elec_market_size": {market_size},
                    "Total Housing Units": 100,
                    "SparyMarketShare": 5.0,
                    "Built 2020 or later": 1,
                    "Built 2010 to 2019": 2,
                    "Built 2000 to 2009": 3,
                    "Built 1990 to 1999": 4,
                    "Built 1980 to 1989": 5,
                    "Built 1970 to 1979": 6,
                    "Built 1960 to 1969": 7,
                    "Built 1950 to 1959": 8,
                    "Built 1940 to 1949": 9,
                    "Built 1939 or earlier": 10
                }},
                "geometry": {{ "type": "Polygon", "coordinates": [{ring}] }}
            }}"#
        )
    }

    fn two_feature_collection() -> String {
        let a = feature(
            "60018",
            100.0,
            "[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]",
        );
        let b = feature(
            "60025",
            900.0,
            "[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0], [2.0, 2.0]]",
        );
        format!(r#"{{ "type": "FeatureCollection", "features": [{a}, {b}] }}"#)
    }

    #[test]
    fn test_parse_feature_collection() {
        let dataset = DemandDataset::parse(&two_feature_collection()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.areas()[0].demand.zip_code, "60018");
        assert_eq!(dataset.market_sizes(), vec![100.0, 900.0]);
    }

    #[test]
    fn test_bounds_cover_all_features() {
        let dataset = DemandDataset::parse(&two_feature_collection()).unwrap();
        let bounds = dataset.bounds();

        assert_eq!(bounds.min_lon, 0.0);
        assert_eq!(bounds.min_lat, 0.0);
        assert_eq!(bounds.max_lon, 3.0);
        assert_eq!(bounds.max_lat, 3.0);
    }

    #[test]
    fn test_vintage_totals_sum_over_areas() {
        let dataset = DemandDataset::parse(&two_feature_collection()).unwrap();
        let totals = dataset.vintage_totals();

        // Both sample features carry the same counts.
        assert_eq!(totals[0], 2.0);
        assert_eq!(totals[9], 20.0);
    }

    #[test]
    fn test_area_at_hit_and_miss() {
        let dataset = DemandDataset::parse(&two_feature_collection()).unwrap();

        assert_eq!(dataset.area_at(0.5, 0.5), Some(0));
        assert_eq!(dataset.area_at(2.5, 2.5), Some(1));
        assert_eq!(dataset.area_at(1.5, 1.5), None);
        assert_eq!(dataset.area_at(-10.0, -10.0), None);
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let err = DemandDataset::parse("{ not geojson").unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }

    #[test]
    fn test_bare_geometry_is_invalid_format() {
        let err = DemandDataset::parse(
            r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, IoError::InvalidFormat(_)));
    }

    #[test]
    fn test_missing_properties_is_an_error() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "ZIP_Code": "60018" },
                "geometry": { "type": "Polygon",
                    "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]] }
            }]
        }"#;
        let err = DemandDataset::parse(text).unwrap_err();
        assert!(matches!(err, IoError::InvalidProperties { index: 0, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemandDataset::load("/no/such/dataset.geojson").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }
}
