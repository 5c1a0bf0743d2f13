//! Typed attribute schema for the demand dataset
//!
//! The attribute names are a compatibility contract with the upstream
//! dataset: consumers (info panel, vintage chart) index features by
//! these exact names, so the serde renames here must not drift.

use serde::{Deserialize, Serialize};

/// Number of housing-vintage buckets
pub const VINTAGE_BUCKETS: usize = 10;

/// Chart labels for the vintage buckets, newest first
pub const VINTAGE_LABELS: [&str; VINTAGE_BUCKETS] = [
    "2020+",
    "2010-2019",
    "2000-2009",
    "1990-1999",
    "1980-1989",
    "1970-1979",
    "1960-1969",
    "1950-1959",
    "1940-1949",
    "\u{2264}1939",
];

/// Demand attributes of a single ZIP-code feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipDemand {
    /// ZIP code identifier.
    #[serde(rename = "ZIP_Code")]
    pub zip_code: String,

    /// Optional human-readable name ("ZIP, State"), preferred over the
    /// bare ZIP code when present.
    #[serde(rename = "zip_statename", default)]
    pub state_name: Option<String>,

    /// Electricity market size metric.
    #[serde(rename = "elec_market_size")]
    pub market_size: f64,

    /// Total housing units in the ZIP code.
    #[serde(rename = "Total Housing Units")]
    pub housing_units: f64,

    /// Market share percentage (0-100).
    #[serde(rename = "SparyMarketShare")]
    pub market_share: f64,

    /// Housing units by year built, newest first.
    #[serde(rename = "Built 2020 or later")]
    pub built_2020_or_later: f64,
    #[serde(rename = "Built 2010 to 2019")]
    pub built_2010_to_2019: f64,
    #[serde(rename = "Built 2000 to 2009")]
    pub built_2000_to_2009: f64,
    #[serde(rename = "Built 1990 to 1999")]
    pub built_1990_to_1999: f64,
    #[serde(rename = "Built 1980 to 1989")]
    pub built_1980_to_1989: f64,
    #[serde(rename = "Built 1970 to 1979")]
    pub built_1970_to_1979: f64,
    #[serde(rename = "Built 1960 to 1969")]
    pub built_1960_to_1969: f64,
    #[serde(rename = "Built 1950 to 1959")]
    pub built_1950_to_1959: f64,
    #[serde(rename = "Built 1940 to 1949")]
    pub built_1940_to_1949: f64,
    #[serde(rename = "Built 1939 or earlier")]
    pub built_1939_or_earlier: f64,
}

impl ZipDemand {
    /// Vintage bucket counts in label order (newest first)
    pub fn vintage_counts(&self) -> [f64; VINTAGE_BUCKETS] {
        [
            self.built_2020_or_later,
            self.built_2010_to_2019,
            self.built_2000_to_2009,
            self.built_1990_to_1999,
            self.built_1980_to_1989,
            self.built_1970_to_1979,
            self.built_1960_to_1969,
            self.built_1950_to_1959,
            self.built_1940_to_1949,
            self.built_1939_or_earlier,
        ]
    }

    /// Display name for panels: the state name when present, otherwise
    /// the ZIP code itself
    pub fn display_name(&self) -> &str {
        self.state_name.as_deref().unwrap_or(&self.zip_code)
    }
}
