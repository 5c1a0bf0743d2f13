//! Choropleth classification: breaks bound to a color ramp
//!
//! Binds [`ClassBreaks`] to a [`ColorRamp`] and derives everything the
//! renderer needs per feature: the fill color, the polygon style, and
//! the legend rows.

use serde::{Deserialize, Serialize};
use zipmap_stats::ClassBreaks;

use crate::colormap::{Color, ColorRamp, WHITE};
use crate::error::{MapError, MapResult};
use crate::format;

/// Rendering style for one polygon
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Fill color from the classifier
    pub fill_color: Color,
    /// Outline weight
    pub weight: u8,
    /// Outline color
    pub outline_color: Color,
    /// Fill opacity (0-1)
    pub fill_opacity: f32,
}

/// One legend row: a class color and its value range label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Percentile class breaks bound to a color ramp
///
/// Immutable once built; rebuild when the observation set changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Choropleth {
    breaks: ClassBreaks,
    ramp: ColorRamp,
}

impl Choropleth {
    /// Bind breaks to a ramp
    ///
    /// The ramp must carry at least `class_count + 1` colors, one per
    /// bucket; a shorter ramp is rejected.
    pub fn new(breaks: ClassBreaks, ramp: ColorRamp) -> MapResult<Self> {
        let needed = breaks.class_count() + 1;
        if ramp.len() < needed {
            return Err(MapError::RampTooShort {
                ramp: ramp.len(),
                needed,
            });
        }
        Ok(Self { breaks, ramp })
    }

    /// Classify observations directly into a bound choropleth
    pub fn classify(values: &[f64], class_count: usize, ramp: ColorRamp) -> MapResult<Self> {
        let breaks = ClassBreaks::compute(values, class_count)?;
        Self::new(breaks, ramp)
    }

    /// Fill color for an observation
    ///
    /// Pure and total: the constructor guarantees the ramp covers every
    /// class the breaks can produce.
    pub fn color_for(&self, value: f64) -> Color {
        self.ramp
            .color(self.breaks.class_of(value))
            .unwrap_or(WHITE)
    }

    /// Full polygon style for an observation: classified fill, weight 1,
    /// white outline, 0.7 opacity
    pub fn style_for(&self, value: f64) -> PolygonStyle {
        PolygonStyle {
            fill_color: self.color_for(value),
            weight: 1,
            outline_color: WHITE,
            fill_opacity: 0.7,
        }
    }

    /// Legend rows, lowest class first
    ///
    /// Range endpoints are rounded to the nearest 100,000 and formatted
    /// with thousands separators; row i carries the color of class i + 1,
    /// matching the highest-match-wins bucket assignment.
    pub fn legend(&self) -> Vec<LegendEntry> {
        (0..self.breaks.class_count())
            .filter_map(|class| {
                let (start, end) = self.breaks.class_range(class)?;
                let color = self.ramp.color(class + 1)?;
                Some(LegendEntry {
                    color,
                    label: format!(
                        "{}\u{2013}{}",
                        format::thousands(round_to_hundred_thousand(start)),
                        format::thousands(round_to_hundred_thousand(end)),
                    ),
                })
            })
            .collect()
    }

    /// The underlying class breaks
    pub fn breaks(&self) -> &ClassBreaks {
        &self.breaks
    }

    /// The bound color ramp
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }
}

fn round_to_hundred_thousand(value: f64) -> f64 {
    (value / 100_000.0).round() * 100_000.0
}
