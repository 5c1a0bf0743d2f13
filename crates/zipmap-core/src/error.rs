//! Error types for zipmap-core

use thiserror::Error;
use zipmap_io::IoError;
use zipmap_stats::BreaksError;

/// Main error type for choropleth construction
#[derive(Debug, Error)]
pub enum MapError {
    /// Dataset loading errors
    #[error("failed to load dataset: {0}")]
    Load(#[from] IoError),

    /// Classification errors
    #[error("classification failed: {0}")]
    Breaks(#[from] BreaksError),

    /// The ramp cannot cover the requested classes
    #[error("invalid input: ramp has {ramp} colors but {needed} classes need one each")]
    RampTooShort { ramp: usize, needed: usize },
}

/// Result type alias for map operations
pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapError::RampTooShort { ramp: 3, needed: 7 };
        assert!(err.to_string().contains("3"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_breaks_error_converts() {
        fn classify() -> MapResult<()> {
            zipmap_stats::ClassBreaks::compute(&[], 6)?;
            Ok(())
        }
        assert!(matches!(classify(), Err(MapError::Breaks(_))));
    }
}
