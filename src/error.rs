/// Errors returned when building a tracker or filter from a configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("distance threshold must be finite and positive (got {0})")]
    InvalidDistanceThreshold(f64),
    #[error("{field} lower bound {min} exceeds upper bound {max}")]
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
