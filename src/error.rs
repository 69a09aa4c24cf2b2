use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Pattern {pattern} references location {index}, but only {available} locations exist")]
    LocationIndex {
        pattern: usize,
        index: usize,
        available: usize,
    },

    #[error("Location {location} uses offset index {index}, but only {available} offsets exist")]
    OffsetIndex {
        location: usize,
        index: usize,
        available: usize,
    },

    #[error("Viewport window must be finite, got {x} x {y}")]
    InvalidViewport { x: f32, y: f32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Card size must be positive, got {width}x{height}")]
    InvalidCardSize { width: i32, height: i32 },

    #[error("Invalid value for {name}: {value}")]
    InvalidPercentage { name: &'static str, value: f32 },

    #[error("Pattern calibration failed: {0}")]
    Layout(#[from] LayoutError),
}

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to format script text: {0}")]
    Format(#[from] std::fmt::Error),
}
