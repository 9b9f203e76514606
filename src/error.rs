use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("polygons must be at least 1, got {0}")]
    TooFewPolygons(u32),
    #[error("speed must be at least 3, got {0}")]
    SpeedTooLow(i32),
    #[error("speed must be at most {max}, got {speed}")]
    SpeedTooHigh { speed: i32, max: i32 },
    #[error("vertices must be at least 3, got {0}")]
    TooFewVertices(usize),
    #[error("layers must be at least 1, got {0}")]
    TooFewLayers(usize),
    #[error("tick interval must be at least 1ms, got {0}ms")]
    TickIntervalTooShort(u64),
    #[error("viewport must be larger than {min}x{min}, got {width}x{height}")]
    ViewportTooSmall { width: u32, height: u32, min: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("surface error: {0}")]
pub struct SurfaceError(pub String);

#[derive(Debug, Error)]
pub enum MystifyError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("viewport {width}x{height} leaves no room to place vertices")]
    ViewportTooSmall { width: i32, height: i32 },
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("failed to install signal handler: {0}")]
    Signal(#[from] std::io::Error),
}
