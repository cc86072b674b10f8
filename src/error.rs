//! Error types shared by the grid, noise field and generators.

/// Errors raised while configuring or driving a wave grid
#[derive(thiserror::Error, Debug)]
pub enum WaveError {
    /// Invalid grid dimensions or noise parameters, raised before any buffer is allocated
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lattice coordinate outside the grid
    #[error("Domain error: cell ({x}, {y}) is outside a {width}x{height} grid")]
    Domain {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    pub fn configuration<T: ToString>(msg: T) -> Self {
        WaveError::Configuration(msg.to_string())
    }
}

/// Result type alias for wave grid operations
pub type WaveResult<T> = Result<T, WaveError>;
