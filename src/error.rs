//! Error types for layout generation

use std::fmt;

/// Errors that can occur during layout generation or queries
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Triangulation input or intermediate geometry is degenerate
    DegenerateGeometry(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            LayoutError::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
