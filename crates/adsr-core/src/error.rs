//! Layout error types

use thiserror::Error;

/// Errors that can occur while solving the envelope layout
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Canvas too small (or not finite) to hold the envelope below the ceiling buffer
    #[error("Degenerate canvas: {width}x{height} cannot hold an envelope")]
    DegenerateCanvas { width: f32, height: f32 },
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
