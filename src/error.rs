//! # Error Types
//!
//! Custom error types for Pedal Pager using `thiserror`.

use thiserror::Error;

/// Main error type for Pedal Pager
#[derive(Debug, Error)]
pub enum PedalPagerError {
    /// No pedal matched the hidraw device scan
    #[error("no recognised pedal device detected")]
    DeviceNotFound,

    /// Virtual keyboard (uinput) errors
    #[error("virtual keyboard error: {0}")]
    VirtualKeyboard(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pedal Pager
pub type Result<T> = std::result::Result<T, PedalPagerError>;
