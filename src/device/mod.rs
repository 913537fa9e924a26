//! # Device Module
//!
//! Skoorb Diffjoy pedal discovery and report reading.
//!
//! This module handles:
//! - Locating the pedal's hidraw node via the sysfs uevent metadata
//! - Reading the raw report stream as signed 16-bit position samples

use std::path::Path;

use tokio::fs::File;
use tracing::debug;

use crate::error::Result;

pub mod locator;
pub mod reader;

pub use locator::locate;
pub use reader::SampleReader;

/// Open a pedal device node read-only
///
/// The returned handle is the single shared resource of a run; dropping it
/// (on any exit path) releases the device.
pub async fn open(path: &Path) -> Result<File> {
    let handle = File::open(path).await?;
    debug!("Opened {}", path.display());
    Ok(handle)
}
