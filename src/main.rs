//! # Pedal Pager
//!
//! Turn pages hands-free with a Skoorb Diffjoy foot pedal.
//!
//! This application reads the pedal's raw position reports from its hidraw
//! node, quantizes them into discrete steps and taps a key combination on a
//! uinput virtual keyboard once per step transition.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber
//!    - Locate the pedal under `/sys/class/hidraw` (exit 1 if absent)
//!    - Open the device node read-only and register the virtual keyboard
//!
//! 2. **Main Loop**
//!    - Read one 2-byte sample at a time, quantize, dispatch
//!    - Tap `space` / `shift+.` / `shift+,` on transitions
//!    - Handle Ctrl+C for graceful shutdown
//!
//! 3. **Shutdown**
//!    - Both stream end and Ctrl+C exit with status 0
//!    - The device handle is released on every exit path
//!
//! # Errors
//!
//! Exits with status 1 and a diagnostic only when no pedal is found.

use anyhow::Result;
use tracing::info;
use tracing_subscriber;

mod device;
mod error;
mod keys;
mod pedal;
mod runner;

use device::SampleReader;
use error::PedalPagerError;
use keys::UinputKeyboard;
use pedal::StepTracker;
use runner::RunOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Pedal Pager v{} starting...", env!("CARGO_PKG_VERSION"));

    let dev_path = device::locate().ok_or(PedalPagerError::DeviceNotFound)?;

    let handle = device::open(&dev_path).await?;
    info!("Reading pedal reports from {}", dev_path.display());

    let mut samples = SampleReader::new(handle);
    let mut tracker = StepTracker::new();
    let mut keyboard = UinputKeyboard::new()?;

    info!("Press Ctrl+C to exit");

    let outcome = runner::run(&mut samples, &mut tracker, &mut keyboard, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;

    match outcome {
        RunOutcome::StreamClosed => info!("Pedal stream closed, exiting"),
        RunOutcome::Interrupted => info!("Received Ctrl+C, exiting"),
    }

    Ok(())
}
