//! # Runner Module
//!
//! Wires the sample stream, quantizer, transition tracker and key sink into
//! one continuous loop.
//!
//! The loop owns no resources itself: the device handle lives inside the
//! [`SampleReader`] the caller passes in and is released when that reader is
//! dropped, whichever way the loop exits. Cancellation is a future supplied
//! by the caller (Ctrl+C in the binary); when it resolves, the in-flight
//! read is dropped and the loop ends without emitting a further key.
//!
//! A read error is deliberately folded into the clean-shutdown path here:
//! from the outside, a pedal being unplugged and the stream ending look the
//! same, and neither is a failure of this process. The reader keeps the two
//! outcomes apart for callers that need the distinction.

use std::future::Future;

use tokio::io::AsyncRead;
use tracing::{debug, info, warn};

use crate::device::SampleReader;
use crate::keys::{chord_for, KeySink};
use crate::pedal::{step_for_sample, StepTracker};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The sample stream ended (device closed, disconnected or errored)
    StreamClosed,
    /// The shutdown future resolved
    Interrupted,
}

/// Drive the pedal pipeline until the stream ends or shutdown is requested
///
/// Each sample is fully processed (quantized, dispatched, and the resulting
/// key combination tapped, if any) before the next read is issued, so
/// throughput follows the pedal's own report rate.
///
/// Sink failures are logged and skipped: the sink is fire-and-forget and a
/// lost key tap must not bring the pipeline down.
pub async fn run<R, S, F>(
    samples: &mut SampleReader<R>,
    tracker: &mut StepTracker,
    sink: &mut S,
    shutdown: F,
) -> RunOutcome
where
    R: AsyncRead + Unpin,
    S: KeySink,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            read = samples.next_sample() => {
                let raw = match read {
                    Ok(Some(raw)) => raw,
                    Ok(None) => {
                        info!("Sample stream ended");
                        return RunOutcome::StreamClosed;
                    }
                    Err(e) => {
                        // Unplug and clean closure are equivalent out here
                        debug!("Sample stream failed: {}", e);
                        return RunOutcome::StreamClosed;
                    }
                };

                let step = step_for_sample(raw);
                debug!("Sample {} -> step {}", raw, step);

                if let Some(action) = tracker.process_step(step) {
                    let chord = chord_for(action);
                    info!("{:?}: tapping {}", action, chord);
                    if let Err(e) = sink.tap(chord).await {
                        warn!("Failed to tap {}: {}", chord, e);
                    }
                }
            }

            _ = &mut shutdown => {
                info!("Shutdown requested, stopping");
                return RunOutcome::Interrupted;
            }
        }
    }
}
