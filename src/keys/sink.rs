//! # Key Sink Module
//!
//! The key-emission seam and its uinput-backed implementation.
//!
//! [`KeySink`] is fire-and-forget: the pipeline hands over a [`KeyChord`]
//! and does not wait for any acknowledgement from the receiving
//! application. The production sink is a uinput virtual keyboard that
//! carries exactly the keys this program can ever emit.

use async_trait::async_trait;
use evdev::{uinput::VirtualDeviceBuilder, AttributeSet, EventType, InputEvent, Key};
use tracing::{debug, info};

use crate::error::{PedalPagerError, Result};
use crate::keys::chord::KeyChord;

/// Name the virtual keyboard registers under (shown in `evtest` etc.)
pub const VIRTUAL_KEYBOARD_NAME: &str = "Pedal Pager Keyboard";

/// Fire-and-forget key-combination sink
#[async_trait]
pub trait KeySink: Send {
    /// Tap a key combination: press and release, modifiers included
    async fn tap(&mut self, chord: KeyChord) -> Result<()>;
}

/// uinput virtual keyboard
///
/// Registers a virtual input device whose capabilities are limited to the
/// shift modifier and the three base keys of the fixed mapping.
pub struct UinputKeyboard {
    device: evdev::uinput::VirtualDevice,
}

impl std::fmt::Debug for UinputKeyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UinputKeyboard").finish_non_exhaustive()
    }
}

impl UinputKeyboard {
    /// Create the virtual keyboard under the default device name
    ///
    /// # Errors
    ///
    /// Returns `VirtualKeyboard` if `/dev/uinput` is unavailable or the
    /// device cannot be registered (typically a permissions problem).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pedal_pager::keys::UinputKeyboard;
    ///
    /// let keyboard = UinputKeyboard::new()?;
    /// # Ok::<(), pedal_pager::error::PedalPagerError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_name(VIRTUAL_KEYBOARD_NAME)
    }

    /// Create the virtual keyboard under a custom device name
    pub fn with_name(name: &str) -> Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(Key::KEY_LEFTSHIFT);
        keys.insert(Key::KEY_SPACE);
        keys.insert(Key::KEY_DOT);
        keys.insert(Key::KEY_COMMA);

        let device = VirtualDeviceBuilder::new()
            .map_err(|e| PedalPagerError::VirtualKeyboard(format!("Failed to open uinput: {}", e)))?
            .name(name)
            .with_keys(&keys)
            .map_err(|e| {
                PedalPagerError::VirtualKeyboard(format!("Failed to set key capabilities: {}", e))
            })?
            .build()
            .map_err(|e| {
                PedalPagerError::VirtualKeyboard(format!("Failed to register device: {}", e))
            })?;

        info!("Virtual keyboard registered as \"{}\"", name);
        Ok(Self { device })
    }

    fn key_event(key: Key, value: i32) -> InputEvent {
        InputEvent::new(EventType::KEY, key.code(), value)
    }
}

#[async_trait]
impl KeySink for UinputKeyboard {
    async fn tap(&mut self, chord: KeyChord) -> Result<()> {
        // Press frame, then release frame in reverse order; emit() appends
        // the report synchronization event itself
        let mut press = Vec::with_capacity(2);
        let mut release = Vec::with_capacity(2);

        if chord.shift {
            press.push(Self::key_event(Key::KEY_LEFTSHIFT, 1));
            release.push(Self::key_event(chord.key, 0));
            release.push(Self::key_event(Key::KEY_LEFTSHIFT, 0));
        } else {
            release.push(Self::key_event(chord.key, 0));
        }
        press.push(Self::key_event(chord.key, 1));

        self.device
            .emit(&press)
            .and_then(|_| self.device.emit(&release))
            .map_err(|e| PedalPagerError::VirtualKeyboard(format!("Failed to emit {}: {}", chord, e)))?;

        debug!("Tapped {}", chord);
        Ok(())
    }
}
