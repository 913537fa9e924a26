//! # Key Chord Module
//!
//! Symbolic key combinations and the fixed pedal-action mapping.
//!
//! ## Mapping
//!
//! | Action | Combination | Typical effect |
//! |--------|-------------|----------------|
//! | Center | space | pause/resume, reset view |
//! | Increase | shift+. (`>`) | next page |
//! | Decrease | shift+, (`<`) | previous page |
//!
//! The mapping is a fixed design decision of the device; it is not
//! configurable.

use std::fmt;

use evdev::Key;

use crate::pedal::PedalAction;

/// A symbolic key combination: one base key, optionally shifted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// Base key of the combination
    pub key: Key,
    /// Whether the combination is taken with shift held
    pub shift: bool,
}

impl KeyChord {
    /// A bare key press
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// A key press with shift held
    #[must_use]
    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.key {
            Key::KEY_SPACE => "space",
            Key::KEY_DOT => ".",
            Key::KEY_COMMA => ",",
            other => return write!(f, "{}{:?}", if self.shift { "shift+" } else { "" }, other),
        };
        if self.shift {
            write!(f, "shift+{}", name)
        } else {
            f.write_str(name)
        }
    }
}

/// The key combination for a pedal action
///
/// # Examples
///
/// ```
/// use evdev::Key;
/// use pedal_pager::keys::chord::chord_for;
/// use pedal_pager::pedal::PedalAction;
///
/// let chord = chord_for(PedalAction::Increase);
/// assert_eq!(chord.key, Key::KEY_DOT);
/// assert!(chord.shift);
/// ```
#[must_use]
pub fn chord_for(action: PedalAction) -> KeyChord {
    match action {
        PedalAction::Center => KeyChord::plain(Key::KEY_SPACE),
        PedalAction::Increase => KeyChord::shifted(Key::KEY_DOT),
        PedalAction::Decrease => KeyChord::shifted(Key::KEY_COMMA),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_space() {
        assert_eq!(chord_for(PedalAction::Center), KeyChord::plain(Key::KEY_SPACE));
    }

    #[test]
    fn test_increase_maps_to_shift_dot() {
        assert_eq!(
            chord_for(PedalAction::Increase),
            KeyChord::shifted(Key::KEY_DOT)
        );
    }

    #[test]
    fn test_decrease_maps_to_shift_comma() {
        assert_eq!(
            chord_for(PedalAction::Decrease),
            KeyChord::shifted(Key::KEY_COMMA)
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(chord_for(PedalAction::Center).to_string(), "space");
        assert_eq!(chord_for(PedalAction::Increase).to_string(), "shift+.");
        assert_eq!(chord_for(PedalAction::Decrease).to_string(), "shift+,");
    }
}
