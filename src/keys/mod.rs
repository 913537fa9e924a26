//! # Keys Module
//!
//! Translation of pedal actions into keyboard output.
//!
//! This module handles:
//! - The fixed action-to-key-combination mapping
//! - The key-emission seam ([`KeySink`]) and its uinput implementation

pub mod chord;
pub mod sink;

pub use chord::{chord_for, KeyChord};
pub use sink::{KeySink, UinputKeyboard};
