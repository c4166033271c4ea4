//! Gamepad touchpad reader for Linux evdev devices.
//!
//! [`pad::Touchpad`] opens a device and runs one decode pass per call to
//! `process`, turning the raw multi-touch stream into
//! [`input::Notification`]s. [`handwriting`] holds the stroke matching used
//! to feed touchpad drawing into a character recognizer.

pub mod config;
pub mod device;
pub mod dump;
pub mod error;
pub mod handwriting;
pub mod input;
pub mod pad;

pub use error::DeviceError;
pub use input::{Finger, KeyBindings, Notification, TouchDecoder};
pub use pad::Touchpad;
