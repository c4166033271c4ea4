//! The touchpad object an application drives once per frame.

use std::os::fd::RawFd;
use std::path::Path;

use crate::device::{DeviceProfile, TouchpadDevice};
use crate::error::DeviceError;
use crate::input::{KeyBindings, Notification, TouchDecoder};

/// Owns at most one open device and the decoder state that outlives it.
///
/// Reopening keeps the last known finger and button state; only dropping the
/// `Touchpad` forgets it.
pub struct Touchpad {
    profile: &'static DeviceProfile,
    device: Option<TouchpadDevice>,
    decoder: TouchDecoder,
}

impl Touchpad {
    pub fn new(profile: &'static DeviceProfile) -> Self {
        Self::with_bindings(profile, profile.bindings)
    }

    pub fn with_bindings(profile: &'static DeviceProfile, bindings: KeyBindings) -> Self {
        Self {
            profile,
            device: None,
            decoder: TouchDecoder::new(bindings),
        }
    }

    /// Open `path`, closing whatever was open before.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), DeviceError> {
        self.close();
        self.device = Some(TouchpadDevice::open(path)?);
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(device) = self.device.take() {
            log::info!("Closed {}", device.path().display());
        }
    }

    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    pub fn raw_fd(&self) -> Option<RawFd> {
        self.device.as_ref().map(TouchpadDevice::raw_fd)
    }

    pub fn grab(&self) -> Result<(), DeviceError> {
        self.device()?.grab()
    }

    pub fn ungrab(&self) -> Result<(), DeviceError> {
        self.device()?.ungrab()
    }

    /// Run one decode pass. Without an open device this is a no-op.
    ///
    /// A read error is returned as is; the device stays open and the caller
    /// decides whether to close it.
    pub fn process(&mut self) -> Result<Vec<Notification>, DeviceError> {
        let Some(device) = self.device.as_mut() else {
            return Ok(Vec::new());
        };

        self.decoder.decode_pass(device.stream()).map_err(|e| {
            log::error!("Reading {} failed: {}", device.path().display(), e);
            e
        })
    }

    pub fn finger_position(&self) -> Result<(i32, i32), DeviceError> {
        self.device()?.finger_position()
    }

    /// Logical size of the touch surface.
    pub fn resolution(&self) -> (i32, i32) {
        self.profile.resolution
    }

    pub fn decoder(&self) -> &TouchDecoder {
        &self.decoder
    }

    fn device(&self) -> Result<&TouchpadDevice, DeviceError> {
        self.device.as_ref().ok_or(DeviceError::NoDevice)
    }
}

impl Drop for Touchpad {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DS4;
    use crate::input::Finger;

    #[test]
    fn test_closed_pad_guards_operations() {
        let pad = Touchpad::new(&DS4);
        assert!(!pad.is_open());
        assert_eq!(pad.raw_fd(), None);
        assert!(matches!(pad.grab(), Err(DeviceError::NoDevice)));
        assert!(matches!(pad.ungrab(), Err(DeviceError::NoDevice)));
        assert!(matches!(pad.finger_position(), Err(DeviceError::NoDevice)));
    }

    #[test]
    fn test_process_without_device_is_empty() {
        let mut pad = Touchpad::new(&DS4);
        assert!(pad.process().unwrap().is_empty());
        assert!(!pad.decoder().is_touching(Finger::First));
    }

    #[test]
    fn test_resolution_comes_from_profile() {
        assert_eq!(Touchpad::new(&DS4).resolution(), (1920, 943));
    }

    #[test]
    fn test_open_missing_device_reports_errno() {
        let dir = tempfile::tempdir().unwrap();
        let mut pad = Touchpad::new(&DS4);

        let err = pad.open(dir.path().join("event42")).unwrap_err();
        assert!(matches!(err, DeviceError::Open { .. }));
        assert_eq!(err.errno(), Some(2));
        assert!(!pad.is_open());
    }

    #[test]
    fn test_open_missing_event_node_keeps_errno() {
        let mut pad = Touchpad::new(&DS4);

        let err = pad.open("/dev/input/event9999").unwrap_err();
        assert!(matches!(err, DeviceError::Open { .. }));
        assert_eq!(err.errno(), Some(2));
        assert!(!pad.is_open());
    }

    #[test]
    fn test_custom_bindings_reach_decoder() {
        let keys = KeyBindings {
            first_finger: 1,
            second_finger: 2,
            button: 3,
        };
        let pad = Touchpad::with_bindings(&DS4, keys);
        assert_eq!(pad.decoder().bindings(), &keys);
    }
}
