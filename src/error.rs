use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to a touchpad device.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("opening {} failed: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nothing is open; recoverable, the caller can open a device and retry.
    #[error("no device open")]
    NoDevice,

    #[error("reading device failed: {0}")]
    Read(#[source] io::Error),

    #[error("failed to get {axis} axis of device: {source}")]
    AxisQuery {
        axis: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("changing device grab failed: {0}")]
    Grab(#[source] io::Error),

    #[error("enumerating input devices failed: {0}")]
    Discover(#[source] io::Error),
}

impl DeviceError {
    /// OS error code behind the failure, if there is one.
    pub fn errno(&self) -> Option<i32> {
        match self {
            DeviceError::Open { source, .. }
            | DeviceError::AxisQuery { source, .. }
            | DeviceError::Read(source)
            | DeviceError::Grab(source)
            | DeviceError::Discover(source) => source.raw_os_error(),
            DeviceError::NoDevice => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_from_open() {
        let err = DeviceError::Open {
            path: PathBuf::from("/dev/input/event99"),
            source: io::Error::from_raw_os_error(2),
        };
        assert_eq!(err.errno(), Some(2));
        assert!(err.to_string().contains("/dev/input/event99"));
    }

    #[test]
    fn test_no_device_has_no_errno() {
        assert_eq!(DeviceError::NoDevice.errno(), None);
    }
}
