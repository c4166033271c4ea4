use std::fs::{File, OpenOptions};
use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use evdevil::event::Abs;
use evdevil::Evdev;

use crate::error::DeviceError;

/// An open evdev node in non-blocking mode.
///
/// The node is opened read-only with `O_NONBLOCK`. Records are read through
/// `stream`, a second descriptor on the same open file, so the grab applies
/// to both.
pub struct TouchpadDevice {
    path: PathBuf,
    evdev: Evdev,
    stream: File,
}

impl TouchpadDevice {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| DeviceError::Open {
            path: path.clone(),
            source,
        };

        let stream = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&path)
            .map_err(open_err)?;
        let fd = stream.try_clone().map(OwnedFd::from).map_err(open_err)?;
        let evdev = Evdev::from_owned_fd(fd).map_err(open_err)?;

        match evdev.name() {
            Ok(name) => log::info!("Opened {} ({})", path.display(), name),
            Err(_) => log::info!("Opened {}", path.display()),
        }

        Ok(Self {
            path,
            evdev,
            stream,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raw_fd(&self) -> RawFd {
        self.evdev.as_raw_fd()
    }

    /// Take exclusive delivery of this device's events (EVIOCGRAB).
    pub fn grab(&self) -> Result<(), DeviceError> {
        self.evdev.grab().map_err(DeviceError::Grab)?;
        log::info!("Grabbed {}", self.path.display());
        Ok(())
    }

    pub fn ungrab(&self) -> Result<(), DeviceError> {
        self.evdev.ungrab().map_err(DeviceError::Grab)?;
        log::info!("Released grab on {}", self.path.display());
        Ok(())
    }

    /// Current single-touch ABS_X/ABS_Y values.
    pub fn finger_position(&self) -> Result<(i32, i32), DeviceError> {
        let x = self
            .evdev
            .abs_info(Abs::X)
            .map_err(|source| DeviceError::AxisQuery { axis: "X", source })?;
        let y = self
            .evdev
            .abs_info(Abs::Y)
            .map_err(|source| DeviceError::AxisQuery { axis: "Y", source })?;

        Ok((x.value(), y.value()))
    }

    /// Record stream for the decoder.
    pub fn stream(&mut self) -> &mut File {
        &mut self.stream
    }
}
