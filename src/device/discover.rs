//! Find touchpad-like input devices under /dev/input.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use evdevil::event::Abs;
use evdevil::Evdev;

use crate::error::DeviceError;

const INPUT_DIR: &str = "/dev/input";

/// Map of device node to device name for every pointer-like device with a
/// known physical size (absolute X/Y carrying a resolution).
pub fn list_devices() -> Result<BTreeMap<PathBuf, String>, DeviceError> {
    list_devices_in(Path::new(INPUT_DIR))
}

fn list_devices_in(dir: &Path) -> Result<BTreeMap<PathBuf, String>, DeviceError> {
    let mut out = BTreeMap::new();

    for entry in std::fs::read_dir(dir).map_err(DeviceError::Discover)?.flatten() {
        let path = entry.path();
        if !is_event_node(&path) {
            continue;
        }

        let evdev = match Evdev::open(&path) {
            Ok(evdev) => evdev,
            Err(e) => {
                log::debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if !has_physical_size(&evdev) {
            continue;
        }

        let name = evdev.name().unwrap_or_else(|_| "unknown".into());
        log::debug!("Found {} ({})", path.display(), name);
        out.insert(path, name);
    }

    Ok(out)
}

fn is_event_node(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.starts_with("event"))
        .unwrap_or(false)
}

fn has_physical_size(evdev: &Evdev) -> bool {
    [Abs::X, Abs::Y].into_iter().all(|abs| {
        evdev
            .abs_info(abs)
            .map(|info| info.resolution() > 0)
            .unwrap_or(false)
    })
}
