mod discover;
mod ds4;
mod handle;

pub use discover::list_devices;
pub use ds4::DS4;
pub use handle::TouchpadDevice;

use crate::input::KeyBindings;

/// Device-specific parameters for touchpad handling.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub name: &'static str,

    // Logical size of the touch surface, in device units
    pub resolution: (i32, i32),

    // Key codes for finger contact and the pad click
    pub bindings: KeyBindings,
}

impl DeviceProfile {
    /// Profile used when nothing else is configured.
    pub fn current() -> &'static Self {
        &DS4
    }
}
