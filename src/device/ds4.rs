use super::DeviceProfile;
use crate::input::{KeyBindings, BTN_LEFT, BTN_TOOL_DOUBLETAP, BTN_TOUCH};

/// DualShock 4 touchpad as exposed by hid-sony / hid-playstation.
pub const DS4: DeviceProfile = DeviceProfile {
    name: "DualShock 4 Touchpad",

    resolution: (1920, 943),

    bindings: KeyBindings {
        first_finger: BTN_TOUCH,
        second_finger: BTN_TOOL_DOUBLETAP,
        button: BTN_LEFT,
    },
};
