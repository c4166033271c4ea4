mod decoder;
mod event;

pub use decoder::{Finger, KeyBindings, Notification, TouchDecoder};
pub use event::{
    parse_input_event, ABS_MT_POSITION_X, ABS_MT_POSITION_Y, ABS_MT_SLOT, ABS_X, ABS_Y, BTN_LEFT,
    BTN_TOOL_DOUBLETAP, BTN_TOUCH, EV_ABS, EV_KEY, EV_SYN, INPUT_EVENT_SIZE,
};
