//! Turn a pass of raw touchpad events into finger and button notifications.
//!
//! A pass drains everything the device has queued right now. Within a pass the
//! last value of each key or axis wins; only the end result is compared with
//! what was reported before, so a pass yields at most one notification of
//! each kind per finger.

use std::io::{self, Read};

use evdevil::event::InputEvent;
use serde::Deserialize;

use super::event::{
    parse_input_event, ABS_MT_POSITION_X, ABS_MT_POSITION_Y, ABS_MT_SLOT, ABS_X, ABS_Y,
    BTN_LEFT, BTN_TOOL_DOUBLETAP, BTN_TOUCH, EV_ABS, EV_KEY, INPUT_EVENT_SIZE,
};
use crate::error::DeviceError;

/// Number of contacts tracked. Slots past this are ignored.
const FINGERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    First,
    Second,
}

impl Finger {
    pub const ALL: [Finger; FINGERS] = [Finger::First, Finger::Second];

    pub fn index(self) -> usize {
        match self {
            Finger::First => 0,
            Finger::Second => 1,
        }
    }
}

/// What a decode pass reports to its listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    FingerTouching {
        finger: Finger,
        touching: bool,
    },
    FingerPosition {
        finger: Finger,
        position: (i32, i32),
        relative: (i32, i32),
    },
    PadButton {
        pressed: bool,
    },
}

/// Key codes that carry the touch state of each finger and the pad click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub first_finger: u16,
    pub second_finger: u16,
    pub button: u16,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            first_finger: BTN_TOUCH,
            second_finger: BTN_TOOL_DOUBLETAP,
            button: BTN_LEFT,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct FingerState {
    position: Option<(i32, i32)>,
    touching: bool,
}

/// Values collected during one pass. `None` means "not seen this pass".
#[derive(Debug, Default)]
struct Pass {
    x: [Option<i32>; FINGERS],
    y: [Option<i32>; FINGERS],
    touching: [Option<bool>; FINGERS],
    pressed: Option<bool>,
    slot: Option<i32>,
    second_slot_selected: bool,
    legacy_axes: bool,
}

impl Pass {
    fn feed(&mut self, ev: &InputEvent, keys: &KeyBindings) {
        let code = ev.raw_code();
        let value = ev.raw_value();

        match ev.event_type().raw() {
            EV_KEY => {
                if code == keys.first_finger {
                    self.touching[0] = Some(value != 0);
                } else if code == keys.second_finger {
                    self.touching[1] = Some(value != 0);
                } else if code == keys.button {
                    self.pressed = Some(value != 0);
                }
            }
            EV_ABS => match code {
                ABS_MT_SLOT => {
                    self.slot = Some(value);
                    if value == 1 {
                        self.second_slot_selected = true;
                    }
                }
                ABS_MT_POSITION_X => {
                    if let Some(i) = self.target() {
                        self.x[i] = Some(value);
                    }
                }
                ABS_MT_POSITION_Y => {
                    if let Some(i) = self.target() {
                        self.y[i] = Some(value);
                    }
                }
                ABS_X | ABS_Y => self.legacy_axes = true,
                _ => {}
            },
            _ => {}
        }
    }

    /// Finger that coordinates currently land on. Without a slot selector
    /// they go to the second finger, see `apply_legacy_fallback`.
    fn target(&self) -> Option<usize> {
        match self.slot {
            Some(0) => Some(0),
            Some(1) | None => Some(1),
            Some(_) => None,
        }
    }

    /// Single-touch devices (DS4 over hid-sony without slot events) report
    /// their only contact in the second finger's fields. Move it to the first.
    /// Applies only when legacy ABS_X/ABS_Y were seen and no slot was selected.
    fn apply_legacy_fallback(&mut self) {
        if self.legacy_axes && self.slot.is_none() {
            self.x[0] = self.x[1].take();
            self.y[0] = self.y[1].take();
        }
    }

    /// A slot was selected but never slot 1: the second finger is not
    /// evaluated this pass, even if it has coordinates.
    fn skips_second_finger(&self) -> bool {
        self.slot.is_some() && !self.second_slot_selected
    }
}

/// Last reported touchpad state, one per opened device.
#[derive(Debug, Default)]
pub struct TouchDecoder {
    bindings: KeyBindings,
    fingers: [FingerState; FINGERS],
    button_pressed: bool,
}

impl TouchDecoder {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_touching(&self, finger: Finger) -> bool {
        self.fingers[finger.index()].touching
    }

    pub fn last_position(&self, finger: Finger) -> Option<(i32, i32)> {
        self.fingers[finger.index()].position
    }

    pub fn is_button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Read records from a non-blocking stream until it would block and
    /// decode them as one pass.
    ///
    /// A read error other than `WouldBlock` aborts the pass: nothing is
    /// reported and the stored state is left as it was.
    pub fn decode_pass<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> Result<Vec<Notification>, DeviceError> {
        let mut buf = [0u8; INPUT_EVENT_SIZE];
        let mut pass = Pass::default();
        let mut records = 0usize;

        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) if n != INPUT_EVENT_SIZE => {
                    log::debug!("Skipping short event record ({} bytes)", n);
                }
                Ok(_) => {
                    if let Some(ev) = parse_input_event(&buf) {
                        pass.feed(&ev, &self.bindings);
                        records += 1;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(DeviceError::Read(e)),
            }
        }

        if records > 0 {
            log::trace!("Decoded {} event records", records);
        }

        Ok(self.finish(pass))
    }

    /// Decode an already parsed batch as one pass.
    pub fn decode_events<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> Vec<Notification> {
        let mut pass = Pass::default();
        for ev in events {
            pass.feed(ev, &self.bindings);
        }
        self.finish(pass)
    }

    fn finish(&mut self, mut pass: Pass) -> Vec<Notification> {
        pass.apply_legacy_fallback();

        let mut out = Vec::new();

        for finger in Finger::ALL {
            let state = &mut self.fingers[finger.index()];
            if let Some(touching) = pass.touching[finger.index()] {
                if touching != state.touching {
                    state.touching = touching;
                    out.push(Notification::FingerTouching { finger, touching });
                }
            }
        }

        if let Some(pressed) = pass.pressed {
            if pressed != self.button_pressed {
                self.button_pressed = pressed;
                out.push(Notification::PadButton { pressed });
            }
        }

        out.extend(self.update_position(Finger::First, &pass));

        if pass.skips_second_finger() {
            return out;
        }

        out.extend(self.update_position(Finger::Second, &pass));
        out
    }

    fn update_position(&mut self, finger: Finger, pass: &Pass) -> Option<Notification> {
        let state = &mut self.fingers[finger.index()];
        if !state.touching {
            return None;
        }

        let i = finger.index();
        let (Some(x), Some(y)) = (pass.x[i], pass.y[i]) else {
            return None;
        };
        if state.position == Some((x, y)) {
            return None;
        }

        // No reference yet on first contact.
        let relative = state
            .position
            .map_or((0, 0), |(lx, ly)| (x.saturating_sub(lx), y.saturating_sub(ly)));
        state.position = Some((x, y));

        Some(Notification::FingerPosition {
            finger,
            position: (x, y),
            relative,
        })
    }
}
