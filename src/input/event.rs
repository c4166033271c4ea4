//! Linux `input_event` records as read from `/dev/input/event*`.

use evdevil::event::{EventType, InputEvent};

pub const INPUT_EVENT_SIZE_32: usize = 16;
pub const INPUT_EVENT_SIZE_64: usize = 24;

/// Size of `struct input_event` on the host (timeval + type 2 + code 2 + value 4).
#[cfg(target_pointer_width = "64")]
pub const INPUT_EVENT_SIZE: usize = INPUT_EVENT_SIZE_64;
#[cfg(not(target_pointer_width = "64"))]
pub const INPUT_EVENT_SIZE: usize = INPUT_EVENT_SIZE_32;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;

pub const BTN_LEFT: u16 = 0x110;
pub const BTN_TOUCH: u16 = 0x14a;
pub const BTN_TOOL_DOUBLETAP: u16 = 0x14d;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_MT_SLOT: u16 = 0x2f;
pub const ABS_MT_POSITION_X: u16 = 0x35;
pub const ABS_MT_POSITION_Y: u16 = 0x36;

/// Parse a Linux input_event from raw bytes (32-bit or 64-bit format).
pub fn parse_input_event(buf: &[u8]) -> Option<InputEvent> {
    match buf.len() {
        len if len >= INPUT_EVENT_SIZE_64 => Some(parse_input_event_64(buf)),
        len if len >= INPUT_EVENT_SIZE_32 => Some(parse_input_event_32(buf)),
        _ => None,
    }
}

fn parse_input_event_32(buf: &[u8]) -> InputEvent {
    let ty = u16::from_le_bytes([buf[8], buf[9]]);
    let code = u16::from_le_bytes([buf[10], buf[11]]);
    let value = i32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]);

    InputEvent::new(EventType::from_raw(ty), code, value)
}

fn parse_input_event_64(buf: &[u8]) -> InputEvent {
    let ty = u16::from_le_bytes([buf[16], buf[17]]);
    let code = u16::from_le_bytes([buf[18], buf[19]]);
    let value = i32::from_le_bytes([buf[20], buf[21], buf[22], buf[23]]);

    InputEvent::new(EventType::from_raw(ty), code, value)
}

#[cfg(test)]
pub fn key_event(code: u16, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_KEY), code, value)
}

#[cfg(test)]
pub fn abs_event(code: u16, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_ABS), code, value)
}

/// Serialize an event in the host record layout with a zero timestamp.
#[cfg(test)]
pub fn encode_input_event(ev: &InputEvent) -> [u8; INPUT_EVENT_SIZE] {
    let mut buf = [0u8; INPUT_EVENT_SIZE];
    let base = INPUT_EVENT_SIZE - 8;
    buf[base..base + 2].copy_from_slice(&ev.event_type().raw().to_le_bytes());
    buf[base + 2..base + 4].copy_from_slice(&ev.raw_code().to_le_bytes());
    buf[base + 4..base + 8].copy_from_slice(&ev.raw_value().to_le_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_32bit_layout() {
        let mut buf = [0u8; INPUT_EVENT_SIZE_32];
        buf[8..10].copy_from_slice(&EV_ABS.to_le_bytes());
        buf[10..12].copy_from_slice(&ABS_MT_POSITION_X.to_le_bytes());
        buf[12..16].copy_from_slice(&(-7i32).to_le_bytes());

        let ev = parse_input_event(&buf).unwrap();
        assert_eq!(ev.event_type().raw(), EV_ABS);
        assert_eq!(ev.raw_code(), ABS_MT_POSITION_X);
        assert_eq!(ev.raw_value(), -7);
    }

    #[test]
    fn test_parse_64bit_layout() {
        let mut buf = [0u8; INPUT_EVENT_SIZE_64];
        buf[16..18].copy_from_slice(&EV_KEY.to_le_bytes());
        buf[18..20].copy_from_slice(&330u16.to_le_bytes());
        buf[20..24].copy_from_slice(&1i32.to_le_bytes());

        let ev = parse_input_event(&buf).unwrap();
        assert_eq!(ev.event_type().raw(), EV_KEY);
        assert_eq!(ev.raw_code(), 330);
        assert_eq!(ev.raw_value(), 1);
    }

    #[test]
    fn test_short_buffer() {
        assert!(parse_input_event(&[0u8; 15]).is_none());
    }

    #[test]
    fn test_encode_matches_host_layout() {
        let buf = encode_input_event(&abs_event(ABS_MT_SLOT, 1));
        let ev = parse_input_event(&buf).unwrap();
        assert_eq!(ev.raw_code(), ABS_MT_SLOT);
        assert_eq!(ev.raw_value(), 1);
    }
}
