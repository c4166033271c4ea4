//! Dump raw input events from a local device for debugging.

use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use crate::device::TouchpadDevice;
use crate::error::DeviceError;
use crate::input::{parse_input_event, EV_ABS, EV_KEY, EV_SYN, INPUT_EVENT_SIZE};

const IDLE_SLEEP: Duration = Duration::from_millis(5);

pub fn code_name(ty: u16, code: u16) -> String {
    match ty {
        EV_SYN => "SYN_REPORT".into(),
        EV_KEY => format!("KEY/{}", code),
        EV_ABS => {
            let abs = match code {
                0x00 => "X",
                0x01 => "Y",
                0x2f => "MT_SLOT",
                0x30 => "MT_TOUCH_MAJOR",
                0x31 => "MT_TOUCH_MINOR",
                0x35 => "MT_POSITION_X",
                0x36 => "MT_POSITION_Y",
                0x39 => "MT_TRACKING_ID",
                _ => "?",
            };
            format!("ABS_{}({})", abs, code)
        }
        _ => format!("type{} code{}", ty, code),
    }
}

/// Print every record until the device fails.
pub fn run_dump(device: &mut TouchpadDevice) -> Result<(), DeviceError> {
    eprintln!("Dumping events from {} (Ctrl+C to stop):\n", device.path().display());
    let mut buf = [0u8; INPUT_EVENT_SIZE];
    let mut n = 0u64;

    loop {
        match device.stream().read(&mut buf) {
            Ok(len) if len == INPUT_EVENT_SIZE => {
                if let Some(ev) = parse_input_event(&buf) {
                    n += 1;
                    let name = code_name(ev.event_type().raw(), ev.raw_code());
                    println!("{:6}  {}  value={}", n, name, ev.raw_value());
                }
            }
            Ok(_) => thread::sleep(IDLE_SLEEP),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => thread::sleep(IDLE_SLEEP),
            Err(e) => return Err(DeviceError::Read(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_names() {
        assert_eq!(code_name(EV_SYN, 0), "SYN_REPORT");
        assert_eq!(code_name(EV_KEY, 330), "KEY/330");
        assert_eq!(code_name(EV_ABS, 0x2f), "ABS_MT_SLOT(47)");
        assert_eq!(code_name(EV_ABS, 0x7f), "ABS_?(127)");
        assert_eq!(code_name(4, 5), "type4 code5");
    }
}
