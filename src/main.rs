use std::thread;
use std::time::Duration;

use clap::Parser;

use ds4pad::config::{Cli, Command, Config};
use ds4pad::device::{self, DeviceProfile, TouchpadDevice};
use ds4pad::{dump, DeviceError, Notification, Touchpad};

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = DeviceProfile::current();
    let config = Config::load(&cli, profile);
    config.validate()?;

    match cli.command {
        Command::List => {
            for (path, name) in device::list_devices()? {
                println!("{}  {}", path.display(), name);
            }
        }
        Command::Resolution => {
            let (w, h) = profile.resolution;
            println!("{}x{}", w, h);
        }
        Command::Position => {
            let device = TouchpadDevice::open(config.device_path()?)?;
            let (x, y) = device.finger_position()?;
            println!("{} {}", x, y);
        }
        Command::Dump => {
            let mut device = TouchpadDevice::open(config.device_path()?)?;
            dump::run_dump(&mut device)?;
        }
        Command::Watch => watch(&config, profile)?,
    }

    Ok(())
}

fn watch(
    config: &Config,
    profile: &'static DeviceProfile,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = config.device_path()?;
    let tick = Duration::from_millis(config.tick_ms);
    let mut pad = Touchpad::with_bindings(profile, config.keys);

    log::info!(
        "ds4pad starting ({}, device={}, grab={}, tick={}ms)",
        profile.name,
        path,
        config.grab,
        config.tick_ms
    );

    loop {
        if let Err(e) = run_session(&mut pad, path, config.grab_for(Command::Watch), tick) {
            log::error!("{}", e);
        }
        pad.close();
        log::warn!("Device lost, reopening in 2s…");
        thread::sleep(RECONNECT_DELAY);
    }
}

fn run_session(
    pad: &mut Touchpad,
    path: &str,
    grab: bool,
    tick: Duration,
) -> Result<(), DeviceError> {
    pad.open(path)?;

    if grab {
        if let Err(e) = pad.grab() {
            log::warn!("{}; continuing without exclusive access", e);
        }
    }

    let (w, h) = pad.resolution();
    log::info!("Watching {} ({}x{})", path, w, h);

    loop {
        for notification in pad.process()? {
            log_notification(&notification);
        }
        thread::sleep(tick);
    }
}

fn log_notification(notification: &Notification) {
    match *notification {
        Notification::FingerTouching { finger, touching } => {
            log::info!("finger {} touching={}", finger.index(), touching);
        }
        Notification::FingerPosition {
            finger,
            position: (x, y),
            relative: (dx, dy),
        } => {
            log::info!("finger {} at ({}, {}) moved ({}, {})", finger.index(), x, y, dx, dy);
        }
        Notification::PadButton { pressed } => {
            log::info!("pad pressed={}", pressed);
        }
    }
}
