mod cli;
mod file;

pub use cli::{Cli, Command};

use crate::device::DeviceProfile;
use crate::input::KeyBindings;

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone)]
pub struct Config {
    pub device: Option<String>,
    pub grab: bool,
    pub tick_ms: u64,
    pub keys: KeyBindings,
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli, profile: &DeviceProfile) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self {
            device: cli.device.clone().or(file_config.device),
            grab: if cli.no_grab {
                false
            } else {
                cli.grab || file_config.grab
            },
            tick_ms: cli.tick_ms.unwrap_or(file_config.tick_ms),
            keys: file_config.keys.unwrap_or(profile.bindings),
        }
    }

    pub fn device_path(&self) -> Result<&str, &'static str> {
        self.device
            .as_deref()
            .ok_or("No device given (use --device or set `device` in ds4pad.toml)")
    }

    /// Whether `command` should take the device exclusively. Dumping only
    /// observes, so it never grabs.
    pub fn grab_for(&self, command: Command) -> bool {
        match command {
            Command::Watch => self.grab,
            Command::List | Command::Position | Command::Resolution | Command::Dump => false,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.tick_ms == 0 {
            return Err("tick_ms must be greater than zero");
        }
        Ok(())
    }
}
