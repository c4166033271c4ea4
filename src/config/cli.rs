use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ds4pad")]
#[command(about = "Read a gamepad touchpad and report finger and button changes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Touchpad input device path (e.g. /dev/input/event17)
    #[arg(long, global = true, env = "DS4PAD_DEVICE")]
    pub device: Option<String>,

    /// Grab the device so nothing else receives its events
    #[arg(long, global = true)]
    pub grab: bool,

    /// Leave the device shared (overrides config file)
    #[arg(long, global = true)]
    pub no_grab: bool,

    /// Interval between decode passes in milliseconds
    #[arg(long, global = true)]
    pub tick_ms: Option<u64>,

    /// Path to config file
    #[arg(long, global = true, env = "DS4PAD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List touchpad-like input devices
    List,
    /// Print finger and button changes as they happen
    Watch,
    /// Print the current single-touch position
    Position,
    /// Print the logical size of the touch surface
    Resolution,
    /// Dump raw input events for debugging
    Dump,
}
