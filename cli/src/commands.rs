pub mod connect;
pub mod pair;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wadb")]
#[command(version)]
#[command(about = "Pair and connect to devices over adb wireless debugging.")]
pub struct CommandLine {
    /// Name or path of the adb binary
    #[arg(long, global = true, default_value = "adb")]
    pub adb: String,

    /// Give up on an adb invocation after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pair with a device showing a wireless debugging pairing code
    #[command(alias = "p")]
    Pair,
    /// Connect to an already paired device
    #[command(alias = "c")]
    Connect,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
