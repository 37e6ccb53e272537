mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, connect, pair};
use wadb_common::config::Config;

use crate::terminal::{logging, print};

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        adb: commands.adb,
        timeout: commands.timeout.map(Duration::from_secs),
    };

    let result = match commands.command {
        Commands::Pair => pair::pair(&cfg).await,
        Commands::Connect => connect::connect(&cfg).await,
    };

    // One top-level handler per flow: whatever failed is shown exactly once.
    if let Err(err) = result {
        print::error(&format!("Error: {err:#}"));
        std::process::exit(1);
    }
}
