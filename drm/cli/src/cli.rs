use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{LifecycleCommand, ProvisionCommand, SecureStopsCommand};

/**
    Driver for the mock DRM plugin pair.
*/
#[derive(Parser)]
#[command(name = "drm-cli")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full license round trip against a fresh mock DRM plugin.
    Lifecycle(LifecycleCommand),
    /// Run a provisioning round trip.
    Provision(ProvisionCommand),
    /// Print the plugin's fixed secure-stop payloads.
    SecureStops(SecureStopsCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Lifecycle(cmd) => cmd.run(),
            Command::Provision(cmd) => cmd.run(),
            Command::SecureStops(cmd) => cmd.run(),
        }
    }
}
