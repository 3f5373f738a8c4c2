use anyhow::Result;
use clap::Args;

use drm_mock::{MOCK_SCHEME_UUID, create_drm_factory};

/**
    Print the fixed secure-stop payloads a mock DRM plugin reports.
*/
#[derive(Args)]
pub struct SecureStopsCommand;

impl SecureStopsCommand {
    pub fn run(self) -> Result<()> {
        let factory = create_drm_factory();
        let plugin = factory.create_plugin(&MOCK_SCHEME_UUID);

        for (i, stop) in plugin.secure_stops()?.iter().enumerate() {
            println!("[{i}] {}", hex::encode(stop));
        }
        Ok(())
    }
}
