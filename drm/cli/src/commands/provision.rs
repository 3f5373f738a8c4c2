use anyhow::{Context, Result};
use clap::Args;

use drm_mock::{
    MOCK_SCHEME_UUID, PROP_DEFAULT_URL, PROP_REQUEST, PROP_RESPONSE, create_drm_factory,
};

/**
    Drive a mock DRM plugin through a provisioning round trip.
*/
#[derive(Args)]
pub struct ProvisionCommand {
    /// Provisioning request blob the plugin should hand back, as hex.
    #[arg(long, default_value = "1020")]
    request: String,

    /// Default URL the plugin should hand back.
    #[arg(long, default_value = "http://provision.mock/")]
    default_url: String,
}

impl ProvisionCommand {
    pub fn run(self) -> Result<()> {
        let request_blob = hex::decode(&self.request).context("--request is not valid hex")?;

        let factory = create_drm_factory();
        let plugin = factory.create_plugin(&MOCK_SCHEME_UUID);

        plugin.set_property_byte_array(PROP_REQUEST, &request_blob)?;
        plugin.set_property_string(PROP_DEFAULT_URL, &self.default_url)?;

        let request = plugin.provision_request()?;
        println!("request:    {}", hex::encode(&request.message));
        println!("defaultUrl: {}", request.default_url);

        plugin.provide_provision_response(&[0x10, 0x20])?;
        println!(
            "{PROP_RESPONSE}: {}",
            hex::encode(plugin.property_byte_array(PROP_RESPONSE)?)
        );
        Ok(())
    }
}
