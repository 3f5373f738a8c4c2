use anyhow::{Context, Result, ensure};
use clap::Args;

use drm_core::{LicenseType, StringMap};
use drm_mock::{
    MOCK_SCHEME_UUID, PROP_DEFAULT_URL, PROP_INIT_DATA, PROP_LICENSE_TYPE, PROP_MIME_TYPE,
    PROP_OPT_PARAMS, PROP_REQUEST, PROP_RESPONSE, create_drm_factory,
};

/**
    Drive a mock DRM plugin through a complete license round trip and print
    what each step produced.
*/
#[derive(Args)]
pub struct LifecycleCommand {
    /// MIME type recorded in the license request.
    #[arg(long, default_value = "video/mp4")]
    mime_type: String,

    /// License type to request.
    #[arg(long, default_value = "streaming")]
    license_type: LicenseType,

    /// Request blob the plugin should hand back, as hex.
    #[arg(long, default_value = "aabbcc")]
    request: String,

    /// Default URL the plugin should hand back.
    #[arg(long, default_value = "http://license.mock/")]
    default_url: String,

    /// Optional parameters recorded in the request, as `name=value`.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
}

impl LifecycleCommand {
    pub fn run(self) -> Result<()> {
        let request_blob = hex::decode(&self.request).context("--request is not valid hex")?;
        let opts = parse_params(&self.params)?;

        let factory = create_drm_factory();
        ensure!(
            factory.is_scheme_supported(&MOCK_SCHEME_UUID),
            "factory rejected its own scheme UUID"
        );
        let plugin = factory.create_plugin(&MOCK_SCHEME_UUID);

        // Seed the outputs the plugin reflects back.
        plugin.set_property_byte_array(PROP_REQUEST, &request_blob)?;
        plugin.set_property_string(PROP_DEFAULT_URL, &self.default_url)?;

        let session = plugin.open_session()?;
        println!("session:    {session}");

        let request = plugin.license_request(
            &session,
            &[0x01, 0x02, 0x03, 0x04],
            &self.mime_type,
            self.license_type,
            &opts,
        )?;
        println!("request:    {}", hex::encode(&request.message));
        println!("defaultUrl: {}", request.default_url);

        plugin.provide_license_response(&session, &[0xde, 0xad, 0xbe, 0xef])?;

        println!();
        println!("reflected properties:");
        for name in [PROP_MIME_TYPE, PROP_LICENSE_TYPE, PROP_OPT_PARAMS] {
            println!("  {name} = {}", plugin.property_string(name)?);
        }
        for name in [PROP_INIT_DATA, PROP_RESPONSE] {
            println!("  {name} = {}", hex::encode(plugin.property_byte_array(name)?));
        }

        println!();
        println!("license status:");
        for (name, value) in plugin.query_license_status(&session)?.iter() {
            println!("  {name} = {value}");
        }

        plugin.remove_license(&session)?;
        plugin.close_session(&session)?;
        println!();
        println!("session closed");
        Ok(())
    }
}

fn parse_params(params: &[String]) -> Result<StringMap> {
    let mut map = StringMap::new();
    for param in params {
        let (name, value) = param
            .split_once('=')
            .with_context(|| format!("expected NAME=VALUE, got '{param}'"))?;
        map.insert(name, value);
    }
    Ok(map)
}
