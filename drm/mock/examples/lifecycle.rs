//! Full license lifecycle against the mock plugin pair, the way a
//! conformance harness drives it: seed the reflection properties, open a
//! session, run the license exchange, and read the inputs back.
//!
//! Run with:
//!     cargo run -p drm-mock --example lifecycle

use drm_core::{LicenseType, StringMap};
use drm_mock::{
    MOCK_SCHEME_UUID, PROP_DEFAULT_URL, PROP_INIT_DATA, PROP_MIME_TYPE, PROP_OPT_PARAMS,
    PROP_REQUEST, PROP_RESPONSE, create_drm_factory,
};

fn main() -> anyhow::Result<()> {
    let factory = create_drm_factory();
    anyhow::ensure!(factory.is_scheme_supported(&MOCK_SCHEME_UUID));
    let plugin = factory.create_plugin(&MOCK_SCHEME_UUID);

    // The harness pre-sets the values the plugin hands back as outputs.
    plugin.set_property_byte_array(PROP_REQUEST, &[0xaa, 0xbb, 0xcc])?;
    plugin.set_property_string(PROP_DEFAULT_URL, "http://license.mock/")?;

    let session = plugin.open_session()?;
    eprintln!("Opened session {session}");

    let opts: StringMap = [("track", "video"), ("bitrate", "480")].into_iter().collect();
    let request = plugin.license_request(
        &session,
        &[0x01, 0x02, 0x03],
        "video/mp4",
        LicenseType::Streaming,
        &opts,
    )?;
    println!("request:    {}", hex::encode(&request.message));
    println!("defaultUrl: {}", request.default_url);

    // The inputs are now readable through the reflection properties.
    for name in [PROP_MIME_TYPE, PROP_OPT_PARAMS] {
        println!("{name}: {}", plugin.property_string(name)?);
    }
    println!(
        "{PROP_INIT_DATA}: {}",
        hex::encode(plugin.property_byte_array(PROP_INIT_DATA)?)
    );

    plugin.provide_license_response(&session, &[0xde, 0xad, 0xbe, 0xef])?;
    println!(
        "{PROP_RESPONSE}: {}",
        hex::encode(plugin.property_byte_array(PROP_RESPONSE)?)
    );

    let status = plugin.query_license_status(&session)?;
    for (name, value) in status.iter() {
        println!("status {name} = {value}");
    }

    plugin.remove_license(&session)?;
    plugin.close_session(&session)?;
    eprintln!("Session closed");
    Ok(())
}
