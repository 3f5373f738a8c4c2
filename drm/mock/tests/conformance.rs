//! Drives the plugin pair through the lifecycle a conformance harness uses:
//! session round trips, license/provisioning reflection through the `mock-*`
//! properties, secure stops, and the fixed license-status map.

use std::sync::Arc;
use std::thread;

use drm_core::{DrmPlugin, LicenseType, PluginError, SessionId, StringMap};
use drm_mock::{
    MOCK_SCHEME_UUID, MockDrmPlugin, PROP_DEFAULT_URL, PROP_INIT_DATA, PROP_LICENSE_TYPE,
    PROP_MIME_TYPE, PROP_OPT_PARAMS, PROP_REQUEST, PROP_RESPONSE, create_crypto_factory,
    create_drm_factory,
};

#[test]
fn scheme_support_is_exact() {
    let drm = create_drm_factory();
    let crypto = create_crypto_factory();

    assert!(drm.is_scheme_supported(&MOCK_SCHEME_UUID));
    assert!(crypto.is_scheme_supported(&MOCK_SCHEME_UUID));

    for flipped_byte in 0..16 {
        let mut uuid = MOCK_SCHEME_UUID;
        uuid[flipped_byte] ^= 0x01;
        assert!(!drm.is_scheme_supported(&uuid), "byte {flipped_byte}");
        assert!(!crypto.is_scheme_supported(&uuid), "byte {flipped_byte}");
    }
}

#[test]
fn open_close_round_trip() {
    let plugin = MockDrmPlugin::new();
    let s1 = plugin.open_session().unwrap();
    assert_eq!(plugin.close_session(&s1), Ok(()));
    assert_eq!(plugin.close_session(&s1), Err(PluginError::SessionNotFound));
}

#[test]
fn license_request_reflection() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();

    plugin
        .set_property_byte_array(PROP_REQUEST, &[0xaa, 0xbb])
        .unwrap();
    plugin
        .set_property_string(PROP_DEFAULT_URL, "http://x")
        .unwrap();

    let opts: StringMap = [("a", "1"), ("b", "2")].into_iter().collect();
    let request = plugin
        .license_request(
            &session,
            &[0x01, 0x02],
            "video/mp4",
            LicenseType::Streaming,
            &opts,
        )
        .unwrap();

    assert_eq!(request.message, vec![0xaa, 0xbb]);
    assert_eq!(request.default_url, "http://x");

    assert_eq!(
        plugin.property_byte_array(PROP_INIT_DATA).unwrap(),
        vec![0x01, 0x02]
    );
    assert_eq!(plugin.property_string(PROP_MIME_TYPE).unwrap(), "video/mp4");
    assert_eq!(plugin.property_string(PROP_LICENSE_TYPE).unwrap(), "1");
    assert_eq!(plugin.property_string(PROP_OPT_PARAMS).unwrap(), "{a,1},{b,2}");
}

#[test]
fn missing_required_property_still_reflects_inputs() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();

    let err = plugin
        .license_request(
            &session,
            &[0x99],
            "audio/mp4",
            LicenseType::Streaming,
            &StringMap::new(),
        )
        .unwrap_err();
    assert_eq!(err, PluginError::PropertyNotFound(PROP_REQUEST.to_owned()));

    assert_eq!(plugin.property_string(PROP_MIME_TYPE).unwrap(), "audio/mp4");
    assert_eq!(plugin.property_string(PROP_OPT_PARAMS).unwrap(), "");
}

#[test]
fn default_url_miss_comes_after_request_fetch() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();
    plugin.set_property_byte_array(PROP_REQUEST, &[0x01]).unwrap();

    let err = plugin
        .license_request(
            &session,
            &[],
            "video/mp4",
            LicenseType::Streaming,
            &StringMap::new(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        PluginError::PropertyNotFound(PROP_DEFAULT_URL.to_owned())
    );
}

#[test]
fn empty_response_rejected_and_not_stored() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();

    assert_eq!(
        plugin.provide_license_response(&session, &[]),
        Err(PluginError::EmptyResponse)
    );
    assert_eq!(
        plugin.property_byte_array(PROP_RESPONSE),
        Err(PluginError::PropertyNotFound(PROP_RESPONSE.to_owned()))
    );
}

#[test]
fn license_response_stored() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();

    plugin
        .provide_license_response(&session, &[0x55, 0x66])
        .unwrap();
    assert_eq!(
        plugin.property_byte_array(PROP_RESPONSE).unwrap(),
        vec![0x55, 0x66]
    );
}

#[test]
fn provisioning_round_trip() {
    let plugin = MockDrmPlugin::new();

    // Outputs missing: provisioning fails without touching any session.
    assert!(plugin.provision_request().is_err());

    plugin
        .set_property_byte_array(PROP_REQUEST, &[0x0a])
        .unwrap();
    plugin
        .set_property_string(PROP_DEFAULT_URL, "http://provision")
        .unwrap();
    let request = plugin.provision_request().unwrap();
    assert_eq!(request.message, vec![0x0a]);
    assert_eq!(request.default_url, "http://provision");

    plugin.provide_provision_response(&[0x10, 0x20]).unwrap();
    assert_eq!(
        plugin.property_byte_array(PROP_RESPONSE).unwrap(),
        vec![0x10, 0x20]
    );
}

#[test]
fn secure_stops_constant() {
    let plugin = MockDrmPlugin::new();
    let stops = plugin.secure_stops().unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(
        stops[0],
        vec![0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89]
    );
    assert_eq!(
        stops[1],
        vec![0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99]
    );

    // Independent of prior calls.
    plugin.release_secure_stops(&stops[0]).unwrap();
    assert_eq!(plugin.secure_stops().unwrap(), stops);
}

#[test]
fn query_license_status_fixed_map() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();
    let info = plugin.query_license_status(&session).unwrap();
    let entries: Vec<(&str, &str)> = info.iter().collect();
    assert_eq!(
        entries,
        [("purchaseDuration", "1000"), ("licenseDuration", "100")]
    );

    let unknown = SessionId::from(vec![0u8; 8]);
    assert_eq!(
        plugin.query_license_status(&unknown),
        Err(PluginError::SessionNotFound)
    );
}

#[test]
fn session_scoped_operations_reject_closed_sessions() {
    let plugin = MockDrmPlugin::new();
    let session = plugin.open_session().unwrap();
    plugin.close_session(&session).unwrap();

    assert_eq!(
        plugin.remove_license(&session),
        Err(PluginError::SessionNotFound)
    );
    assert_eq!(
        plugin.provide_license_response(&session, &[1]),
        Err(PluginError::SessionNotFound)
    );
    assert_eq!(
        plugin.query_license_status(&session),
        Err(PluginError::SessionNotFound)
    );
}

#[test]
fn properties_survive_for_instance_lifetime() {
    let plugin = MockDrmPlugin::new();
    plugin.set_property_string("vendor", "mock").unwrap();
    let session = plugin.open_session().unwrap();
    plugin.close_session(&session).unwrap();
    // Closing sessions never clears the property stores.
    assert_eq!(plugin.property_string("vendor").unwrap(), "mock");
}

#[test]
fn concurrent_sessions_serialize_on_the_instance_lock() {
    let plugin = Arc::new(MockDrmPlugin::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let plugin = Arc::clone(&plugin);
            thread::spawn(move || {
                for _ in 0..50 {
                    let session = plugin.open_session().unwrap();
                    plugin.remove_license(&session).unwrap();
                    plugin.close_session(&session).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Every opened session was closed again.
    let leftover = SessionId::from(vec![0u8; 8]);
    assert_eq!(
        plugin.close_session(&leftover),
        Err(PluginError::SessionNotFound)
    );
}

#[test]
fn decrypt_reports_success_without_output() {
    let crypto_factory = create_crypto_factory();
    let plugin = crypto_factory.create_plugin(&MOCK_SCHEME_UUID, &[0xde, 0xad]);

    assert!(!plugin.requires_secure_decoder_component("video/mp4"));

    let src = [0x5au8; 48];
    let mut dst = [0u8; 48];
    let sub_samples = [
        drm_core::SubSample {
            clear_bytes: 16,
            encrypted_bytes: 32,
        },
    ];
    let written = plugin
        .decrypt(
            true,
            &[0x01; 16],
            &[0x02; 16],
            drm_core::DecryptMode::AesCbc,
            &src,
            &sub_samples,
            &mut dst,
        )
        .unwrap();
    assert_eq!(written, 0);
    assert_eq!(dst, [0u8; 48]);
}
