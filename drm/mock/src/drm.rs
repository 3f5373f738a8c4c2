use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;
use tracing::debug;

use drm_core::{
    DrmPlugin, LicenseRequest, LicenseType, PluginError, PluginResult, ProvisionRequest,
    SessionId, StringMap,
};

use crate::constants::{
    PROP_DEFAULT_URL, PROP_INIT_DATA, PROP_LICENSE_TYPE, PROP_MIME_TYPE, PROP_OPT_PARAMS,
    PROP_REQUEST, PROP_RESPONSE, SECURE_STOP_1, SECURE_STOP_2, SESSION_ID_SIZE,
};
use crate::fmt;

/**
    Mock DRM plugin instance.

    Performs no cryptography and validates no licenses. Operations reflect
    their inputs into `mock-*` properties and return harness-provided
    property values as outputs, so a conformance test can verify that the
    host marshals values across the plugin boundary intact.

    One mutex guards the session set and both property stores; every
    operation, including the read-only ones, takes it for its whole body.
*/
#[derive(Debug, Default)]
pub struct MockDrmPlugin {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    sessions: Vec<SessionId>,
    string_properties: HashMap<String, String>,
    byte_properties: HashMap<String, Vec<u8>>,
}

impl State {
    fn find_session(&self, session_id: &SessionId) -> Option<usize> {
        self.sessions
            .iter()
            .position(|s| s.as_bytes() == session_id.as_bytes())
    }

    fn verify_session(&self, session_id: &SessionId) -> PluginResult<()> {
        if self.find_session(session_id).is_none() {
            debug!(session_id = %session_id, "invalid session id");
            return Err(PluginError::SessionNotFound);
        }
        Ok(())
    }

    fn required_bytes(&self, name: &str) -> PluginResult<Vec<u8>> {
        self.byte_properties
            .get(name)
            .cloned()
            .ok_or_else(|| missing_property(name))
    }

    fn required_string(&self, name: &str) -> PluginResult<String> {
        self.string_properties
            .get(name)
            .cloned()
            .ok_or_else(|| missing_property(name))
    }
}

fn missing_property(name: &str) -> PluginError {
    debug!(property = name, "no such property");
    PluginError::PropertyNotFound(name.to_owned())
}

/**
    Render optional parameters as `{k1,v1},{k2,v2}` in map iteration order.
    No escaping: names and values containing `{`, `}`, or `,` pass through
    literally, and the harness compares the result verbatim.
*/
fn serialize_parameters(parameters: &StringMap) -> String {
    let mut out = String::new();
    for (i, (name, value)) in parameters.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('{');
        out.push_str(name);
        out.push(',');
        out.push_str(value);
        out.push('}');
    }
    out
}

impl MockDrmPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DrmPlugin for MockDrmPlugin {
    fn open_session(&self) -> PluginResult<SessionId> {
        let mut state = self.state();
        let bytes: [u8; SESSION_ID_SIZE] = rand::rng().random();
        let session_id = SessionId::from(bytes.to_vec());
        state.sessions.push(session_id.clone());
        debug!(session_id = %fmt::hex_bytes(session_id.as_bytes()), "open_session");
        Ok(session_id)
    }

    fn close_session(&self, session_id: &SessionId) -> PluginResult<()> {
        let mut state = self.state();
        debug!(session_id = %fmt::hex_bytes(session_id.as_bytes()), "close_session");
        let index = state
            .find_session(session_id)
            .ok_or(PluginError::SessionNotFound)?;
        state.sessions.remove(index);
        Ok(())
    }

    fn license_request(
        &self,
        session_id: &SessionId,
        init_data: &[u8],
        mime_type: &str,
        license_type: LicenseType,
        optional_parameters: &StringMap,
    ) -> PluginResult<LicenseRequest> {
        let mut state = self.state();
        debug!(
            session_id = %fmt::hex_bytes(session_id.as_bytes()),
            init_data = %fmt::hex_bytes(init_data),
            mime_type,
            license_type = license_type.to_u32(),
            optional_parameters = %fmt::string_map(optional_parameters),
            "license_request"
        );
        state.verify_session(session_id)?;

        // Inputs reflect into mock-* properties before the output check, so
        // the harness can observe them even when the request itself fails.
        state
            .byte_properties
            .insert(PROP_INIT_DATA.to_owned(), init_data.to_vec());
        state
            .string_properties
            .insert(PROP_MIME_TYPE.to_owned(), mime_type.to_owned());
        state.string_properties.insert(
            PROP_LICENSE_TYPE.to_owned(),
            license_type.to_u32().to_string(),
        );
        state.string_properties.insert(
            PROP_OPT_PARAMS.to_owned(),
            serialize_parameters(optional_parameters),
        );

        let message = state.required_bytes(PROP_REQUEST)?;
        let default_url = state.required_string(PROP_DEFAULT_URL)?;
        Ok(LicenseRequest {
            message,
            default_url,
        })
    }

    fn provide_license_response(
        &self,
        session_id: &SessionId,
        response: &[u8],
    ) -> PluginResult<()> {
        let mut state = self.state();
        debug!(
            session_id = %fmt::hex_bytes(session_id.as_bytes()),
            response = %fmt::hex_bytes(response),
            "provide_license_response"
        );
        state.verify_session(session_id)?;
        if response.is_empty() {
            return Err(PluginError::EmptyResponse);
        }
        state
            .byte_properties
            .insert(PROP_RESPONSE.to_owned(), response.to_vec());
        Ok(())
    }

    fn remove_license(&self, session_id: &SessionId) -> PluginResult<()> {
        let state = self.state();
        debug!(session_id = %fmt::hex_bytes(session_id.as_bytes()), "remove_license");
        // No license state to discard; the harness only checks the call
        // lands on the plugin and validates its session.
        state.verify_session(session_id)
    }

    fn query_license_status(&self, session_id: &SessionId) -> PluginResult<StringMap> {
        let state = self.state();
        debug!(session_id = %fmt::hex_bytes(session_id.as_bytes()), "query_license_status");
        state.verify_session(session_id)?;

        let mut info = StringMap::new();
        info.insert("purchaseDuration", "1000");
        info.insert("licenseDuration", "100");
        Ok(info)
    }

    fn provision_request(&self) -> PluginResult<ProvisionRequest> {
        let state = self.state();
        debug!("provision_request");
        let message = state.required_bytes(PROP_REQUEST)?;
        let default_url = state.required_string(PROP_DEFAULT_URL)?;
        Ok(ProvisionRequest {
            message,
            default_url,
        })
    }

    fn provide_provision_response(&self, response: &[u8]) -> PluginResult<()> {
        let mut state = self.state();
        debug!(response = %fmt::hex_bytes(response), "provide_provision_response");
        state
            .byte_properties
            .insert(PROP_RESPONSE.to_owned(), response.to_vec());
        Ok(())
    }

    fn secure_stops(&self) -> PluginResult<Vec<Vec<u8>>> {
        let _state = self.state();
        debug!("secure_stops");
        Ok(vec![SECURE_STOP_1.to_vec(), SECURE_STOP_2.to_vec()])
    }

    fn release_secure_stops(&self, release: &[u8]) -> PluginResult<()> {
        let _state = self.state();
        debug!(release = %fmt::hex_bytes(release), "release_secure_stops");
        Ok(())
    }

    fn property_string(&self, name: &str) -> PluginResult<String> {
        let state = self.state();
        debug!(name, "property_string");
        state.required_string(name)
    }

    fn property_byte_array(&self, name: &str) -> PluginResult<Vec<u8>> {
        let state = self.state();
        debug!(name, "property_byte_array");
        state.required_bytes(name)
    }

    fn set_property_string(&self, name: &str, value: &str) -> PluginResult<()> {
        let mut state = self.state();
        debug!(name, value, "set_property_string");
        state
            .string_properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_property_byte_array(&self, name: &str, value: &[u8]) -> PluginResult<()> {
        let mut state = self.state();
        debug!(name, value = %fmt::hex_bytes(value), "set_property_byte_array");
        state
            .byte_properties
            .insert(name.to_owned(), value.to_vec());
        Ok(())
    }
}
