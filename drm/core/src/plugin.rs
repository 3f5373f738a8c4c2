use crate::error::PluginResult;
use crate::types::{
    DecryptMode, LicenseRequest, LicenseType, ProvisionRequest, SessionId, StringMap, SubSample,
};

/**
    Factory the host resolves at module load time to mint DRM plugin
    instances for a scheme.

    Factories carry no mutable state; a single factory serves the whole
    process lifetime.
*/
pub trait DrmFactory: Send + Sync {
    /**
        Whether this module implements the scheme named by `uuid`.

        Byte-for-byte comparison over all 16 bytes. Never fails.
    */
    fn is_scheme_supported(&self, uuid: &[u8; 16]) -> bool;

    /**
        Mint a freshly constructed, empty plugin instance.

        The caller is trusted to have pre-filtered with
        [`is_scheme_supported`](Self::is_scheme_supported); implementations
        ignore `uuid`.
    */
    fn create_plugin(&self, uuid: &[u8; 16]) -> Box<dyn DrmPlugin>;
}

/**
    Factory counterpart for crypto plugin instances.
*/
pub trait CryptoFactory: Send + Sync {
    /// Whether this module implements the scheme named by `uuid`.
    fn is_scheme_supported(&self, uuid: &[u8; 16]) -> bool;

    /**
        Mint a crypto plugin instance. `init_data` is an opaque blob the
        application supplied at media-source creation; implementations may
        ignore it.
    */
    fn create_plugin(&self, uuid: &[u8; 16], init_data: &[u8]) -> Box<dyn CryptoPlugin>;
}

/**
    Operation surface of a DRM plugin instance.

    The host invokes these synchronously from multiple caller threads;
    implementations serialize mutations internally and take `&self`.
    Every operation either succeeds or fails with the single
    *invalid-argument* outcome ([`PluginError`](crate::PluginError)). A
    failing operation makes no observable state change unless its
    implementation documents otherwise.
*/
pub trait DrmPlugin: Send + Sync {
    /**
        Open a new session and return its identifier.

        The identifier is an opaque byte string chosen by the plugin; it
        stays valid until [`close_session`](Self::close_session) succeeds
        for it. No defined failure.
    */
    fn open_session(&self) -> PluginResult<SessionId>;

    /**
        Close an open session. Fails with *invalid-argument* when
        `session_id` does not name a currently-open session; closing the
        same session twice therefore fails on the second call.
    */
    fn close_session(&self, session_id: &SessionId) -> PluginResult<()>;

    /**
        Build a license request for a piece of content.

        `init_data` is container-specific initialization data, `mime_type`
        its MIME type, and `optional_parameters` application-supplied
        key/value pairs forwarded verbatim. Returns the request blob and
        the default license-server URL.
    */
    fn license_request(
        &self,
        session_id: &SessionId,
        init_data: &[u8],
        mime_type: &str,
        license_type: LicenseType,
        optional_parameters: &StringMap,
    ) -> PluginResult<LicenseRequest>;

    /**
        Install a license-server response. An empty `response` is
        *invalid-argument*.
    */
    fn provide_license_response(
        &self,
        session_id: &SessionId,
        response: &[u8],
    ) -> PluginResult<()>;

    /// Remove the license installed on a session.
    fn remove_license(&self, session_id: &SessionId) -> PluginResult<()>;

    /**
        Query status fields of the license on a session, as an ordered
        name/value map.
    */
    fn query_license_status(&self, session_id: &SessionId) -> PluginResult<StringMap>;

    /**
        Build a device-provisioning request. Provisioning is
        instance-scoped: no session is involved.
    */
    fn provision_request(&self) -> PluginResult<ProvisionRequest>;

    /// Install a provisioning-server response.
    fn provide_provision_response(&self, response: &[u8]) -> PluginResult<()>;

    /**
        Secure-stop records pending release, in a stable order.
    */
    fn secure_stops(&self) -> PluginResult<Vec<Vec<u8>>>;

    /// Release secure stops named by an opaque server message.
    fn release_secure_stops(&self, release: &[u8]) -> PluginResult<()>;

    /**
        Read a string property. Misses are *invalid-argument*.

        The string and byte-array property namespaces are disjoint: a name
        written in one store never shadows the other.
    */
    fn property_string(&self, name: &str) -> PluginResult<String>;

    /// Read a byte-array property. Misses are *invalid-argument*.
    fn property_byte_array(&self, name: &str) -> PluginResult<Vec<u8>>;

    /**
        Write a string property, inserting or overwriting. Names are not
        validated; unknown keys are stored like any other. Always succeeds.
    */
    fn set_property_string(&self, name: &str, value: &str) -> PluginResult<()>;

    /// Write a byte-array property. Always succeeds.
    fn set_property_byte_array(&self, name: &str, value: &[u8]) -> PluginResult<()>;
}

/**
    Operation surface of a crypto plugin instance.
*/
pub trait CryptoPlugin: Send + Sync {
    /**
        Whether samples of the given MIME type must be routed to a secure
        decoder.
    */
    fn requires_secure_decoder_component(&self, mime: &str) -> bool;

    /**
        Decrypt one media sample described by `sub_samples` from `src` into
        `dst`, returning the number of bytes written. The error detail the
        host surfaces to applications is carried in the returned
        [`PluginError`](crate::PluginError).
    */
    #[allow(clippy::too_many_arguments)]
    fn decrypt(
        &self,
        secure: bool,
        key: &[u8; 16],
        iv: &[u8; 16],
        mode: DecryptMode,
        src: &[u8],
        sub_samples: &[SubSample],
        dst: &mut [u8],
    ) -> PluginResult<usize>;
}
