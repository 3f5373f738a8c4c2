use hex_literal::hex;

/**
    Scheme UUID the mock plugin pair claims to support:
    `01020304-0506-0708-090a-0b0c0d0e0f10`.

    No real content-protection system registers this identifier; it exists so
    a conformance harness can address the mock through the regular
    scheme-resolution path.
*/
pub const MOCK_SCHEME_UUID: [u8; 16] = hex!("0102030405060708090a0b0c0d0e0f10");

/// Size of generated session identifiers, in bytes.
pub const SESSION_ID_SIZE: usize = 8;

/**
    Fixed secure-stop payloads, returned in this order on every call.
*/
pub const SECURE_STOP_1: [u8; 9] = hex!("818283848586878889");
pub const SECURE_STOP_2: [u8; 9] = hex!("919293949596979899");

// Reserved property names shared with the conformance harness. The plugin
// does not privilege them: they live in the same namespace as user-defined
// keys and go through the ordinary property accessors.

/// Byte-array property recording the last `init_data` passed to a license request.
pub const PROP_INIT_DATA: &str = "mock-initdata";

/// String property recording the last `mime_type` passed to a license request.
pub const PROP_MIME_TYPE: &str = "mock-mimetype";

/// String property recording the decimal of the last license type.
pub const PROP_LICENSE_TYPE: &str = "mock-licensetype";

/// String property recording the serialised optional parameters.
pub const PROP_OPT_PARAMS: &str = "mock-optparams";

/// Byte-array property recording the last license or provisioning response.
pub const PROP_RESPONSE: &str = "mock-response";

/// Byte-array property the harness pre-sets; returned as the request blob.
pub const PROP_REQUEST: &str = "mock-request";

/// String property the harness pre-sets; returned as the default URL.
pub const PROP_DEFAULT_URL: &str = "mock-defaultUrl";
