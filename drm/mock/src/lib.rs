#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod crypto;
mod drm;
mod entry;
mod factory;

pub mod fmt;

pub use self::constants::{
    MOCK_SCHEME_UUID, PROP_DEFAULT_URL, PROP_INIT_DATA, PROP_LICENSE_TYPE, PROP_MIME_TYPE,
    PROP_OPT_PARAMS, PROP_REQUEST, PROP_RESPONSE, SECURE_STOP_1, SECURE_STOP_2, SESSION_ID_SIZE,
};
pub use self::crypto::MockCryptoPlugin;
pub use self::drm::MockDrmPlugin;
pub use self::entry::{create_crypto_factory, create_drm_factory};
pub use self::factory::{MockCryptoFactory, MockDrmFactory};
