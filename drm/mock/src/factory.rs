use drm_core::{CryptoFactory, CryptoPlugin, DrmFactory, DrmPlugin};

use crate::constants::MOCK_SCHEME_UUID;
use crate::crypto::MockCryptoPlugin;
use crate::drm::MockDrmPlugin;

/**
    Factory minting [`MockDrmPlugin`] instances. Carries no state.
*/
#[derive(Debug, Default)]
pub struct MockDrmFactory;

impl MockDrmFactory {
    pub fn new() -> Self {
        Self
    }
}

impl DrmFactory for MockDrmFactory {
    fn is_scheme_supported(&self, uuid: &[u8; 16]) -> bool {
        *uuid == MOCK_SCHEME_UUID
    }

    fn create_plugin(&self, _uuid: &[u8; 16]) -> Box<dyn DrmPlugin> {
        Box::new(MockDrmPlugin::new())
    }
}

/**
    Factory minting [`MockCryptoPlugin`] instances. The init-data blob is
    accepted and ignored.
*/
#[derive(Debug, Default)]
pub struct MockCryptoFactory;

impl MockCryptoFactory {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoFactory for MockCryptoFactory {
    fn is_scheme_supported(&self, uuid: &[u8; 16]) -> bool {
        *uuid == MOCK_SCHEME_UUID
    }

    fn create_plugin(&self, _uuid: &[u8; 16], _init_data: &[u8]) -> Box<dyn CryptoPlugin> {
        Box::new(MockCryptoPlugin::new())
    }
}
