use drm_core::{CryptoFactory, DrmFactory};

use crate::factory::{MockCryptoFactory, MockDrmFactory};

// Module entry points. A host loads this library at runtime and resolves
// these two symbols to obtain the factories; everything else is reached
// through the returned trait objects.

#[unsafe(no_mangle)]
pub fn create_drm_factory() -> Box<dyn DrmFactory> {
    Box::new(MockDrmFactory::new())
}

#[unsafe(no_mangle)]
pub fn create_crypto_factory() -> Box<dyn CryptoFactory> {
    Box::new(MockCryptoFactory::new())
}
