use tracing::debug;

use drm_core::{CryptoPlugin, DecryptMode, PluginResult, SubSample};

use crate::fmt;

/**
    Mock crypto plugin instance.

    Stateless. Accepts every decrypt call, logs the inputs, and reports
    success without copying a single byte from `src` to `dst`; the
    conformance harness never inspects the destination buffer.
*/
#[derive(Debug, Default)]
pub struct MockCryptoPlugin;

impl MockCryptoPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoPlugin for MockCryptoPlugin {
    fn requires_secure_decoder_component(&self, mime: &str) -> bool {
        debug!(mime, "requires_secure_decoder_component");
        false
    }

    fn decrypt(
        &self,
        secure: bool,
        key: &[u8; 16],
        iv: &[u8; 16],
        mode: DecryptMode,
        src: &[u8],
        sub_samples: &[SubSample],
        dst: &mut [u8],
    ) -> PluginResult<usize> {
        debug!(
            secure,
            key = %fmt::hex_bytes(key),
            iv = %fmt::hex_bytes(iv),
            mode = mode.to_u32(),
            src_len = src.len(),
            dst_len = dst.len(),
            sub_samples = %fmt::sub_samples(sub_samples),
            "decrypt"
        );
        Ok(0)
    }
}
