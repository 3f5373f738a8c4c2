//! Rendering helpers for the pair's debug logs. Nothing contractual reads
//! these; the formats just keep log lines grep-able across both plugins.

use std::fmt::Write;

use drm_core::{StringMap, SubSample};

/**
    Render bytes as `{ 0x01 0x02 }` (lowercase hex, trailing space kept
    inside the closing brace).
*/
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::from("{ ");
    for b in bytes {
        let _ = write!(out, "0x{b:02x} ");
    }
    out.push('}');
    out
}

/**
    Render a string map as `{ {name=k, value=v}, {name=k2, value=v2} }`.
*/
pub fn string_map(map: &StringMap) -> String {
    let mut out = String::from("{ ");
    for (i, (name, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{{name={name}, value={value}}}");
    }
    out.push_str(" }");
    out
}

/**
    Render subsamples as `[0] {clear:c, encrypted:e} ` concatenated.
*/
pub fn sub_samples(samples: &[SubSample]) -> String {
    let mut out = String::new();
    for (i, s) in samples.iter().enumerate() {
        let _ = write!(
            out,
            "[{i}] {{clear:{}, encrypted:{}}} ",
            s.clear_bytes, s.encrypted_bytes
        );
    }
    out
}
