use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/**
    Opaque session identifier chosen by a DRM plugin.

    The host treats the value as an uninterpreted byte string and passes it
    back verbatim on every session-scoped operation. Identity is full byte
    content, never pointer or handle identity.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Vec<u8>);

impl SessionId {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SessionId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SessionId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for SessionId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/**
    License kind requested by the application.

    The numeric values cross the plugin boundary; plugins that stringify a
    license type render the decimal of `to_u32()`.
*/
#[repr(u32)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LicenseType {
    /// Persistent license for downloaded content.
    Offline = 0,
    /// One-time-use license for streaming content.
    #[default]
    Streaming = 1,
}

impl LicenseType {
    pub const fn from_u32(u: u32) -> Option<Self> {
        match u {
            0 => Some(Self::Offline),
            1 => Some(Self::Streaming),
            _ => None,
        }
    }

    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("offline") {
            Some(Self::Offline)
        } else if name.eq_ignore_ascii_case("streaming") {
            Some(Self::Streaming)
        } else {
            None
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Streaming => "streaming",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for LicenseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "license type",
            value: s.to_owned(),
        })
    }
}

/**
    Block cipher mode named in a decrypt call.
*/
#[repr(u32)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecryptMode {
    /// Sample carries no encrypted ranges; decrypt degenerates to a copy.
    #[default]
    Unencrypted = 0,
    AesCtr = 1,
    AesWv = 2,
    AesCbc = 3,
}

impl DecryptMode {
    pub const fn from_u32(u: u32) -> Option<Self> {
        match u {
            0 => Some(Self::Unencrypted),
            1 => Some(Self::AesCtr),
            2 => Some(Self::AesWv),
            3 => Some(Self::AesCbc),
            _ => None,
        }
    }

    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("unencrypted") {
            Some(Self::Unencrypted)
        } else if name.eq_ignore_ascii_case("aes-ctr") {
            Some(Self::AesCtr)
        } else if name.eq_ignore_ascii_case("aes-wv") {
            Some(Self::AesWv)
        } else if name.eq_ignore_ascii_case("aes-cbc") {
            Some(Self::AesCbc)
        } else {
            None
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Unencrypted => "unencrypted",
            Self::AesCtr => "aes-ctr",
            Self::AesWv => "aes-wv",
            Self::AesCbc => "aes-cbc",
        }
    }
}

impl fmt::Display for DecryptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for DecryptMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "decrypt mode",
            value: s.to_owned(),
        })
    }
}

/**
    A contiguous `(clear, encrypted)` byte split within a media sample,
    describing partially encrypted frames.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSample {
    pub clear_bytes: u32,
    pub encrypted_bytes: u32,
}

/**
    String-to-string mapping that preserves insertion order.

    Callers on both sides of the plugin boundary compare serialised renderings
    of these maps verbatim, so iteration must yield entries in the order each
    key was first inserted. `insert` on an existing key overwrites the value
    in place without moving the entry.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMap {
    entries: Vec<(String, String)>,
}

impl StringMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for StringMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/**
    Result of a license request: the request blob to forward to a license
    server and the server URL to use when the application supplies none.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRequest {
    pub message: Vec<u8>,
    pub default_url: String,
}

/**
    Result of a provisioning request. Provisioning is instance-scoped rather
    than content-scoped, but the request/URL pair has the same shape.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub message: Vec<u8>,
    pub default_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_compares_by_content() {
        let a = SessionId::from(vec![1, 2, 3]);
        let b = SessionId::from(&[1u8, 2, 3][..]);
        let c = SessionId::from(vec![1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn session_id_displays_as_hex() {
        let id = SessionId::from(vec![0x0a, 0xff, 0x00]);
        assert_eq!(id.to_string(), "0aff00");
    }

    #[test]
    fn license_type_round_trip() {
        for val in [0u32, 1] {
            let lt = LicenseType::from_u32(val).unwrap();
            assert_eq!(lt.to_u32(), val);
        }
        assert!(LicenseType::from_u32(2).is_none());
    }

    #[test]
    fn license_type_default_is_streaming() {
        assert_eq!(LicenseType::default(), LicenseType::Streaming);
    }

    #[test]
    fn license_type_from_name_case_insensitive() {
        assert_eq!(LicenseType::from_name("OFFLINE"), Some(LicenseType::Offline));
        assert_eq!(
            LicenseType::from_name(" streaming "),
            Some(LicenseType::Streaming)
        );
        assert_eq!(LicenseType::from_name("perpetual"), None);
    }

    #[test]
    fn decrypt_mode_round_trip() {
        for val in [0u32, 1, 2, 3] {
            let mode = DecryptMode::from_u32(val).unwrap();
            assert_eq!(mode.to_u32(), val);
        }
        assert!(DecryptMode::from_u32(4).is_none());
    }

    #[test]
    fn decrypt_mode_name_round_trip() {
        for mode in [
            DecryptMode::Unencrypted,
            DecryptMode::AesCtr,
            DecryptMode::AesWv,
            DecryptMode::AesCbc,
        ] {
            assert_eq!(DecryptMode::from_name(mode.to_name()), Some(mode));
        }
    }

    #[test]
    fn string_map_preserves_insertion_order() {
        let mut map = StringMap::new();
        map.insert("b", "2");
        map.insert("a", "1");
        map.insert("c", "3");
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn string_map_overwrite_keeps_position() {
        let mut map = StringMap::new();
        map.insert("b", "2");
        map.insert("a", "1");
        map.insert("b", "9");
        let entries: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(entries, [("b", "9"), ("a", "1")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn string_map_get_misses_unknown_key() {
        let map: StringMap = [("a", "1")].into_iter().collect();
        assert_eq!(map.get("a"), Some("1"));
        assert_eq!(map.get("z"), None);
    }

    #[test]
    fn string_map_from_iterator_keeps_order() {
        let map: StringMap = [("x", "1"), ("y", "2")].into_iter().collect();
        let entries: Vec<(String, String)> = map.into_iter().collect();
        assert_eq!(
            entries,
            [
                ("x".to_owned(), "1".to_owned()),
                ("y".to_owned(), "2".to_owned())
            ]
        );
    }
}
