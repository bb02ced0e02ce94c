use std::fmt;

use sha2::{Digest, Sha256};

/// Version stamp of a stored document: SHA-256 of its exact bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strong entity tag, quoted.
    pub fn to_etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Accepts `"hex"`, `W/"hex"` or a bare hex string.
    pub fn from_etag(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw.strip_prefix("W/").unwrap_or(raw);
        let hex = raw.trim_matches('"');
        if hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(hex.to_ascii_lowercase()))
        } else {
            None
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
