//! Password digest value object - Domain layer credential handling.

use sha1::{Digest, Sha1};

/// Digest of a user credential, stored in place of the plaintext.
///
/// Immutable and compared by byte equality. Computed digests are SHA-1
/// over the UTF-16 little-endian encoding of the credential text, with no
/// per-call salt: identical input must produce identical output on every
/// call, since authentication works by comparing a freshly computed digest
/// against the stored one. Records written by earlier deployments use this
/// exact construction, so it cannot change without a data migration.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    bytes: Vec<u8>,
}

// Don't expose digest bytes in debug output
impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PasswordDigest {
    /// Digest a plaintext credential for storage.
    ///
    /// Returns `None` when the password is absent or empty: such an
    /// account stores no digest at all, and later authenticates with an
    /// empty password.
    pub fn from_plain(password: Option<&str>) -> Option<Self> {
        let password = password?;
        if password.is_empty() {
            return None;
        }

        let mut hasher = Sha1::new();
        for unit in password.encode_utf16() {
            hasher.update(unit.to_le_bytes());
        }

        Some(Self {
            bytes: hasher.finalize().to_vec(),
        })
    }

    /// Reconstruct a digest from its stored byte form.
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the digest bytes for storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the digest bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
