//! Hash record model and its textual form.
//!
//! A record is persisted only as its PHC string; the struct exists for the
//! duration of a single encode or verify call.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::crypto::{ARGON2_VERSION, KdfParams};
use crate::error::HashError;

pub mod phc;

pub use phc::ALGORITHM_ID;

/// Everything needed to re-derive and check one password hash.
///
/// Fields are private; a record never changes after it is built.
#[derive(Clone, PartialEq, Eq)]
pub struct HashRecord {
    algorithm: &'static str,
    version: u32,
    params: KdfParams,
    salt: Vec<u8>,
    key: Zeroizing<Vec<u8>>,
}

impl HashRecord {
    pub(crate) fn new(
        version: u32,
        params: KdfParams,
        salt: Vec<u8>,
        key: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            algorithm: ALGORITHM_ID,
            version,
            params,
            salt,
            key,
        }
    }

    /// Returns the algorithm identifier (always `argon2id`).
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Returns the KDF version stamp.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the KDF tuning parameters.
    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Returns the salt.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns the derived key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRecord")
            .field("algorithm", &self.algorithm)
            .field("version", &self.version)
            .field("params", &self.params)
            .field("salt_len", &self.salt.len())
            .field("key", &format_args!("<{} bytes redacted>", self.key.len()))
            .finish()
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&phc::serialize(self))
    }
}

impl FromStr for HashRecord {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Parses a PHC string against the Argon2id version this crate derives with.
///
/// # Errors
///
/// Returns an error if:
/// - The segment layout is wrong or a field does not parse (`MalformedRecord`)
/// - The identifier is not `argon2id` (`UnsupportedAlgorithm`)
/// - The version is not 19 (`IncompatibleVersion`)
pub fn decode(text: &str) -> Result<HashRecord, HashError> {
    phc::parse(text, ARGON2_VERSION)
}
