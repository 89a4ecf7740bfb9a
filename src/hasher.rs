//! Password encoding and verification.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::crypto::{Argon2id, KEY_LEN, KdfParams, KeyDeriver, OsRandom, RandomSource, SALT_LEN};
use crate::error::HashError;
use crate::format::{HashRecord, phc};

/// Algorithm name accepted by [`Hasher::encode`].
///
/// Records always carry the full `argon2id` identifier.
pub const ENCODE_ALGORITHM: &str = "argon2";

/// Tuning for a new hash: KDF parameters plus salt and key lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    pub params: KdfParams,
    pub salt_len: usize,
    pub key_len: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            params: KdfParams::default(),
            salt_len: SALT_LEN,
            key_len: KEY_LEN,
        }
    }
}

/// Encodes and verifies PHC records using a random source and a key deriver.
///
/// `Hasher` holds no per-call state; one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Hasher<R = OsRandom, K = Argon2id> {
    random: R,
    deriver: K,
}

impl Hasher {
    /// Hasher backed by the OS generator and Argon2id.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RandomSource, K: KeyDeriver> Hasher<R, K> {
    pub fn with_collaborators(random: R, deriver: K) -> Self {
        Self { random, deriver }
    }

    /// Hashes `password` with a fresh random salt and returns the PHC string.
    ///
    /// `algorithm` must be `"argon2"`.
    ///
    /// # Errors
    ///
    /// - `EmptyPassword` for an empty password, checked first
    /// - `InvalidParameters` for a zero salt or key length
    /// - `UnsupportedAlgorithm` for any other algorithm name
    /// - `EntropyUnavailable` if no salt could be generated
    /// - `KeyDerivation` if the KDF rejects the parameters
    pub fn encode(
        &self,
        password: &str,
        algorithm: &str,
        config: &HashConfig,
    ) -> Result<String, HashError> {
        check_inputs(password, config.salt_len, config.key_len)?;
        if algorithm != ENCODE_ALGORITHM {
            return Err(HashError::UnsupportedAlgorithm(algorithm.to_string()));
        }

        let salt = Zeroizing::new(self.random.generate(config.salt_len)?);

        self.encode_with_salt(password, &config.params, &salt, config.key_len)
    }

    /// Hashes `password` with a caller-supplied salt.
    ///
    /// The same inputs always produce the same string.
    ///
    /// # Errors
    ///
    /// As [`Hasher::encode`], minus the algorithm and entropy checks.
    pub fn encode_with_salt(
        &self,
        password: &str,
        params: &KdfParams,
        salt: &[u8],
        key_len: usize,
    ) -> Result<String, HashError> {
        check_inputs(password, salt.len(), key_len)?;

        tracing::debug!(
            m = params.mem_cost_kib(),
            t = params.time_cost(),
            p = params.parallelism(),
            salt_len = salt.len(),
            key_len,
            "deriving password hash"
        );
        let key = self.deriver.derive(password.as_bytes(), salt, params, key_len)?;

        let record = HashRecord::new(self.deriver.version(), *params, salt.to_vec(), key);
        Ok(phc::serialize(&record))
    }

    /// Parses a PHC string against this hasher's KDF version.
    ///
    /// # Errors
    ///
    /// See [`crate::decode`].
    pub fn decode(&self, text: &str) -> Result<HashRecord, HashError> {
        phc::parse(text, self.deriver.version())
    }

    /// Checks `password` against a PHC string.
    ///
    /// Returns `Ok(false)` when the password does not match. A record that
    /// cannot be parsed or re-derived is always an error.
    ///
    /// # Errors
    ///
    /// Any error from [`Hasher::decode`], or `KeyDerivation` if the decoded
    /// parameters are unusable.
    pub fn verify(&self, password: &str, text: &str) -> Result<bool, HashError> {
        let record = self.decode(text).inspect_err(|e| {
            tracing::debug!(error = %e, "rejecting hash record");
        })?;

        let candidate = self.deriver.derive(
            password.as_bytes(),
            record.salt(),
            record.params(),
            record.key().len(),
        )?;

        Ok(keys_match(&candidate, record.key()))
    }
}

/// Single constant-time comparison. Only the length check may short-circuit.
pub(crate) fn keys_match(candidate: &[u8], expected: &[u8]) -> bool {
    candidate.ct_eq(expected).into()
}

fn check_inputs(password: &str, salt_len: usize, key_len: usize) -> Result<(), HashError> {
    if password.is_empty() {
        return Err(HashError::EmptyPassword);
    }
    if salt_len == 0 {
        return Err(HashError::InvalidParameters("salt length must be positive"));
    }
    if key_len == 0 {
        return Err(HashError::InvalidParameters("key length must be positive"));
    }
    Ok(())
}
