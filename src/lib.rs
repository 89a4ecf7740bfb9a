//! Argon2id password hashing with strict PHC string encoding.
//!
//! ```no_run
//! let text = argon2phc::encode("hunter2", "argon2", 65536, 4, 4, 16, 32)?;
//! assert!(argon2phc::verify("hunter2", &text)?);
//! # Ok::<(), argon2phc::HashError>(())
//! ```

pub mod crypto;
mod error;
pub mod format;
mod hasher;

pub use crate::crypto::{Argon2id, KdfParams, KeyDeriver, OsRandom, RandomSource};
pub use crate::error::HashError;
pub use crate::format::{ALGORITHM_ID, HashRecord, decode};
pub use crate::hasher::{ENCODE_ALGORITHM, HashConfig, Hasher};

/// Hashes `password` with Argon2id and a fresh random salt.
///
/// `algorithm` must be `"argon2"`. Memory is in KiB.
///
/// # Errors
///
/// See [`Hasher::encode`].
pub fn encode(
    password: &str,
    algorithm: &str,
    mem_cost_kib: u32,
    iterations: u32,
    parallelism: u8,
    salt_len: usize,
    key_len: usize,
) -> Result<String, HashError> {
    let config = HashConfig {
        params: KdfParams::new(mem_cost_kib, iterations, parallelism),
        salt_len,
        key_len,
    };
    Hasher::new().encode(password, algorithm, &config)
}

/// Hashes `password` with a caller-supplied salt.
///
/// # Errors
///
/// See [`Hasher::encode_with_salt`].
pub fn encode_with_salt(
    password: &str,
    params: &KdfParams,
    salt: &[u8],
    key_len: usize,
) -> Result<String, HashError> {
    Hasher::new().encode_with_salt(password, params, salt, key_len)
}

/// Checks `password` against a PHC string.
///
/// # Errors
///
/// See [`Hasher::verify`].
pub fn verify(password: &str, text: &str) -> Result<bool, HashError> {
    Hasher::new().verify(password, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let text = encode("pw", "argon2", 32, 1, 1, 16, 32).unwrap();
        let record = decode(&text).unwrap();

        assert_eq!(record.algorithm(), "argon2id");
        assert_eq!(record.version(), 19);
        assert_eq!(*record.params(), KdfParams::new(32, 1, 1));
        assert_eq!(record.salt().len(), 16);
        assert_eq!(record.key().len(), 32);
    }

    #[test]
    fn wrong_password_is_not_an_error() {
        let text = encode("correct", "argon2", 32, 1, 1, 16, 32).unwrap();
        assert_eq!(verify("wrong", &text), Ok(false));
        assert_eq!(verify("correct", &text), Ok(true));
    }

    #[test]
    fn salts_are_fresh_per_call() {
        let a = encode("pw", "argon2", 32, 1, 1, 16, 32).unwrap();
        let b = encode("pw", "argon2", 32, 1, 1, 16, 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn encode_with_salt_embeds_the_salt() {
        let salt = [3u8; 12];
        let text = encode_with_salt("pw", &KdfParams::new(32, 1, 1), &salt, 24).unwrap();
        let record = decode(&text).unwrap();

        assert_eq!(record.salt(), salt);
        assert_eq!(record.key().len(), 24);
        assert!(verify("pw", &text).unwrap());
    }
}
