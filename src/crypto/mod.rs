//! Cryptographic collaborators for the hasher.
//!
//! Provides the random salt source and the Argon2id key deriver.

pub mod kdf;
pub mod random;

pub use kdf::{ARGON2_VERSION, Argon2id, KdfParams, KeyDeriver};
pub use random::{OsRandom, RandomSource};

/// Default salt length (16 bytes).
pub const SALT_LEN: usize = 16;
/// Default derived key length (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
