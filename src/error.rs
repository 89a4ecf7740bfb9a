use thiserror::Error;

/// Errors produced while encoding, decoding or verifying a password hash.
///
/// A password that simply does not match is not an error; `verify` reports
/// that as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("unsupported algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("malformed hash record: {0}")]
    MalformedRecord(&'static str),

    #[error("incompatible version: found {found}, expected {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error("OS random generator unavailable")]
    EntropyUnavailable,

    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
}
