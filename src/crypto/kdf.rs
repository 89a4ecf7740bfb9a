use crate::error::HashError;
use argon2::{Algorithm, Argon2, Params, Version};
use serde::Serialize;
use zeroize::Zeroizing;

/// Argon2 version stamp written into every record (0x13).
pub const ARGON2_VERSION: u32 = Version::V0x13 as u32;

/// Argon2id tuning parameters as they appear in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KdfParams {
    mem_cost_kib: u32,
    time_cost: u32,
    parallelism: u8,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            mem_cost_kib: 64 * 1024, // 64 MiB
            time_cost: 4,
            parallelism: 4,
        }
    }
}

impl KdfParams {
    /// No bounds are enforced here; the KDF rejects values it cannot use.
    pub const fn new(mem_cost_kib: u32, time_cost: u32, parallelism: u8) -> Self {
        Self {
            mem_cost_kib,
            time_cost,
            parallelism,
        }
    }

    pub fn mem_cost_kib(&self) -> u32 {
        self.mem_cost_kib
    }

    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }
}

/// A deterministic, intentionally expensive password KDF.
///
/// Implementations must be safe to call from several threads at once and
/// must never return a partial key.
pub trait KeyDeriver {
    /// Format revision the deriver produces; records must match it exactly.
    fn version(&self) -> u32;

    /// Derive `key_len` bytes from `password` and `salt`.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &KdfParams,
        key_len: usize,
    ) -> Result<Zeroizing<Vec<u8>>, HashError>;
}

/// Argon2id v0x13 backed by the `argon2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2id;

impl KeyDeriver for Argon2id {
    fn version(&self) -> u32 {
        ARGON2_VERSION
    }

    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &KdfParams,
        key_len: usize,
    ) -> Result<Zeroizing<Vec<u8>>, HashError> {
        let argon2_params = Params::new(
            params.mem_cost_kib,
            params.time_cost,
            u32::from(params.parallelism),
            Some(key_len),
        )
        .map_err(|e| HashError::KeyDerivation(format!("invalid argon2 params: {e}")))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

        let mut key = Zeroizing::new(vec![0u8; key_len]);
        argon2
            .hash_password_into(password, salt, &mut key)
            .map_err(|e| HashError::KeyDerivation(format!("argon2id derivation failed: {e}")))?;

        Ok(key)
    }
}
