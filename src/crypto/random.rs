use crate::error::HashError;
use getrandom::fill;

/// Source of cryptographically secure random bytes.
pub trait RandomSource {
    /// Fill `buf` entirely or fail.
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError>;

    /// Returns exactly `n` unpredictable bytes.
    fn generate(&self, n: usize) -> Result<Vec<u8>, HashError> {
        let mut bytes = vec![0u8; n];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), HashError> {
        fill(buf).map_err(|e| {
            tracing::warn!(error = %e, "OS random generator failed");
            HashError::EntropyUnavailable
        })
    }
}
