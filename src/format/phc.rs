//! PHC string encoding for Argon2id records.
//!
//! ```text
//! $argon2id$v=<version>$m=<mem_kib>,t=<iterations>,p=<parallelism>$<b64 salt>$<b64 key>
//! ```
//!
//! Salt and key use the standard base64 alphabet without padding. Decoding is
//! strict: padding, non-zero trailing bits and foreign characters are rejected.

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use zeroize::Zeroizing;

use super::HashRecord;
use crate::{crypto::KdfParams, error::HashError};

/// The only algorithm identifier written or accepted.
pub const ALGORITHM_ID: &str = "argon2id";

const DELIMITER: char = '$';
const SEGMENTS: usize = 6;

/// Serializes a record to its canonical PHC string.
pub fn serialize(record: &HashRecord) -> String {
    let params = record.params();
    format!(
        "{DELIMITER}{}{DELIMITER}v={}{DELIMITER}m={},t={},p={}{DELIMITER}{}{DELIMITER}{}",
        record.algorithm(),
        record.version(),
        params.mem_cost_kib(),
        params.time_cost(),
        params.parallelism(),
        STANDARD_NO_PAD.encode(record.salt()),
        STANDARD_NO_PAD.encode(record.key()),
    )
}

/// Parses a PHC string, requiring the version to equal `expected_version`.
///
/// # Errors
///
/// See [`super::decode`].
pub fn parse(text: &str, expected_version: u32) -> Result<HashRecord, HashError> {
    let segments: Vec<&str> = text.split(DELIMITER).collect();
    if segments.len() != SEGMENTS {
        return Err(HashError::MalformedRecord("expected 6 '$'-separated segments"));
    }
    if !segments[0].is_empty() {
        return Err(HashError::MalformedRecord("record must start with '$'"));
    }
    if segments[1..].iter().any(|s| s.is_empty()) {
        return Err(HashError::MalformedRecord("empty segment"));
    }

    if segments[1] != ALGORITHM_ID {
        return Err(HashError::UnsupportedAlgorithm(segments[1].to_string()));
    }

    let version = parse_version(segments[2])?;
    if version != expected_version {
        tracing::debug!(found = version, expected = expected_version, "version mismatch");
        return Err(HashError::IncompatibleVersion {
            found: version,
            expected: expected_version,
        });
    }

    let params = parse_params(segments[3])?;

    let salt = STANDARD_NO_PAD
        .decode(segments[4])
        .map_err(|_| HashError::MalformedRecord("invalid base64 salt"))?;

    let key = Zeroizing::new(
        STANDARD_NO_PAD
            .decode(segments[5])
            .map_err(|_| HashError::MalformedRecord("invalid base64 key"))?,
    );

    Ok(HashRecord::new(version, params, salt, key))
}

fn parse_version(segment: &str) -> Result<u32, HashError> {
    let digits = segment
        .strip_prefix("v=")
        .ok_or(HashError::MalformedRecord("version segment must be 'v=<n>'"))?;
    parse_decimal(digits).ok_or(HashError::MalformedRecord("version is not a number"))
}

fn parse_params(segment: &str) -> Result<KdfParams, HashError> {
    const BAD_PARAMS: HashError =
        HashError::MalformedRecord("parameter segment must be 'm=<n>,t=<n>,p=<n>'");

    let mut fields = segment.split(',');
    let (Some(m), Some(t), Some(p), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(BAD_PARAMS);
    };

    let mem_cost_kib = m.strip_prefix("m=").and_then(parse_decimal).ok_or(BAD_PARAMS)?;
    let time_cost = t.strip_prefix("t=").and_then(parse_decimal).ok_or(BAD_PARAMS)?;
    let parallelism = p.strip_prefix("p=").and_then(parse_decimal).ok_or(BAD_PARAMS)?;

    Ok(KdfParams::new(mem_cost_kib, time_cost, parallelism))
}

/// Plain ASCII digits only; `str::parse` alone would also take a leading `+`.
fn parse_decimal<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
