//! Reading and decoding the stdin payload.

use std::io::{self, Read};

use thiserror::Error;

use crate::payload::StatusLineInput;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read payload: {0}")]
    Read(#[from] io::Error),
    #[error("payload is not valid session JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Drop NUL bytes some hosts leave in the pipe.
pub fn strip_nul(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.retain(|&b| b != 0);
    bytes
}

/// Decode a payload. Whitespace-only input counts as absent.
pub fn decode(bytes: &[u8]) -> Result<Option<StatusLineInput>, PayloadError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(bytes)?))
}

/// Read `reader` to the end and decode what it held.
pub fn read_payload(mut reader: impl Read) -> Result<Option<StatusLineInput>, PayloadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&strip_nul(bytes))
}
