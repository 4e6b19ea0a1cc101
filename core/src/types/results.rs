//! Decoding of the upstream result payload: a JSON array of strings.

use crate::ResultsError;
use std::io::Read;

pub fn decode_results(payload: &str) -> Result<Vec<String>, ResultsError> {
    Ok(serde_json::from_str(payload)?)
}

pub fn read_results(reader: impl Read) -> Result<Vec<String>, ResultsError> {
    Ok(serde_json::from_reader(reader)?)
}
