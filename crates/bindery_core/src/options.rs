//! Loading options bags from text
//!
//! Builder options derive `Deserialize` with `#[serde(default)]`: keys present
//! in the source override the defaults one top-level key at a time, missing
//! keys keep their defaults and unknown keys are ignored.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Parse an options bag from JSON
pub fn options_from_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(serde_json::from_str(source)?)
}

/// Parse an options bag from TOML
pub fn options_from_toml<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(toml::from_str(source)?)
}
