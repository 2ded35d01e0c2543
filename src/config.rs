//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

/// Parse the `PORT` value, defaulting to [`DEFAULT_PORT`] when unset.
pub fn port_from_env(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
