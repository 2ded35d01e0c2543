//! Browser localStorage persistence for sidebar preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pin preference and optional sidebar config live in `localStorage`.
//! Reads and writes only touch storage under `hydrate`; SSR and native tests
//! see defaults and treat writes as no-ops.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::config::{SidebarConfig, SidebarConfigError};
use crate::state::explorer::PINNED_STORAGE_KEY;

/// Local storage key holding a JSON [`SidebarConfig`].
pub const CONFIG_STORAGE_KEY: &str = "explorer_sidebar_config";

/// Raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default())?;
        storage.get_item(key).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("ignoring stored {key}: {err}");
            None
        }
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                leptos::logging::warn!("not saving {key}: {err}");
                return;
            }
        };
        if let Err(err) = storage.set_item(key, &raw) {
            leptos::logging::warn!("not saving {key}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Parse a stored config, falling back to defaults when absent.
///
/// # Errors
///
/// Returns the parse/validation error for a stored but unusable config.
pub fn parse_stored_config(raw: Option<&str>) -> Result<SidebarConfig, SidebarConfigError> {
    raw.map_or_else(|| Ok(SidebarConfig::default()), SidebarConfig::from_json)
}

/// Sidebar config from storage. Invalid configs are logged and replaced by
/// the defaults.
pub fn load_sidebar_config() -> SidebarConfig {
    match parse_stored_config(load_raw(CONFIG_STORAGE_KEY).as_deref()) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("{CONFIG_STORAGE_KEY}: {err}; using defaults");
            SidebarConfig::default()
        }
    }
}

pub fn load_pinned() -> Option<bool> {
    load_json(PINNED_STORAGE_KEY)
}

pub fn save_pinned(pinned: bool) {
    save_json(PINNED_STORAGE_KEY, &pinned);
}
