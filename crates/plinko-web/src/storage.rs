//! Local key-value configuration, read once at startup.
//!
//! Keys: `names` (JSON array of strings, the entity labels for a division)
//! and `maxNumber` (stringified integer overriding the default zone count).

use web_sys::Storage;

const NAMES_KEY: &str = "names";
const ZONE_COUNT_KEY: &str = "maxNumber";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// The configured name list. Missing or malformed config is an empty list,
/// which the simulation turns into the single anonymous particle.
pub fn names() -> Vec<String> {
    let Some(raw) = read_key(NAMES_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(names) => names,
        Err(err) => {
            log::warn!("ignoring malformed '{NAMES_KEY}' config: {err}");
            Vec::new()
        }
    }
}

/// The configured zone-count override, if present and parseable.
pub fn zone_count() -> Option<usize> {
    let raw = read_key(ZONE_COUNT_KEY)?;
    match raw.trim().parse() {
        Ok(count) => Some(count),
        Err(_) => {
            log::warn!("ignoring non-numeric '{ZONE_COUNT_KEY}' config: {raw:?}");
            None
        }
    }
}
