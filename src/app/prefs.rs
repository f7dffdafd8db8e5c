//! Durable per-browser preference storage.
//!
//! A single key-value surface over the browser's localStorage. Reads and
//! writes are best-effort: a browser with storage disabled simply behaves
//! as if nothing was ever saved.

/// Key-value store for user preferences.
///
/// Implementations must tolerate failure silently; callers never see an
/// error, they see an absent value.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Best-effort.
    fn store(&self, key: &str, value: &str);
}

/// Browser localStorage. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn store(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&self, _key: &str, _value: &str) {}
}

/// In-memory store for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.load("ecotribe-theme"), None);

        store.store("ecotribe-theme", "light");
        assert_eq!(store.load("ecotribe-theme"), Some("light".to_string()));
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::default();
        store.store("ecotribe-theme", "light");
        store.store("ecotribe-theme", "dark");
        assert_eq!(store.load("ecotribe-theme"), Some("dark".to_string()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_storage_is_inert_off_browser() {
        let store = LocalStorage;
        store.store("ecotribe-theme", "light");
        assert_eq!(store.load("ecotribe-theme"), None);
    }
}
