//! Persisted preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site persists exactly one value (the theme). `LocalStore` writes to
//! browser `localStorage`; `MemoryStore` keeps values for the session only and
//! stands in when storage is blocked (private browsing) and in host tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value store with best-effort writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session-only store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStore {
    /// Open `localStorage`, or `None` when the browser denies access.
    pub fn open() -> Option<Self> {
        let storage = crate::util::dom::logged("localStorage", web_sys::window()?.local_storage()).flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        crate::util::dom::logged("localStorage read", self.storage.get_item(key)).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("localStorage write failed for {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("localStorage remove failed for {key}: {e:?}");
        }
    }
}

/// Whichever store the browser allows.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub enum BrowserStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

#[cfg(feature = "csr")]
impl BrowserStore {
    pub fn open() -> Self {
        match LocalStore::open() {
            Some(local) => Self::Local(local),
            None => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                Self::Memory(MemoryStore::default())
            }
        }
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Local(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            Self::Local(s) => s.remove(key),
            Self::Memory(s) => s.remove(key),
        }
    }
}
