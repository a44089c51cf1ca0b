//! Durable key-value storage behind the session layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the signed-in identity so it survives a page
//! reload. This module is the seam between that logic and the actual medium:
//! `BrowserStorage` talks to `localStorage` in the browser, `MemoryStorage`
//! backs tests and non-browser contexts with a plain map.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (quota, permissions, no browser) are absorbed here: a
//! failed read reports the key as absent and a failed write is dropped, so
//! callers never see an error from the medium itself.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A durable string-to-string store local to the current browser profile.
pub trait SessionStorage {
    /// Read the value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`; failures are silently dropped.
    fn set(&self, key: &str, value: &str);
    /// Delete `key` if present.
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Requires a browser environment; on the
/// server every read reports absent and writes are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage sharing one map across clones, so a second store built
/// from a clone observes earlier writes the way a reloaded page would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
