//! `window.localStorage` as the shell's session store.

use std::rc::Rc;

use anyhow::{anyhow, Context};
use hrshell_core::{MemorySessionStore, SessionStore, ShellError, ShellResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session store backed by the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    storage: Storage,
}

impl BrowserSessionStore {
    /// Open `window.localStorage`.
    ///
    /// Fails when there is no window or the browser denies storage access
    /// (private mode, sandboxed iframes).
    pub fn open() -> anyhow::Result<Self> {
        let window = web_sys::window().context("no window object")?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow!("{e:?}"))
            .context("localStorage access denied")?
            .context("localStorage unavailable")?;
        Ok(Self { storage })
    }
}

fn storage_error(op: &str, key: &str, err: JsValue) -> ShellError {
    ShellError::storage(format!("{op} {key:?}: {err:?}"))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> ShellResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| storage_error("get", key, e))
    }

    fn set(&self, key: &str, value: &str) -> ShellResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| storage_error("set", key, e))
    }

    fn remove(&self, key: &str) -> ShellResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| storage_error("remove", key, e))
    }
}

/// The store the shell should use: `localStorage` when the browser allows
/// it, otherwise an empty in-memory store (placeholder identity, sign-out
/// still redirects).
pub fn session_store() -> Rc<dyn SessionStore> {
    match BrowserSessionStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "falling back to in-memory session store");
            Rc::new(MemorySessionStore::new())
        }
    }
}
