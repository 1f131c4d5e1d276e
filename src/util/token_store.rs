//! Persistent storage for the bearer token pair.
//!
//! DESIGN
//! ======
//! Two opaque strings under fixed keys, owned exclusively by this module:
//! the access token is attached to every authenticated request, the
//! refresh token is stored but not consumed by any current call path.
//! Browser builds persist to origin-scoped `localStorage` (no expiry, no
//! encryption; same-origin script visibility is the accepted trust
//! boundary). Host builds keep the pair in a thread-local map so session
//! logic remains exercisable in tests.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[cfg(not(feature = "csr"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// The stored access token, if any. Empty values read as absent.
pub fn access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// The stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Persist both tokens of a freshly issued pair.
pub fn store_tokens(access: &str, refresh: &str) {
    write(ACCESS_TOKEN_KEY, access);
    write(REFRESH_TOKEN_KEY, refresh);
}

/// Erase both tokens. Safe to call when nothing is stored.
pub fn clear_tokens() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
}

fn read(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with(|map| {
            map.borrow()
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        })
    }
}

fn write(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with(|map| {
            map.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with(|map| {
            map.borrow_mut().remove(key);
        });
    }
}
