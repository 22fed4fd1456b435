//! Persisted session marker.
//!
//! The logged-in username is kept under one localStorage key so a reload
//! skips the login screen. It is not a credential; its only effect is
//! triggering the profile fetch on startup. Requires a browser environment;
//! host builds see no persisted session.

#[cfg(feature = "web")]
const STORAGE_KEY: &str = "safeplate_user";

/// Read the persisted username, if any.
#[must_use]
pub fn load() -> Option<String> {
    #[cfg(feature = "web")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Persist the username at sign-in.
pub fn save(username: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, username);
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = username;
    }
}

/// Remove the persisted username at sign-out.
pub fn clear() {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
