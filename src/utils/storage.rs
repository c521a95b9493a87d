use web_sys::{Storage, Window};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// wasm-bindgen imports abort on non-wasm targets, so host builds never
// touch `web_sys::window()` and instead report the absent window directly.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Reads both persisted tokens. Absent or unreadable entries come back as
/// `None` rather than an error.
pub fn read_tokens() -> (Option<String>, Option<String>) {
    match local_storage() {
        Ok(storage) => (
            storage.get_item(ACCESS_TOKEN_KEY).ok().flatten(),
            storage.get_item(REFRESH_TOKEN_KEY).ok().flatten(),
        ),
        Err(_) => (None, None),
    }
}

pub fn read_access_token() -> Option<String> {
    local_storage()
        .ok()
        .and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
}

pub fn persist_tokens(access: &str, refresh: &str) -> Result<(), String> {
    let storage = local_storage()?;
    storage
        .set_item(ACCESS_TOKEN_KEY, access)
        .map_err(|_| "Failed to persist access token".to_string())?;
    storage
        .set_item(REFRESH_TOKEN_KEY, refresh)
        .map_err(|_| "Failed to persist refresh token".to_string())
}

/// Removes both token keys. Safe to call when nothing is stored.
pub fn clear_tokens() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn tokens_round_trip_through_local_storage() {
        clear_tokens();
        persist_tokens("abc", "xyz").unwrap();
        assert_eq!(
            read_tokens(),
            (Some("abc".to_string()), Some("xyz".to_string()))
        );
        assert_eq!(read_access_token().as_deref(), Some("abc"));
        clear_tokens();
        assert_eq!(read_tokens(), (None, None));
    }
}
