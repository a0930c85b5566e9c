//! Token persistence in browser `localStorage`. Login writes the token here;
//! the dashboard reads it back for verification. Outside the browser these
//! helpers are inert.

/// Storage key the auth token is kept under.
#[cfg(target_arch = "wasm32")]
const AUTH_TOKEN_KEY: &str = "authToken";

pub fn store_auth_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

pub fn load_auth_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(AUTH_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn clear_auth_token() {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
