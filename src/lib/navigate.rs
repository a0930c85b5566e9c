//! Full-page navigation. Auth pages leave through a real page load rather than
//! a router transition, matching the multi-page deployment they front.

/// Replaces the current page with `path`. No-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
