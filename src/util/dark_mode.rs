//! Theme preference handling.
//!
//! The stored choice lives in `localStorage` and is mirrored onto the
//! `<html>` element as a `data-theme` attribute the stylesheet keys off.
//! Persistence is best-effort browser-only behavior; native builds no-op.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "portfolio_theme";

/// Read the stored theme preference. Defaults to light when nothing is
/// stored or storage is unavailable.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .is_some_and(|value| value == "dark")
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Mirror the theme onto the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
