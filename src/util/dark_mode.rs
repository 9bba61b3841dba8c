//! Browser side of the theme preference.
//!
//! Reads and writes the preference in `localStorage`, applies the
//! `.dark-mode` class to `<body>`, and reads the `prefers-color-scheme`
//! media query. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a blocked or missing storage area reads as
//! "nothing stored" and writes are dropped, so the page still themes itself
//! from the ambient signal.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{Preference, PreferenceStore, ThemeController, ThemeSurface};

/// Class toggled on `<body>` while dark mode is applied.
pub const DARK_CLASS: &str = "dark-mode";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; theme not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// The `.dark-mode` class on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyClass;

impl ThemeSurface for BodyClass {
    fn applied(&self) -> Preference {
        #[cfg(feature = "csr")]
        {
            let dark = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.body())
                .is_some_and(|body| body.class_list().contains(DARK_CLASS));
            if dark { Preference::Dark } else { Preference::Light }
        }
        #[cfg(not(feature = "csr"))]
        {
            Preference::Light
        }
    }

    fn apply(&self, preference: Preference) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|doc| doc.body()) {
                let class_list = body.class_list();
                let _ = if preference.is_dark() {
                    class_list.add_1(DARK_CLASS)
                } else {
                    class_list.remove_1(DARK_CLASS)
                };
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = preference;
        }
    }
}

/// Ambient `prefers-color-scheme: dark` signal, `None` when unavailable.
pub fn ambient_prefers_dark() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Controller bound to `localStorage` and `<body>`.
pub fn browser_controller(storage_key: &str) -> ThemeController<LocalStorage, BodyClass> {
    ThemeController::new(LocalStorage, BodyClass, storage_key, ambient_prefers_dark())
}
