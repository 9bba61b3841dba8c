use super::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for &MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
struct MemorySurface {
    mode: Cell<Preference>,
}

impl ThemeSurface for &MemorySurface {
    fn applied(&self) -> Preference {
        self.mode.get()
    }

    fn apply(&self, preference: Preference) {
        self.mode.set(preference);
    }
}

// =============================================================
// Preference
// =============================================================

#[test]
fn preference_string_forms_roundtrip() {
    assert_eq!("light".parse::<Preference>().unwrap(), Preference::Light);
    assert_eq!("dark".parse::<Preference>().unwrap(), Preference::Dark);
    assert_eq!(Preference::Dark.to_string(), "dark");
    assert!(matches!("Dark".parse::<Preference>(), Err(FxError::InvalidPreference(_))));
}

#[test]
fn preference_icon_tracks_mode() {
    assert_eq!(Preference::Light.icon_class(), "fas fa-sun");
    assert_eq!(Preference::Dark.icon_class(), "fas fa-moon");
}

#[test]
fn preference_defaults_to_light() {
    assert_eq!(Preference::default(), Preference::Light);
    assert_eq!(Preference::Light.flipped(), Preference::Dark);
    assert_eq!(Preference::Dark.flipped().flipped(), Preference::Dark);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_is_dark_only_for_stored_dark_or_unset_with_dark_ambient() {
    let stored_values = [None, Some("dark"), Some("light"), Some("sepia")];
    let ambient_values = [None, Some(false), Some(true)];
    for stored in stored_values {
        for ambient in ambient_values {
            let expected_dark = stored == Some("dark") || (stored.is_none() && ambient == Some(true));
            assert_eq!(
                resolve(stored, ambient).is_dark(),
                expected_dark,
                "stored={stored:?} ambient={ambient:?}"
            );
        }
    }
}

#[test]
fn resolve_treats_empty_stored_value_as_unset() {
    assert_eq!(resolve(Some(""), Some(true)), Preference::Dark);
    assert_eq!(resolve(Some(""), None), Preference::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn init_applies_loaded_preference_without_persisting() {
    let store = MemoryStore::default();
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface, "theme", Some(true));

    assert_eq!(controller.init(), Preference::Dark);
    assert_eq!(surface.mode.get(), Preference::Dark);
    assert_eq!(store.writes.get(), 0);
}

#[test]
fn toggle_flips_applied_mode_and_persists_every_call() {
    let store = MemoryStore::default();
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface, "theme", None);
    controller.init();

    assert_eq!(controller.toggle(), Preference::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(surface.mode.get(), Preference::Dark);
    assert_eq!(store.writes.get(), 1);

    assert_eq!(controller.toggle(), Preference::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.writes.get(), 2);
}

#[test]
fn toggle_twice_restores_persisted_value_and_applied_mode() {
    let store = MemoryStore::with("theme", "dark");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface, "theme", Some(false));
    let start = controller.init();

    controller.toggle();
    controller.toggle();

    assert_eq!(surface.mode.get(), start);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_reads_the_applied_mode_not_the_stored_one() {
    let store = MemoryStore::with("theme", "dark");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface, "theme", None);

    // Nothing applied yet, so the surface still shows light.
    assert_eq!(controller.toggle(), Preference::Dark);
}

#[test]
fn controller_uses_configured_key() {
    let store = MemoryStore::with("site-theme", "dark");
    let surface = MemorySurface::default();
    let controller = ThemeController::new(&store, &surface, "site-theme", None);
    assert_eq!(controller.load(), Preference::Dark);

    let other = ThemeController::new(&store, &surface, "theme", None);
    assert_eq!(other.load(), Preference::Light);
}
