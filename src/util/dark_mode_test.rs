#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_storage_reads_nothing_outside_browser() {
    assert_eq!(LocalStorage.read("theme"), None);
    LocalStorage.write("theme", "dark");
    assert_eq!(LocalStorage.read("theme"), None);
}

#[test]
fn ambient_signal_is_unknown_outside_browser() {
    assert_eq!(ambient_prefers_dark(), None);
}

#[test]
fn browser_controller_defaults_to_light() {
    let controller = browser_controller("theme");
    assert_eq!(controller.init(), Preference::Light);
    assert_eq!(BodyClass.applied(), Preference::Light);
}

#[test]
fn native_toggle_always_flips_from_light() {
    // The body surface is inert here, so every toggle flips from light.
    let controller = browser_controller("theme");
    assert_eq!(controller.toggle(), Preference::Dark);
    assert_eq!(controller.toggle(), Preference::Dark);
}
