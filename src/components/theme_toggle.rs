//! Light/dark toggle in the site header.

use leptos::prelude::*;

use crate::config::FxConfig;
use crate::state::theme::Preference;
use crate::util::dark_mode::browser_controller;

/// Toggle button. The preference signal is provided by `App`, which applies
/// the startup preference before anything renders.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = expect_context::<FxConfig>();
    let theme = expect_context::<RwSignal<Preference>>();
    let storage_key = config.storage_key;

    let on_click = move |_| {
        let next = browser_controller(&storage_key).toggle();
        log::debug!("theme switched to {next}");
        theme.set(next);
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            class:theme-toggle--dark=move || theme.get().is_dark()
            on:click=on_click
            title="Toggle theme"
            aria-label="Toggle dark mode"
        >
            <span class="theme-toggle-handle">
                <i class=move || theme.get().icon_class()></i>
            </span>
        </button>
    }
}
