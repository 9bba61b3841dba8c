//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::FxConfig;
use crate::pages::landing::LandingPage;
use crate::util::dark_mode::browser_controller;

/// Root component.
///
/// Builds the `FxConfig` once, applies the startup theme before the first
/// render, and provides both to every component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = FxConfig::load();
    let theme = RwSignal::new(browser_controller(&config.storage_key).init());
    log::debug!("startup theme: {}", theme.get_untracked());

    provide_context(config);
    provide_context(theme);

    view! {
        <Title text="Swasthya Sahayak | Your Health Companion"/>
        <Meta name="description" content="Multilingual health guidance on the platforms you already use."/>
        <LandingPage/>
    }
}
