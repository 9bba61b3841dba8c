//! Mobile navigation drawer with body scroll lock.

use leptos::prelude::*;

use crate::state::menu::MenuState;
use crate::util::dom::apply_scroll_lock;

/// One in-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Menu button plus drawer. Following any link closes the drawer.
#[component]
pub fn MobileNav(links: Vec<NavLink>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    Effect::new(move || {
        apply_scroll_lock(menu.get().body_overflow());
    });
    on_cleanup(|| {
        apply_scroll_lock("");
    });

    let on_toggle = move |_| {
        menu.update(|m| {
            m.toggle();
        });
    };

    view! {
        <button
            id="mobileMenuBtn"
            class="mobile-menu-btn"
            on:click=on_toggle
            aria-label="Toggle menu"
            aria-expanded=move || if menu.get().open { "true" } else { "false" }
        >
            <i class=move || menu.get().icon_class()></i>
        </button>
        <nav id="mobileNav" class="mobile-nav" class:active=move || menu.get().open>
            {links
                .into_iter()
                .map(|NavLink { label, href }| {
                    view! {
                        <a href=href on:click=move |_| menu.update(MenuState::close)>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
