//! Block that fades in the first time it scrolls into view.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::FxConfig;
#[cfg(feature = "csr")]
use crate::util::cancel::CancelToken;
#[cfg(feature = "csr")]
use crate::util::observer::watch_once;

/// Wraps `children` in a `.fade-in` block that gains `.visible` once.
#[component]
pub fn FadeIn(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let observer_config = expect_context::<FxConfig>().fade_in;
        let cancel = CancelToken::new();
        let observer_cancel = cancel.clone();
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            let element: web_sys::Element = el.into();
            let attached = watch_once(vec![element], &observer_config, observer_cancel.clone(), move |_| {
                visible.set(true);
            });
            if let Err(e) = attached {
                log::warn!("fade-in observer unavailable, showing block: {e}");
                visible.set(true);
            }
        });
        on_cleanup(move || cancel.cancel());
    }

    let class = if class.is_empty() { "fade-in".to_owned() } else { format!("fade-in {class}") };

    view! {
        <div class=class class:visible=move || visible.get() node_ref=node>
            {children()}
        </div>
    }
}
