//! Call-to-action button with a temporary loading state.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::FxConfig;
use crate::state::transient::{ActionDisplay, TransientAction};
use crate::util::cancel::CancelToken;
#[cfg(feature = "csr")]
use crate::util::dom::notify;

/// Shows a spinner and disables itself for `transient_delay_ms` after a
/// click, then restores its label and shows the completion notice.
#[component]
pub fn ActionButton(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, default = String::from("btn btn-primary"))] class: String,
    #[prop(optional)] on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<FxConfig>();
    let action = RwSignal::new(TransientAction::new(label));
    let cancel = CancelToken::new();
    let restore_cancel = cancel.clone();
    let delay = crate::util::frame::millis(f64::from(config.transient_delay_ms));
    let message = config.completion_message;

    let on_click = move |_| {
        let mut accepted = false;
        action.update(|a| accepted = a.click());
        if !accepted {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(restore_after(
            delay,
            action,
            restore_cancel.clone(),
            message.clone(),
            on_complete.clone(),
        ));
        #[cfg(not(feature = "csr"))]
        let _ = (delay, &restore_cancel, &message, &on_complete);
    };
    on_cleanup(move || cancel.cancel());

    view! {
        <button
            id=id
            class=class
            disabled=move || action.with(TransientAction::is_disabled)
            aria-busy=move || if action.with(TransientAction::is_disabled) { "true" } else { "false" }
            on:click=on_click
        >
            {move || {
                action
                    .with(|a| match a.display() {
                        ActionDisplay::Busy => view! { <div class="loading-spinner"></div> }.into_any(),
                        ActionDisplay::Content(text) => view! { <span>{text.to_owned()}</span> }.into_any(),
                    })
            }}
        </button>
    }
}

#[cfg(feature = "csr")]
async fn restore_after(
    delay: std::time::Duration,
    action: RwSignal<TransientAction>,
    cancel: CancelToken,
    message: String,
    on_complete: Option<Callback<()>>,
) {
    gloo_timers::future::sleep(delay).await;
    if cancel.is_cancelled() {
        return;
    }
    let mut completion = None;
    action.update(|a| completion = a.finish());
    let Some(completion) = completion else {
        return;
    };
    log::debug!("action completed (#{})", completion.sequence);
    if let Err(e) = notify(&message) {
        log::warn!("completion notice not shown: {e}");
    }
    if let Some(on_complete) = on_complete {
        on_complete.run(());
    }
}
