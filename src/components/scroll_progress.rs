//! Scroll progress bar and the shared viewport sample.
//!
//! SYSTEM CONTEXT
//! ==============
//! One window `scroll` listener feeds `state::viewport::sample`; the header
//! shadow and the progress bar both read the resulting signal.

use leptos::prelude::*;

use crate::state::viewport::{ViewportMetrics, ViewportSample, sample};

/// Track the viewport sample for the lifetime of the calling component.
pub fn use_viewport_sample(threshold_px: f64) -> ReadSignal<ViewportSample> {
    let current = RwSignal::new(sample(ViewportMetrics::read(), threshold_px));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            current.set(sample(ViewportMetrics::read(), threshold_px));
        });
        on_cleanup(move || handle.remove());
    }

    current.read_only()
}

/// Thin bar pinned to the top of the page.
#[component]
pub fn ScrollProgress(sample: ReadSignal<ViewportSample>) -> impl IntoView {
    view! {
        <div
            id="scrollProgress"
            class="scroll-progress"
            style:width=move || sample.get().progress_width()
        ></div>
    }
}
