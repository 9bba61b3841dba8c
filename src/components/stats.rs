//! Stats band with animated counters.
//!
//! DESIGN
//! ======
//! The section is watched once at the stats threshold. When it fires, every
//! counter starts on the same tick; none of them can be restarted. Counters
//! whose target does not parse keep their initial text.

use leptos::prelude::*;

use crate::config::FxConfig;
use crate::state::counter::CounterAnimation;
#[cfg(feature = "csr")]
use crate::util::cancel::CancelToken;
#[cfg(feature = "csr")]
use crate::util::frame::{millis, next_animation_frame};
#[cfg(feature = "csr")]
use crate::util::observer::watch_once;

/// One figure in the stats band. `count` is the raw `data-count` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatItem {
    pub count: &'static str,
    pub label: &'static str,
}

#[component]
pub fn StatsSection(stats: Vec<StatItem>) -> impl IntoView {
    let started = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "csr")]
    {
        let observer_config = expect_context::<FxConfig>().stats;
        let cancel = CancelToken::new();
        let observer_cancel = cancel.clone();
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            let element: web_sys::Element = el.into();
            let attached = watch_once(vec![element], &observer_config, observer_cancel.clone(), move |_| {
                log::debug!("stats section visible; starting counters");
                started.set(true);
            });
            if let Err(e) = attached {
                log::warn!("stats observer unavailable, starting counters now: {e}");
                started.set(true);
            }
        });
        on_cleanup(move || cancel.cancel());
    }

    view! {
        <section id="stats" class="stats" node_ref=node>
            <div class="stats-grid">
                {stats
                    .into_iter()
                    .map(|item| view! { <StatCounter item=item started=started.read_only()/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn StatCounter(item: StatItem, started: ReadSignal<bool>) -> impl IntoView {
    let timing = expect_context::<FxConfig>().counter;
    let animation = CounterAnimation::from_count(item.count, timing);
    let initial = match &animation {
        Ok(animation) => animation.initial_text(),
        Err(e) => {
            log::warn!("counter left static: {e}");
            item.count.to_owned()
        }
    };
    let text = RwSignal::new(initial);

    #[cfg(feature = "csr")]
    {
        if let Ok(animation) = animation {
            let cancel = CancelToken::new();
            let loop_cancel = cancel.clone();
            Effect::new(move || {
                if !started.get() {
                    return;
                }
                let fallback = millis(timing.frame_interval_ms);
                leptos::task::spawn_local(run_counter(animation.clone(), text, loop_cancel.clone(), fallback));
            });
            on_cleanup(move || cancel.cancel());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = started;
    }

    view! {
        <div class="stat-item">
            <span class="stat-number" data-count=item.count>
                {move || text.get()}
            </span>
            <span class="stat-label">{item.label}</span>
        </div>
    }
}

/// One frame per display refresh until the final frame or teardown.
#[cfg(feature = "csr")]
async fn run_counter(
    mut animation: CounterAnimation,
    text: RwSignal<String>,
    cancel: CancelToken,
    fallback: std::time::Duration,
) {
    loop {
        next_animation_frame(fallback).await;
        if cancel.is_cancelled() {
            return;
        }
        let Some(frame) = animation.tick() else {
            return;
        };
        text.set(frame.text);
        if frame.done {
            log::debug!("counter reached {}", animation.target());
            return;
        }
    }
}
