//! One-shot `IntersectionObserver` wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fade-in blocks and the stats section both need "fire once when visible".
//! The observer reports raw intersection changes; `WatchSet` decides firing.
//! Each element is unobserved as soon as it fires and the observer
//! disconnects once every element fired or its cancel token was tripped.
//!
//! The JS callback is handed to the browser for the observer's lifetime and
//! is never reclaimed; it goes inert after disconnect.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::ObserverConfig;
use crate::error::FxError;
use crate::state::visibility::WatchSet;
use crate::util::cancel::CancelToken;

/// Watch `elements` and call `on_fire(index)` once per element.
pub fn watch_once(
    elements: Vec<web_sys::Element>,
    config: &ObserverConfig,
    cancel: CancelToken,
    mut on_fire: impl FnMut(usize) + 'static,
) -> Result<(), FxError> {
    if elements.is_empty() {
        return Ok(());
    }

    let mut watches = WatchSet::default();
    for index in 0..elements.len() {
        watches.watch(index);
    }
    let targets = elements.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            if cancel.is_cancelled() {
                observer.disconnect();
                return;
            }
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                if watches.signal(&index, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_fire(index);
                }
            }
            if watches.is_exhausted() {
                observer.disconnect();
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}
