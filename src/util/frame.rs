//! Awaitable display-refresh ticks for `spawn_local` animation loops.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::time::Duration;

/// Resolve on the next `requestAnimationFrame` callback.
///
/// Falls back to a frame-length sleep when the window refuses the request.
#[cfg(feature = "csr")]
pub async fn next_animation_frame(fallback: Duration) {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        gloo_timers::future::sleep(fallback).await;
        return;
    };
    let mut requested = true;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if window.request_animation_frame(&resolve).is_err() {
            requested = false;
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    if !requested {
        gloo_timers::future::sleep(fallback).await;
    }
}

/// Convert a configured millisecond count, treating bad values as zero.
/// Counts too large for a `Duration` saturate.
pub fn millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
