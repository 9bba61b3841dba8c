//! Scroll-derived signals: header shadow flag and reading progress.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Snapshot of the viewport taken on one scroll signal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ViewportMetrics {
    /// Read the live metrics; zeroed when the browser refuses.
    pub fn read() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            let document_height = window
                .document()
                .and_then(|doc| doc.document_element())
                .map_or(0.0, |el| f64::from(el.scroll_height()));
            Self { scroll_top, viewport_height, document_height }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSample {
    pub scrolled_past_threshold: bool,
    /// Reading progress in `[0, 100]`.
    pub progress_percent: f64,
}

impl ViewportSample {
    pub fn header_shadow(&self) -> &'static str {
        if self.scrolled_past_threshold { "var(--shadow-lg)" } else { "none" }
    }

    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

/// Derive the scroll signals from one metrics snapshot. O(1).
pub fn sample(viewport: ViewportMetrics, threshold_px: f64) -> ViewportSample {
    let scrollable = viewport.document_height - viewport.viewport_height;
    let progress_percent = if scrollable > 0.0 {
        let ratio = viewport.scroll_top / scrollable * 100.0;
        if ratio.is_finite() { ratio.clamp(0.0, 100.0) } else { 0.0 }
    } else {
        0.0
    };
    ViewportSample { scrolled_past_threshold: viewport.scroll_top > threshold_px, progress_percent }
}
