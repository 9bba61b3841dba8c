//! Page enhancement settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FxConfig` is built once at startup and provided through Leptos context so
//! components never reach for module-level constants. A page may override any
//! subset of fields with an inline JSON document:
//!
//! ```html
//! <script id="fx-config" type="application/json">{"transient_delay_ms": 900}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FxError;

/// Element id of the optional inline configuration document.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 16.0;
pub const DEFAULT_TRANSIENT_DELAY_MS: u32 = 1500;
pub const DEFAULT_COMPLETION_MESSAGE: &str = "Action completed!";

/// Intersection settings for one family of one-shot triggers.
///
/// There is no family-neutral default: a partial override is laid over the
/// family's own settings (`fade_in()` or `stats()`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObserverConfig {
    /// Visible fraction in `[0, 1]` at which the trigger fires.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersection is computed.
    pub root_margin: String,
}

impl ObserverConfig {
    pub fn fade_in() -> Self {
        Self { threshold: 0.1, root_margin: "0px 0px -50px 0px".to_owned() }
    }

    pub fn stats() -> Self {
        Self { threshold: 0.5, root_margin: "0px".to_owned() }
    }
}

/// Fields a page may override on one observer family.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ObserverOverrides {
    threshold: Option<f64>,
    root_margin: Option<String>,
}

impl ObserverOverrides {
    fn over(self, base: ObserverConfig) -> ObserverConfig {
        ObserverConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            root_margin: self.root_margin.unwrap_or(base.root_margin),
        }
    }
}

fn fade_in_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObserverConfig, D::Error> {
    ObserverOverrides::deserialize(deserializer).map(|o| o.over(ObserverConfig::fade_in()))
}

fn stats_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObserverConfig, D::Error> {
    ObserverOverrides::deserialize(deserializer).map(|o| o.over(ObserverConfig::stats()))
}

/// Counter animation timing. ~125 ticks with the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterTiming {
    pub duration_ms: f64,
    pub frame_interval_ms: f64,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_COUNTER_DURATION_MS, frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS }
    }
}

impl CounterTiming {
    /// Number of ticks the interpolation is spread over, at least one.
    pub fn steps(&self) -> f64 {
        let steps = self.duration_ms / self.frame_interval_ms;
        if steps.is_finite() && steps >= 1.0 { steps } else { 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub storage_key: String,
    pub scroll_threshold_px: f64,
    pub counter: CounterTiming,
    pub transient_delay_ms: u32,
    #[serde(deserialize_with = "fade_in_overrides")]
    pub fade_in: ObserverConfig,
    #[serde(deserialize_with = "stats_overrides")]
    pub stats: ObserverConfig,
    pub completion_message: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            counter: CounterTiming::default(),
            transient_delay_ms: DEFAULT_TRANSIENT_DELAY_MS,
            fade_in: ObserverConfig::fade_in(),
            stats: ObserverConfig::stats(),
            completion_message: DEFAULT_COMPLETION_MESSAGE.to_owned(),
        }
    }
}

impl FxConfig {
    /// Decode a (possibly partial) JSON document; missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.validated())
    }

    /// Read the inline `#fx-config` document, falling back to defaults.
    pub fn load() -> Self {
        match read_inline_document() {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring inline config: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Clamp observer thresholds into `[0, 1]` and reject negative timings.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.fade_in.threshold = clamp_fraction(self.fade_in.threshold);
        self.stats.threshold = clamp_fraction(self.stats.threshold);
        self.scroll_threshold_px = non_negative(self.scroll_threshold_px);
        self.counter.duration_ms = non_negative(self.counter.duration_ms);
        self.counter.frame_interval_ms = non_negative(self.counter.frame_interval_ms);
        if self.storage_key.trim().is_empty() {
            self.storage_key = DEFAULT_STORAGE_KEY.to_owned();
        }
        self
    }
}

fn clamp_fraction(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn read_inline_document() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
        element.text_content().filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
