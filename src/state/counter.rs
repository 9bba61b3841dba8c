//! Stat counter interpolation and display formatting.
//!
//! Each tick adds `target / steps` to the running value. Intermediate frames
//! show the ceiling of the running value; the final frame is rendered from the
//! target itself so rounding never leaves the display one step off.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::CounterTiming;
use crate::error::FxError;

/// Targets above this are shown in thousands with a `K+` suffix.
pub const THOUSANDS_CUTOFF: f64 = 1000.0;
/// The one `data-count` value that is shown as a percentage, matched verbatim.
pub const PERCENT_COUNT: &str = "98";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFormat {
    Thousands,
    Percent,
    Plain,
}

impl CounterFormat {
    /// Pick the format from the raw attribute and its parsed value. The
    /// percent rule compares the attribute text, so `"98.0"` stays plain.
    pub fn for_count(raw: &str, target: f64) -> Self {
        if target > THOUSANDS_CUTOFF {
            Self::Thousands
        } else if raw == PERCENT_COUNT {
            Self::Percent
        } else {
            Self::Plain
        }
    }

    /// Text for a running value.
    pub fn intermediate(self, current: f64) -> String {
        match self {
            Self::Thousands => format!("{}K+", (current / 1000.0).ceil()),
            Self::Percent => format!("{}%", current.ceil()),
            Self::Plain => format!("{}", current.ceil()),
        }
    }

    /// Text once the target is reached.
    pub fn final_text(self, target: f64) -> String {
        match self {
            Self::Thousands => format!("{}K+", (target / 1000.0).ceil()),
            Self::Percent => format!("{target}%"),
            Self::Plain => format!("{target}"),
        }
    }
}

/// Parse the numeric target carried by a stat element.
pub fn parse_count(raw: &str) -> Result<f64, FxError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FxError::InvalidCount(raw.to_owned()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Drives one counter from 0 to its target. Yields nothing after the final frame.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    current: f64,
    increment: f64,
    format: CounterFormat,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, format: CounterFormat, timing: CounterTiming) -> Self {
        Self { target, current: 0.0, increment: target / timing.steps(), format, done: false }
    }

    /// Build from a raw `data-count` attribute.
    pub fn from_count(raw: &str, timing: CounterTiming) -> Result<Self, FxError> {
        let target = parse_count(raw)?;
        Ok(Self::new(target, CounterFormat::for_count(raw, target), timing))
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn format(&self) -> CounterFormat {
        self.format
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Text shown before the first tick.
    pub fn initial_text(&self) -> String {
        self.format.intermediate(0.0)
    }

    /// Advance one display-refresh tick.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target {
            return Some(CounterFrame { text: self.format.intermediate(self.current), done: false });
        }
        self.done = true;
        Some(CounterFrame { text: self.format.final_text(self.target), done: true })
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}
