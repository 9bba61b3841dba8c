//! One-shot visibility triggers.
//!
//! DESIGN
//! ======
//! Each watched entity carries an explicit `Pending -> Fired` state instead of
//! relying on the observer's unobserve side effect, so firing is decided here
//! and the browser observer only reports intersection changes.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WatchState {
    #[default]
    Pending,
    Fired,
}

/// Fire state for a single watched element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityWatch {
    state: WatchState,
}

impl VisibilityWatch {
    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == WatchState::Fired
    }

    /// Feed one intersection report. Returns `true` only on the report that fires.
    pub fn signal(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == WatchState::Pending {
            self.state = WatchState::Fired;
            return true;
        }
        false
    }
}

/// Independent one-shot watches keyed by entity.
#[derive(Clone, Debug)]
pub struct WatchSet<K> {
    watches: HashMap<K, VisibilityWatch>,
}

impl<K> Default for WatchSet<K> {
    fn default() -> Self {
        Self { watches: HashMap::new() }
    }
}

impl<K: Eq + Hash> WatchSet<K> {
    /// Start watching `key`. Re-watching an already known key keeps its state.
    pub fn watch(&mut self, key: K) {
        self.watches.entry(key).or_default();
    }

    /// Feed one report for `key`; unknown keys never fire.
    pub fn signal(&mut self, key: &K, intersecting: bool) -> bool {
        self.watches.get_mut(key).is_some_and(|watch| watch.signal(intersecting))
    }

    pub fn state(&self, key: &K) -> Option<WatchState> {
        self.watches.get(key).map(VisibilityWatch::state)
    }

    pub fn pending(&self) -> usize {
        self.watches.values().filter(|watch| !watch.has_fired()).count()
    }

    /// True once something was watched and every watch has fired.
    pub fn is_exhausted(&self) -> bool {
        !self.watches.is_empty() && self.pending() == 0
    }
}
