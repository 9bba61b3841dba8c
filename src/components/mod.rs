//! Landing page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the interactive page chrome and feed browser events into
//! the `state` models, reading settings from the `FxConfig` context.

pub mod action_button;
pub mod fade_in;
pub mod mobile_nav;
pub mod scroll_progress;
pub mod stats;
pub mod theme_toggle;
