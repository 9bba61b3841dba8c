//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate storage, DOM mutation, observers and frame timing
//! from component logic. Outside the `csr` build they compile to no-ops.

pub mod cancel;
pub mod dark_mode;
pub mod dom;
pub mod frame;
#[cfg(feature = "csr")]
pub mod observer;
