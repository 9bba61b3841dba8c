//! Pure page-enhancement models.
//!
//! DESIGN
//! ======
//! Every behavior with timing or state lives here as plain data so it can be
//! tested without a document. Components own the browser wiring and feed
//! these models one event at a time.

pub mod counter;
pub mod menu;
pub mod theme;
pub mod transient;
pub mod viewport;
pub mod visibility;
