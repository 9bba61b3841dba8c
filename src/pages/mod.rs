//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns layout and copy and delegates behavior to `components`.

pub mod landing;
