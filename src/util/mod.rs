//! Utility helpers isolating browser and environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that needs `web-sys` lives here behind the `hydrate` feature;
//! server builds compile the same modules down to no-ops so components and
//! pages stay environment-agnostic.

pub mod browser;
pub mod document;
pub mod storage;
