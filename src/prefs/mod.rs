//! Preference controller core: domain model, seams, and operations.
//!
//! DESIGN
//! ======
//! Nothing in this tree touches the browser. The store and surface traits
//! are the only way the controller reaches the outside world, so the whole
//! module tests natively; `util` binds the browser implementations.

pub mod controller;
pub mod model;
pub mod store;
pub mod surface;
