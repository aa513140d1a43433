//! Page components routed by the application shell.

pub mod about;
pub mod home;
