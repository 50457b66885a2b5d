//! # UI Module
//!
//! Styling for the monitor window. Layout lives in `app.rs`.

pub mod styles;
