//! Simulated 48-channel battery charger monitor.
//!
//! Shared by the `tpt-monitor` window and the `tpt-monitor-cli` console.

pub mod aggregate;
pub mod app;
pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod refresh;
pub mod thresholds;
pub mod ui;
