//! # Refresh Loop Module
//!
//! Owns the random source and produces one `Snapshot` per refresh cycle.
//! Both front ends (GUI timer and CLI interval) drive the same `Refresher`.
//!
//! ## States
//! - `Idle`: waiting for the next period to elapse
//! - `Refreshing`: regenerating readings and recomputing totals
//!
//! The refresher returns to `Idle` before `refresh()` returns. A snapshot is
//! a complete replacement for the previous one; no history is kept.

use crate::aggregate::{Aggregate, Summary};
use crate::channel::{generate_readings, RandomSource, ReadingSet};
use crate::config::Config;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Default refresh period
pub const REFRESH_PERIOD: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

/// Everything one cycle shows on screen
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 1-based cycle counter
    pub cycle: u64,
    pub taken_at: DateTime<Local>,
    pub readings: ReadingSet,
    pub aggregate: Aggregate,
    pub summary: Option<Summary>,
}

pub struct Refresher<R> {
    rng: R,
    period: Duration,
    state: RefreshState,
    cycles: u64,
}

impl Refresher<fastrand::Rng> {
    /// Build a refresher from config, seeding the RNG when a seed is set
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::new(rng, config.refresh_interval())
    }
}

impl<R: RandomSource> Refresher<R> {
    pub fn new(rng: R, period: Duration) -> Self {
        Self {
            rng,
            period,
            state: RefreshState::Idle,
            cycles: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one cycle: Idle -> Refreshing -> Idle
    pub fn refresh(&mut self) -> Snapshot {
        self.state = RefreshState::Refreshing;

        let readings = generate_readings(&mut self.rng);
        let aggregate = Aggregate::from_readings(&readings);
        let summary = Summary::from_readings(&readings);
        self.cycles += 1;

        log::debug!(
            "Refresh cycle {}: total {:.3} V, {:.3} A",
            self.cycles,
            aggregate.total_voltage,
            aggregate.total_current
        );

        self.state = RefreshState::Idle;

        Snapshot {
            cycle: self.cycles,
            taken_at: Local::now(),
            readings,
            aggregate,
            summary,
        }
    }
}
