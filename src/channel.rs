//! # Channel Data Module
//!
//! Synthetic telemetry for the 48 battery channels of the charger.
//! Every refresh cycle produces a brand new `ReadingSet`; nothing is carried
//! over from the previous cycle except the channel ids themselves.
//!
//! ## Key Types
//! - `ChannelId`: 1-based channel number, displayed as `ch<N>`
//! - `ChannelReading`: voltage/current pair for one channel
//! - `ReadingSet`: exactly one reading per channel, ordered by id
//! - `RandomSource`: injectable uniform sampler (real RNG or test double)

use std::fmt;

/// Number of simulated channels
pub const CHANNEL_COUNT: u8 = 48;

/// Cell voltage range in volts
pub const VOLTAGE_MIN: f64 = 3.000;
pub const VOLTAGE_MAX: f64 = 4.200;

/// Charging current range in amps
pub const CURRENT_MIN: f64 = 0.001;
pub const CURRENT_MAX: f64 = 1.000;

/// 1-based channel number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(u8);

impl ChannelId {
    /// Returns `None` outside of 1..=48
    pub fn new(number: u8) -> Option<Self> {
        (1..=CHANNEL_COUNT).contains(&number).then_some(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Two-digit label used on the GUI grid ("01".."48")
    pub fn label(&self) -> String {
        format!("{:02}", self.0)
    }

    /// All channel ids in ascending order
    pub fn all() -> impl Iterator<Item = ChannelId> {
        (1..=CHANNEL_COUNT).map(ChannelId)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelReading {
    pub id: ChannelId,
    pub voltage: f64,
    pub current: f64,
}

/// Uniform sampler used by the generator.
///
/// Tests substitute a fixed source so that totals and thresholds can be
/// asserted exactly.
pub trait RandomSource {
    /// Sample uniformly from `[low, high]`
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl RandomSource for fastrand::Rng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.f64()
    }
}

/// Round to 3 decimal places (millivolt / milliamp resolution)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One full cycle of readings, one per channel, ordered by channel id
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSet {
    readings: Vec<ChannelReading>,
}

impl ReadingSet {
    pub fn get(&self, id: ChannelId) -> Option<&ChannelReading> {
        // Readings are stored in id order starting at channel 1
        self.readings.get(usize::from(id.number()) - 1)
    }

    pub fn as_slice(&self) -> &[ChannelReading] {
        &self.readings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChannelReading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a ChannelReading;
    type IntoIter = std::slice::Iter<'a, ChannelReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

/// Generate a fresh reading for every channel.
///
/// Voltage and current are drawn independently for each channel and rounded
/// to 3 decimals. The voltage of a channel is always drawn before its current.
pub fn generate_readings<R: RandomSource + ?Sized>(rng: &mut R) -> ReadingSet {
    let readings = ChannelId::all()
        .map(|id| {
            let voltage = round3(rng.uniform(VOLTAGE_MIN, VOLTAGE_MAX));
            let current = round3(rng.uniform(CURRENT_MIN, CURRENT_MAX));
            ChannelReading { id, voltage, current }
        })
        .collect();

    ReadingSet { readings }
}
