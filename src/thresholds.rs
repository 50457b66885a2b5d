//! Cell threshold configuration and classification.
//!
//! The grid colors every cell by a fixed priority: the two flagged channels
//! first, then the low and high voltage thresholds.
//!
//! # Compile-Time Validation
//!
//! `const` assertions verify the low threshold sits below the high one and
//! that both lie inside the generated voltage range.

use crate::channel::{ChannelId, VOLTAGE_MAX, VOLTAGE_MIN};

/// Channel permanently shown as critical
pub const CRITICAL_CHANNEL: u8 = 1;

/// Channel permanently shown as warning
pub const WARNING_CHANNEL: u8 = 9;

/// Cells strictly below this voltage are low (BLUE)
pub const LOW_VOLTAGE: f64 = 3.100;

/// Cells strictly above this voltage are high (GREEN)
pub const HIGH_VOLTAGE: f64 = 4.150;

const _: () = assert!(LOW_VOLTAGE < HIGH_VOLTAGE);
const _: () = assert!(VOLTAGE_MIN < LOW_VOLTAGE);
const _: () = assert!(HIGH_VOLTAGE < VOLTAGE_MAX);
const _: () = assert!(CRITICAL_CHANNEL != WARNING_CHANNEL);

/// Visual category of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellCategory {
    CriticalRed,
    WarningYellow,
    LowBlue,
    HighGreen,
    NormalWhite,
}

impl CellCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellCategory::CriticalRed => "critical-red",
            CellCategory::WarningYellow => "warning-yellow",
            CellCategory::LowBlue => "low-blue",
            CellCategory::HighGreen => "high-green",
            CellCategory::NormalWhite => "normal-white",
        }
    }
}

/// Pick the category for a channel. Channel checks take precedence over
/// voltage thresholds.
pub fn classify(id: ChannelId, voltage: f64) -> CellCategory {
    match id.number() {
        CRITICAL_CHANNEL => CellCategory::CriticalRed,
        WARNING_CHANNEL => CellCategory::WarningYellow,
        _ if voltage < LOW_VOLTAGE => CellCategory::LowBlue,
        _ if voltage > HIGH_VOLTAGE => CellCategory::HighGreen,
        _ => CellCategory::NormalWhite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(n: u8) -> ChannelId {
        ChannelId::new(n).unwrap()
    }

    #[test]
    fn test_critical_channel_ignores_voltage() {
        for voltage in [3.0, 3.05, 3.7, 4.2] {
            assert_eq!(classify(ch(1), voltage), CellCategory::CriticalRed);
        }
    }

    #[test]
    fn test_warning_channel_ignores_voltage() {
        for voltage in [3.0, 3.05, 3.7, 4.2] {
            assert_eq!(classify(ch(9), voltage), CellCategory::WarningYellow);
        }
    }

    #[test]
    fn test_voltage_thresholds() {
        assert_eq!(classify(ch(5), 3.050), CellCategory::LowBlue);
        assert_eq!(classify(ch(5), 4.200), CellCategory::HighGreen);
        assert_eq!(classify(ch(5), 3.700), CellCategory::NormalWhite);
    }

    #[test]
    fn test_threshold_boundaries_are_normal() {
        assert_eq!(classify(ch(5), LOW_VOLTAGE), CellCategory::NormalWhite);
        assert_eq!(classify(ch(5), HIGH_VOLTAGE), CellCategory::NormalWhite);
        assert_eq!(classify(ch(5), 3.099), CellCategory::LowBlue);
        assert_eq!(classify(ch(5), 4.151), CellCategory::HighGreen);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(CellCategory::CriticalRed.as_str(), "critical-red");
        assert_eq!(CellCategory::WarningYellow.as_str(), "warning-yellow");
        assert_eq!(CellCategory::LowBlue.as_str(), "low-blue");
        assert_eq!(CellCategory::HighGreen.as_str(), "high-green");
        assert_eq!(CellCategory::NormalWhite.as_str(), "normal-white");
    }
}
