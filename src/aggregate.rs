use crate::channel::{round3, ChannelId, ReadingSet, VOLTAGE_MAX, VOLTAGE_MIN};

/// Pack totals across every channel of one cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    pub total_voltage: f64,
    pub total_current: f64,
}

impl Aggregate {
    pub fn from_readings(readings: &ReadingSet) -> Self {
        readings.iter().fold(Self::default(), |acc, reading| Self {
            total_voltage: acc.total_voltage + reading.voltage,
            total_current: acc.total_current + reading.current,
        })
    }
}

/// Cell extreme: the voltage and the channel it was seen on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellExtreme {
    pub id: ChannelId,
    pub voltage: f64,
}

/// Values for the bottom summary panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub highest: CellExtreme,
    pub lowest: CellExtreme,
    /// Difference between highest and lowest cell voltage
    pub spread: f64,
    /// Number of cells reporting a voltage inside the nominal range
    pub valid_cells: usize,
}

impl Summary {
    /// Returns `None` for an empty reading set.
    ///
    /// Ties resolve to the lowest-numbered channel.
    pub fn from_readings(readings: &ReadingSet) -> Option<Self> {
        let mut iter = readings.iter();
        let first = iter.next()?;
        let seed = CellExtreme { id: first.id, voltage: first.voltage };

        let (highest, lowest) = iter.fold((seed, seed), |(high, low), reading| {
            let cell = CellExtreme { id: reading.id, voltage: reading.voltage };
            (
                if cell.voltage > high.voltage { cell } else { high },
                if cell.voltage < low.voltage { cell } else { low },
            )
        });

        let valid_cells = readings
            .iter()
            .filter(|r| (VOLTAGE_MIN..=VOLTAGE_MAX).contains(&r.voltage))
            .count();

        Some(Self {
            highest,
            lowest,
            spread: round3(highest.voltage - lowest.voltage),
            valid_cells,
        })
    }
}
