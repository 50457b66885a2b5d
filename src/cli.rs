use crate::channel::ChannelReading;
use crate::config::Config;
use crate::error::CliError;
use crate::refresh::{Refresher, Snapshot};
use std::future::Future;
use std::io::{self, Write};

/// One console line per channel
pub fn format_reading(reading: &ChannelReading) -> String {
    format!(
        "{}: voltage = {:.3} V, current = {:.3} A",
        reading.id, reading.voltage, reading.current
    )
}

/// Write a full cycle: blank line, timestamp header, then every channel
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", snapshot.taken_at.format("%Y-%m-%d %H:%M:%S"))?;
    for reading in &snapshot.readings {
        writeln!(out, "{}", format_reading(reading))?;
    }
    out.flush()
}

/// Print a new reading set every refresh period until Ctrl+C.
pub async fn run(config: &Config) -> Result<(), CliError> {
    run_with(config, &mut io::stdout(), tokio::signal::ctrl_c()).await
}

/// Write a new reading set to `out` every refresh period until `shutdown`
/// resolves.
///
/// The first cycle is written immediately. A pending tick is always served
/// before the shutdown signal.
pub async fn run_with<W, S>(config: &Config, out: &mut W, shutdown: S) -> Result<(), CliError>
where
    W: Write,
    S: Future<Output = io::Result<()>>,
{
    let mut refresher = Refresher::from_config(config);
    let mut ticker = tokio::time::interval(refresher.period());

    writeln!(
        out,
        "Generating simulated data... refreshing every {} seconds.",
        refresher.period().as_secs()
    )
    .map_err(CliError::Output)?;
    writeln!(out, "Press Ctrl+C to stop.").map_err(CliError::Output)?;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = ticker.tick() => {
                let snapshot = refresher.refresh();
                write_snapshot(out, &snapshot).map_err(CliError::Output)?;
            }
            result = &mut shutdown => {
                result.map_err(CliError::Signal)?;
                writeln!(out).map_err(CliError::Output)?;
                writeln!(out, "Stopped.").map_err(CliError::Output)?;
                log::info!("Interrupted after {} cycles", refresher.cycles());
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::tests::FixedSource;
    use crate::channel::ChannelId;
    use crate::refresh::REFRESH_PERIOD;

    #[test]
    fn test_format_reading() {
        let reading = ChannelReading {
            id: ChannelId::new(12).unwrap(),
            voltage: 3.5,
            current: 0.07,
        };
        assert_eq!(
            format_reading(&reading),
            "ch12: voltage = 3.500 V, current = 0.070 A"
        );
    }

    #[test]
    fn test_write_snapshot_layout() {
        let source = FixedSource { voltage: 4.1, current: 0.25 };
        let snapshot = Refresher::new(source, REFRESH_PERIOD).refresh();

        let mut buf = Vec::new();
        write_snapshot(&mut buf, &snapshot).expect("Failed to write");
        let output = String::from_utf8(buf).expect("Output is not UTF-8");
        let lines: Vec<&str> = output.lines().collect();

        // blank + header + 48 channels
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("--- ") && lines[1].ends_with(" ---"));
        assert_eq!(lines[2], "ch1: voltage = 4.100 V, current = 0.250 A");
        assert_eq!(lines[49], "ch48: voltage = 4.100 V, current = 0.250 A");
    }

    fn seeded(interval: u64) -> Config {
        Config {
            refresh_interval_secs: interval,
            seed: Some(3),
        }
    }

    fn output_lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .expect("Output is not UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_prints_first_cycle_then_stops() {
        let mut buf = Vec::new();
        run_with(&seeded(15), &mut buf, std::future::ready(Ok(())))
            .await
            .expect("Run failed");

        let lines = output_lines(buf);
        // banner (2) + one cycle (50) + blank + Stopped.
        assert_eq!(lines.len(), 54);
        assert_eq!(
            lines[0],
            "Generating simulated data... refreshing every 15 seconds."
        );
        assert_eq!(lines[1], "Press Ctrl+C to stop.");
        assert!(lines[3].starts_with("--- "));
        assert!(lines[4].starts_with("ch1: voltage = "));
        assert!(lines[51].starts_with("ch48: voltage = "));
        assert_eq!(lines[52], "");
        assert_eq!(lines[53], "Stopped.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_prints_one_cycle_per_period() {
        let mut buf = Vec::new();
        let shutdown = async {
            tokio::time::sleep(std::time::Duration::from_secs(20)).await;
            Ok::<(), io::Error>(())
        };
        run_with(&seeded(15), &mut buf, shutdown)
            .await
            .expect("Run failed");

        let lines = output_lines(buf);
        let headers = lines.iter().filter(|l| l.starts_with("--- ")).count();
        // ticks at 0 s and 15 s, shutdown at 20 s
        assert_eq!(headers, 2);
        assert_eq!(lines.last().map(String::as_str), Some("Stopped."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reports_signal_failure() {
        let mut buf = Vec::new();
        let failure = std::future::ready(Err(io::Error::new(io::ErrorKind::Other, "no handler")));
        let err = run_with(&seeded(15), &mut buf, failure).await.unwrap_err();

        assert!(matches!(err, CliError::Signal(_)));
        let lines = output_lines(buf);
        assert!(!lines.iter().any(|l| l == "Stopped."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_zero_interval_does_not_panic() {
        let mut buf = Vec::new();
        run_with(&seeded(0), &mut buf, std::future::ready(Ok(())))
            .await
            .expect("Run failed");

        let lines = output_lines(buf);
        assert_eq!(
            lines[0],
            "Generating simulated data... refreshing every 1 seconds."
        );
    }
}
