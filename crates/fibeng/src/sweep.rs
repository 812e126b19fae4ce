//! Benchmarking sweep over the device front end.
//!
//! Opens one session, visits every index from 0 to the sweep bound, and
//! records the decimal value plus three latencies per index: wall-clock
//! read time as seen by the client, engine compute time, and decimal
//! formatting time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::device::{FibDevice, Seek};

/// One latency sample from the sweep, durations in nanoseconds.
#[derive(Debug, Clone, Serialize)]
pub struct TimingSample {
    /// Fibonacci index.
    pub n: u64,
    /// End-to-end read latency observed by the client.
    pub read_ns: u128,
    /// Engine compute latency reported by the device.
    pub compute_ns: u128,
    /// Decimal formatting latency reported by the device.
    pub format_ns: u128,
}

/// Sweep indices `0..=max`, writing values to `output` and timing samples
/// to `time_output` (tab-separated, or JSON when `json` is set).
pub fn run(
    max: u64,
    output: &Path,
    time_output: &Path,
    json: bool,
    show_progress: bool,
) -> Result<Vec<TimingSample>> {
    let device = FibDevice::new();
    let mut session = device
        .open()
        .context("failed to open the fibonacci device")?;

    let mut values = BufWriter::new(
        File::create(output)
            .with_context(|| format!("failed to create {}", output.display()))?,
    );
    let mut times = BufWriter::new(
        File::create(time_output)
            .with_context(|| format!("failed to create {}", time_output.display()))?,
    );

    let bar = if show_progress {
        let bar = ProgressBar::new(max + 1);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} F({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut samples = Vec::with_capacity(usize::try_from(max + 1).unwrap_or(0));
    tracing::info!(max, "starting sweep");

    for n in 0..=max {
        session.seek(Seek::Set(i64::try_from(n).unwrap_or(i64::MAX)));

        let start = Instant::now();
        let reading = session.read();
        let read_ns = start.elapsed().as_nanos();

        writeln!(values, "F({n}) = {}", reading.digits)
            .context("failed to write value log")?;

        let sample = TimingSample {
            n,
            read_ns,
            compute_ns: reading.compute.as_nanos(),
            format_ns: reading.format.as_nanos(),
        };
        if !json {
            writeln!(
                times,
                "{}\t{}\t{}\t{}",
                sample.n, sample.read_ns, sample.compute_ns, sample.format_ns
            )
            .context("failed to write timing log")?;
        }
        samples.push(sample);

        bar.set_message(n.to_string());
        bar.inc(1);
    }

    if json {
        serde_json::to_writer_pretty(&mut times, &samples)
            .context("failed to write timing log as JSON")?;
    }

    values.flush().context("failed to flush value log")?;
    times.flush().context("failed to flush timing log")?;
    bar.finish_and_clear();
    tracing::info!(max, "sweep complete");

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_writes_values_and_timings() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fib_output");
        let time_output = dir.path().join("fib_time");

        let samples = run(20, &output, &time_output, false, false).unwrap();
        assert_eq!(samples.len(), 21);

        let values = std::fs::read_to_string(&output).unwrap();
        assert!(values.contains("F(10) = 55"));
        assert!(values.contains("F(20) = 6765"));

        let times = std::fs::read_to_string(&time_output).unwrap();
        assert_eq!(times.lines().count(), 21);
        let first = times.lines().next().unwrap();
        assert!(first.starts_with("0\t"));
    }

    #[test]
    fn sweep_json_output_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fib_output");
        let time_output = dir.path().join("fib_time.json");

        run(5, &output, &time_output, true, false).unwrap();

        let data = std::fs::read_to_string(&time_output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 6);
        assert_eq!(parsed[3]["n"], 3);
    }
}
