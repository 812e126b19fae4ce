//! Application entry point and dispatch.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::device::{FibDevice, Seek};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    if config.sweep {
        return run_sweep(config);
    }

    run_single(config)
}

fn run_single(config: &AppConfig) -> Result<()> {
    let device = FibDevice::new();
    let mut session = device
        .open()
        .context("failed to open the fibonacci device")?;

    let index = session.seek(Seek::Set(config.n));
    if i64::try_from(index) != Ok(config.n) {
        tracing::debug!(requested = config.n, clamped = index, "seek clamped");
    }

    let reading = session.read();
    if config.quiet {
        println!("{}", reading.digits);
    } else {
        println!("F({}) = {}", reading.index, reading.digits);
        println!(
            "compute: {:?}  format: {:?}",
            reading.compute, reading.format
        );
    }
    Ok(())
}

fn run_sweep(config: &AppConfig) -> Result<()> {
    let max = u64::try_from(config.n.clamp(0, i64::MAX)).unwrap_or(0);
    let max = max.min(fibeng_core::MAX_INDEX);

    let samples = crate::sweep::run(
        max,
        Path::new(&config.output),
        Path::new(&config.time_output),
        config.json,
        !config.quiet,
    )?;

    if !config.quiet {
        println!(
            "swept {} indices; values in {}, timings in {}",
            samples.len(),
            config.output,
            config.time_output
        );
    }
    Ok(())
}
