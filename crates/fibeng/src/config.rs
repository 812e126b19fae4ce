//! Application configuration from CLI flags and environment.

use clap::Parser;

/// FibEng — fixed-width Fibonacci engine and benchmarking client.
#[derive(Parser, Debug)]
#[command(name = "fibeng", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute (clamped to 0..=1000 by the device).
    #[arg(
        short,
        long,
        default_value_t = 1000,
        env = "FIBENG_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Sweep every index from 0 to the maximum, recording latencies.
    #[arg(long)]
    pub sweep: bool,

    /// File receiving the decimal values during a sweep.
    #[arg(short, long, default_value = "fib_output")]
    pub output: String,

    /// File receiving per-index timing samples during a sweep.
    #[arg(short, long, default_value = "fib_time")]
    pub time_output: String,

    /// Emit timing samples as JSON instead of tab-separated columns.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
