use clap::Parser;
use crate::config::{DEFAULT_TICK_INTERVAL, DEFAULT_TOKEN_COUNT};

#[derive(Parser)]
#[command(name = "tokenscope")]
#[command(about = "Real-time token discovery screener (simulated feed)")]
pub struct Cli {
    /// Feed tick interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_TICK_INTERVAL)]
    pub interval: f64,

    /// Number of tokens in the simulated universe
    #[arg(short, long, default_value_t = DEFAULT_TOKEN_COUNT)]
    pub tokens: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}
