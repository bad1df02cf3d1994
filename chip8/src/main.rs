use std::path::PathBuf;

use clap::Parser;

use c8vm::CLOCK_SPEED;

mod audio;
mod keymap;
mod run;

/// Runs a Chip-8 ROM in a window
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions per second
    #[arg(long, default_value_t = CLOCK_SPEED)]
    pub ips: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the original COSMAC VIP behavior for shifts and FX55/FX65
    #[arg(long)]
    pub vip: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run::run(args)
}
