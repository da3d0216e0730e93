use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

mod config;
mod display;
mod run;

use config::Config;
use display::Display;

/// Run a CHIP-8 ROM headlessly and print its final frame
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    #[arg(short, long, default_value_t = 1.0, help = "Buzzer volume between 0 and 1")]
    volume: f32,

    #[arg(short = 'd', long, default_value_t = 2, help = "Delay between cycles in milliseconds")]
    cycle_delay: u64,

    #[arg(short, long, help = "Stop after this many cycles")]
    cycles: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            rom: args.rom,
            volume: args.volume,
            cycle_delay: Duration::from_millis(args.cycle_delay),
            cycles: args.cycles,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config: Config = Args::parse().into();
    config.validate()?;
    info!("{:?}", config);

    let chip8 = run::run(&config)?;
    print!("{}", Display::frame_to_text(chip8.frame_buffer()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "chip8", "pong.ch8", "--volume", "0.25", "-d", "5", "--cycles", "100",
        ]);
        let config: Config = args.into();
        assert_eq!(config.rom, PathBuf::from("pong.ch8"));
        assert_eq!(config.volume, 0.25);
        assert_eq!(config.cycle_delay, Duration::from_millis(5));
        assert_eq!(config.cycles, Some(100));
    }

    #[test]
    fn test_args_defaults() {
        let config: Config = Args::parse_from(["chip8", "pong.ch8"]).into();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.cycle_delay, Duration::from_millis(2));
        assert_eq!(config.cycles, None);
    }
}
