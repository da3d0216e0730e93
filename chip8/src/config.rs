use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};

/// Everything the launcher needs to start a session.
/// Only `rom` ever reaches the interpreter.
#[derive(Debug, Clone)]
pub struct Config {
    pub rom: PathBuf,
    /// Buzzer volume in 0.0..=1.0
    pub volume: f32,
    /// Pause between cycles
    pub cycle_delay: Duration,
    /// Stop after this many cycles; run until interrupted when `None`
    pub cycles: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.rom.as_os_str().is_empty() {
            bail!("no ROM path given");
        }
        if !(0.0..=1.0).contains(&self.volume) {
            bail!("volume must be between 0 and 1, got {}", self.volume);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(volume: f32) -> Config {
        Config {
            rom: PathBuf::from("roms/pong.ch8"),
            volume,
            cycle_delay: Duration::from_millis(2),
            cycles: None,
        }
    }

    #[test]
    fn test_accepts_volume_bounds() {
        assert!(config(0.0).validate().is_ok());
        assert!(config(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_volume() {
        assert!(config(1.5).validate().is_err());
        assert!(config(-0.1).validate().is_err());
        assert!(config(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_rom_path() {
        let mut config = config(0.5);
        config.rom = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
