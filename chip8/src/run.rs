use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use chip8vm::Chip8;

use crate::config::Config;
use crate::display::Display;

/// Runs a ROM until the configured cycle budget is spent, then hands the machine back
/// so its final frame can be shown.
pub fn run(config: &Config) -> Result<Chip8> {
    let mut chip8: Chip8 = Chip8::new();
    let mut display = Display::new();

    // Load ROM
    chip8
        .load_rom(&config.rom)
        .with_context(|| format!("unable to load ROM '{}'", config.rom.display()))?;

    // Set initial timing
    let mut last_cycle: Instant = Instant::now();
    let mut cycles: u64 = 0;
    let mut buzzing = false;

    while config.cycles.map_or(true, |limit| cycles < limit) {
        // No keyboard is attached, so every key stays up
        chip8.set_keys([false; 16]);

        // Update state
        chip8.cycle();
        cycles += 1;

        // If the draw flag is set, render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(frame);
        }

        if chip8.buzzer_active() != buzzing {
            buzzing = chip8.buzzer_active();
            debug!("buzzer {} (volume {})", if buzzing { "on" } else { "off" }, config.volume);
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if config.cycle_delay > elapsed_cycle_time {
            std::thread::sleep(config.cycle_delay - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!(
        "stopped after {} cycles, {} frames drawn, critical error: {:?}",
        cycles,
        display.frames(),
        chip8.critical_error()
    );
    Ok(chip8)
}
