use std::path::Path;

use log::{error, info, trace, warn};

use crate::constants::{KEY_COUNT, MEMORY_SIZE};
use crate::error::RomError;
use crate::instruction;
use crate::opcode::Opcode;
use crate::rng::{ByteSource, RandomSource};
use crate::rom;
use crate::state::{CriticalError, FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random byte source used by `Cxkk`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU and its timers, one cycle at a time
/// - inspecting its frame buffer for rendering by some display
///
/// The host owns the cadence: call `cycle` once per tick, then read the frame buffer
/// and write the keypad before the next one.
pub struct Chip8 {
    state: State,
    rng: Box<dyn RandomSource>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(Box::new(ByteSource::new()))
    }

    /// A machine whose `Cxkk` results are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(ByteSource::with_seed(seed)))
    }

    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        info!("CPU initialized");
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Load a rom from a file on disk
    ///
    /// # Arguments
    /// * `path` a raw Chip-8 program image
    pub fn load_rom(&mut self, path: &Path) -> Result<(), RomError> {
        let result = rom::read_rom(path).and_then(|rom| self.state.load_rom(&rom));
        match &result {
            Ok(()) => info!("successfully loaded ROM into memory ('{}')", path.display()),
            Err(e) => error!("{} ('{}')", e, path.display()),
        }
        result
    }

    /// Load a rom that is already in memory
    pub fn load_rom_bytes(&mut self, rom: &[u8]) -> Result<(), RomError> {
        self.state.load_rom(rom).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    /// Returns the FrameBuffer if the last cycle changed it
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The current FrameBuffer, whether or not it changed
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Overwrite the whole keypad at once
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.pressed_keys = keys;
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    /// Keys outside 0..F are ignored
    fn set_key(&mut self, key: u8, pressed: bool) {
        match self.state.pressed_keys.get_mut(key as usize) {
            Some(slot) => *slot = pressed,
            None => warn!("ignoring out-of-range key {:#04X}", key),
        }
    }

    pub fn pressed_keys(&self) -> &[bool; KEY_COUNT] {
        &self.state.pressed_keys
    }

    pub fn critical_error(&self) -> CriticalError {
        self.state.critical_error
    }

    /// Whether the sound timer is running
    pub fn buzzer_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// One full machine cycle: an instruction followed by a timer tick
    pub fn cycle(&mut self) {
        self.advance_cpu();
        self.advance_timers();
    }

    /// Advances the CPU by a single instruction
    /// - fetches the opcode at pc and moves pc past it
    /// - decodes and executes it
    pub fn advance_cpu(&mut self) {
        let op = self.get_op();
        self.state.pc = self.state.pc.wrapping_add(2);
        self.state.draw_flag = false;

        let instruction = instruction::from_op(op);
        trace!(
            "{} {} pc{:04X} i{:04X} v{:02X?}",
            op,
            instruction.mnemonic,
            self.state.pc,
            self.state.i,
            self.state.v
        );
        self.state = (instruction.operation)(op, &self.state, self.rng.as_mut());
    }

    /// Decrements each non-zero timer by one
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    /// Fetches past the end of memory wrap around to 0.
    fn get_op(&self) -> Opcode {
        let pc = self.state.pc as usize;
        Opcode::from_bytes(
            self.state.memory[pc % MEMORY_SIZE],
            self.state.memory[(pc + 1) % MEMORY_SIZE],
        )
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
