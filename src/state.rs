use log::trace;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT, FONT_START_ADDRESS, KEY_COUNT, MEMORY_SIZE,
    REGISTER_COUNT, ROM_START_ADDRESS, STACK_SIZE,
};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The most recent stack fault.
///
/// Faults never halt execution; this is purely diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CriticalError {
    None,
    StackUnderflow,
    StackOverflow,
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag by convention only
/// - (i) a 16-bit memory address register, never clamped
///
/// Counter
/// - (pc) a 16-bit program counter, starts at the ROM load address
///
/// Pointer
/// - (sp) the number of occupied stack slots (0 is empty, 16 is full)
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per cycle
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font
///     - 0x200.. holds the ROM
/// - 64x32 frame buffer of on/off pixels
///
/// ## Input
/// - 16 pressed flags, one per key 0..F, only ever written by the host
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_keys: [bool; KEY_COUNT],
    pub critical_error: CriticalError,
}

impl State {
    pub fn new() -> Self {
        let mut state = State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: ROM_START_ADDRESS,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory: [0; MEMORY_SIZE],
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_keys: [false; KEY_COUNT],
            critical_error: CriticalError::None,
        };
        state.load_font();
        state
    }

    /// Copies the glyph table into its reserved window in low memory
    fn load_font(&mut self) {
        let start = FONT_START_ADDRESS as usize;
        self.memory[start..start + FONT.len()].copy_from_slice(&FONT);
        trace!("font loaded into memory at {:#05X}", FONT_START_ADDRESS);
    }

    /// Reads a byte, wrapping addresses past the end of memory
    pub fn read_byte(&self, addr: usize) -> u8 {
        self.memory[addr % MEMORY_SIZE]
    }

    /// Writes a byte, wrapping addresses past the end of memory
    pub fn write_byte(&mut self, addr: usize, value: u8) {
        self.memory[addr % MEMORY_SIZE] = value;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_state {
    use super::*;
    use crate::constants::FONT_GLYPH_SIZE;

    #[test]
    fn test_starts_at_rom_address() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.i, 0);
        assert_eq!(state.critical_error, CriticalError::None);
    }

    #[test]
    fn test_font_glyphs_in_memory() {
        let state = State::new();
        for k in 0..16 {
            let addr = FONT_START_ADDRESS as usize + FONT_GLYPH_SIZE * k;
            assert_eq!(
                state.memory[addr..addr + FONT_GLYPH_SIZE],
                FONT[FONT_GLYPH_SIZE * k..FONT_GLYPH_SIZE * (k + 1)]
            );
        }
    }

    #[test]
    fn test_memory_outside_font_is_zeroed() {
        let state = State::new();
        assert!(state.memory[..0x50].iter().all(|&b| b == 0));
        assert!(state.memory[0xA0..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_glyph_zero_shape() {
        let state = State::new();
        assert_eq!(state.memory[0x50..0x55], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
    }

    #[test]
    fn test_memory_access_wraps() {
        let mut state = State::new();
        state.write_byte(0x1000, 0xAB);
        assert_eq!(state.memory[0], 0xAB);
        assert_eq!(state.read_byte(0x1000), 0xAB);
    }
}
