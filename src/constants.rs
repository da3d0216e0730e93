/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Number of general purpose registers (V0..VF)
pub const REGISTER_COUNT: usize = 16;

/// Index of the flag register
pub const VF: usize = 0xF;

/// Maximum call depth
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Where ROMs are loaded and where execution begins
pub const ROM_START_ADDRESS: u16 = 0x200;

/// Largest ROM that fits between `ROM_START_ADDRESS` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ROM_START_ADDRESS as usize;

/// Where the font glyphs live in low memory
pub const FONT_START_ADDRESS: u16 = 0x50;

/// Bytes (rows) per font glyph
pub const FONT_GLYPH_SIZE: usize = 5;

/// # Font
/// 16 hexadecimal glyphs (0..F), 5 rows each.
///
/// Each row is a byte whose high nibble holds the 4 pixels of that row, e.g. `0`:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
