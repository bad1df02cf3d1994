/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Every memory access is masked to 12 bits
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded into memory starting here; it's also the initial pc
pub const PROGRAM_START: u16 = 0x200;

/// Everything from PROGRAM_START to the end of memory is available to a ROM
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Return addresses the stack can hold
pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Instructions executed per second when the host doesn't say otherwise
pub const CLOCK_SPEED: u32 = 700;

/// Frequency at which the delay and sound timers count down
pub const TIMER_FREQUENCY: u32 = 60;

/// Where the sprite sheet lives; glyph `d` starts at `FONT_START + d * GLYPH_SIZE`
pub const FONT_START: usize = 0x000;
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite Sheet
/// Built-in glyphs for the hexadecimal digits 0..F.
///
/// Each glyph is 4 pixels wide and 5 rows tall; only the high nibble of each row is used.
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
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
