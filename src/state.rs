use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, MEMORY_SIZE, PROGRAM_START,
    SPRITE_SHEET, STACK_DEPTH,
};

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register written by arithmetic, shifts and draws
/// - (i) a 16-bit memory address register; only the low 12 bits reach memory
///
/// Counter
/// - (pc) a 16-bit program counter, advanced past an instruction as soon as it's fetched
///
/// Pointer
/// - (sp) the stack depth, 0 when empty and 16 when full
///
/// Timers
/// - 2 8-bit timers (delay & sound) counting down at 60Hz
///
/// ## Memory
/// - 16 return addresses worth of stack
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the ROM
/// - 32x64 byte frame buffer holding 0/1 per pixel
///
/// ## Input
/// - 16 pressed/released flags for the keys 0..F, written by the host
/// - `waiting_for_key` names the register that FX0A will write once a key is down
#[derive(Clone, Debug)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [bool; 16],
    pub waiting_for_key: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_START..FONT_START + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keys: [false; 16],
            waiting_for_key: None,
        }
    }

    /// Reads the byte at `addr`, masked to 12 bits.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }

    /// Writes the byte at `addr`, masked to 12 bits.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory[(addr & ADDRESS_MASK) as usize] = value;
    }

    /// VF
    pub fn set_flag(&mut self, flag: bool) {
        self.v[0xF] = u8::from(flag);
    }

    /// Index of the lowest-numbered key that's currently held, if any.
    pub fn first_pressed_key(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|k| k as u8)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_font_and_zeroed_memory() {
        let state = State::new();
        assert_eq!(state.memory[0x000..0x050], SPRITE_SHEET[..]);
        assert!(state.memory[0x050..].iter().all(|&b| b == 0));
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_reads_and_writes_are_masked() {
        let mut state = State::new();
        state.write(0x1300, 0xAB);
        assert_eq!(state.memory[0x300], 0xAB);
        assert_eq!(state.read(0xF300), 0xAB);
    }

    #[test]
    fn test_first_pressed_key() {
        let mut state = State::new();
        assert_eq!(state.first_pressed_key(), None);
        state.keys[0xC] = true;
        state.keys[0x3] = true;
        assert_eq!(state.first_pressed_key(), Some(0x3));
    }
}
