use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_ROM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::quirks::Quirks;
use crate::state::{FrameBuffer, State};

/// What happened during one 60Hz timer tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerTick {
    /// The sound timer just ran out; a host that plays fixed-length beeps should stop here.
    pub beep_edge: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `quirks` it was configured with
///  - an `rng` feeding CXKK
///
/// Supplies interfaces for:
/// - resetting and loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers at 60Hz
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here blocks or sleeps; pacing is up to the host.
pub struct Chip8 {
    state: State,
    quirks: Quirks,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A Chip-8 whose CXKK sequence is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            quirks: Quirks::default(),
            rng,
        }
    }

    /// Swaps in a different set of quirks; they're kept across resets
    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    /// Returns everything to its power-on state with the sprite sheet installed.
    pub fn reset(&mut self) {
        debug!("reset");
        self.state = State::new();
    }

    /// Copies a rom into memory at 0x200
    ///
    /// Doesn't reset first, so call `reset` before loading a different program.
    ///
    /// # Arguments
    /// * `rom` the raw program bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte rom", rom.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Advances the CPU by a single instruction
    /// - while awaiting a keypress, only checks for one
    /// - otherwise fetches, moves the pc past the opcode, then decodes and executes it
    ///
    /// On error the pc is left past the offending instruction.
    pub fn step(&mut self) -> Result<()> {
        if let Some(register) = self.state.waiting_for_key {
            if let Some(key) = self.state.first_pressed_key() {
                debug!("V{:X} <- key {:X}", register, key);
                self.state.v[register] = key;
                self.state.waiting_for_key = None;
                self.state.pc = self.state.pc.wrapping_add(2);
            }
            return Ok(());
        }

        let pc = self.state.pc;
        let op = self.fetch();
        self.state.pc = pc.wrapping_add(2);

        let instruction = Instruction::decode(op)?;
        trace!("{:03X}: {:04X} {}", pc & ADDRESS_MASK, op, instruction);
        instruction.execute(&mut self.state, &self.quirks, &mut self.rng)?;

        if let Some(register) = self.state.waiting_for_key {
            debug!("waiting for a key for V{:X}", register);
        }
        Ok(())
    }

    /// Counts both timers down by one; meant to be called at 60Hz
    pub fn tick_timers(&mut self) -> TimerTick {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let mut tick = TimerTick::default();
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
            tick.beep_edge = self.state.sound_timer == 0;
            if tick.beep_edge {
                debug!("beep");
            }
        }
        tick
    }

    /// Whether the buzzer should be sounding right now
    pub fn is_beeping(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex key 0..F; only the low nibble is used
    /// * `pressed` whether the key is down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.state.keys[(key & 0x0F) as usize] = pressed;
    }

    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    pub fn read_framebuffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether pixel (x, y) is lit; out of range coordinates are never lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && self.state.frame_buffer[y][x] == 1
    }

    /// Returns whether the frame changed since the last call, and clears the flag
    pub fn take_draw_flag(&mut self) -> bool {
        std::mem::replace(&mut self.state.draw_flag, false)
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn get_frame(&mut self) -> Option<&FrameBuffer> {
        if self.take_draw_flag() {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn is_waiting_for_key(&self) -> bool {
        self.state.waiting_for_key.is_some()
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&self) -> u16 {
        let left = u16::from(self.state.read(self.state.pc));
        let right = u16::from(self.state.read(self.state.pc.wrapping_add(1)));
        left << 8 | right
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
