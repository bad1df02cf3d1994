pub use chip8::{Chip8, TimerTick};
pub use constants::{CLOCK_SPEED, TIMER_FREQUENCY};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use quirks::Quirks;
pub use state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod quirks;
pub mod state;
