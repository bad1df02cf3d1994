use thiserror::Error;

/// Everything that can go wrong while loading or running a program.
///
/// None of these are fatal to the VM itself; the host decides whether to halt.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM is {size} bytes but at most {max} fit in memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("unknown opcode {0:#06X}")]
    UnknownOpcode(u16),

    #[error("stack overflow: CALL with all 16 return addresses in use")]
    StackOverflow,

    #[error("stack underflow: RET with an empty stack")]
    StackUnderflow,

    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
