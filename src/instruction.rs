use std::fmt;

use rand::{Rng, RngCore};

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations;
use crate::quirks::Quirks;
use crate::state::State;

/// # Instructions
/// A decoded opcode. Register operands are indices into V (0x0..=0xF).
///
/// The mnemonics follow Cowgod's technical reference; `Display` prints them in that form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SkipEqByte(usize, u8),
    /// 4xkk
    SkipNeByte(usize, u8),
    /// 5xy0
    SkipEqReg(usize, usize),
    /// 6xkk
    LoadByte(usize, u8),
    /// 7xkk
    AddByte(usize, u8),
    /// 8xy0
    LoadReg(usize, usize),
    /// 8xy1
    Or(usize, usize),
    /// 8xy2
    And(usize, usize),
    /// 8xy3
    Xor(usize, usize),
    /// 8xy4
    AddReg(usize, usize),
    /// 8xy5
    Sub(usize, usize),
    /// 8xy6
    ShiftRight(usize, usize),
    /// 8xy7
    SubN(usize, usize),
    /// 8xyE
    ShiftLeft(usize, usize),
    /// 9xy0
    SkipNeReg(usize, usize),
    /// Annn
    LoadI(u16),
    /// Bnnn
    JumpV0(u16),
    /// Cxkk
    Random(usize, u8),
    /// Dxyn
    Draw(usize, usize, u8),
    /// Ex9E
    SkipKeyPressed(usize),
    /// ExA1
    SkipKeyNotPressed(usize),
    /// Fx07
    LoadDelay(usize),
    /// Fx0A
    WaitKey(usize),
    /// Fx15
    SetDelay(usize),
    /// Fx18
    SetSound(usize),
    /// Fx1E
    AddI(usize),
    /// Fx29
    LoadGlyph(usize),
    /// Fx33
    Bcd(usize),
    /// Fx55
    StoreRegisters(usize),
    /// Fx65
    LoadRegisters(usize),
}

impl Instruction {
    /// Selects the Instruction for a given opcode.
    ///
    /// Pure; anything outside the 34 supported patterns (including 0nnn) is an `UnknownOpcode`.
    pub fn decode(op: u16) -> Result<Self> {
        use Instruction::*;

        let (x, y) = (op.x(), op.y());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x1, ..) => Jump(op.addr()),
            (0x2, ..) => Call(op.addr()),
            (0x3, ..) => SkipEqByte(x, op.kk()),
            (0x4, ..) => SkipNeByte(x, op.kk()),
            (0x5, .., 0x0) => SkipEqReg(x, y),
            (0x6, ..) => LoadByte(x, op.kk()),
            (0x7, ..) => AddByte(x, op.kk()),
            (0x8, .., 0x0) => LoadReg(x, y),
            (0x8, .., 0x1) => Or(x, y),
            (0x8, .., 0x2) => And(x, y),
            (0x8, .., 0x3) => Xor(x, y),
            (0x8, .., 0x4) => AddReg(x, y),
            (0x8, .., 0x5) => Sub(x, y),
            (0x8, .., 0x6) => ShiftRight(x, y),
            (0x8, .., 0x7) => SubN(x, y),
            (0x8, .., 0xE) => ShiftLeft(x, y),
            (0x9, .., 0x0) => SkipNeReg(x, y),
            (0xA, ..) => LoadI(op.addr()),
            (0xB, ..) => JumpV0(op.addr()),
            (0xC, ..) => Random(x, op.kk()),
            (0xD, ..) => Draw(x, y, op.n()),
            (0xE, .., 0x9, 0xE) => SkipKeyPressed(x),
            (0xE, .., 0xA, 0x1) => SkipKeyNotPressed(x),
            (0xF, .., 0x0, 0x7) => LoadDelay(x),
            (0xF, .., 0x0, 0xA) => WaitKey(x),
            (0xF, .., 0x1, 0x5) => SetDelay(x),
            (0xF, .., 0x1, 0x8) => SetSound(x),
            (0xF, .., 0x1, 0xE) => AddI(x),
            (0xF, .., 0x2, 0x9) => LoadGlyph(x),
            (0xF, .., 0x3, 0x3) => Bcd(x),
            (0xF, .., 0x5, 0x5) => StoreRegisters(x),
            (0xF, .., 0x6, 0x5) => LoadRegisters(x),
            _ => return Err(Error::UnknownOpcode(op)),
        };
        Ok(instruction)
    }

    /// Applies the instruction to `state`.
    ///
    /// The pc must already point past this instruction; jumps and calls overwrite it.
    pub fn execute(self, state: &mut State, quirks: &Quirks, rng: &mut dyn RngCore) -> Result<()> {
        use Instruction::*;

        match self {
            Cls => operations::cls(state),
            Ret => operations::ret(state)?,
            Jump(addr) => operations::jp(state, addr),
            Call(addr) => operations::call(state, addr)?,
            SkipEqByte(x, kk) => operations::se_byte(state, x, kk),
            SkipNeByte(x, kk) => operations::sne_byte(state, x, kk),
            SkipEqReg(x, y) => operations::se_reg(state, x, y),
            LoadByte(x, kk) => operations::ld_byte(state, x, kk),
            AddByte(x, kk) => operations::add_byte(state, x, kk),
            LoadReg(x, y) => operations::ld_reg(state, x, y),
            Or(x, y) => operations::or(state, x, y),
            And(x, y) => operations::and(state, x, y),
            Xor(x, y) => operations::xor(state, x, y),
            AddReg(x, y) => operations::add_reg(state, x, y),
            Sub(x, y) => operations::sub(state, x, y),
            ShiftRight(x, y) => operations::shr(state, x, y, quirks.shift_uses_vy),
            SubN(x, y) => operations::subn(state, x, y),
            ShiftLeft(x, y) => operations::shl(state, x, y, quirks.shift_uses_vy),
            SkipNeReg(x, y) => operations::sne_reg(state, x, y),
            LoadI(addr) => operations::ld_i(state, addr),
            JumpV0(addr) => operations::jp_v0(state, addr),
            Random(x, kk) => operations::rnd(state, x, kk, rng.gen()),
            Draw(x, y, n) => operations::drw(state, x, y, n, quirks.wrap_sprites),
            SkipKeyPressed(x) => operations::skp(state, x),
            SkipKeyNotPressed(x) => operations::sknp(state, x),
            LoadDelay(x) => operations::ld_from_dt(state, x),
            WaitKey(x) => operations::wait_key(state, x),
            SetDelay(x) => operations::ld_dt(state, x),
            SetSound(x) => operations::ld_st(state, x),
            AddI(x) => operations::add_i(state, x),
            LoadGlyph(x) => operations::ld_glyph(state, x),
            Bcd(x) => operations::bcd(state, x),
            StoreRegisters(x) => operations::stor(state, x, quirks.load_store_increments_i),
            LoadRegisters(x) => operations::read(state, x, quirks.load_store_increments_i),
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;

        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jump(addr) => write!(f, "JP {:#05X}", addr),
            Call(addr) => write!(f, "CALL {:#05X}", addr),
            SkipEqByte(x, kk) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNeByte(x, kk) => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipEqReg(x, y) => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadByte(x, kk) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            AddByte(x, kk) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            LoadReg(x, y) => write!(f, "LD V{:X}, V{:X}", x, y),
            Or(x, y) => write!(f, "OR V{:X}, V{:X}", x, y),
            And(x, y) => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor(x, y) => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg(x, y) => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub(x, y) => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight(x, y) => write!(f, "SHR V{:X}, V{:X}", x, y),
            SubN(x, y) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft(x, y) => write!(f, "SHL V{:X}, V{:X}", x, y),
            SkipNeReg(x, y) => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI(addr) => write!(f, "LD I, {:#05X}", addr),
            JumpV0(addr) => write!(f, "JP V0, {:#05X}", addr),
            Random(x, kk) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw(x, y, n) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipKeyPressed(x) => write!(f, "SKP V{:X}", x),
            SkipKeyNotPressed(x) => write!(f, "SKNP V{:X}", x),
            LoadDelay(x) => write!(f, "LD V{:X}, DT", x),
            WaitKey(x) => write!(f, "LD V{:X}, K", x),
            SetDelay(x) => write!(f, "LD DT, V{:X}", x),
            SetSound(x) => write!(f, "LD ST, V{:X}", x),
            AddI(x) => write!(f, "ADD I, V{:X}", x),
            LoadGlyph(x) => write!(f, "LD F, V{:X}", x),
            Bcd(x) => write!(f, "LD B, V{:X}", x),
            StoreRegisters(x) => write!(f, "LD [I], V{:X}", x),
            LoadRegisters(x) => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
