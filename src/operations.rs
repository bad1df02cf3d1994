use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, GLYPH_SIZE, STACK_DEPTH,
};
use crate::error::{Error, Result};
use crate::state::{FrameBuffer, State};

// Every operation runs after the fetch has already moved the pc past the opcode, so a skip is a
// single extra +2 and jumps/calls assign the absolute target.

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(2);
    }
}

/// clear
pub fn cls(state: &mut State) {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn ret(state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow);
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp];
    Ok(())
}

/// PC = addr
pub fn jp(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    if state.sp == STACK_DEPTH {
        return Err(Error::StackOverflow);
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn se_byte(state: &mut State, x: usize, kk: u8) {
    let condition = state.v[x] == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
pub fn sne_byte(state: &mut State, x: usize, kk: u8) {
    let condition = state.v[x] != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn se_reg(state: &mut State, x: usize, y: usize) {
    let condition = state.v[x] == state.v[y];
    skip_if(state, condition);
}

/// Vx = kk
pub fn ld_byte(state: &mut State, x: usize, kk: u8) {
    state.v[x] = kk;
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add_byte(state: &mut State, x: usize, kk: u8) {
    state.v[x] = state.v[x].wrapping_add(kk);
}

/// Vx = Vy
pub fn ld_reg(state: &mut State, x: usize, y: usize) {
    state.v[x] = state.v[y];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: usize, y: usize) {
    state.v[x] |= state.v[y];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: usize, y: usize) {
    state.v[x] &= state.v[y];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: usize, y: usize) {
    state.v[x] ^= state.v[y];
}

/// Vx += Vy; VF = overflow
/// VF is written after Vx, so with x = F the flag wins
pub fn add_reg(state: &mut State, x: usize, y: usize) {
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    state.v[x] = res;
    state.set_flag(over);
}

/// Vx -= Vy; VF = !borrow
pub fn sub(state: &mut State, x: usize, y: usize) {
    let (res, borrow) = state.v[x].overflowing_sub(state.v[y]);
    state.v[x] = res;
    state.set_flag(!borrow);
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(state: &mut State, x: usize, y: usize, shift_uses_vy: bool) {
    let source = if shift_uses_vy { state.v[y] } else { state.v[x] };
    state.v[x] = source >> 1;
    state.set_flag(source & 0x1 == 0x1);
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(state: &mut State, x: usize, y: usize) {
    let (res, borrow) = state.v[y].overflowing_sub(state.v[x]);
    state.v[x] = res;
    state.set_flag(!borrow);
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(state: &mut State, x: usize, y: usize, shift_uses_vy: bool) {
    let source = if shift_uses_vy { state.v[y] } else { state.v[x] };
    state.v[x] = source << 1;
    state.set_flag(source & 0x80 == 0x80);
}

/// if Vx != Vy then pc += 2
pub fn sne_reg(state: &mut State, x: usize, y: usize) {
    let condition = state.v[x] != state.v[y];
    skip_if(state, condition);
}

/// I = addr
pub fn ld_i(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr
pub fn jp_v0(state: &mut State, addr: u16) {
    state.pc = (addr + u16::from(state.v[0x0])) & ADDRESS_MASK;
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut State, x: usize, kk: u8, rand_byte: u8) {
    state.v[x] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an 8 pixel wide sprite from memory I..I+n onto the FrameBuffer.
///
/// The starting coordinates wrap onto the screen; pixels past the right or bottom edge are
/// clipped unless `wrap` is set. VF is set if any pixel was erased.
pub fn drw(state: &mut State, x: usize, y: usize, height: u8, wrap: bool) {
    let start_x = state.v[x] as usize % DISPLAY_WIDTH;
    let start_y = state.v[y] as usize % DISPLAY_HEIGHT;
    let mut collision = false;

    for row in 0..height {
        let sprite = state.read(state.i.wrapping_add(u16::from(row)));
        let py = match on_screen(start_y + row as usize, DISPLAY_HEIGHT, wrap) {
            Some(py) => py,
            None => break,
        };
        for bit in 0..8 {
            if (sprite >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let px = match on_screen(start_x + bit, DISPLAY_WIDTH, wrap) {
                Some(px) => px,
                None => break,
            };
            collision |= toggle(&mut state.frame_buffer, px, py);
        }
    }

    state.set_flag(collision);
    state.draw_flag = true;
}

fn on_screen(coordinate: usize, limit: usize, wrap: bool) -> Option<usize> {
    if coordinate < limit {
        Some(coordinate)
    } else if wrap {
        Some(coordinate % limit)
    } else {
        None
    }
}

/// Flips a pixel on; returns whether it was already on
fn toggle(frame_buffer: &mut FrameBuffer, x: usize, y: usize) -> bool {
    let pixel = &mut frame_buffer[y][x];
    let erased = *pixel == 1;
    *pixel ^= 1;
    erased
}

/// if Vx.pressed then pc += 2
pub fn skp(state: &mut State, x: usize) {
    let key = (state.v[x] & 0x0F) as usize;
    let condition = state.keys[key];
    skip_if(state, condition);
}

/// if !Vx.pressed then pc += 2
pub fn sknp(state: &mut State, x: usize) {
    let key = (state.v[x] & 0x0F) as usize;
    let condition = !state.keys[key];
    skip_if(state, condition);
}

/// Vx = DT
pub fn ld_from_dt(state: &mut State, x: usize) {
    state.v[x] = state.delay_timer;
}

/// await keypress for Vx
/// Pins the pc on this instruction; the cpu resolves the wait once a key is down
pub fn wait_key(state: &mut State, x: usize) {
    state.waiting_for_key = Some(x);
    state.pc = state.pc.wrapping_sub(2);
}

/// DT = Vx
pub fn ld_dt(state: &mut State, x: usize) {
    state.delay_timer = state.v[x];
}

/// ST = Vx
pub fn ld_st(state: &mut State, x: usize) {
    state.sound_timer = state.v[x];
}

/// I += Vx
/// Wraps on all 16 bits of I and leaves VF alone
pub fn add_i(state: &mut State, x: usize) {
    state.i = state.i.wrapping_add(u16::from(state.v[x]));
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ld_glyph(state: &mut State, x: usize) {
    state.i = FONT_START as u16 + u16::from(state.v[x] & 0x0F) * GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: usize) {
    let value = state.v[x];
    let digits = [value / 100, (value / 10) % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: usize, increment_i: bool) {
    for reg in 0..=x {
        state.write(state.i.wrapping_add(reg as u16), state.v[reg]);
    }
    if increment_i {
        state.i = state.i.wrapping_add(x as u16 + 1);
    }
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: usize, increment_i: bool) {
    for reg in 0..=x {
        state.v[reg] = state.read(state.i.wrapping_add(reg as u16));
    }
    if increment_i {
        state.i = state.i.wrapping_add(x as u16 + 1);
    }
}
