use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START_ADDRESS, VF};
use crate::opcode::Opcode;
use crate::rng::RandomSource;
use crate::state::State;

/// Every operation maps the current state to the next one.
///
/// The pc has already been moved past `op` when an operation runs, so skips add 2
/// and jumps simply overwrite it.
pub type Operation = fn(op: Opcode, state: &State, rng: &mut dyn RandomSource) -> State;

fn skip_if(condition: bool, state: &State) -> State {
    let pc = if condition {
        state.pc.wrapping_add(0x2)
    } else {
        state.pc
    };
    State { pc, ..*state }
}

/// unassigned opcode; do nothing
pub fn nop(_op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    *state
}

/// clear
pub fn clr(_op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        draw_flag: true,
        ..*state
    }
}

/// PC = STACK.pop()
/// An empty stack sends execution to 0
pub fn rts(_op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut next = *state;
    next.pc = next.pop_stack().unwrap_or(0);
    next
}

/// PC = addr
pub fn jump(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        pc: op.nnn(),
        ..*state
    }
}

/// STACK.push(PC); PC = addr
pub fn call(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut next = *state;
    next.push_stack(state.pc);
    next.pc = op.nnn();
    next
}

/// if Vx == kk then pc += 2
pub fn ske(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(state.v[op.x() as usize] == op.kk(), state)
}

/// if Vx != kk then pc += 2
pub fn skne(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(state.v[op.x() as usize] != op.kk(), state)
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(state.v[op.x() as usize] == state.v[op.y() as usize], state)
}

/// Vx = kk
pub fn load(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] = op.kk();
    State { v, ..*state }
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] = v[op.x() as usize].wrapping_add(op.kk());
    State { v, ..*state }
}

/// Vx = Vy
pub fn mv(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] = v[op.y() as usize];
    State { v, ..*state }
}

/// Vx |= Vy
pub fn or(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] |= v[op.y() as usize];
    State { v, ..*state }
}

/// Vx &= Vy
pub fn and(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] &= v[op.y() as usize];
    State { v, ..*state }
}

/// Vx ^= Vy
pub fn xor(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] ^= v[op.y() as usize];
    State { v, ..*state }
}

// The flag-setting arithmetic below writes VF first and Vx second, so when x is F
// the register ends up holding the result rather than the flag.

/// Vx += Vy; VF = carry
pub fn addv(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let (res, carry) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    let mut v = state.v;
    v[VF] = carry as u8;
    v[op.x() as usize] = res;
    State { v, ..*state }
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[VF] = (vx > vy) as u8;
    v[op.x() as usize] = vx.wrapping_sub(vy);
    State { v, ..*state }
}

/// Vx >>= 1; VF = lsb
/// Shifts Vx in place; Vy is ignored
pub fn shr(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let vx = state.v[op.x() as usize];
    let mut v = state.v;
    v[VF] = vx & 0x1;
    v[op.x() as usize] = vx >> 1;
    State { v, ..*state }
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[VF] = (vy > vx) as u8;
    v[op.x() as usize] = vy.wrapping_sub(vx);
    State { v, ..*state }
}

/// Vx <<= 1; VF = msb
/// Shifts Vx in place; Vy is ignored
pub fn shl(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let vx = state.v[op.x() as usize];
    let mut v = state.v;
    v[VF] = vx >> 7;
    v[op.x() as usize] = vx << 1;
    State { v, ..*state }
}

/// if Vx != Vy then pc +=2
pub fn skrne(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(state.v[op.x() as usize] != state.v[op.y() as usize], state)
}

/// I = addr
pub fn loadi(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        i: op.nnn(),
        ..*state
    }
}

/// PC = V0 + addr
pub fn jumpi(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        pc: op.nnn() + u16::from(state.v[0x0]),
        ..*state
    }
}

/// Vx = rand_byte & kk
pub fn rand(op: Opcode, state: &State, rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] = rng.next_byte() & op.kk();
    State { v, ..*state }
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer, wrapping on both axes.
/// Sets VF if any pixels were erased
pub fn draw(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;
    let origin_x = state.v[op.x() as usize] as usize;
    let origin_y = state.v[op.y() as usize] as usize;

    // Reset the carry flag (used for collision detection)
    v[VF] = 0x0;

    for row in 0..op.n() as usize {
        let y = (origin_y + row) % DISPLAY_HEIGHT;
        let sprite_byte = state.read_byte(state.i as usize + row);
        for bit in 0..8 {
            if (sprite_byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            if frame_buffer[y][x] {
                v[VF] = 0x1;
            }
            frame_buffer[y][x] = !frame_buffer[y][x];
        }
    }

    State {
        draw_flag: true,
        v,
        frame_buffer,
        ..*state
    }
}

fn key_down(op: Opcode, state: &State) -> bool {
    state.pressed_keys[(state.v[op.x() as usize] & 0xF) as usize]
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(key_down(op, state), state)
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    skip_if(!key_down(op, state), state)
}

/// Vx = DT
pub fn moved(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    v[op.x() as usize] = state.delay_timer;
    State { v, ..*state }
}

/// await keypress for Vx
/// With no key down the pc is wound back so this instruction runs again next cycle
pub fn keyd(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    match state.pressed_keys.iter().position(|&pressed| pressed) {
        Some(key) => {
            let mut v = state.v;
            v[op.x() as usize] = key as u8;
            State { v, ..*state }
        }
        None => State {
            pc: state.pc.wrapping_sub(0x2),
            ..*state
        },
    }
}

/// DT = Vx
pub fn setdt(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        delay_timer: state.v[op.x() as usize],
        ..*state
    }
}

/// ST = Vx
pub fn setst(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        sound_timer: state.v[op.x() as usize],
        ..*state
    }
}

/// I += Vx
pub fn addi(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        i: state.i.wrapping_add(u16::from(state.v[op.x() as usize])),
        ..*state
    }
}

/// I = FONT + Vx * 5
/// Set I to the memory address of the glyph for Vx
pub fn ldspr(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    State {
        i: FONT_START_ADDRESS + u16::from(state.v[op.x() as usize]) * FONT_GLYPH_SIZE as u16,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let vx = state.v[op.x() as usize];
    let mut next = *state;
    let i = state.i as usize;
    next.write_byte(i, vx / 100);
    next.write_byte(i + 1, vx / 10 % 10);
    next.write_byte(i + 2, vx % 10);
    next
}

/// mem[I..I+16] = V0..VF
/// Always stores the whole register file
pub fn stor(_op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut next = *state;
    for (offset, &value) in state.v.iter().enumerate() {
        next.write_byte(state.i as usize + offset, value);
    }
    next
}

/// V0..VF = mem[I..I+16]
/// Always fills the whole register file
pub fn read(_op: Opcode, state: &State, _rng: &mut dyn RandomSource) -> State {
    let mut v = state.v;
    for (offset, register) in v.iter_mut().enumerate() {
        *register = state.read_byte(state.i as usize + offset);
    }
    State { v, ..*state }
}
