use crate::opcode::Opcode;
use crate::operations::*;

/// A decoded opcode: its assembler mnemonic and the operation that executes it
#[derive(Copy, Clone)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub operation: Operation,
}

fn instr(mnemonic: &'static str, operation: Operation) -> Instruction {
    Instruction {
        mnemonic,
        operation,
    }
}

/// Selects the correct Instruction for a given Opcode.
/// Anything unassigned decodes to a no-op.
pub fn from_op(op: Opcode) -> Instruction {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => instr("CLS", clr),
        (0x0, 0x0, 0xE, 0xE) => instr("RET", rts),
        (0x1, ..) => instr("JP addr", jump),
        (0x2, ..) => instr("CALL addr", call),
        (0x3, ..) => instr("SE Vx, byte", ske),
        (0x4, ..) => instr("SNE Vx, byte", skne),
        (0x5, .., 0x0) => instr("SE Vx, Vy", skre),
        (0x6, ..) => instr("LD Vx, byte", load),
        (0x7, ..) => instr("ADD Vx, byte", add),
        (0x8, .., 0x0) => instr("LD Vx, Vy", mv),
        (0x8, .., 0x1) => instr("OR Vx, Vy", or),
        (0x8, .., 0x2) => instr("AND Vx, Vy", and),
        (0x8, .., 0x3) => instr("XOR Vx, Vy", xor),
        (0x8, .., 0x4) => instr("ADD Vx, Vy", addv),
        (0x8, .., 0x5) => instr("SUB Vx, Vy", sub),
        (0x8, .., 0x6) => instr("SHR Vx", shr),
        (0x8, .., 0x7) => instr("SUBN Vx, Vy", subn),
        (0x8, .., 0xE) => instr("SHL Vx", shl),
        (0x9, .., 0x0) => instr("SNE Vx, Vy", skrne),
        (0xA, ..) => instr("LD I, addr", loadi),
        (0xB, ..) => instr("JP V0, addr", jumpi),
        (0xC, ..) => instr("RND Vx, byte", rand),
        (0xD, ..) => instr("DRW Vx, Vy, nibble", draw),
        (0xE, _, 0x9, 0xE) => instr("SKP Vx", skpr),
        (0xE, _, 0xA, 0x1) => instr("SKNP Vx", skup),
        (0xF, _, 0x0, 0x7) => instr("LD Vx, DT", moved),
        (0xF, _, 0x0, 0xA) => instr("LD Vx, K", keyd),
        (0xF, _, 0x1, 0x5) => instr("LD DT, Vx", setdt),
        (0xF, _, 0x1, 0x8) => instr("LD ST, Vx", setst),
        (0xF, _, 0x1, 0xE) => instr("ADD I, Vx", addi),
        (0xF, _, 0x2, 0x9) => instr("LD F, Vx", ldspr),
        (0xF, _, 0x3, 0x3) => instr("LD B, Vx", bcd),
        (0xF, _, 0x5, 0x5) => instr("LD [I], Vx", stor),
        (0xF, _, 0x6, 0x5) => instr("LD Vx, [I]", read),
        _ => instr("???", nop),
    }
}
