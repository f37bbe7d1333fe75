use crate::{disassembler::opcodes::AddressingMode, memory::MemoryImage};

/// Target of the relative branch at `pc`: the signed operand byte is added to the address of the
/// following instruction.
pub fn relative_target(pc: u16, mem: &MemoryImage) -> u16 {
    let offset = mem.read(pc.wrapping_add(1)) as i8; // u8->i8 for the sign
    pc.wrapping_add(2).wrapping_add_signed(offset as i16)
}

/// Little-endian 16-bit operand of the instruction at `pc`.
pub fn absolute_target(pc: u16, mem: &MemoryImage) -> u16 {
    mem.read_word(pc.wrapping_add(1))
}

pub fn index_suffix(mode: AddressingMode) -> &'static str {
    use AddressingMode::*;
    match mode {
        ZeroPageX | AbsoluteX => ",x",
        ZeroPageY | AbsoluteY => ",y",
        _ => "",
    }
}

pub mod render {
    use super::*;

    fn operand(pc: u16, mem: &MemoryImage) -> u8 {
        mem.read(pc.wrapping_add(1))
    }

    pub fn implied(_pc: u16, _mem: &MemoryImage) -> String {
        String::new()
    }

    pub fn immediate(pc: u16, mem: &MemoryImage) -> String {
        format!("#${:02x}", operand(pc, mem))
    }

    pub fn zero_page(pc: u16, mem: &MemoryImage) -> String {
        format!("${:02x}", operand(pc, mem))
    }

    pub fn zero_page_x(pc: u16, mem: &MemoryImage) -> String {
        format!("${:02x},x", operand(pc, mem))
    }

    pub fn zero_page_y(pc: u16, mem: &MemoryImage) -> String {
        format!("${:02x},y", operand(pc, mem))
    }

    pub fn relative(pc: u16, mem: &MemoryImage) -> String {
        format!("${:04x}", relative_target(pc, mem))
    }

    pub fn absolute(pc: u16, mem: &MemoryImage) -> String {
        format!("${:04x}", absolute_target(pc, mem))
    }

    pub fn absolute_x(pc: u16, mem: &MemoryImage) -> String {
        format!("${:04x},x", absolute_target(pc, mem))
    }

    pub fn absolute_y(pc: u16, mem: &MemoryImage) -> String {
        format!("${:04x},y", absolute_target(pc, mem))
    }

    pub fn indirect(pc: u16, mem: &MemoryImage) -> String {
        format!("(${:04x})", absolute_target(pc, mem))
    }

    pub fn indirect_x(pc: u16, mem: &MemoryImage) -> String {
        format!("(${:02x},x)", operand(pc, mem))
    }

    pub fn indirect_y(pc: u16, mem: &MemoryImage) -> String {
        format!("(${:02x}),y", operand(pc, mem))
    }
}

// -------------------------------------------------------------------------------------------------
