use std::fmt::{Display, Formatter};

use crate::{
    disassembler::{
        addressing::{absolute_target, relative_target},
        opcodes::{decode, mode_info, Opcode, OP_JMP_ABSOLUTE, OP_JMP_INDIRECT, OP_JSR},
    },
    memory::MemoryImage,
};

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Instruction {
    pub offset: u16,
    pub opcode: Opcode,
}

/// How an instruction hands control to whatever executes after it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Flow {
    /// Conditional branch: both the target and the next instruction are reachable.
    Branch(u16),
    /// `JSR`: the subroutine returns, so the next instruction is reachable too.
    Call(u16),
    /// Absolute `JMP`: only the target is reachable.
    Jump(u16),
    /// `JMP ($nnnn)`: the target cannot be known without executing the program.
    IndirectJump,
    /// `RTI` and `RTS`.
    Return,
    /// Any other defined instruction.
    Sequential,
    /// Byte that does not decode to an instruction.
    Undefined,
}

pub struct DisplayInstruction<'m> {
    instruction: Instruction,
    mem:         &'m MemoryImage,
}

// -------------------------------------------------------------------------------------------------

impl Instruction {
    pub fn fetch(mem: &MemoryImage, offset: u16) -> Self {
        Self { offset, opcode: decode(mem.read(offset)) }
    }

    pub fn size(self) -> usize {
        self.opcode.instruction_size()
    }

    /// Address right after this instruction, or `None` when it ends at the top of the address space.
    pub fn next_offset(self) -> Option<u16> {
        u16::try_from(self.offset as usize + self.size()).ok()
    }

    pub fn flow(self, mem: &MemoryImage) -> Flow {
        let op = self.opcode;
        if op.mnemonic.is_conditional_branch() {
            Flow::Branch(relative_target(self.offset, mem))
        } else if op == OP_JSR {
            Flow::Call(absolute_target(self.offset, mem))
        } else if op == OP_JMP_ABSOLUTE {
            Flow::Jump(absolute_target(self.offset, mem))
        } else if op == OP_JMP_INDIRECT {
            Flow::IndirectJump
        } else if op.mnemonic.is_return() {
            Flow::Return
        } else if op.mnemonic.is_defined() {
            Flow::Sequential
        } else {
            Flow::Undefined
        }
    }

    /// The address operand of branches, `JSR` and absolute `JMP`.
    pub fn redirect_target(self, mem: &MemoryImage) -> Option<u16> {
        if !self.opcode.is_redirect() {
            None
        } else if self.opcode.mnemonic.is_conditional_branch() {
            Some(relative_target(self.offset, mem))
        } else {
            Some(absolute_target(self.offset, mem))
        }
    }

    /// The 16-bit address operand of absolute and absolute-indexed instructions.
    pub fn absolute_operand(self, mem: &MemoryImage) -> Option<u16> {
        self.opcode.mode.is_absolute_family().then(|| absolute_target(self.offset, mem))
    }

    pub fn operand_text(self, mem: &MemoryImage) -> String {
        (mode_info(self.opcode.mode).render)(self.offset, mem)
    }

    pub fn display(self, mem: &MemoryImage) -> DisplayInstruction<'_> {
        DisplayInstruction { instruction: self, mem }
    }
}

impl Display for DisplayInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operand = self.instruction.operand_text(self.mem);
        if operand.is_empty() {
            f.pad(self.instruction.opcode.mnemonic.as_str())
        } else {
            f.pad(&format!("{} {operand}", self.instruction.opcode.mnemonic))
        }
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_with(code: &[u8]) -> MemoryImage {
        let mut prg = vec![0u8; 0x8000];
        prg[..code.len()].copy_from_slice(code);
        MemoryImage::from_prg(&prg).unwrap()
    }

    #[test]
    fn test_flow_categories() {
        let mem = memory_with(&[
            0x90, 0x10, // bcc
            0x20, 0x00, 0x90, // jsr $9000
            0x4C, 0x00, 0xA0, // jmp $a000
            0x6C, 0xFC, 0xFF, // jmp ($fffc)
            0x40, // rti
            0x60, // rts
            0xA9, 0x01, // lda #$01
            0x02, // undefined
        ]);
        let flows: Vec<Flow> = [0x8000, 0x8002, 0x8005, 0x8008, 0x800B, 0x800C, 0x800D, 0x800F]
            .into_iter()
            .map(|pc| Instruction::fetch(&mem, pc).flow(&mem))
            .collect();
        assert_eq!(flows, [
            Flow::Branch(0x8012),
            Flow::Call(0x9000),
            Flow::Jump(0xA000),
            Flow::IndirectJump,
            Flow::Return,
            Flow::Return,
            Flow::Sequential,
            Flow::Undefined,
        ]);
    }

    #[test]
    fn test_next_offset_at_top_of_memory() {
        let mut prg = vec![0u8; 0x4000];
        prg[0x3FFE] = 0xAD;
        let mem = MemoryImage::from_prg(&prg).unwrap();
        assert_eq!(Instruction::fetch(&mem, 0xFFFD).next_offset(), Some(0xFFFE));
        assert_eq!(Instruction::fetch(&mem, 0xFFFE).next_offset(), None);
    }

    #[test]
    fn test_operands() {
        let mem = memory_with(&[0xBD, 0x00, 0xC0, 0xA5, 0x10, 0xD0, 0xFE]);
        let lda_abs_x = Instruction::fetch(&mem, 0x8000);
        assert_eq!(lda_abs_x.absolute_operand(&mem), Some(0xC000));
        assert_eq!(lda_abs_x.redirect_target(&mem), None);
        let lda_zp = Instruction::fetch(&mem, 0x8003);
        assert_eq!(lda_zp.absolute_operand(&mem), None);
        let bne = Instruction::fetch(&mem, 0x8005);
        assert_eq!(bne.redirect_target(&mem), Some(0x8005));
    }

    #[test]
    fn test_display() {
        let mem = memory_with(&[0xBD, 0x00, 0xC0, 0xEA]);
        assert_eq!(Instruction::fetch(&mem, 0x8000).display(&mem).to_string(), "lda $c000,x");
        assert_eq!(Instruction::fetch(&mem, 0x8003).display(&mem).to_string(), "nop");
    }
}
