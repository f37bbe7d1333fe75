use std::fmt;

use AddressingMode::*;
use Mnemonic::*;

use crate::memory::MemoryImage;

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AddressingMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Undefined,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mnemonic {
    /// Add with carry
    ADC,
    /// AND Accumulator
    AND,
    /// Left-shift Accumulator or memory
    ASL,
    /// Branch if carry clear
    BCC,
    /// Branch if carry set
    BCS,
    /// Branch if equal
    BEQ,
    /// Bit test
    BIT,
    /// Branch if minus
    BMI,
    /// Branch if not equal
    BNE,
    /// Branch if plus
    BPL,
    /// Break to interrupt handler
    BRK,
    /// Branch if overflow clear
    BVC,
    /// Branch if overflow set
    BVS,
    /// Clear carry flag
    CLC,
    /// Clear decimal flag
    CLD,
    /// Clear interrupt flag
    CLI,
    /// Clear overflow flag
    CLV,
    /// Compare Accumulator with memory
    CMP,
    /// Compare X with memory
    CPX,
    /// Compare Y with memory
    CPY,
    /// Decrement memory
    DEC,
    /// Decrement X
    DEX,
    /// Decrement Y
    DEY,
    /// Exclusive-OR Accumulator
    EOR,
    /// Increment memory
    INC,
    /// Increment X
    INX,
    /// Increment Y
    INY,
    /// Jump to location
    JMP,
    /// Jump subroutine
    JSR,
    /// Load Accumulator with memory
    LDA,
    /// Load X with memory
    LDX,
    /// Load Y with memory
    LDY,
    /// Right-shift Accumulator or memory
    LSR,
    /// No operation
    NOP,
    /// OR Accumulator with memory
    ORA,
    /// Push Accumulator
    PHA,
    /// Push processor status
    PHP,
    /// Pull Accumulator
    PLA,
    /// Pull processor status
    PLP,
    /// Rotate left Accumulator or memory
    ROL,
    /// Rotate right Accumulator or memory
    ROR,
    /// Return from interrupt
    RTI,
    /// Return from subroutine
    RTS,
    /// Subtract with carry
    SBC,
    /// Set carry flag
    SEC,
    /// Set decimal flag
    SED,
    /// Set interrupt flag
    SEI,
    /// Store Accumulator to memory
    STA,
    /// Store X to memory
    STX,
    /// Store Y to memory
    STY,
    /// Transfer Accumulator to X
    TAX,
    /// Transfer Accumulator to Y
    TAY,
    /// Transfer Stack to X
    TSX,
    /// Transfer X to Accumulator
    TXA,
    /// Transfer X to Stack
    TXS,
    /// Transfer Y to Accumulator
    TYA,
    /// Byte without an official NMOS 6502 instruction
    UND,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Opcode {
    pub mnemonic: Mnemonic,
    pub mode:     AddressingMode,
}

/// Static description of an addressing mode.
#[derive(Copy, Clone)]
pub struct ModeInfo {
    pub name:           &'static str,
    pub operand_length: usize,
    pub render:         fn(u16, &MemoryImage) -> String,
}

// -------------------------------------------------------------------------------------------------

impl Mnemonic {
    pub fn is_conditional_branch(self) -> bool {
        [BCC, BCS, BEQ, BMI, BNE, BPL, BVC, BVS].contains(&self)
    }

    pub fn is_return(self) -> bool {
        matches!(self, RTI | RTS)
    }

    pub fn is_defined(self) -> bool {
        self != UND
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ADC => "adc",
            AND => "and",
            ASL => "asl",
            BCC => "bcc",
            BCS => "bcs",
            BEQ => "beq",
            BIT => "bit",
            BMI => "bmi",
            BNE => "bne",
            BPL => "bpl",
            BRK => "brk",
            BVC => "bvc",
            BVS => "bvs",
            CLC => "clc",
            CLD => "cld",
            CLI => "cli",
            CLV => "clv",
            CMP => "cmp",
            CPX => "cpx",
            CPY => "cpy",
            DEC => "dec",
            DEX => "dex",
            DEY => "dey",
            EOR => "eor",
            INC => "inc",
            INX => "inx",
            INY => "iny",
            JMP => "jmp",
            JSR => "jsr",
            LDA => "lda",
            LDX => "ldx",
            LDY => "ldy",
            LSR => "lsr",
            NOP => "nop",
            ORA => "ora",
            PHA => "pha",
            PHP => "php",
            PLA => "pla",
            PLP => "plp",
            ROL => "rol",
            ROR => "ror",
            RTI => "rti",
            RTS => "rts",
            SBC => "sbc",
            SEC => "sec",
            SED => "sed",
            SEI => "sei",
            STA => "sta",
            STX => "stx",
            STY => "sty",
            TAX => "tax",
            TAY => "tay",
            TSX => "tsx",
            TXA => "txa",
            TXS => "txs",
            TYA => "tya",
            UND => "undefined",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl AddressingMode {
    #[inline]
    pub fn operands_size(self) -> usize {
        mode_info(self).operand_length
    }

    pub fn name(self) -> &'static str {
        mode_info(self).name
    }

    /// `$nnnn`, `$nnnn,x` and `$nnnn,y`: the operand is a full 16-bit address.
    pub fn is_absolute_family(self) -> bool {
        (Absolute..=AbsoluteY).contains(&self)
    }
}

impl Opcode {
    pub const fn new(mnemonic: Mnemonic, mode: AddressingMode) -> Self {
        Self { mnemonic, mode }
    }

    #[inline]
    pub fn instruction_size(self) -> usize {
        1 + self.mode.operands_size()
    }

    /// Conditional branches, `JSR` and absolute `JMP`: the operand is the address control flow moves to.
    pub fn is_redirect(self) -> bool {
        self.mnemonic.is_conditional_branch() || self == OP_JSR || self == OP_JMP_ABSOLUTE
    }
}

pub fn decode(opcode: u8) -> Opcode {
    NES_OPCODES[opcode as usize]
}

pub fn mode_info(mode: AddressingMode) -> &'static ModeInfo {
    &ADDRESSING_MODES[mode as usize]
}

// -------------------------------------------------------------------------------------------------

pub const OP_JSR: Opcode = Opcode::new(JSR, Absolute);
pub const OP_JMP_ABSOLUTE: Opcode = Opcode::new(JMP, Absolute);
pub const OP_JMP_INDIRECT: Opcode = Opcode::new(JMP, Indirect);

/// Ordered like the `AddressingMode` variants
#[rustfmt::skip]
pub static ADDRESSING_MODES: [ModeInfo; 13] = {
    use crate::disassembler::addressing::render::*;
    [
        ModeInfo { name: "implied",     operand_length: 0, render: implied },
        ModeInfo { name: "immediate",   operand_length: 1, render: immediate },
        ModeInfo { name: "zero page",   operand_length: 1, render: zero_page },
        ModeInfo { name: "zero page x", operand_length: 1, render: zero_page_x },
        ModeInfo { name: "zero page y", operand_length: 1, render: zero_page_y },
        ModeInfo { name: "relative",    operand_length: 1, render: relative },
        ModeInfo { name: "absolute",    operand_length: 2, render: absolute },
        ModeInfo { name: "absolute x",  operand_length: 2, render: absolute_x },
        ModeInfo { name: "absolute y",  operand_length: 2, render: absolute_y },
        ModeInfo { name: "indirect",    operand_length: 2, render: indirect },
        ModeInfo { name: "indirect x",  operand_length: 1, render: indirect_x },
        ModeInfo { name: "indirect y",  operand_length: 1, render: indirect_y },
        ModeInfo { name: "undefined",   operand_length: 0, render: implied },
    ]
};

/// Ordered by hex values of opcodes. Accumulator operands are listed as implied.
pub static NES_OPCODES: [Opcode; 0x100] = [
    /* 00 */ Opcode::new(BRK, Implied),
    /* 01 */ Opcode::new(ORA, IndirectX),
    /* 02 */ Opcode::new(UND, Undefined),
    /* 03 */ Opcode::new(UND, Undefined),
    /* 04 */ Opcode::new(UND, Undefined),
    /* 05 */ Opcode::new(ORA, ZeroPage),
    /* 06 */ Opcode::new(ASL, ZeroPage),
    /* 07 */ Opcode::new(UND, Undefined),
    /* 08 */ Opcode::new(PHP, Implied),
    /* 09 */ Opcode::new(ORA, Immediate),
    /* 0A */ Opcode::new(ASL, Implied),
    /* 0B */ Opcode::new(UND, Undefined),
    /* 0C */ Opcode::new(UND, Undefined),
    /* 0D */ Opcode::new(ORA, Absolute),
    /* 0E */ Opcode::new(ASL, Absolute),
    /* 0F */ Opcode::new(UND, Undefined),
    /* 10 */ Opcode::new(BPL, Relative),
    /* 11 */ Opcode::new(ORA, IndirectY),
    /* 12 */ Opcode::new(UND, Undefined),
    /* 13 */ Opcode::new(UND, Undefined),
    /* 14 */ Opcode::new(UND, Undefined),
    /* 15 */ Opcode::new(ORA, ZeroPageX),
    /* 16 */ Opcode::new(ASL, ZeroPageX),
    /* 17 */ Opcode::new(UND, Undefined),
    /* 18 */ Opcode::new(CLC, Implied),
    /* 19 */ Opcode::new(ORA, AbsoluteY),
    /* 1A */ Opcode::new(UND, Undefined),
    /* 1B */ Opcode::new(UND, Undefined),
    /* 1C */ Opcode::new(UND, Undefined),
    /* 1D */ Opcode::new(ORA, AbsoluteX),
    /* 1E */ Opcode::new(ASL, AbsoluteX),
    /* 1F */ Opcode::new(UND, Undefined),
    /* 20 */ Opcode::new(JSR, Absolute),
    /* 21 */ Opcode::new(AND, IndirectX),
    /* 22 */ Opcode::new(UND, Undefined),
    /* 23 */ Opcode::new(UND, Undefined),
    /* 24 */ Opcode::new(BIT, ZeroPage),
    /* 25 */ Opcode::new(AND, ZeroPage),
    /* 26 */ Opcode::new(ROL, ZeroPage),
    /* 27 */ Opcode::new(UND, Undefined),
    /* 28 */ Opcode::new(PLP, Implied),
    /* 29 */ Opcode::new(AND, Immediate),
    /* 2A */ Opcode::new(ROL, Implied),
    /* 2B */ Opcode::new(UND, Undefined),
    /* 2C */ Opcode::new(BIT, Absolute),
    /* 2D */ Opcode::new(AND, Absolute),
    /* 2E */ Opcode::new(ROL, Absolute),
    /* 2F */ Opcode::new(UND, Undefined),
    /* 30 */ Opcode::new(BMI, Relative),
    /* 31 */ Opcode::new(AND, IndirectY),
    /* 32 */ Opcode::new(UND, Undefined),
    /* 33 */ Opcode::new(UND, Undefined),
    /* 34 */ Opcode::new(UND, Undefined),
    /* 35 */ Opcode::new(AND, ZeroPageX),
    /* 36 */ Opcode::new(ROL, ZeroPageX),
    /* 37 */ Opcode::new(UND, Undefined),
    /* 38 */ Opcode::new(SEC, Implied),
    /* 39 */ Opcode::new(AND, AbsoluteY),
    /* 3A */ Opcode::new(UND, Undefined),
    /* 3B */ Opcode::new(UND, Undefined),
    /* 3C */ Opcode::new(UND, Undefined),
    /* 3D */ Opcode::new(AND, AbsoluteX),
    /* 3E */ Opcode::new(ROL, AbsoluteX),
    /* 3F */ Opcode::new(UND, Undefined),
    /* 40 */ Opcode::new(RTI, Implied),
    /* 41 */ Opcode::new(EOR, IndirectX),
    /* 42 */ Opcode::new(UND, Undefined),
    /* 43 */ Opcode::new(UND, Undefined),
    /* 44 */ Opcode::new(UND, Undefined),
    /* 45 */ Opcode::new(EOR, ZeroPage),
    /* 46 */ Opcode::new(LSR, ZeroPage),
    /* 47 */ Opcode::new(UND, Undefined),
    /* 48 */ Opcode::new(PHA, Implied),
    /* 49 */ Opcode::new(EOR, Immediate),
    /* 4A */ Opcode::new(LSR, Implied),
    /* 4B */ Opcode::new(UND, Undefined),
    /* 4C */ Opcode::new(JMP, Absolute),
    /* 4D */ Opcode::new(EOR, Absolute),
    /* 4E */ Opcode::new(LSR, Absolute),
    /* 4F */ Opcode::new(UND, Undefined),
    /* 50 */ Opcode::new(BVC, Relative),
    /* 51 */ Opcode::new(EOR, IndirectY),
    /* 52 */ Opcode::new(UND, Undefined),
    /* 53 */ Opcode::new(UND, Undefined),
    /* 54 */ Opcode::new(UND, Undefined),
    /* 55 */ Opcode::new(EOR, ZeroPageX),
    /* 56 */ Opcode::new(LSR, ZeroPageX),
    /* 57 */ Opcode::new(UND, Undefined),
    /* 58 */ Opcode::new(CLI, Implied),
    /* 59 */ Opcode::new(EOR, AbsoluteY),
    /* 5A */ Opcode::new(UND, Undefined),
    /* 5B */ Opcode::new(UND, Undefined),
    /* 5C */ Opcode::new(UND, Undefined),
    /* 5D */ Opcode::new(EOR, AbsoluteX),
    /* 5E */ Opcode::new(LSR, AbsoluteX),
    /* 5F */ Opcode::new(UND, Undefined),
    /* 60 */ Opcode::new(RTS, Implied),
    /* 61 */ Opcode::new(ADC, IndirectX),
    /* 62 */ Opcode::new(UND, Undefined),
    /* 63 */ Opcode::new(UND, Undefined),
    /* 64 */ Opcode::new(UND, Undefined),
    /* 65 */ Opcode::new(ADC, ZeroPage),
    /* 66 */ Opcode::new(ROR, ZeroPage),
    /* 67 */ Opcode::new(UND, Undefined),
    /* 68 */ Opcode::new(PLA, Implied),
    /* 69 */ Opcode::new(ADC, Immediate),
    /* 6A */ Opcode::new(ROR, Implied),
    /* 6B */ Opcode::new(UND, Undefined),
    /* 6C */ Opcode::new(JMP, Indirect),
    /* 6D */ Opcode::new(ADC, Absolute),
    /* 6E */ Opcode::new(ROR, Absolute),
    /* 6F */ Opcode::new(UND, Undefined),
    /* 70 */ Opcode::new(BVS, Relative),
    /* 71 */ Opcode::new(ADC, IndirectY),
    /* 72 */ Opcode::new(UND, Undefined),
    /* 73 */ Opcode::new(UND, Undefined),
    /* 74 */ Opcode::new(UND, Undefined),
    /* 75 */ Opcode::new(ADC, ZeroPageX),
    /* 76 */ Opcode::new(ROR, ZeroPageX),
    /* 77 */ Opcode::new(UND, Undefined),
    /* 78 */ Opcode::new(SEI, Implied),
    /* 79 */ Opcode::new(ADC, AbsoluteY),
    /* 7A */ Opcode::new(UND, Undefined),
    /* 7B */ Opcode::new(UND, Undefined),
    /* 7C */ Opcode::new(UND, Undefined),
    /* 7D */ Opcode::new(ADC, AbsoluteX),
    /* 7E */ Opcode::new(ROR, AbsoluteX),
    /* 7F */ Opcode::new(UND, Undefined),
    /* 80 */ Opcode::new(UND, Undefined),
    /* 81 */ Opcode::new(STA, IndirectX),
    /* 82 */ Opcode::new(UND, Undefined),
    /* 83 */ Opcode::new(UND, Undefined),
    /* 84 */ Opcode::new(STY, ZeroPage),
    /* 85 */ Opcode::new(STA, ZeroPage),
    /* 86 */ Opcode::new(STX, ZeroPage),
    /* 87 */ Opcode::new(UND, Undefined),
    /* 88 */ Opcode::new(DEY, Implied),
    /* 89 */ Opcode::new(UND, Undefined),
    /* 8A */ Opcode::new(TXA, Implied),
    /* 8B */ Opcode::new(UND, Undefined),
    /* 8C */ Opcode::new(STY, Absolute),
    /* 8D */ Opcode::new(STA, Absolute),
    /* 8E */ Opcode::new(STX, Absolute),
    /* 8F */ Opcode::new(UND, Undefined),
    /* 90 */ Opcode::new(BCC, Relative),
    /* 91 */ Opcode::new(STA, IndirectY),
    /* 92 */ Opcode::new(UND, Undefined),
    /* 93 */ Opcode::new(UND, Undefined),
    /* 94 */ Opcode::new(STY, ZeroPageX),
    /* 95 */ Opcode::new(STA, ZeroPageX),
    /* 96 */ Opcode::new(STX, ZeroPageY),
    /* 97 */ Opcode::new(UND, Undefined),
    /* 98 */ Opcode::new(TYA, Implied),
    /* 99 */ Opcode::new(STA, AbsoluteY),
    /* 9A */ Opcode::new(TXS, Implied),
    /* 9B */ Opcode::new(UND, Undefined),
    /* 9C */ Opcode::new(UND, Undefined),
    /* 9D */ Opcode::new(STA, AbsoluteX),
    /* 9E */ Opcode::new(UND, Undefined),
    /* 9F */ Opcode::new(UND, Undefined),
    /* A0 */ Opcode::new(LDY, Immediate),
    /* A1 */ Opcode::new(LDA, IndirectX),
    /* A2 */ Opcode::new(LDX, Immediate),
    /* A3 */ Opcode::new(UND, Undefined),
    /* A4 */ Opcode::new(LDY, ZeroPage),
    /* A5 */ Opcode::new(LDA, ZeroPage),
    /* A6 */ Opcode::new(LDX, ZeroPage),
    /* A7 */ Opcode::new(UND, Undefined),
    /* A8 */ Opcode::new(TAY, Implied),
    /* A9 */ Opcode::new(LDA, Immediate),
    /* AA */ Opcode::new(TAX, Implied),
    /* AB */ Opcode::new(UND, Undefined),
    /* AC */ Opcode::new(LDY, Absolute),
    /* AD */ Opcode::new(LDA, Absolute),
    /* AE */ Opcode::new(LDX, Absolute),
    /* AF */ Opcode::new(UND, Undefined),
    /* B0 */ Opcode::new(BCS, Relative),
    /* B1 */ Opcode::new(LDA, IndirectY),
    /* B2 */ Opcode::new(UND, Undefined),
    /* B3 */ Opcode::new(UND, Undefined),
    /* B4 */ Opcode::new(LDY, ZeroPageX),
    /* B5 */ Opcode::new(LDA, ZeroPageX),
    /* B6 */ Opcode::new(LDX, ZeroPageY),
    /* B7 */ Opcode::new(UND, Undefined),
    /* B8 */ Opcode::new(CLV, Implied),
    /* B9 */ Opcode::new(LDA, AbsoluteY),
    /* BA */ Opcode::new(TSX, Implied),
    /* BB */ Opcode::new(UND, Undefined),
    /* BC */ Opcode::new(LDY, AbsoluteX),
    /* BD */ Opcode::new(LDA, AbsoluteX),
    /* BE */ Opcode::new(LDX, AbsoluteY),
    /* BF */ Opcode::new(UND, Undefined),
    /* C0 */ Opcode::new(CPY, Immediate),
    /* C1 */ Opcode::new(CMP, IndirectX),
    /* C2 */ Opcode::new(UND, Undefined),
    /* C3 */ Opcode::new(UND, Undefined),
    /* C4 */ Opcode::new(CPY, ZeroPage),
    /* C5 */ Opcode::new(CMP, ZeroPage),
    /* C6 */ Opcode::new(DEC, ZeroPage),
    /* C7 */ Opcode::new(UND, Undefined),
    /* C8 */ Opcode::new(INY, Implied),
    /* C9 */ Opcode::new(CMP, Immediate),
    /* CA */ Opcode::new(DEX, Implied),
    /* CB */ Opcode::new(UND, Undefined),
    /* CC */ Opcode::new(CPY, Absolute),
    /* CD */ Opcode::new(CMP, Absolute),
    /* CE */ Opcode::new(DEC, Absolute),
    /* CF */ Opcode::new(UND, Undefined),
    /* D0 */ Opcode::new(BNE, Relative),
    /* D1 */ Opcode::new(CMP, IndirectY),
    /* D2 */ Opcode::new(UND, Undefined),
    /* D3 */ Opcode::new(UND, Undefined),
    /* D4 */ Opcode::new(UND, Undefined),
    /* D5 */ Opcode::new(CMP, ZeroPageX),
    /* D6 */ Opcode::new(DEC, ZeroPageX),
    /* D7 */ Opcode::new(UND, Undefined),
    /* D8 */ Opcode::new(CLD, Implied),
    /* D9 */ Opcode::new(CMP, AbsoluteY),
    /* DA */ Opcode::new(UND, Undefined),
    /* DB */ Opcode::new(UND, Undefined),
    /* DC */ Opcode::new(UND, Undefined),
    /* DD */ Opcode::new(CMP, AbsoluteX),
    /* DE */ Opcode::new(DEC, AbsoluteX),
    /* DF */ Opcode::new(UND, Undefined),
    /* E0 */ Opcode::new(CPX, Immediate),
    /* E1 */ Opcode::new(SBC, IndirectX),
    /* E2 */ Opcode::new(UND, Undefined),
    /* E3 */ Opcode::new(UND, Undefined),
    /* E4 */ Opcode::new(CPX, ZeroPage),
    /* E5 */ Opcode::new(SBC, ZeroPage),
    /* E6 */ Opcode::new(INC, ZeroPage),
    /* E7 */ Opcode::new(UND, Undefined),
    /* E8 */ Opcode::new(INX, Implied),
    /* E9 */ Opcode::new(SBC, Immediate),
    /* EA */ Opcode::new(NOP, Implied),
    /* EB */ Opcode::new(UND, Undefined),
    /* EC */ Opcode::new(CPX, Absolute),
    /* ED */ Opcode::new(SBC, Absolute),
    /* EE */ Opcode::new(INC, Absolute),
    /* EF */ Opcode::new(UND, Undefined),
    /* F0 */ Opcode::new(BEQ, Relative),
    /* F1 */ Opcode::new(SBC, IndirectY),
    /* F2 */ Opcode::new(UND, Undefined),
    /* F3 */ Opcode::new(UND, Undefined),
    /* F4 */ Opcode::new(UND, Undefined),
    /* F5 */ Opcode::new(SBC, ZeroPageX),
    /* F6 */ Opcode::new(INC, ZeroPageX),
    /* F7 */ Opcode::new(UND, Undefined),
    /* F8 */ Opcode::new(SED, Implied),
    /* F9 */ Opcode::new(SBC, AbsoluteY),
    /* FA */ Opcode::new(UND, Undefined),
    /* FB */ Opcode::new(UND, Undefined),
    /* FC */ Opcode::new(UND, Undefined),
    /* FD */ Opcode::new(SBC, AbsoluteX),
    /* FE */ Opcode::new(INC, AbsoluteX),
    /* FF */ Opcode::new(UND, Undefined),
];

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_opcode_count() {
        let defined = NES_OPCODES.iter().filter(|op| op.mnemonic.is_defined()).count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn test_undefined_entries_are_consistent() {
        for (byte, op) in NES_OPCODES.iter().enumerate() {
            assert_eq!(
                op.mnemonic == UND,
                op.mode == Undefined,
                "opcode {byte:02X} mixes a defined mnemonic with the undefined mode"
            );
        }
    }

    #[test]
    fn test_control_flow_opcodes() {
        for byte in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
            let op = decode(byte);
            assert!(op.mnemonic.is_conditional_branch());
            assert_eq!(op.mode, Relative);
            assert!(op.is_redirect());
        }
        assert_eq!(decode(0x20), OP_JSR);
        assert_eq!(decode(0x4C), OP_JMP_ABSOLUTE);
        assert_eq!(decode(0x6C), OP_JMP_INDIRECT);
        assert!(!OP_JMP_INDIRECT.is_redirect());
        assert!(decode(0x40).mnemonic.is_return());
        assert!(decode(0x60).mnemonic.is_return());
    }

    #[test]
    fn test_mode_registry() {
        assert_eq!(ADDRESSING_MODES.len(), 13);
        assert_eq!(mode_info(Relative).name, "relative");
        assert_eq!(Indirect.operands_size(), 2);
        assert_eq!(IndirectY.operands_size(), 1);
        assert_eq!(Undefined.operands_size(), 0);
        assert_eq!(decode(0xAD).instruction_size(), 3);
        assert!(AbsoluteY.is_absolute_family());
        assert!(!Indirect.is_absolute_family());
    }

    #[test]
    fn test_mnemonic_display_is_lowercase() {
        assert_eq!(format!("{}", LDA), "lda");
        assert_eq!(format!("{:<4}|", RTS), "rts |");
    }
}
