use std::fmt::{self, Display, Formatter, Write};

use crate::{
    disassembler::{addressing::index_suffix, instruction::Instruction, tracer::TraceAnalysis},
    memory::{MemoryImage, ADDRESS_SPACE_SIZE},
};

pub const BYTES_PER_DATA_ROW: usize = 16;
pub const OPERAND_COLUMN_WIDTH: usize = 16;

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Region {
    Code,
    Data,
}

/// Assembly listing of the program window, from its base up to `$FFFF`.
pub struct Listing<'a> {
    mem:      &'a MemoryImage,
    analysis: &'a TraceAnalysis,
}

// -------------------------------------------------------------------------------------------------

impl<'a> Listing<'a> {
    pub fn new(mem: &'a MemoryImage, analysis: &'a TraceAnalysis) -> Self {
        Self { mem, analysis }
    }

    /// Operand text with addresses replaced by label names where a label exists.
    fn operand(&self, instruction: Instruction) -> String {
        if let Some(target) = instruction.redirect_target(self.mem) {
            return self.analysis.label_text(target);
        }
        match instruction.absolute_operand(self.mem) {
            Some(addr) if self.analysis.labels.contains(addr) => {
                format!("{}{}", self.analysis.label_text(addr), index_suffix(instruction.opcode.mode))
            }
            _ => instruction.operand_text(self.mem),
        }
    }
}

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut region = None;
        let mut row_len = 0;
        let mut addr = self.mem.base() as usize;

        while addr < ADDRESS_SPACE_SIZE {
            let pc = addr as u16;

            let mut label_done = false;
            if self.analysis.labels.contains(pc) {
                row_len = 0;
                write!(f, "\n\n{}:\n", self.analysis.label_text(pc))?;
                label_done = true;
            }

            if !self.analysis.is_code(pc) {
                if region != Some(Region::Data) {
                    if !label_done {
                        write!(f, "\n\nL{pc:04X}:\n")?;
                    }
                    region = Some(Region::Data);
                }

                let byte = self.mem.read(pc);
                match row_len {
                    0 => write!(f, ".byte ${byte:02x}")?,
                    n if n == BYTES_PER_DATA_ROW - 1 => writeln!(f, ",${byte:02x}")?,
                    _ => write!(f, ",${byte:02x}")?,
                }
                row_len = (row_len + 1) % BYTES_PER_DATA_ROW;
                addr += 1;
            } else {
                // A partial data row is always closed by the label line of the code that follows it.
                if region != Some(Region::Code) {
                    if !label_done {
                        write!(f, "\n\nL{pc:04X}:\n")?;
                    }
                    region = Some(Region::Code);
                    row_len = 0;
                }

                let instruction = Instruction::fetch(self.mem, pc);
                writeln!(
                    f,
                    "    {} {:<width$}; ${pc:04x}",
                    instruction.opcode.mnemonic,
                    self.operand(instruction),
                    width = OPERAND_COLUMN_WIDTH
                )?;
                addr += instruction.size();
            }
        }

        f.write_char('\n')?;
        f.write_char('\n')
    }
}

// -------------------------------------------------------------------------------------------------
