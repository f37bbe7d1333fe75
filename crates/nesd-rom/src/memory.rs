use std::fmt;

use crate::error::CartridgeError;

pub const ADDRESS_SPACE_SIZE: usize = 0x10000;
/// The part of the CPU address space where a direct-mapped cartridge exposes its PRG ROM.
pub const PRG_WINDOW_START: u16 = 0x8000;
pub const PRG_WINDOW_SIZE: usize = ADDRESS_SPACE_SIZE - PRG_WINDOW_START as usize;

// -------------------------------------------------------------------------------------------------

/// Flat view of the CPU address space with the program ROM placed at its top.
///
/// Addresses below the program are zero-filled. Reads wrap around the end of the address space,
/// so an operand starting at `$FFFF` continues at `$0000`.
#[derive(Clone)]
pub struct MemoryImage {
    bytes: Box<[u8]>,
    base:  u16,
}

// -------------------------------------------------------------------------------------------------

impl MemoryImage {
    pub fn from_prg(prg_rom: &[u8]) -> Result<Self, CartridgeError> {
        if prg_rom.is_empty() {
            return Err(CartridgeError::EmptyProgram);
        }
        if prg_rom.len() > PRG_WINDOW_SIZE {
            return Err(CartridgeError::ProgramTooLarge(prg_rom.len()));
        }

        let base = ADDRESS_SPACE_SIZE - prg_rom.len();
        let mut bytes = vec![0u8; ADDRESS_SPACE_SIZE].into_boxed_slice();
        bytes[base..].copy_from_slice(prg_rom);
        Ok(Self { bytes, base: base as u16 })
    }

    /// Lowest address occupied by the program ROM.
    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    pub fn program(&self) -> &[u8] {
        &self.bytes[self.base as usize..]
    }
}

impl fmt::Debug for MemoryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryImage {{ base: ${:04X}, program: {:#x} bytes }}", self.base, self.program().len())
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_placed_at_top() {
        let prg: Vec<u8> = (0..0x4000).map(|i| i as u8).collect();
        let mem = MemoryImage::from_prg(&prg).unwrap();
        assert_eq!(mem.base(), 0xC000);
        assert_eq!(mem.read(0xC000), 0x00);
        assert_eq!(mem.read(0xC001), 0x01);
        assert_eq!(mem.read(0xFFFF), 0xFF);
        assert_eq!(mem.read(0x8000), 0x00);
        assert_eq!(mem.program(), prg.as_slice());
    }

    #[test]
    fn test_word_read_wraps() {
        let mut prg = vec![0u8; 0x8000];
        prg[0x7FFF] = 0x34;
        let mem = MemoryImage::from_prg(&prg).unwrap();
        assert_eq!(mem.read_word(0xFFFF), 0x0034);
    }

    #[test]
    fn test_program_too_large() {
        let prg = vec![0u8; 0xC000];
        assert!(matches!(MemoryImage::from_prg(&prg), Err(CartridgeError::ProgramTooLarge(0xC000))));
    }
}
