use std::io;

use thiserror::Error;

// -------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("Missing iNES identification string \"NES<EOF>\" (found {0:02X?})")]
    BadMagic(Vec<u8>),
    #[error("iNES header too short: {0} bytes (expected 16)")]
    HeaderTooShort(usize),
    #[error("Cartridge declares no PRG ROM")]
    EmptyProgram,
    #[error("PRG ROM of {0:#x} bytes does not fit into the CPU address space")]
    ProgramTooLarge(usize),
    #[error("PRG ROM truncated: expected {expected:#x} bytes, found {actual:#x}")]
    Truncated { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum RomParseError {
    #[error("File IO Error")]
    IoError(#[from] io::Error),
    #[error("Unrecognized file format: {0}")]
    BadCartridge(CartridgeError),
    #[error("Mapper {0} not currently supported")]
    UnsupportedMapper(u8),
}

pub type ParseErr<'a> = nom::Err<nom::error::Error<&'a [u8]>>;

// -------------------------------------------------------------------------------------------------

impl From<CartridgeError> for RomParseError {
    fn from(e: CartridgeError) -> Self {
        RomParseError::BadCartridge(e)
    }
}
