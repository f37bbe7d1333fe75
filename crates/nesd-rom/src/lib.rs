pub mod cartridge;
pub mod disassembler;
pub mod error;
pub mod memory;

use std::{fs, path::Path};

pub use crate::{
    cartridge::INesHeader,
    disassembler::{Listing, TraceAnalysis, TraceOrder},
    error::{CartridgeError, RomParseError},
    memory::MemoryImage,
};
use crate::{cartridge::Cartridge, disassembler::trace};

/// Mappers whose PRG ROM sits directly in `$8000-$FFFF` without bank switching.
pub const SUPPORTED_MAPPERS: &[u8] = &[0];

// -------------------------------------------------------------------------------------------------

pub struct NesRom {
    pub header: INesHeader,
    pub memory: MemoryImage,
}

// -------------------------------------------------------------------------------------------------

impl NesRom {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RomParseError> {
        log::info!("Reading ROM from file: {}", path.as_ref().display());
        match fs::read(path) {
            Ok(rom_data) => match Self::from_bytes(&rom_data) {
                Ok(rom) => {
                    log::info!("Success parsing ROM");
                    Ok(rom)
                }
                Err(err) => {
                    log::debug!("Failed to parse ROM: {}", err);
                    Err(err)
                }
            },
            Err(err) => {
                log::debug!("Couldn't read ROM: {}", err);
                Err(RomParseError::IoError(err))
            }
        }
    }

    pub fn from_bytes(rom_data: &[u8]) -> Result<Self, RomParseError> {
        log::info!("Parsing iNES header");
        let Cartridge { header, prg_rom } = Cartridge::parse(rom_data)?;
        if !SUPPORTED_MAPPERS.contains(&header.mapper) {
            return Err(RomParseError::UnsupportedMapper(header.mapper));
        }

        log::info!("Mapping {:#x} bytes of PRG ROM", prg_rom.len());
        let memory = MemoryImage::from_prg(&prg_rom)?;

        Ok(Self { header, memory })
    }

    pub fn trace(&self, order: TraceOrder) -> TraceAnalysis {
        trace(&self.memory, order)
    }

    /// Traces the program and renders the complete listing.
    pub fn disassemble(&self, order: TraceOrder) -> String {
        let analysis = self.trace(order);
        Listing::new(&self.memory, &analysis).to_string()
    }
}
