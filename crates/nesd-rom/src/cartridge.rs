use std::fmt;

use nom::{
    bytes::complete::{tag, take},
    number::complete::le_u8,
    sequence::tuple,
    IResult,
};
use num_enum::FromPrimitive;

use crate::error::{CartridgeError, ParseErr};

pub const INES_MAGIC: &[u8] = b"NES\x1a";

#[rustfmt::skip]
pub mod sizes {
    pub const HEADER:         usize = 0x10;
    pub const HEADER_PADDING: usize = 7;
    pub const TRAINER:        usize = 0x200;
    pub const PRG_ROM_BANK:   usize = 0x4000;
    pub const CHR_ROM_BANK:   usize = 0x2000;
    pub const PRG_RAM_PAGE:   usize = 0x2000;
}

#[rustfmt::skip]
mod flags {
    pub const MIRRORING_VERTICAL: u8 = 0b0000_0001;
    pub const BATTERY:            u8 = 0b0000_0010;
    pub const TRAINER:            u8 = 0b0000_0100;
    pub const FOUR_SCREEN:        u8 = 0b0000_1000;
    pub const VS_UNISYSTEM:       u8 = 0b0000_0001;
    pub const PLAYCHOICE_10:      u8 = 0b0000_0010;
}

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct INesHeader {
    pub prg_banks:     u8,
    pub chr_banks:     u8,
    pub ram_pages:     u8,
    pub mapper:        u8,
    pub mirroring:     Mirroring,
    pub four_screen:   bool,
    pub battery:       bool,
    pub trainer:       bool,
    pub vs_unisystem:  bool,
    pub playchoice_10: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Mirroring {
    #[num_enum(default)]
    Horizontal = 0,
    Vertical   = 1,
}

/// A direct-mapped cartridge image: the decoded header and the raw PRG ROM bytes.
pub struct Cartridge {
    pub header:  INesHeader,
    pub prg_rom: Vec<u8>,
}

// -------------------------------------------------------------------------------------------------

impl INesHeader {
    pub fn parse(bytes: &[u8]) -> Result<(&[u8], Self), CartridgeError> {
        if bytes.get(..INES_MAGIC.len()) != Some(INES_MAGIC) {
            return Err(CartridgeError::BadMagic(bytes.iter().take(INES_MAGIC.len()).copied().collect()));
        }
        Self::parse_fields(bytes).map_err(|_: ParseErr| CartridgeError::HeaderTooShort(bytes.len()))
    }

    fn parse_fields(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, _) = tag(INES_MAGIC)(input)?;
        let (input, (prg_banks, chr_banks, flags6, flags7, ram_pages)) =
            tuple((le_u8, le_u8, le_u8, le_u8, le_u8))(input)?;
        let (input, _) = take(sizes::HEADER_PADDING)(input)?;

        Ok((input, Self {
            prg_banks,
            chr_banks,
            ram_pages,
            mapper: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring: Mirroring::from(flags6 & flags::MIRRORING_VERTICAL),
            four_screen: flags6 & flags::FOUR_SCREEN != 0,
            battery: flags6 & flags::BATTERY != 0,
            trainer: flags6 & flags::TRAINER != 0,
            vs_unisystem: flags7 & flags::VS_UNISYSTEM != 0,
            playchoice_10: flags7 & flags::PLAYCHOICE_10 != 0,
        }))
    }

    pub fn prg_size(&self) -> usize {
        self.prg_banks as usize * sizes::PRG_ROM_BANK
    }

    pub fn chr_size(&self) -> usize {
        self.chr_banks as usize * sizes::CHR_ROM_BANK
    }

    pub fn ram_size(&self) -> usize {
        self.ram_pages as usize * sizes::PRG_RAM_PAGE
    }

    /// Name-value pairs describing the header, in display order.
    pub fn info(&self) -> Vec<(&'static str, String)> {
        let yes_no = |b: bool| String::from(if b { "yes" } else { "no" });
        vec![
            ("Mapper", format!("{}", self.mapper)),
            ("PRG ROM size", format!("{} kB ({} banks)", self.prg_size() / 1024, self.prg_banks)),
            ("CHR ROM size", format!("{} kB ({} banks)", self.chr_size() / 1024, self.chr_banks)),
            ("PRG RAM size", format!("{} kB", self.ram_size() / 1024)),
            ("Mirroring", format!("{}", self.mirroring)),
            ("Four-screen VRAM", yes_no(self.four_screen)),
            ("Battery", yes_no(self.battery)),
            ("Trainer", yes_no(self.trainer)),
            ("VS Unisystem", yes_no(self.vs_unisystem)),
            ("PlayChoice-10", yes_no(self.playchoice_10)),
        ]
    }
}

impl fmt::Display for Mirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Mirroring::Horizontal => "horizontal",
            Mirroring::Vertical => "vertical",
        })
    }
}

impl Cartridge {
    pub fn parse(bytes: &[u8]) -> Result<Self, CartridgeError> {
        let (rest, header) = INesHeader::parse(bytes)?;
        if header.prg_banks == 0 {
            return Err(CartridgeError::EmptyProgram);
        }

        // The trainer sits between the header and PRG ROM and is not part of the program.
        let rest = if header.trainer { rest.get(sizes::TRAINER..).unwrap_or(&[]) } else { rest };

        let expected = header.prg_size();
        let prg_rom = rest.get(..expected).ok_or(CartridgeError::Truncated { expected, actual: rest.len() })?;
        if rest.len() < expected + header.chr_size() {
            log::warn!(
                "CHR ROM truncated: expected {:#x} bytes, found {:#x}",
                header.chr_size(),
                rest.len() - expected
            );
        }

        Ok(Self { header, prg_rom: prg_rom.to_vec() })
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(prg_banks: u8, chr_banks: u8, flags6: u8, flags7: u8) -> Vec<u8> {
        let mut bytes = INES_MAGIC.to_vec();
        bytes.extend_from_slice(&[prg_banks, chr_banks, flags6, flags7, 0]);
        bytes.resize(sizes::HEADER, 0);
        bytes
    }

    #[test]
    fn test_mapper_combines_both_nibbles() {
        let bytes = header_bytes(1, 0, 0x10, 0x40);
        let (_, header) = INesHeader::parse(&bytes).unwrap();
        assert_eq!(header.mapper, 0x41);
    }

    #[test]
    fn test_flags() {
        let bytes = header_bytes(2, 1, 0b1111, 0b11);
        let (rest, header) = INesHeader::parse(&bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(header.mirroring, Mirroring::Vertical);
        assert!(header.four_screen && header.battery && header.trainer);
        assert!(header.vs_unisystem && header.playchoice_10);
        assert_eq!(header.prg_size(), 0x8000);
        assert_eq!(header.chr_size(), 0x2000);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = header_bytes(1, 0, 0, 0);
        bytes[3] = 0x1B;
        assert!(matches!(Cartridge::parse(&bytes), Err(CartridgeError::BadMagic(m)) if m == b"NES\x1b"));
        assert!(matches!(Cartridge::parse(b"NE"), Err(CartridgeError::BadMagic(_))));
    }

    #[test]
    fn test_short_header() {
        assert!(matches!(Cartridge::parse(b"NES\x1a\x01\x00"), Err(CartridgeError::HeaderTooShort(6))));
    }

    #[test]
    fn test_prg_extraction_skips_trainer() {
        let mut bytes = header_bytes(1, 0, flags::TRAINER, 0);
        bytes.extend(std::iter::repeat(0xAA).take(sizes::TRAINER));
        bytes.extend(std::iter::repeat(0xEA).take(sizes::PRG_ROM_BANK));
        let cartridge = Cartridge::parse(&bytes).unwrap();
        assert_eq!(cartridge.prg_rom.len(), sizes::PRG_ROM_BANK);
        assert!(cartridge.prg_rom.iter().all(|&b| b == 0xEA));
    }

    #[test]
    fn test_truncated_prg() {
        let mut bytes = header_bytes(2, 0, 0, 0);
        bytes.extend(std::iter::repeat(0).take(0x5000));
        assert!(matches!(
            Cartridge::parse(&bytes),
            Err(CartridgeError::Truncated { expected: 0x8000, actual: 0x5000 })
        ));
    }

    #[test]
    fn test_empty_program() {
        let bytes = header_bytes(0, 1, 0, 0);
        assert!(matches!(Cartridge::parse(&bytes), Err(CartridgeError::EmptyProgram)));
    }
}
