//! Command $04, protection data transfers
//!
//! The second half of the decrypted data ROM starts with a table of 64 eight-byte descriptors.
//! Each descriptor points at a block of bytes (relative to the start of the table) that the MCU
//! streams into shared RAM. Bonk's Adventure additionally needs a handful of responses that can't
//! be produced from its data ROM, so those are hardcoded.

pub(crate) mod bonkadv;

use crate::sharedram::SharedRam;
use toybox_config::ProtectionProfile;

pub(crate) use bonkadv::FACTORY_SETTINGS as BONK_FACTORY_SETTINGS;

pub const PROTECTION_BASE: usize = 0x10000;
pub const DESCRIPTOR_COUNT: usize = 64;
const DESCRIPTOR_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Descriptor {
    pub unused: u16,
    pub source_start: u16,
    pub length: u16,
    // Meaning unknown. Bonk's Adventure sets it for the responses that are hardcoded, so it
    // probably selects a transfer mode that isn't emulated
    pub extra: u16,
}

impl Descriptor {
    /// Read the descriptor for a sub-command; only the low 6 bits select the entry
    #[must_use]
    pub fn read(data_rom: &[u8], subcommand: u8) -> Self {
        let offset = PROTECTION_BASE + usize::from(subcommand & 0x3F) * DESCRIPTOR_LEN;
        let field = |i: usize| {
            u16::from_le_bytes([data_rom[offset + 2 * i], data_rom[offset + 2 * i + 1]])
        };

        Self { unused: field(0), source_start: field(1), length: field(2), extra: field(3) }
    }
}

/// Where the bytes for a protection transfer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionSource {
    Hardcoded { len_words: usize },
    Descriptor(Descriptor),
}

fn hardcoded_response(profile: ProtectionProfile, param: u16) -> Option<&'static [u16]> {
    match (profile, param) {
        (ProtectionProfile::BonksAdventure, 0x0030) => Some(&bonkadv::SUBCOMMAND_30),
        (ProtectionProfile::BonksAdventure, 0x0031) => Some(&bonkadv::SUBCOMMAND_31),
        (ProtectionProfile::BonksAdventure, 0x0032) => Some(&bonkadv::SUBCOMMAND_32),
        (ProtectionProfile::BonksAdventure, 0x0033) => Some(&bonkadv::SUBCOMMAND_33),
        (ProtectionProfile::BonksAdventure, 0x0034) => Some(&bonkadv::SUBCOMMAND_34),
        _ => None,
    }
}

pub(crate) fn transfer(
    profile: ProtectionProfile,
    data_rom: &[u8],
    param: u16,
    dest_offset: u16,
    shared_ram: &mut SharedRam<'_>,
) -> ProtectionSource {
    if let Some(response) = hardcoded_response(profile, param) {
        shared_ram.write_words(usize::from(dest_offset >> 1), response);
        return ProtectionSource::Hardcoded { len_words: response.len() };
    }

    let descriptor = Descriptor::read(data_rom, param as u8);
    log::debug!(
        "Protection sub-command {param:04X}: source {:04X} length {:04X}",
        descriptor.source_start,
        descriptor.length
    );

    let source_base = PROTECTION_BASE + usize::from(descriptor.source_start);
    let dest_base = usize::from(dest_offset);
    for i in 0..usize::from(descriptor.length) {
        let Some(&byte) = data_rom.get(source_base + i) else {
            log::error!(
                "Protection sub-command {param:04X} reads past the end of the data ROM; stopped after {i} of {} bytes",
                descriptor.length
            );
            break;
        };

        // Data ROM bytes are in little-endian word order relative to the 68000
        shared_ram.write_byte((dest_base + i) ^ 1, byte);
    }

    ProtectionSource::Descriptor(descriptor)
}

/// All 64 descriptors in a decrypted data ROM
pub fn descriptors(data_rom: &[u8]) -> impl Iterator<Item = Descriptor> + '_ {
    (0..DESCRIPTOR_COUNT as u8).map(|subcommand| Descriptor::read(data_rom, subcommand))
}
