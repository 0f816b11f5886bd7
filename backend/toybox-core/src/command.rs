//! MCU command header and command decoding

use crate::protection::ProtectionSource;
use crate::sharedram::SharedRam;
use std::fmt::{Display, Formatter};

// Byte addresses of the command header in shared RAM
const OPCODE_ADDR: usize = 0x10;
const DEST_OFFSET_ADDR: usize = 0x12;
const PARAM_ADDR: usize = 0x14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHeader {
    pub opcode: u16,
    /// Byte address in shared RAM; word-sized commands use it divided by 2
    pub dest_offset: u16,
    /// Sub-command for protection transfers, unused by other commands
    pub param: u16,
}

impl CommandHeader {
    pub(crate) fn read(shared_ram: &SharedRam<'_>) -> Self {
        Self {
            opcode: shared_ram.read_word(OPCODE_ADDR >> 1),
            dest_offset: shared_ram.read_word(DEST_OFFSET_ADDR >> 1),
            param: shared_ram.read_word(PARAM_ADDR >> 1),
        }
    }

    /// Store this header into shared RAM the way the main CPU does before a handshake
    pub fn write_to(self, shared_ram: &mut [u16]) {
        shared_ram[OPCODE_ADDR >> 1] = self.opcode;
        shared_ram[DEST_OFFSET_ADDR >> 1] = self.dest_offset;
        shared_ram[PARAM_ADDR >> 1] = self.param;
    }

    #[must_use]
    pub fn command(self) -> McuCommand {
        McuCommand::from_opcode(self.opcode)
    }

    #[must_use]
    pub fn dest_word(self) -> usize {
        usize::from(self.dest_offset >> 1)
    }
}

impl Display for CommandHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X} {:04X} {:04X}", self.opcode, self.dest_offset, self.param)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McuCommand {
    LoadSettings,
    SaveSettings,
    RestoreFactorySettings,
    ReadDipSwitches,
    ProtectionData,
    Unknown(u8),
}

impl McuCommand {
    #[must_use]
    pub fn from_opcode(opcode: u16) -> Self {
        // Low byte is ignored
        match (opcode >> 8) as u8 {
            0x02 => Self::LoadSettings,
            0x42 => Self::SaveSettings,
            0x43 => Self::RestoreFactorySettings,
            0x03 => Self::ReadDipSwitches,
            0x04 => Self::ProtectionData,
            command => Self::Unknown(command),
        }
    }
}

/// What a dispatched command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    SettingsLoaded,
    SettingsSaved,
    FactorySettings { restored: bool },
    DipSwitchesRead(u16),
    ProtectionData(ProtectionSource),
    Unknown(CommandHeader),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_decode_from_high_byte() {
        assert_eq!(McuCommand::from_opcode(0x0200), McuCommand::LoadSettings);
        assert_eq!(McuCommand::from_opcode(0x42FF), McuCommand::SaveSettings);
        assert_eq!(McuCommand::from_opcode(0x4300), McuCommand::RestoreFactorySettings);
        assert_eq!(McuCommand::from_opcode(0x0312), McuCommand::ReadDipSwitches);
        assert_eq!(McuCommand::from_opcode(0x0400), McuCommand::ProtectionData);
        assert_eq!(McuCommand::from_opcode(0x0004), McuCommand::Unknown(0x00));
        assert_eq!(McuCommand::from_opcode(0x4400), McuCommand::Unknown(0x44));
    }

    #[test]
    fn header_round_trips_through_shared_ram() {
        let header = CommandHeader { opcode: 0x0400, dest_offset: 0x0E00, param: 0x0034 };

        let mut words = [0; 16];
        header.write_to(&mut words);
        assert_eq!(words[8..11], [0x0400, 0x0E00, 0x0034]);

        let ram = SharedRam::new(&mut words);
        assert_eq!(CommandHeader::read(&ram), header);
        assert_eq!(header.dest_word(), 0x0700);
        assert_eq!(header.to_string(), "0400 0E00 0034");
    }
}
