//! Toybox MCU device


use crate::command::{CommandHeader, CommandOutcome, McuCommand};
use crate::decrypt::{self, DATA_ROM_LEN};
use crate::handshake::{HandshakePort, HandshakeRegisters};
use crate::protection;
use crate::settings::{DipSwitches, SETTINGS_LEN_WORDS, SettingsStore};
use crate::sharedram::SharedRam;
use bincode::config::{Configuration, Fixint, LittleEndian};
use bincode::error::{DecodeError, EncodeError};
use std::io;
use std::io::{BufReader, BufWriter, Write};
use thiserror::Error;
use toybox_config::{ProtectionProfile, ToyboxConfig};

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_little_endian().with_fixed_int_encoding();

#[derive(Debug, Error)]
pub enum ToyboxLoadError {
    #[error("Expected data ROM size of {expected} bytes, was {actual} bytes")]
    IncorrectRomSize { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum SaveStateError {
    #[error("error saving state: {source}")]
    Serialization {
        #[from]
        source: EncodeError,
    },
    #[error("error loading state: {source}")]
    Deserialization {
        #[from]
        source: DecodeError,
    },
    #[error("error flushing state: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Everything outside the MCU that a command can touch, borrowed for the duration of one bus write
pub struct ToyboxHost<'a, Settings, Dsw> {
    pub shared_ram: &'a mut [u16],
    pub settings: &'a mut Settings,
    pub dip_switches: &'a Dsw,
}

impl<'a, Settings: SettingsStore, Dsw: DipSwitches> ToyboxHost<'a, Settings, Dsw> {
    pub fn new(shared_ram: &'a mut [u16], settings: &'a mut Settings, dip_switches: &'a Dsw) -> Self {
        Self { shared_ram, settings, dip_switches }
    }
}

#[derive(Debug, Clone)]
pub struct ToyboxMcu {
    config: ToyboxConfig,
    data_rom: Box<[u8]>,
    handshake: HandshakeRegisters,
}

impl ToyboxMcu {
    /// Create the MCU from the raw (encrypted) data ROM.
    ///
    /// # Errors
    ///
    /// Returns an error if the data ROM is smaller than 128KB.
    pub fn new(raw_data_rom: &[u8], config: ToyboxConfig) -> Result<Self, ToyboxLoadError> {
        if raw_data_rom.len() < DATA_ROM_LEN {
            return Err(ToyboxLoadError::IncorrectRomSize {
                expected: DATA_ROM_LEN,
                actual: raw_data_rom.len(),
            });
        }

        if raw_data_rom.len() > DATA_ROM_LEN {
            log::warn!(
                "Data ROM is {} bytes, ignoring everything past {DATA_ROM_LEN} bytes",
                raw_data_rom.len()
            );
        }

        let mut data_rom = raw_data_rom[..DATA_ROM_LEN].to_vec().into_boxed_slice();
        decrypt::decrypt_data_rom(&mut data_rom, config.decryption_table);

        log::debug!("Decrypted Toybox data ROM with {:?} table", config.decryption_table);

        Ok(Self { config, data_rom, handshake: HandshakeRegisters::new() })
    }

    pub fn reset(&mut self) {
        self.handshake.reset();
    }

    /// Handle a main CPU write to one of the four command ports. Returns the outcome of the
    /// command if this write completed a handshake.
    pub fn write_port<Settings: SettingsStore, Dsw: DipSwitches>(
        &mut self,
        port: HandshakePort,
        value: u16,
        mask: u16,
        host: &mut ToyboxHost<'_, Settings, Dsw>,
    ) -> Option<CommandOutcome> {
        // Ports are cleared before the command runs
        self.handshake.write(port, value, mask).then(|| self.execute_command(host))
    }

    /// Games check bit 0 for failure; commands always complete instantly here
    #[must_use]
    pub fn read_status(&self) -> u16 {
        log::trace!("MCU status read");
        0
    }

    fn execute_command<Settings: SettingsStore, Dsw: DipSwitches>(
        &self,
        host: &mut ToyboxHost<'_, Settings, Dsw>,
    ) -> CommandOutcome {
        let mut shared_ram = SharedRam::new(&mut *host.shared_ram);
        let header = CommandHeader::read(&shared_ram);

        match header.command() {
            McuCommand::LoadSettings => {
                let dest = usize::from(header.dest_offset & !1);
                for i in 0..SETTINGS_LEN_WORDS {
                    let [msb, lsb] = host.settings.read_word(i as u8).to_be_bytes();
                    shared_ram.write_byte(dest + 2 * i, msb);
                    shared_ram.write_byte(dest + 2 * i + 1, lsb);
                }

                log::debug!("MCU executed command: {header} (load settings)");
                CommandOutcome::SettingsLoaded
            }
            McuCommand::SaveSettings => {
                let source = usize::from(header.dest_offset & !1);
                for i in 0..SETTINGS_LEN_WORDS {
                    let msb = shared_ram.read_byte(source + 2 * i);
                    let lsb = shared_ram.read_byte(source + 2 * i + 1);
                    host.settings.write_word(i as u8, u16::from_be_bytes([msb, lsb]));
                }

                log::debug!("MCU executed command: {header} (save settings)");
                CommandOutcome::SettingsSaved
            }
            McuCommand::RestoreFactorySettings => {
                // Bypasses shared RAM; only Bonk's Adventure is known to send this
                let restored = self.config.protection_profile == ProtectionProfile::BonksAdventure;
                if restored {
                    for (i, &word) in protection::BONK_FACTORY_SETTINGS.iter().enumerate() {
                        host.settings.write_word(i as u8, word);
                    }
                    log::debug!("MCU executed command: {header} (restore factory settings)");
                } else {
                    log::debug!("MCU ignored command: {header} (restore factory settings)");
                }

                CommandOutcome::FactorySettings { restored }
            }
            McuCommand::ReadDipSwitches => {
                let dip_switches = host.dip_switches.read();
                shared_ram.write_word(header.dest_word(), dip_switches);

                log::debug!("MCU executed command: {header} (read DSW)");
                CommandOutcome::DipSwitchesRead(dip_switches)
            }
            McuCommand::ProtectionData => {
                log::debug!("MCU executed command: {header} (protection data)");

                let source = protection::transfer(
                    self.config.protection_profile,
                    &self.data_rom,
                    header.param,
                    header.dest_offset,
                    &mut shared_ram,
                );
                CommandOutcome::ProtectionData(source)
            }
            McuCommand::Unknown(command) => {
                log::warn!("MCU executed command: {header} (unknown command {command:02X})");
                CommandOutcome::Unknown(header)
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> ToyboxConfig {
        self.config
    }

    /// The decrypted data ROM
    #[must_use]
    pub fn data_rom(&self) -> &[u8] {
        &self.data_rom
    }

    #[must_use]
    pub fn handshake_ports(&self) -> [u16; 4] {
        self.handshake.ports()
    }

    /// Only the handshake ports are saved; the data ROM never changes after load.
    ///
    /// # Errors
    ///
    /// Propagates any encoding or I/O error from the writer.
    pub fn save_state<W: io::Write>(&self, writer: W) -> Result<(), SaveStateError> {
        let mut writer = BufWriter::new(writer);
        bincode::encode_into_std_write(&self.handshake, &mut writer, BINCODE_CONFIG)?;
        writer.flush()?;

        Ok(())
    }

    /// # Errors
    ///
    /// Propagates any decoding error from the reader. State is unchanged on error.
    pub fn load_state<R: io::Read>(&mut self, reader: R) -> Result<(), SaveStateError> {
        let mut reader = BufReader::new(reader);
        self.handshake = bincode::decode_from_std_read(&mut reader, BINCODE_CONFIG)?;

        Ok(())
    }
}
