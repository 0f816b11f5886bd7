//! Kaneko Toybox MCU simulation
//!
//! The Toybox MCU (TBSOP01/TBSOP02, a NEC uPD78324 series part) handles copy protection and
//! settings storage for several mid-90s Kaneko arcade boards. Its internal ROM has never been
//! dumped, so this crate reproduces the command protocol the main CPU sees instead of emulating
//! the MCU itself.
//!
//! The main CPU writes a command header into shared RAM, then writes $FFFF to four command ports.
//! Once all four ports are set the MCU executes the command, which either moves settings between
//! shared RAM and the EEPROM, reads the DIP switches, or streams protection data out of the
//! decrypted data ROM into shared RAM.

pub mod command;
pub mod decrypt;
pub mod handshake;
mod mcu;
pub mod protection;
pub mod settings;
mod sharedram;

pub use command::{CommandHeader, CommandOutcome, McuCommand};
pub use handshake::HandshakePort;
pub use mcu::{SaveStateError, ToyboxHost, ToyboxLoadError, ToyboxMcu};
pub use protection::{Descriptor, ProtectionSource};
pub use settings::{DipSwitches, SettingsEeprom, SettingsStore};
pub use toybox_config::{DecryptionTable, ProtectionProfile, ToyboxConfig, ToyboxGame};
