//! Collaborators the MCU talks to besides shared RAM: the settings EEPROM and the DIP switches

use bincode::{Decode, Encode};

pub const SETTINGS_LEN_WORDS: usize = 64;
pub const SETTINGS_LEN_BYTES: usize = 2 * SETTINGS_LEN_WORDS;

/// Word-addressed game settings storage. Boards use a 128-byte serial EEPROM (AT93C46) that only
/// the MCU accesses.
pub trait SettingsStore {
    fn read_word(&self, index: u8) -> u16;

    fn write_word(&mut self, index: u8, value: u16);
}

pub trait DipSwitches {
    fn read(&self) -> u16;
}

impl DipSwitches for u16 {
    fn read(&self) -> u16 {
        *self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SettingsEeprom {
    words: [u16; SETTINGS_LEN_WORDS],
    dirty: bool,
}

impl SettingsEeprom {
    /// Create a settings EEPROM, optionally restoring a previous save. Saves are stored as
    /// big-endian words.
    #[must_use]
    pub fn new(initial_save: Option<&[u8]>) -> Self {
        // Erased EEPROM cells read as all 1s
        let mut words = [0xFFFF; SETTINGS_LEN_WORDS];

        if let Some(initial_save) = initial_save {
            if initial_save.len() >= SETTINGS_LEN_BYTES {
                for (word, chunk) in words.iter_mut().zip(initial_save.chunks_exact(2)) {
                    *word = u16::from_be_bytes([chunk[0], chunk[1]]);
                }
            } else {
                log::warn!(
                    "Ignoring settings save of {} bytes, expected {SETTINGS_LEN_BYTES}",
                    initial_save.len()
                );
            }
        }

        Self { words, dirty: false }
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|word| word.to_be_bytes()).collect()
    }

    #[must_use]
    pub fn words(&self) -> &[u16; SETTINGS_LEN_WORDS] {
        &self.words
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for SettingsEeprom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SettingsStore for SettingsEeprom {
    fn read_word(&self, index: u8) -> u16 {
        self.words[usize::from(index) % SETTINGS_LEN_WORDS]
    }

    fn write_word(&mut self, index: u8, value: u16) {
        log::trace!("Settings EEPROM write {index:02X} {value:04X}");
        self.words[usize::from(index) % SETTINGS_LEN_WORDS] = value;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn blank_eeprom_is_erased() {
        let eeprom = SettingsEeprom::new(None);
        assert!(eeprom.words().iter().all(|&word| word == 0xFFFF));
        assert!(!eeprom.is_dirty());
    }

    #[test]
    fn save_bytes_are_big_endian() {
        let mut save = vec![0; SETTINGS_LEN_BYTES];
        save[0] = 0x12;
        save[1] = 0x34;
        save[SETTINGS_LEN_BYTES - 1] = 0x56;

        let eeprom = SettingsEeprom::new(Some(save.as_slice()));
        assert_eq!(eeprom.read_word(0), 0x1234);
        assert_eq!(eeprom.read_word(63), 0x0056);
        assert_eq!(eeprom.to_bytes(), save);
    }

    #[test]
    fn short_save_is_ignored() {
        let eeprom = SettingsEeprom::new(Some([0; 10].as_slice()));
        assert_eq!(eeprom, SettingsEeprom::default());
    }

    #[test]
    fn writes_set_dirty() {
        let mut eeprom = SettingsEeprom::default();

        let value: u16 = rand::random();
        eeprom.write_word(5, value);
        assert!(eeprom.is_dirty());
        assert_eq!(eeprom.read_word(5), value);

        eeprom.clear_dirty();
        assert!(!eeprom.is_dirty());
    }

    #[test]
    fn constant_dip_switches() {
        assert_eq!(0x1234_u16.read(), 0x1234);
    }
}
