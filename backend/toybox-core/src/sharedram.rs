//! Access to the RAM shared between the main CPU and the MCU
//!
//! Shared RAM is owned by the host and lent to the MCU for the duration of a single command. Words
//! are stored as the 68000 sees them, so byte addresses are big-endian: the even byte of each word
//! is the high byte.

use std::cmp::Ordering;

pub(crate) struct SharedRam<'a> {
    words: &'a mut [u16],
}

impl<'a> SharedRam<'a> {
    pub(crate) fn new(words: &'a mut [u16]) -> Self {
        Self { words }
    }

    pub(crate) fn read_word(&self, word_addr: usize) -> u16 {
        match self.words.get(word_addr) {
            Some(&word) => word,
            None => {
                log::error!(
                    "MCU read from shared RAM word {word_addr:04X}, shared RAM is only {:04X} words",
                    self.words.len()
                );
                0
            }
        }
    }

    pub(crate) fn write_word(&mut self, word_addr: usize, value: u16) {
        match self.words.get_mut(word_addr) {
            Some(word) => *word = value,
            None => log::error!(
                "MCU write to shared RAM word {word_addr:04X} dropped, shared RAM is only {:04X} words",
                self.words.len()
            ),
        }
    }

    pub(crate) fn read_byte(&self, address: usize) -> u8 {
        let [msb, lsb] = self.read_word(address >> 1).to_be_bytes();
        if address & 1 == 0 { msb } else { lsb }
    }

    pub(crate) fn write_byte(&mut self, address: usize, value: u8) {
        let word_addr = address >> 1;
        let Some(word) = self.words.get_mut(word_addr) else {
            log::error!(
                "MCU write to shared RAM byte {address:05X} dropped, shared RAM is only {:05X} bytes",
                2 * self.words.len()
            );
            return;
        };

        *word = if address & 1 == 0 {
            (*word & 0x00FF) | (u16::from(value) << 8)
        } else {
            (*word & 0xFF00) | u16::from(value)
        };
    }

    /// Copy a block of words starting at `word_addr`, dropping whatever doesn't fit
    pub(crate) fn write_words(&mut self, word_addr: usize, values: &[u16]) {
        let available = self.words.len().saturating_sub(word_addr);
        let len = match values.len().cmp(&available) {
            Ordering::Greater => {
                log::error!(
                    "MCU block write of {} words to {word_addr:04X} truncated to {available} words",
                    values.len()
                );
                available
            }
            Ordering::Less | Ordering::Equal => values.len(),
        };

        if len != 0 {
            self.words[word_addr..word_addr + len].copy_from_slice(&values[..len]);
        }
    }
}
