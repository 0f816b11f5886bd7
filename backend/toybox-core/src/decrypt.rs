//! Data ROM decryption
//!
//! The MCU data ROM is stored encrypted with a simple additive cipher keyed on the low 8 bits of
//! the byte address. Decrypted bytes are produced by adding a key byte from one of two 256-byte
//! tables; which table applies depends on the board.

use toybox_config::DecryptionTable;

pub const DATA_ROM_LEN: usize = 128 * 1024;

#[rustfmt::skip]
const NORMAL_TABLE: [u8; 256] = [
    0x7B, 0x82, 0xF0, 0xBC, 0x7F, 0x1D, 0xA2, 0xC5, 0x2A, 0xFA, 0x55, 0xEE, 0x1A, 0xD0, 0x59, 0x76,
    0x5E, 0x75, 0x79, 0x16, 0xA5, 0xF6, 0x84, 0xED, 0x0F, 0x2E, 0xF2, 0x36, 0x61, 0xAC, 0xCD, 0xAB,
    0x01, 0x3B, 0x01, 0x87, 0x73, 0xAB, 0xCE, 0x5D, 0xD4, 0x1D, 0x68, 0x2A, 0x35, 0xEA, 0x13, 0x27,
    0x00, 0xAA, 0x46, 0x36, 0x6E, 0x65, 0x80, 0x7E, 0x19, 0xE2, 0x96, 0xAB, 0xAC, 0xA5, 0x6C, 0x63,
    0x4A, 0x6F, 0x87, 0xF6, 0x6A, 0xAC, 0x38, 0xE2, 0x1F, 0x87, 0xF9, 0xAA, 0xF5, 0x41, 0x60, 0xA6,
    0x42, 0xB9, 0x30, 0xF2, 0xC3, 0x1C, 0x4E, 0x4B, 0x08, 0x10, 0x42, 0x32, 0xBF, 0xB2, 0xC5, 0x0F,
    0x7A, 0xAB, 0x97, 0xF6, 0xE7, 0xB3, 0x46, 0xF8, 0xEC, 0x2B, 0x7D, 0x5F, 0xB1, 0x10, 0x03, 0xE4,
    0x0F, 0x22, 0xDF, 0x8D, 0x10, 0x66, 0xA7, 0x7E, 0x96, 0xBD, 0x5A, 0xAF, 0xAA, 0x43, 0xDF, 0x10,
    0x7C, 0x04, 0xE2, 0x9D, 0x66, 0xD7, 0xF0, 0x02, 0x58, 0x8A, 0x55, 0x17, 0x16, 0xE2, 0xE2, 0x52,
    0xAF, 0xD9, 0xF9, 0x0D, 0x59, 0x70, 0x86, 0x3C, 0x05, 0xD1, 0x52, 0xA7, 0xF0, 0xBF, 0x17, 0xD0,
    0x23, 0x15, 0xFE, 0x23, 0xF2, 0x80, 0x60, 0x6F, 0x95, 0x89, 0x67, 0x65, 0xC9, 0x0E, 0xFC, 0x16,
    0xD6, 0x8A, 0x9F, 0x25, 0x2C, 0x0F, 0x2D, 0xE4, 0x51, 0xB2, 0xA8, 0x18, 0x3A, 0x5D, 0x66, 0xA0,
    0x9F, 0xB0, 0x58, 0xEA, 0x78, 0x72, 0x08, 0x6A, 0x90, 0xB6, 0xA4, 0xF5, 0x08, 0x19, 0x60, 0x4E,
    0x92, 0xBD, 0xF1, 0x05, 0x67, 0x4F, 0x24, 0x99, 0x69, 0x1D, 0x0C, 0x6D, 0xE7, 0x74, 0x88, 0x22,
    0x2D, 0x15, 0x7A, 0xA2, 0x37, 0xA9, 0xA0, 0xB0, 0x2C, 0xFB, 0x27, 0xE5, 0x4F, 0xB6, 0xCD, 0x75,
    0xDC, 0x39, 0xCE, 0x6F, 0x1F, 0xFE, 0xCC, 0xB5, 0xE6, 0xDA, 0xD8, 0xEE, 0x85, 0xEE, 0x2F, 0x04,
];

// Great 1000 Miles Rally 2
#[rustfmt::skip]
const ALTERNATE_TABLE: [u8; 256] = [
    0x26, 0x17, 0xB9, 0xCF, 0x1A, 0xF5, 0x14, 0x1E, 0x0C, 0x35, 0xB3, 0x66, 0xA0, 0x17, 0xE9, 0xE4,
    0x90, 0xF6, 0xD5, 0x35, 0xAC, 0x95, 0x49, 0x43, 0x64, 0x0C, 0x03, 0x75, 0x4D, 0xDA, 0xB6, 0xDF,
    0x06, 0xCF, 0x83, 0x9E, 0x35, 0x2C, 0x71, 0x2A, 0xAB, 0xCC, 0x65, 0xD4, 0x1F, 0xB0, 0x88, 0x3C,
    0xB7, 0x87, 0x35, 0xC0, 0x41, 0x65, 0x9F, 0xA0, 0xD5, 0x8C, 0x3E, 0x06, 0x53, 0xDB, 0x45, 0x64,
    0x09, 0x1E, 0xC5, 0x8D, 0x50, 0x24, 0xE2, 0x4A, 0x9B, 0x99, 0x77, 0x25, 0x43, 0xA9, 0x1D, 0xAC,
    0x99, 0x31, 0x75, 0xB5, 0x53, 0xAB, 0xAD, 0x5A, 0x42, 0x14, 0xA1, 0x52, 0xAC, 0xEC, 0x5F, 0xF8,
    0x8C, 0x78, 0x05, 0x47, 0xEA, 0xB8, 0xDE, 0x69, 0x98, 0x2D, 0x8F, 0x9D, 0xFC, 0x05, 0xEA, 0xEE,
    0x77, 0xBB, 0xA9, 0x31, 0x01, 0x00, 0xEA, 0xD8, 0x9C, 0x43, 0xB5, 0x2F, 0x4E, 0xB5, 0x1B, 0xD2,
    0x01, 0x4B, 0xC4, 0xF8, 0x76, 0x92, 0x59, 0x4F, 0x20, 0x52, 0xD9, 0x7F, 0xA9, 0x19, 0xE9, 0x7C,
    0x8D, 0x3B, 0xEC, 0xE0, 0x60, 0x08, 0x2E, 0xBD, 0x27, 0x8B, 0xB2, 0xFC, 0x29, 0xD8, 0x39, 0x8A,
    0x4F, 0x2F, 0x6B, 0x04, 0x10, 0xBD, 0xA1, 0x04, 0xDE, 0xC0, 0xD5, 0x0F, 0x04, 0x86, 0xD6, 0xD8,
    0xFD, 0xB1, 0x3C, 0x4C, 0xD1, 0xC4, 0xF1, 0x5B, 0xF5, 0x8B, 0xE3, 0xC4, 0x89, 0x3C, 0x39, 0x86,
    0xD2, 0x92, 0xC9, 0xE5, 0x2C, 0x4F, 0xE2, 0x2F, 0x2D, 0xC5, 0x35, 0x09, 0x94, 0x47, 0x3C, 0x04,
    0x40, 0x8B, 0x57, 0x08, 0xF6, 0x74, 0xE9, 0xB8, 0x36, 0x4D, 0xC5, 0x26, 0x13, 0x3D, 0x75, 0xA0,
    0xA8, 0x29, 0x09, 0x8C, 0x87, 0xF7, 0x13, 0xAF, 0x4C, 0x38, 0x0B, 0x8A, 0x7F, 0x2C, 0x62, 0x27,
    0x47, 0xAA, 0xDA, 0x07, 0x92, 0x8D, 0xFD, 0x1F, 0xEE, 0x48, 0x1A, 0x53, 0x3B, 0x98, 0x6A, 0x72,
];

#[must_use]
pub fn key_table(table: DecryptionTable) -> &'static [u8; 256] {
    match table {
        DecryptionTable::Normal => &NORMAL_TABLE,
        DecryptionTable::Alternate => &ALTERNATE_TABLE,
    }
}

#[inline]
fn key_index(address: usize) -> usize {
    // The ROM is wired as 16-bit words, so the key is indexed with the byte lanes swapped
    (address ^ 1) & 0xFF
}

/// Decrypt a raw data ROM image in place.
///
/// Must only be applied to the original encrypted image; decrypting the output again does not
/// undo anything.
pub fn decrypt_data_rom(rom: &mut [u8], table: DecryptionTable) {
    let key = key_table(table);
    for (i, byte) in rom.iter_mut().enumerate() {
        *byte = byte.wrapping_add(key[key_index(i)]);
    }
}

/// Inverse of [`decrypt_data_rom`]; used to build data ROM images from known plaintext
pub fn encrypt_data_rom(rom: &mut [u8], table: DecryptionTable) {
    let key = key_table(table);
    for (i, byte) in rom.iter_mut().enumerate() {
        *byte = byte.wrapping_sub(key[key_index(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn random_image() -> Vec<u8> {
        (0..DATA_ROM_LEN).map(|_| rand::random()).collect()
    }

    #[test]
    fn decryption_is_deterministic() {
        let raw = random_image();

        for table in DecryptionTable::ALL {
            let mut a = raw.clone();
            let mut b = raw.clone();
            decrypt_data_rom(&mut a, table);
            decrypt_data_rom(&mut b, table);
            assert_eq!(a, b, "{table}");
        }
    }

    #[test]
    fn key_lanes_are_swapped() {
        let mut rom = vec![0; 4];
        decrypt_data_rom(&mut rom, DecryptionTable::Normal);
        assert_eq!(rom, vec![NORMAL_TABLE[1], NORMAL_TABLE[0], NORMAL_TABLE[3], NORMAL_TABLE[2]]);
    }

    #[test]
    fn key_repeats_every_256_bytes() {
        let mut rom = vec![0; 0x300];
        decrypt_data_rom(&mut rom, DecryptionTable::Alternate);
        assert_eq!(rom[..0x100], rom[0x100..0x200]);
        assert_eq!(rom[..0x100], rom[0x200..]);
    }

    #[test]
    fn decryption_wraps() {
        let mut rom = vec![0xFF; 2];
        decrypt_data_rom(&mut rom, DecryptionTable::Normal);
        assert_eq!(rom, vec![NORMAL_TABLE[1].wrapping_sub(1), NORMAL_TABLE[0].wrapping_sub(1)]);
    }

    #[test]
    fn tables_differ_where_keys_differ() {
        let raw = random_image();

        let mut normal = raw.clone();
        decrypt_data_rom(&mut normal, DecryptionTable::Normal);
        let mut alternate = raw;
        decrypt_data_rom(&mut alternate, DecryptionTable::Alternate);

        for (i, (&a, &b)) in normal.iter().zip(&alternate).enumerate() {
            let keys_differ = NORMAL_TABLE[key_index(i)] != ALTERNATE_TABLE[key_index(i)];
            assert_eq!(keys_differ, a != b, "address {i:05X}");
        }
    }

    #[test]
    fn encrypt_then_decrypt() {
        let plain = random_image();

        for table in DecryptionTable::ALL {
            let mut rom = plain.clone();
            encrypt_data_rom(&mut rom, table);
            decrypt_data_rom(&mut rom, table);
            assert_eq!(rom, plain, "{table}");
        }
    }
}
