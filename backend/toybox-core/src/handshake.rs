//! Command handshake registers
//!
//! The main CPU signals that a command is ready by writing $FFFF to four separate MCU ports. The
//! MCU runs the command once all four ports hold $FFFF at the same time, and clears them first.

use bincode::{Decode, Encode};

pub const HANDSHAKE_SENTINEL: u16 = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakePort {
    Com0,
    Com1,
    Com2,
    Com3,
}

impl HandshakePort {
    pub const ALL: [Self; 4] = [Self::Com0, Self::Com1, Self::Com2, Self::Com3];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct HandshakeRegisters {
    ports: [u16; 4],
}

impl HandshakeRegisters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the masked bits of `value` into a port. Returns `true` if this write completed the
    /// handshake, in which case all four ports have already been cleared.
    #[must_use]
    pub fn write(&mut self, port: HandshakePort, value: u16, mask: u16) -> bool {
        let register = &mut self.ports[port.index()];
        *register = (*register & !mask) | (value & mask);

        log::trace!("Handshake {port:?} write {value:04X} mask {mask:04X}, ports {:04X?}", self.ports);

        if !handshake_complete(&self.ports) {
            return false;
        }

        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.ports = [0; 4];
    }

    #[must_use]
    pub fn ports(&self) -> [u16; 4] {
        self.ports
    }
}

#[must_use]
pub fn handshake_complete(ports: &[u16; 4]) -> bool {
    ports.iter().all(|&port| port == HANDSHAKE_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_of_four_never_fires() {
        for skipped in HandshakePort::ALL {
            let mut registers = HandshakeRegisters::new();

            for port in HandshakePort::ALL {
                let value = if port == skipped { 0xFFFE } else { HANDSHAKE_SENTINEL };
                assert!(!registers.write(port, value, 0xFFFF));
            }

            let expected: [u16; 4] =
                std::array::from_fn(|i| if i == skipped.index() { 0xFFFE } else { 0xFFFF });
            assert_eq!(registers.ports(), expected);
        }
    }

    #[test]
    fn four_of_four_fires_once_and_clears() {
        let orders = [
            [HandshakePort::Com0, HandshakePort::Com1, HandshakePort::Com2, HandshakePort::Com3],
            [HandshakePort::Com3, HandshakePort::Com2, HandshakePort::Com1, HandshakePort::Com0],
            [HandshakePort::Com2, HandshakePort::Com0, HandshakePort::Com3, HandshakePort::Com1],
        ];

        for order in orders {
            let mut registers = HandshakeRegisters::new();
            let fired: Vec<_> = order
                .into_iter()
                .map(|port| registers.write(port, HANDSHAKE_SENTINEL, 0xFFFF))
                .collect();

            assert_eq!(fired, vec![false, false, false, true]);
            assert_eq!(registers.ports(), [0; 4]);
        }
    }

    #[test]
    fn repeated_port_writes_do_not_fire_early() {
        let mut registers = HandshakeRegisters::new();

        assert!(!registers.write(HandshakePort::Com0, HANDSHAKE_SENTINEL, 0xFFFF));
        assert!(!registers.write(HandshakePort::Com0, HANDSHAKE_SENTINEL, 0xFFFF));
        assert!(!registers.write(HandshakePort::Com1, HANDSHAKE_SENTINEL, 0xFFFF));
        assert!(!registers.write(HandshakePort::Com2, HANDSHAKE_SENTINEL, 0xFFFF));
        assert!(registers.write(HandshakePort::Com3, HANDSHAKE_SENTINEL, 0xFFFF));

        // Cleared after firing, so the next sequence starts over
        assert!(!registers.write(HandshakePort::Com3, HANDSHAKE_SENTINEL, 0xFFFF));
    }

    #[test]
    fn byte_writes_merge() {
        let mut registers = HandshakeRegisters::new();

        for port in [HandshakePort::Com0, HandshakePort::Com1, HandshakePort::Com2] {
            assert!(!registers.write(port, HANDSHAKE_SENTINEL, 0xFFFF));
        }

        // High byte only, then low byte only
        assert!(!registers.write(HandshakePort::Com3, 0xFF12, 0xFF00));
        assert_eq!(registers.ports()[3], 0xFF00);
        assert!(registers.write(HandshakePort::Com3, 0x34FF, 0x00FF));
    }

    #[test]
    fn partial_handshake_survives_unmasked_write() {
        let mut registers = HandshakeRegisters::new();

        assert!(!registers.write(HandshakePort::Com1, HANDSHAKE_SENTINEL, 0xFFFF));
        assert!(!registers.write(HandshakePort::Com1, 0x0000, 0x0000));
        assert_eq!(registers.ports(), [0, 0xFFFF, 0, 0]);
    }

    #[test]
    fn port_indices() {
        assert_eq!(HandshakePort::from_index(2), Some(HandshakePort::Com2));
        assert_eq!(HandshakePort::from_index(4), None);
    }
}
