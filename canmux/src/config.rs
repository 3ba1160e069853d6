use embedded_can::{Id, StandardId};

/// Byte order of the parameter value within the frame payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// Most significant byte first (Motorola)
    #[default]
    BigEndian,
    /// Least significant byte first (Intel)
    LittleEndian,
}

impl ByteOrder {
    pub(crate) fn read_i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
        }
    }
}

/// Multiplexed message configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Identifier of the multiplexed message. Frames with other identifiers are ignored.
    pub frame_id: Id,
    /// Byte order of the value field.
    pub byte_order: ByteOrder,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            frame_id: Id::Standard(unwrap!(StandardId::new(0x100))),
            byte_order: ByteOrder::default(),
        }
    }
}
