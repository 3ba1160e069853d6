//! Classic CAN frame object

use embedded_can::Id;

const MAX_DATA_LENGTH: usize = 8;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidLength;

/// Classic CAN data vector
///
/// Holds up to 8 bytes. The data length code of a classic frame equals the byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Data {
    length: u8,
    bytes: [u8; MAX_DATA_LENGTH],
}

impl Data {
    pub const MAX: usize = MAX_DATA_LENGTH;

    /// Creates a new vector from a slice of compatible length.
    pub fn new(data: &[u8]) -> Result<Self, InvalidLength> {
        if data.len() > Self::MAX {
            return Err(InvalidLength);
        }
        let mut bytes = [0; Self::MAX];
        bytes[..data.len()].copy_from_slice(data);

        Ok(Self {
            length: data.len() as u8,
            bytes,
        })
    }

    pub fn new_zeros(length: usize) -> Result<Self, InvalidLength> {
        if length > Self::MAX {
            return Err(InvalidLength);
        }
        Ok(Self {
            length: length as u8,
            bytes: [0; Self::MAX],
        })
    }

    pub fn length(&self) -> usize {
        usize::from(self.length)
    }
}

impl core::ops::Deref for Data {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes[..self.length()]
    }
}

impl core::ops::DerefMut for Data {
    fn deref_mut(&mut self) -> &mut Self::Target {
        let length = self.length();
        &mut self.bytes[..length]
    }
}

/// Classic CAN frame
///
/// Remote frames carry a data length code but no data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub id: Id,
    pub kind: FrameKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    Data(Data),
    Remote { dlc: u8 },
}

impl Frame {
    pub fn new_data(id: impl Into<Id>, data: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            id: id.into(),
            kind: FrameKind::Data(Data::new(data)?),
        })
    }
}

impl embedded_can::Frame for Frame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        Self::new_data(id, data).ok()
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > Data::MAX {
            return None;
        }
        Some(Self {
            id: id.into(),
            kind: FrameKind::Remote { dlc: dlc as u8 },
        })
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        matches!(self.kind, FrameKind::Remote { .. })
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        match &self.kind {
            FrameKind::Data(data) => data.length(),
            FrameKind::Remote { dlc } => usize::from(*dlc),
        }
    }

    fn data(&self) -> &[u8] {
        match &self.kind {
            FrameKind::Data(data) => &data[..],
            FrameKind::Remote { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_can::{ExtendedId, Frame as _, StandardId};

    #[test]
    fn test_data_length() {
        for len in 0usize..12 {
            let bytes = [0xa5; 12];
            match Data::new(&bytes[..len]) {
                Ok(data) => {
                    assert!(len <= Data::MAX);
                    assert_eq!(data.length(), len);
                    assert_eq!(&*data, &bytes[..len]);
                }
                Err(InvalidLength) => assert!(len > Data::MAX),
            }
        }
        assert!(Data::new_zeros(9).is_err());
        assert_eq!(&*Data::new_zeros(3).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn test_frame_trait() {
        let id = StandardId::new(0x100).unwrap();
        let frame = Frame::new(id, &[3, 0x01, 0xf4]).unwrap();
        assert!(frame.is_standard());
        assert!(frame.is_data_frame());
        assert_eq!(frame.id(), Id::Standard(id));
        assert_eq!(frame.dlc(), 3);
        assert_eq!(frame.data(), &[3, 0x01, 0xf4]);

        assert!(Frame::new(id, &[0; 9]).is_none());

        let id = ExtendedId::new(0x18da_f110).unwrap();
        let remote = Frame::new_remote(id, 3).unwrap();
        assert!(remote.is_extended());
        assert!(remote.is_remote_frame());
        assert_eq!(remote.dlc(), 3);
        assert!(remote.data().is_empty());
        assert!(Frame::new_remote(id, 9).is_none());
    }
}
