//! Multiplexed frame demultiplexer
//!
//! The demultiplexer sits between a CAN receiver and parameter storage. It picks frames
//! carrying the configured identifier, extracts the `(index, value)` pair, and dispatches it.
//! Rejected updates are logged and counted here; the storage itself only reports them.
//!
//! Payload layout:
//!
//! ```text
//! byte:   0       1       2       3..
//!       ┌───────┬───────────────┬──────────┐
//!       │ index │     value     │ (unused) │
//!       └───────┴───────────────┴──────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use canmux::config::Config;
//! use canmux::demux::{Demux, DemuxError};
//! use canmux::frame::Frame;
//! use canmux::table::ParameterTable;
//! use embedded_can::StandardId;
//!
//! let mut demux = Demux::new(Config::default());
//! let mut table = ParameterTable::<5>::new();
//!
//! let id = StandardId::new(0x100).unwrap();
//! let frame = Frame::new_data(id, &[3, 0x01, 0xf4]).unwrap();
//! demux.push(&frame, &mut table).unwrap();
//! assert_eq!(table.as_slice(), &[0, 0, 500, 0, 0]);
//!
//! let frame = Frame::new_data(id, &[6, 0x01, 0xf4]).unwrap();
//! assert!(matches!(demux.push(&frame, &mut table), Err(DemuxError::InvalidIndex(_))));
//! assert_eq!(demux.stats().rejected, 1);
//! ```

use crate::config::{ByteOrder, Config};
use crate::core::{Dispatch, InvalidIndex, UpdateRequest};

/// Minimal payload length: index byte and a 16-bit value
pub const PAYLOAD_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MalformedPayload {
    pub length: usize,
}

impl core::fmt::Display for MalformedPayload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "multiplexed payload too short: {} bytes, expected at least {}",
            self.length, PAYLOAD_LENGTH
        )
    }
}

impl core::error::Error for MalformedPayload {}

/// Extracts an update request from a multiplexed payload.
///
/// The index is not range-checked here. Bytes past the value field are ignored.
pub fn decode(payload: &[u8], byte_order: ByteOrder) -> Result<UpdateRequest, MalformedPayload> {
    match payload {
        [index, hi, lo, ..] => Ok(UpdateRequest::new(
            usize::from(*index),
            byte_order.read_i16([*hi, *lo]),
        )),
        _ => Err(MalformedPayload {
            length: payload.len(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemuxError {
    Malformed(MalformedPayload),
    InvalidIndex(InvalidIndex),
}

impl From<MalformedPayload> for DemuxError {
    fn from(value: MalformedPayload) -> Self {
        DemuxError::Malformed(value)
    }
}

impl From<InvalidIndex> for DemuxError {
    fn from(value: InvalidIndex) -> Self {
        DemuxError::InvalidIndex(value)
    }
}

impl core::fmt::Display for DemuxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DemuxError::Malformed(err) => err.fmt(f),
            DemuxError::InvalidIndex(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for DemuxError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            DemuxError::Malformed(err) => Some(err),
            DemuxError::InvalidIndex(err) => Some(err),
        }
    }
}

/// Frame outcome counters
///
/// Counters saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stats {
    /// Updates written to storage
    pub applied: u32,
    /// Updates with an out-of-range index
    pub rejected: u32,
    /// Matching frames with a short payload
    pub malformed: u32,
    /// Remote frames and frames with another identifier
    pub ignored: u32,
}

pub struct Demux {
    config: Config,
    stats: Stats,
}

impl Demux {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            stats: Stats {
                applied: 0,
                rejected: 0,
                malformed: 0,
                ignored: 0,
            },
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn stats(&self) -> Stats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Checks whether the frame carries the multiplexed message.
    pub fn accepts<F: embedded_can::Frame>(&self, frame: &F) -> bool {
        frame.is_data_frame() && frame.id() == self.config.frame_id
    }

    /// Decodes a frame and dispatches the update to `storage`.
    ///
    /// Returns `Ok(None)` for frames not carrying the multiplexed message and the applied
    /// request otherwise. On error, `storage` is not modified.
    pub fn push<F, D>(
        &mut self,
        frame: &F,
        storage: &mut D,
    ) -> Result<Option<UpdateRequest>, DemuxError>
    where
        F: embedded_can::Frame,
        D: Dispatch + ?Sized,
    {
        if !self.accepts(frame) {
            self.stats.ignored = self.stats.ignored.saturating_add(1);
            return Ok(None);
        }

        let request = decode(frame.data(), self.config.byte_order).inspect_err(|err| {
            self.stats.malformed = self.stats.malformed.saturating_add(1);
            warn!("malformed multiplexed payload: {} bytes", err.length);
        })?;

        self.dispatch(request, storage).map(Some)
    }

    /// Dispatches an already decoded update to `storage`, logging and counting the outcome.
    pub fn dispatch<D: Dispatch + ?Sized>(
        &mut self,
        request: UpdateRequest,
        storage: &mut D,
    ) -> Result<UpdateRequest, DemuxError> {
        match storage.apply(request) {
            Ok(()) => {
                self.stats.applied = self.stats.applied.saturating_add(1);
                trace!("parameter {} set to {}", request.index, request.value);
                Ok(request)
            }
            Err(err) => {
                self.stats.rejected = self.stats.rejected.saturating_add(1);
                warn!("invalid parameter index received: {}", err.index());
                Err(err.into())
            }
        }
    }
}

impl Default for Demux {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(
            decode(&[3, 0x01, 0xf4], ByteOrder::BigEndian),
            Ok(UpdateRequest::new(3, 500))
        );
        assert_eq!(
            decode(&[3, 0x01, 0xf4], ByteOrder::LittleEndian),
            Ok(UpdateRequest::new(3, -3071))
        );
        assert_eq!(
            decode(&[1, 0x80, 0x00, 0xaa, 0xbb], ByteOrder::BigEndian),
            Ok(UpdateRequest::new(1, i16::MIN))
        );
        assert_eq!(
            decode(&[0xff, 0xff, 0x7f], ByteOrder::LittleEndian),
            Ok(UpdateRequest::new(255, i16::MAX))
        );
    }

    #[test]
    fn test_decode_short() {
        for len in 0..PAYLOAD_LENGTH {
            let payload = [1u8; PAYLOAD_LENGTH];
            assert_eq!(
                decode(&payload[..len], ByteOrder::BigEndian),
                Err(MalformedPayload { length: len })
            );
        }
    }

    #[test]
    fn test_dispatch_counts() {
        let mut demux = Demux::default();
        let mut table = crate::table::ParameterTable::<5>::new();

        assert_eq!(
            demux.dispatch(UpdateRequest::new(5, 500), &mut table),
            Ok(UpdateRequest::new(5, 500))
        );
        assert_eq!(
            demux.dispatch(UpdateRequest::new(0, 500), &mut table),
            Err(DemuxError::InvalidIndex(InvalidIndex(0)))
        );
        assert_eq!(
            demux.stats(),
            Stats {
                applied: 1,
                rejected: 1,
                malformed: 0,
                ignored: 0
            }
        );
        assert_eq!(table.as_slice(), &[0, 0, 0, 0, 500]);

        demux.reset_stats();
        assert_eq!(demux.stats(), Stats::default());
    }

    #[test]
    fn test_stats_saturate() {
        let mut demux = Demux::default();
        let mut table = crate::table::ParameterTable::<1>::new();
        demux.stats.rejected = u32::MAX;
        assert!(demux.dispatch(UpdateRequest::new(2, 0), &mut table).is_err());
        assert_eq!(demux.stats().rejected, u32::MAX);
    }
}
