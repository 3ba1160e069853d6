//! Multiplexed parameter dispatch core data types
//!
//! This crate provides basic data type definitions used by other canmux crates.
//! Users should not depend on this crate directly. Use `canmux::core` reexport instead.
#![no_std]

/// Parameter index outside of the table range
///
/// Carries the offending index for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidIndex(pub usize);

impl InvalidIndex {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl core::fmt::Display for InvalidIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid parameter index received: {}", self.0)
    }
}

impl core::error::Error for InvalidIndex {}

/// A single decoded multiplexed update
///
/// `index` is 1-based: the first parameter has index 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UpdateRequest {
    pub index: usize,
    pub value: i16,
}

impl UpdateRequest {
    pub const fn new(index: usize, value: i16) -> Self {
        Self { index, value }
    }

    /// Zero-based slot position, if the index can address any slot at all
    pub const fn slot(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }
}

impl From<(usize, i16)> for UpdateRequest {
    fn from((index, value): (usize, i16)) -> Self {
        Self::new(index, value)
    }
}

/// Parameter storage that accepts multiplexed updates
///
/// Implementations must validate the index before touching any slot: a rejected update
/// leaves the storage unmodified.
pub trait Dispatch {
    /// Number of addressable parameters. Valid indices are `1..=len()`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `value` into the slot addressed by the 1-based `index`
    fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex>;

    fn apply(&mut self, request: UpdateRequest) -> Result<(), InvalidIndex> {
        self.update(request.index, request.value)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for &mut D {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex> {
        (**self).update(index, value)
    }
}
