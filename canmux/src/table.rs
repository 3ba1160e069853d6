//! Fixed-size parameter table
//!
//! The table stores its parameters as a plain `[i16; N]` array, so a multiplexor index maps
//! to a slot by subtraction alone. The wrapper is `#[repr(transparent)]`: slots are
//! contiguous and densely packed in index order.
//!
//! ```
//! use canmux::table::ParameterTable;
//!
//! let mut table = ParameterTable::<5>::new();
//! table.update(3, 500).unwrap();
//! assert_eq!(table.as_slice(), &[0, 0, 500, 0, 0]);
//!
//! let err = table.update(6, 500).unwrap_err();
//! assert_eq!(err.index(), 6);
//! assert_eq!(table.as_slice(), &[0, 0, 500, 0, 0]);
//! ```

use crate::core::{Dispatch, InvalidIndex};

/// Ordered sequence of `N` signed 16-bit parameters addressed by 1-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ParameterTable<const N: usize>([i16; N]);

impl<const N: usize> ParameterTable<N> {
    /// Number of parameters. Valid indices are `1..=N`.
    pub const LEN: usize = N;

    /// Creates a table with all slots set to zero.
    pub const fn new() -> Self {
        Self([0; N])
    }

    pub const fn from_slots(slots: [i16; N]) -> Self {
        Self(slots)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Writes `value` into the slot addressed by the 1-based `index`.
    ///
    /// Indices outside `1..=N` are rejected before any write; the table is left as is.
    pub fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex> {
        let slot = index
            .checked_sub(1)
            .and_then(|pos| self.0.get_mut(pos))
            .ok_or(InvalidIndex(index))?;
        *slot = value;
        Ok(())
    }

    /// Reads the slot addressed by the 1-based `index`.
    pub fn get(&self, index: usize) -> Option<i16> {
        index
            .checked_sub(1)
            .and_then(|pos| self.0.get(pos))
            .copied()
    }

    pub const fn as_slice(&self) -> &[i16] {
        &self.0
    }

    pub const fn into_slots(self) -> [i16; N] {
        self.0
    }

    /// Iterates over `(index, value)` pairs in index order, starting from index 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i16)> + '_ {
        self.0.iter().enumerate().map(|(pos, &value)| (pos + 1, value))
    }
}

impl<const N: usize> Default for ParameterTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[i16; N]> for ParameterTable<N> {
    fn from(value: [i16; N]) -> Self {
        Self::from_slots(value)
    }
}

impl<const N: usize> From<ParameterTable<N>> for [i16; N] {
    fn from(value: ParameterTable<N>) -> Self {
        value.into_slots()
    }
}

impl<const N: usize> Dispatch for ParameterTable<N> {
    fn len(&self) -> usize {
        N
    }

    fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex> {
        ParameterTable::update(self, index, value)
    }
}
