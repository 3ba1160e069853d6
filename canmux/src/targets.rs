//! Lookup table of per-index write targets
//!
//! An alternative to [`ParameterTable`](crate::table::ParameterTable) for storage that is not
//! an array, e.g. a record with named fields. The table is built once and spells out which
//! field each multiplexor index maps to. Dispatch behaves exactly as with the array table.
//!
//! ```
//! use canmux::targets::VehicleParameters;
//!
//! let mut params = VehicleParameters::default();
//! params.targets().update(2, 3_000).unwrap();
//! assert_eq!(params.engine_rpm, 3_000);
//! ```

use crate::core::{Dispatch, InvalidIndex};

/// Write targets addressed by 1-based index
pub struct WriteTargets<'a, const N: usize>([&'a mut i16; N]);

impl<'a, const N: usize> WriteTargets<'a, N> {
    /// Creates a table where index `i` writes to `targets[i - 1]`.
    pub fn new(targets: [&'a mut i16; N]) -> Self {
        Self(targets)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Writes `value` through the target addressed by the 1-based `index`.
    ///
    /// Indices outside `1..=N` are rejected before any write.
    pub fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex> {
        let target = index
            .checked_sub(1)
            .and_then(|pos| self.0.get_mut(pos))
            .ok_or(InvalidIndex(index))?;
        **target = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<i16> {
        index
            .checked_sub(1)
            .and_then(|pos| self.0.get(pos))
            .map(|target| **target)
    }
}

impl<const N: usize> Dispatch for WriteTargets<'_, N> {
    fn len(&self) -> usize {
        N
    }

    fn update(&mut self, index: usize, value: i16) -> Result<(), InvalidIndex> {
        WriteTargets::update(self, index, value)
    }
}

/// Vehicle parameters carried by the multiplexed status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VehicleParameters {
    /// Index 1
    pub speed: i16,
    /// Index 2
    pub engine_rpm: i16,
    /// Index 3
    pub coolant_temperature: i16,
    /// Index 4
    pub fuel_level: i16,
    /// Index 5
    pub oil_pressure: i16,
}

impl VehicleParameters {
    pub const COUNT: usize = 5;

    pub fn targets(&mut self) -> WriteTargets<'_, { VehicleParameters::COUNT }> {
        WriteTargets::new([
            &mut self.speed,
            &mut self.engine_rpm,
            &mut self.coolant_temperature,
            &mut self.fuel_level,
            &mut self.oil_pressure,
        ])
    }

    /// Values in index order
    pub const fn to_array(&self) -> [i16; VehicleParameters::COUNT] {
        [
            self.speed,
            self.engine_rpm,
            self.coolant_temperature,
            self.fuel_level,
            self.oil_pressure,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ParameterTable;

    #[test]
    fn test_field_mapping() {
        for index in 1..=VehicleParameters::COUNT {
            let mut params = VehicleParameters::default();
            params.targets().update(index, index as i16 * 100).unwrap();

            let mut expected = [0; VehicleParameters::COUNT];
            expected[index - 1] = index as i16 * 100;
            assert_eq!(params.to_array(), expected);
        }

        let mut params = VehicleParameters::default();
        params.targets().update(1, 88).unwrap();
        params.targets().update(5, 420).unwrap();
        assert_eq!(params.speed, 88);
        assert_eq!(params.oil_pressure, 420);
    }

    #[test]
    fn test_reject_out_of_range() {
        let mut params = VehicleParameters {
            speed: 1,
            engine_rpm: 2,
            coolant_temperature: 3,
            fuel_level: 4,
            oil_pressure: 5,
        };
        let initial = params;

        assert_eq!(params.targets().update(0, 500), Err(InvalidIndex(0)));
        assert_eq!(params.targets().update(6, 500), Err(InvalidIndex(6)));
        assert_eq!(params, initial);
    }

    #[test]
    fn test_matches_table() {
        let requests = [
            (3, 500),
            (0, 1),
            (1, i16::MIN),
            (6, 1),
            (5, i16::MAX),
            (3, -12),
            (3, -12),
        ];

        let mut table = ParameterTable::<5>::new();
        let mut params = VehicleParameters::default();
        for (index, value) in requests {
            let mut targets = params.targets();
            assert_eq!(targets.update(index, value), table.update(index, value));
            assert_eq!(targets.get(index), table.get(index));
        }
        assert_eq!(params.to_array(), table.into_slots());
    }

    #[test]
    fn test_array_targets() {
        let mut a = 0;
        let mut b = 0;
        let mut targets = WriteTargets::new([&mut b, &mut a]);
        assert_eq!(targets.len(), 2);
        targets.update(1, 7).unwrap();
        targets.update(2, 9).unwrap();
        assert_eq!(targets.update(3, 9), Err(InvalidIndex(3)));
        assert_eq!((a, b), (9, 7));
    }
}
