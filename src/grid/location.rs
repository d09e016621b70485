//! Staggering locations within a zone.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use crate::geometry_error::GeometryError;
use crate::mesh::Axis;

/// Sub-position of a logical zone at which a quantity is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Location {
    /// Zone center.
    Center = 0,
    /// Lower face normal to the first axis.
    Face1 = 1,
    /// Lower face normal to the second axis.
    Face2 = 2,
    /// Lower face normal to the third axis.
    Face3 = 3,
    /// Lower corner, staggered along all three axes.
    Corner = 4,
}

impl Location {
    /// Number of locations.
    pub const COUNT: usize = 5;

    /// All locations in slot order.
    pub const ALL: [Location; Location::COUNT] = [
        Location::Center,
        Location::Face1,
        Location::Face2,
        Location::Face3,
        Location::Corner,
    ];

    /// Dense slot in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True if this location reads face positions along `axis`.
    #[inline]
    pub const fn is_staggered(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Location::Corner, _)
                | (Location::Face1, Axis::X1)
                | (Location::Face2, Axis::X2)
                | (Location::Face3, Axis::X3)
        )
    }
}

const_assert_eq!(Location::ALL.len(), Location::COUNT);

impl TryFrom<usize> for Location {
    type Error = GeometryError;

    fn try_from(slot: usize) -> Result<Self, Self::Error> {
        Location::ALL
            .get(slot)
            .copied()
            .ok_or(GeometryError::InvalidLocation(slot))
    }
}
