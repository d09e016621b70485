//! Mesh-block collaborator: the six 1-D coordinate arrays a block exposes.
//!
//! The geometry layer never owns these arrays. [`ZoneCoordinates`] borrows
//! them from a [`MeshBlock`] for as long as the block lives, and resolves
//! `(i, j, k, Location)` to native coordinates.

pub mod block;
pub mod uniform;
pub mod view;

use serde::{Deserialize, Serialize};

pub use block::BlockArrays;
pub use uniform::UniformBlock;
pub use view::ZoneCoordinates;

/// A logical spatial axis of a structured block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X1,
    X2,
    X3,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X1, Axis::X2, Axis::X3];

    /// Dense 0-based slot of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X1 => 0,
            Axis::X2 => 1,
            Axis::X3 => 2,
        }
    }
}

/// Source of per-axis face and center positions for one mesh block.
///
/// Face arrays hold one more entry than center arrays on the same axis.
pub trait MeshBlock {
    /// Face positions along `axis` (length = zone count + 1).
    fn face_positions(&self, axis: Axis) -> &[f64];
    /// Cell-center positions along `axis` (length = zone count).
    fn center_positions(&self, axis: Axis) -> &[f64];

    /// Number of zones along `axis`.
    fn zone_count(&self, axis: Axis) -> usize {
        self.center_positions(axis).len()
    }
}
