//! GeometryError: Unified error type for block-geometry construction.
//!
//! Accessors on a built [`Grid`](crate::grid::Grid) are total and never fail;
//! every variant here is raised while validating a mesh block or building a
//! geometry backend.

use thiserror::Error;

use crate::mesh::Axis;

/// Unified error type for block-geometry operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// An axis of the mesh block carries no zones.
    #[error("mesh block axis {axis:?} has no zones")]
    EmptyAxis {
        /// Offending axis.
        axis: Axis,
    },
    /// Face array on an axis is not exactly one longer than its center array.
    #[error(
        "coordinate length mismatch on axis {axis:?}: {faces} faces for {centers} centers (expected {} faces)",
        .centers + 1
    )]
    CoordinateLengthMismatch {
        /// Offending axis.
        axis: Axis,
        /// Length of the face-position array.
        faces: usize,
        /// Length of the center-position array.
        centers: usize,
    },
    /// The coordinate system declares a dependence on the third logical axis,
    /// which the cached strategy cannot represent.
    #[error("coordinate system depends on x3; cached geometry requires x3 invariance")]
    ThirdAxisDependent,
    /// Sampled metric differs along the third logical axis.
    #[error("metric varies along x3 at zone ({i}, {j}, k={k}): max deviation {deviation:e}")]
    ThirdAxisVariation {
        /// First logical index.
        i: usize,
        /// Second logical index.
        j: usize,
        /// Third logical index compared against `k = 0`.
        k: usize,
        /// Largest absolute component difference observed.
        deviation: f64,
    },
    /// A dense slot index does not name a [`Location`](crate::grid::Location).
    #[error("no location with index {0} (expected 0..5)")]
    InvalidLocation(usize),
    /// A mesh block description is malformed (bounds, ghost counts, ...).
    #[error("invalid mesh block: {0}")]
    InvalidBlock(String),
    /// A stored geometry structure failed its invariant check.
    #[error("geometry invariant violated: {0}")]
    InvariantViolation(String),
}
