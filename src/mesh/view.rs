//! Borrowed coordinate view used by the geometry facade and its kernels.

use crate::coords::NativeCoord;
use crate::geometry_error::GeometryError;
use crate::grid::Location;
use crate::mesh::{Axis, MeshBlock};

/// Non-owning view of the six coordinate arrays of one block.
///
/// The view is `Copy`, so parallel kernels take it by value instead of
/// reaching through the facade that owns it.
#[derive(Clone, Copy, Debug)]
pub struct ZoneCoordinates<'a> {
    x1f: &'a [f64],
    x2f: &'a [f64],
    x3f: &'a [f64],
    x1v: &'a [f64],
    x2v: &'a [f64],
    x3v: &'a [f64],
}

impl<'a> ZoneCoordinates<'a> {
    /// Borrow the arrays of `block`, checking that every axis has at least one
    /// zone and one more face than centers.
    ///
    /// # Panics
    /// In debug builds, or with `check-invariants`, panics if a center does not
    /// lie strictly between its two faces.
    pub fn try_from_block<M: MeshBlock + ?Sized>(block: &'a M) -> Result<Self, GeometryError> {
        for axis in Axis::ALL {
            let faces = block.face_positions(axis);
            let centers = block.center_positions(axis);
            if centers.is_empty() {
                return Err(GeometryError::EmptyAxis { axis });
            }
            if faces.len() != centers.len() + 1 {
                return Err(GeometryError::CoordinateLengthMismatch {
                    axis,
                    faces: faces.len(),
                    centers: centers.len(),
                });
            }
            crate::debug_invariants!(
                crate::mesh::block::check_axis_ordering(axis, faces, centers),
                "ZoneCoordinates: block arrays out of order"
            );
        }
        Ok(Self {
            x1f: block.face_positions(Axis::X1),
            x2f: block.face_positions(Axis::X2),
            x3f: block.face_positions(Axis::X3),
            x1v: block.center_positions(Axis::X1),
            x2v: block.center_positions(Axis::X2),
            x3v: block.center_positions(Axis::X3),
        })
    }

    /// Zone count along the first logical axis.
    #[inline]
    pub fn n1(&self) -> usize {
        self.x1v.len()
    }

    /// Zone count along the second logical axis.
    #[inline]
    pub fn n2(&self) -> usize {
        self.x2v.len()
    }

    /// Zone count along the third logical axis.
    #[inline]
    pub fn n3(&self) -> usize {
        self.x3v.len()
    }

    /// Native coordinates `(t, x1, x2, x3)` of zone `(i, j, k)` at `loc`.
    ///
    /// Each axis reads its face array when `loc` is staggered along it and
    /// its center array otherwise. `t` is always 0.
    ///
    /// # Panics
    /// Panics if an index is outside the array it selects.
    #[inline]
    pub fn native(&self, i: usize, j: usize, k: usize, loc: Location) -> NativeCoord {
        match loc {
            Location::Center => [0.0, self.x1v[i], self.x2v[j], self.x3v[k]],
            Location::Face1 => [0.0, self.x1f[i], self.x2v[j], self.x3v[k]],
            Location::Face2 => [0.0, self.x1v[i], self.x2f[j], self.x3v[k]],
            Location::Face3 => [0.0, self.x1v[i], self.x2v[j], self.x3f[k]],
            Location::Corner => [0.0, self.x1f[i], self.x2f[j], self.x3f[k]],
        }
    }
}
