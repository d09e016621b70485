//! Owned coordinate arrays for one block.

use crate::debug_invariants::DebugInvariants;
use crate::geometry_error::GeometryError;
use crate::mesh::{Axis, MeshBlock};

/// Face and center positions along the three logical axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockArrays {
    /// Face positions per axis, indexed by [`Axis::index`].
    pub faces: [Vec<f64>; 3],
    /// Center positions per axis, indexed by [`Axis::index`].
    pub centers: [Vec<f64>; 3],
}

impl BlockArrays {
    /// Build arrays from face positions, placing each center at the midpoint
    /// of its two faces. Faces must be strictly increasing on every axis.
    pub fn from_faces(faces: [Vec<f64>; 3]) -> Result<Self, GeometryError> {
        let mut centers: [Vec<f64>; 3] = Default::default();
        for axis in Axis::ALL {
            let f = &faces[axis.index()];
            if f.len() < 2 {
                return Err(GeometryError::EmptyAxis { axis });
            }
            centers[axis.index()] = f.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
        }
        let arrays = Self { faces, centers };
        arrays.validate_invariants()?;
        Ok(arrays)
    }
}

/// Check that every center on `axis` sits strictly between its bounding faces.
///
/// `faces` must hold one more entry than `centers`.
pub(crate) fn check_axis_ordering(
    axis: Axis,
    faces: &[f64],
    centers: &[f64],
) -> Result<(), GeometryError> {
    for (n, (&x, w)) in centers.iter().zip(faces.windows(2)).enumerate() {
        if !(w[0] < x && x < w[1]) {
            return Err(GeometryError::InvariantViolation(format!(
                "center {n} on {axis:?} ({x}) not inside faces [{}, {}]",
                w[0], w[1]
            )));
        }
    }
    Ok(())
}

impl MeshBlock for BlockArrays {
    fn face_positions(&self, axis: Axis) -> &[f64] {
        &self.faces[axis.index()]
    }

    fn center_positions(&self, axis: Axis) -> &[f64] {
        &self.centers[axis.index()]
    }
}

impl DebugInvariants for BlockArrays {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BlockArrays invalid");
    }

    fn validate_invariants(&self) -> Result<(), GeometryError> {
        for axis in Axis::ALL {
            let f = self.face_positions(axis);
            let c = self.center_positions(axis);
            if c.is_empty() {
                return Err(GeometryError::EmptyAxis { axis });
            }
            if f.len() != c.len() + 1 {
                return Err(GeometryError::CoordinateLengthMismatch {
                    axis,
                    faces: f.len(),
                    centers: c.len(),
                });
            }
            check_axis_ordering(axis, f, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_faces_places_midpoints() {
        let arrays = BlockArrays::from_faces([
            vec![0.0, 1.0, 3.0],
            vec![0.0, 2.0],
            vec![-1.0, 0.0, 1.0, 2.0],
        ])
        .unwrap();
        assert_eq!(arrays.center_positions(Axis::X1), &[0.5, 2.0]);
        assert_eq!(arrays.center_positions(Axis::X2), &[1.0]);
        assert_eq!(arrays.zone_count(Axis::X3), 3);
        assert!(arrays.validate_invariants().is_ok());
    }

    #[test]
    fn from_faces_rejects_single_face() {
        let err = BlockArrays::from_faces([vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]]).unwrap_err();
        assert_eq!(err, GeometryError::EmptyAxis { axis: Axis::X2 });
    }

    #[test]
    fn from_faces_rejects_decreasing_faces() {
        let err = BlockArrays::from_faces([vec![0.0, 1.0], vec![2.0, 1.0], vec![0.0, 1.0]])
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvariantViolation(_)));
    }

    #[test]
    fn invariants_catch_unordered_faces() {
        let arrays = BlockArrays {
            faces: [vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            centers: [vec![0.5], vec![0.5], vec![0.5]],
        };
        assert!(matches!(
            arrays.validate_invariants(),
            Err(GeometryError::InvariantViolation(_))
        ));
    }
}
