//! Uniformly spaced mesh blocks.

use serde::{Deserialize, Serialize};

use crate::geometry_error::GeometryError;
use crate::mesh::block::BlockArrays;
use crate::mesh::Axis;

/// Description of a block with evenly spaced faces on each axis.
///
/// `bounds[a] = [lo, hi]` covers the `zones[a]` interior zones of axis `a`.
/// With `ghosts > 0` every axis gains that many zones on each side, spaced
/// like the interior, and zone index 0 is the first ghost zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformBlock {
    pub bounds: [[f64; 2]; 3],
    pub zones: [usize; 3],
    #[serde(default)]
    pub ghosts: usize,
}

impl UniformBlock {
    /// Block without ghost zones.
    pub fn new(bounds: [[f64; 2]; 3], zones: [usize; 3]) -> Self {
        Self {
            bounds,
            zones,
            ghosts: 0,
        }
    }

    /// Set the number of ghost zones per side.
    pub fn with_ghosts(mut self, ghosts: usize) -> Self {
        self.ghosts = ghosts;
        self
    }

    /// Zone spacing along `axis`.
    pub fn spacing(&self, axis: Axis) -> f64 {
        let [lo, hi] = self.bounds[axis.index()];
        (hi - lo) / self.zones[axis.index()] as f64
    }

    /// Materialize the six coordinate arrays.
    pub fn build(&self) -> Result<BlockArrays, GeometryError> {
        let mut faces: [Vec<f64>; 3] = Default::default();
        for axis in Axis::ALL {
            let a = axis.index();
            let [lo, hi] = self.bounds[a];
            if self.zones[a] == 0 {
                return Err(GeometryError::EmptyAxis { axis });
            }
            if !lo.is_finite() || !hi.is_finite() || hi <= lo {
                return Err(GeometryError::InvalidBlock(format!(
                    "bounds on {axis:?} must be finite with lo < hi, got [{lo}, {hi}]"
                )));
            }
            let dx = self.spacing(axis);
            let total = self.zones[a] + 2 * self.ghosts;
            faces[a] = (0..=total)
                .map(|n| lo + (n as f64 - self.ghosts as f64) * dx)
                .collect();
        }
        let arrays = BlockArrays::from_faces(faces)?;
        log::trace!(
            "uniform block built: zones {:?} (+{} ghosts per side)",
            self.zones,
            self.ghosts
        );
        Ok(arrays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug_invariants::DebugInvariants;
    use crate::mesh::MeshBlock;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn faces_span_bounds() {
        let arrays = UniformBlock::new([[0.0, 1.0], [0.0, 2.0], [-1.0, 1.0]], [4, 2, 1])
            .build()
            .unwrap();
        let x1f = arrays.face_positions(Axis::X1);
        assert_eq!(x1f.len(), 5);
        assert!(approx(x1f[0], 0.0));
        assert!(approx(x1f[4], 1.0));
        assert!(approx(arrays.center_positions(Axis::X1)[0], 0.125));
        assert!(approx(arrays.center_positions(Axis::X3)[0], 0.0));
        assert!(arrays.validate_invariants().is_ok());
    }

    #[test]
    fn ghosts_extend_spacing_outward() {
        let arrays = UniformBlock::new([[0.0, 1.0]; 3], [2, 2, 2])
            .with_ghosts(1)
            .build()
            .unwrap();
        let x2f = arrays.face_positions(Axis::X2);
        assert_eq!(x2f.len(), 5);
        assert!(approx(x2f[0], -0.5));
        assert!(approx(x2f[1], 0.0));
        assert!(approx(x2f[4], 1.5));
        assert_eq!(arrays.zone_count(Axis::X2), 4);
    }

    #[test]
    fn rejects_empty_or_inverted_axes() {
        let err = UniformBlock::new([[0.0, 1.0]; 3], [1, 0, 1]).build().unwrap_err();
        assert_eq!(err, GeometryError::EmptyAxis { axis: Axis::X2 });

        let err = UniformBlock::new([[0.0, 1.0], [0.0, 1.0], [1.0, 1.0]], [1, 1, 1])
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidBlock(_)));
    }
}
