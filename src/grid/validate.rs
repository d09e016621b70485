//! Third-axis invariance check for cached geometry.
//!
//! The cache holds one `(i, j)` slice that stands in for every `k`. This
//! compares the metric at the first and last `k` of each zone column so a
//! coordinate system that breaks that assumption is rejected at build time.

use log::debug;

use crate::coords::CoordinateEmbedding;
use crate::geometry_error::GeometryError;
use crate::grid::Location;
use crate::mesh::ZoneCoordinates;
use crate::tensor::max_abs_diff;

/// Return an error at the first zone whose center metric at the last `k`
/// differs from the one at `k = 0` by more than `tolerance` (relative to the
/// largest component, floored at 1).
pub fn check_third_axis_invariance<E: CoordinateEmbedding>(
    embedding: &E,
    zones: ZoneCoordinates<'_>,
    tolerance: f64,
) -> Result<(), GeometryError> {
    let last = zones.n3() - 1;
    if last == 0 {
        debug!("x3 invariance check skipped: block has a single x3 zone");
        return Ok(());
    }
    for i in 0..zones.n1() {
        for j in 0..zones.n2() {
            let g0 = embedding.metric_cov_at_native(&zones.native(i, j, 0, Location::Center));
            let gk = embedding.metric_cov_at_native(&zones.native(i, j, last, Location::Center));
            let scale = g0.iter().flatten().fold(1.0f64, |m, x| m.max(x.abs()));
            let deviation = max_abs_diff(&g0, &gk);
            // NaN deviations fail too
            if !(deviation <= tolerance * scale) {
                return Err(GeometryError::ThirdAxisVariation {
                    i,
                    j,
                    k: last,
                    deviation,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{EmbeddingCoord, NativeCoord, SphericalKerrSchild};
    use crate::mesh::UniformBlock;
    use crate::tensor::{Tensor4, minkowski};

    #[derive(Clone)]
    struct Warped;

    impl CoordinateEmbedding for Warped {
        const X3_INVARIANT: bool = false;

        fn coord_to_embedding(&self, x: &NativeCoord) -> EmbeddingCoord {
            *x
        }

        fn metric_cov_at_native(&self, x: &NativeCoord) -> Tensor4 {
            let mut g = minkowski();
            g[1][1] = 1.0 + x[3] * x[3];
            g
        }
    }

    #[test]
    fn axisymmetric_metric_passes() {
        let block = UniformBlock::new([[3.0, 6.0], [0.2, 2.9], [0.0, 6.0]], [4, 4, 3])
            .build()
            .unwrap();
        let zones = ZoneCoordinates::try_from_block(&block).unwrap();
        assert!(check_third_axis_invariance(&SphericalKerrSchild::new(0.7), zones, 1e-12).is_ok());
    }

    #[test]
    fn x3_dependent_metric_is_reported() {
        let block = UniformBlock::new([[0.0, 1.0]; 3], [2, 2, 2]).build().unwrap();
        let zones = ZoneCoordinates::try_from_block(&block).unwrap();
        let err = check_third_axis_invariance(&Warped, zones, 1e-12).unwrap_err();
        match err {
            GeometryError::ThirdAxisVariation { i, j, k, deviation } => {
                assert_eq!((i, j, k), (0, 0, 1));
                // x3 centers are 0.25 and 0.75
                assert!((deviation - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn single_x3_zone_is_skipped() {
        let block = UniformBlock::new([[0.0, 1.0]; 3], [2, 2, 1]).build().unwrap();
        let zones = ZoneCoordinates::try_from_block(&block).unwrap();
        assert!(check_third_axis_invariance(&Warped, zones, 1e-12).is_ok());
    }
}
