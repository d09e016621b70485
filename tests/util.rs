#![allow(dead_code, unused_imports)]
use block_geometry::prelude::*;
pub use block_geometry::tensor::{mat_mul, max_abs_diff as max_diff};

/// Spherical block away from the polar axis: r in [2, 12], theta in [0.2, pi - 0.2].
pub fn spherical_block(zones: [usize; 3]) -> BlockArrays {
    UniformBlock::new(
        [
            [2.0, 12.0],
            [0.2, std::f64::consts::PI - 0.2],
            [0.0, 2.0 * std::f64::consts::PI],
        ],
        zones,
    )
    .build()
    .unwrap()
}

/// Unit cube block.
pub fn cube_block(zones: [usize; 3]) -> BlockArrays {
    UniformBlock::new([[0.0, 1.0]; 3], zones).build().unwrap()
}

/// Assert `m` is the identity within `tol`.
pub fn assert_identity(m: &Tensor4, tol: f64) {
    for mu in 0..NDIM {
        for nu in 0..NDIM {
            let expected = if mu == nu { 1.0 } else { 0.0 };
            assert!(
                (m[mu][nu] - expected).abs() < tol,
                "entry ({mu},{nu}) = {} not identity",
                m[mu][nu]
            );
        }
    }
}
