//! Flat spacetime in Cartesian and spherical native coordinates.

use serde::{Deserialize, Serialize};

use crate::coords::{CoordinateEmbedding, EmbeddingCoord, NativeCoord};
use crate::tensor::{self, Connection, Tensor4, ZERO_CONNECTION, ZERO_TENSOR};

/// Minkowski space with native coordinates equal to embedding coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianMinkowski;

impl CoordinateEmbedding for CartesianMinkowski {
    const X3_INVARIANT: bool = true;

    fn coord_to_embedding(&self, x: &NativeCoord) -> EmbeddingCoord {
        *x
    }

    fn metric_cov_at_native(&self, _x: &NativeCoord) -> Tensor4 {
        tensor::minkowski()
    }

    fn invert_metric(&self, _gcov: &Tensor4) -> (Tensor4, f64) {
        (tensor::minkowski(), 1.0)
    }

    fn connection_at_native(&self, _x: &NativeCoord) -> Connection {
        ZERO_CONNECTION
    }
}

/// Minkowski space in spherical native coordinates `(t, r, theta, phi)`.
///
/// Embeds into Cartesian `(t, x, y, z)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalMinkowski;

impl CoordinateEmbedding for SphericalMinkowski {
    const X3_INVARIANT: bool = true;

    fn coord_to_embedding(&self, x: &NativeCoord) -> EmbeddingCoord {
        let [t, r, th, phi] = *x;
        [
            t,
            r * th.sin() * phi.cos(),
            r * th.sin() * phi.sin(),
            r * th.cos(),
        ]
    }

    fn metric_cov_at_native(&self, x: &NativeCoord) -> Tensor4 {
        let (r, th) = (x[1], x[2]);
        let mut g = ZERO_TENSOR;
        g[0][0] = -1.0;
        g[1][1] = 1.0;
        g[2][2] = r * r;
        g[3][3] = r * r * th.sin().powi(2);
        g
    }

    fn connection_at_native(&self, x: &NativeCoord) -> Connection {
        let (r, th) = (x[1], x[2]);
        let (s, c) = th.sin_cos();
        let mut conn = ZERO_CONNECTION;
        conn[1][2][2] = -r;
        conn[1][3][3] = -r * s * s;
        conn[2][1][2] = 1.0 / r;
        conn[2][2][1] = 1.0 / r;
        conn[2][3][3] = -s * c;
        conn[3][1][3] = 1.0 / r;
        conn[3][3][1] = 1.0 / r;
        conn[3][2][3] = c / s;
        conn[3][3][2] = c / s;
        conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_is_identity_embedding() {
        let x = [0.0, 1.0, -2.0, 3.0];
        assert_eq!(CartesianMinkowski.coord_to_embedding(&x), x);
        assert_eq!(CartesianMinkowski.metric_cov_at_native(&x), tensor::minkowski());
    }

    #[test]
    fn spherical_embeds_on_axis() {
        let e = SphericalMinkowski.coord_to_embedding(&[0.0, 2.0, 0.0, 0.0]);
        assert!((e[3] - 2.0).abs() < 1e-15);
        assert!(e[1].abs() < 1e-15 && e[2].abs() < 1e-15);
    }
}
