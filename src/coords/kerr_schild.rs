//! Kerr black hole in spherical Kerr–Schild coordinates (`M = 1`).

use serde::{Deserialize, Serialize};

use crate::coords::{CoordinateEmbedding, EmbeddingCoord, NativeCoord};
use crate::tensor::{Tensor4, ZERO_TENSOR};

/// Spherical Kerr–Schild coordinates `(t, r, theta, phi)` for spin `a`.
///
/// The metric is independent of `phi`, so it satisfies the x3-invariance the
/// cached strategy needs. The connection uses the finite-difference default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalKerrSchild {
    /// Dimensionless spin, `|a| < 1`.
    pub a: f64,
}

impl SphericalKerrSchild {
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

impl CoordinateEmbedding for SphericalKerrSchild {
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
        let a = self.a;
        let (sth, cth) = th.sin_cos();
        let s2 = sth * sth;
        let rho2 = r * r + a * a * cth * cth;
        let f = 2.0 * r / rho2;

        let mut g = ZERO_TENSOR;
        g[0][0] = -1.0 + f;
        g[0][1] = f;
        g[0][3] = -a * f * s2;
        g[1][1] = 1.0 + f;
        g[1][3] = -a * s2 * (1.0 + f);
        g[2][2] = rho2;
        g[3][3] = s2 * (rho2 + a * a * s2 * (1.0 + f));

        g[1][0] = g[0][1];
        g[3][0] = g[0][3];
        g[3][1] = g[1][3];
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_matches_closed_form() {
        let ks = SphericalKerrSchild::new(0.5);
        let (r, th) = (3.0f64, 1.0f64);
        let g = ks.metric_cov_at_native(&[0.0, r, th, 2.0]);
        let (_, gdet) = ks.invert_metric(&g);
        let rho2 = r * r + 0.25 * th.cos().powi(2);
        assert!((gdet - rho2 * th.sin()).abs() < 1e-10);
    }
}
