//! Coordinate-embedding collaborator.
//!
//! A [`CoordinateEmbedding`] maps native coordinates to embedding coordinates
//! and evaluates the metric and connection at a native point. The geometry
//! facade only indexes and stores what this trait returns.
//!
//! Implementations must be cheap to `Clone`: the cache initializer snapshots
//! the embedding by value before its parallel sweep.

pub mod kerr_schild;
pub mod minkowski;

use itertools::iproduct;

use crate::tensor::{self, Connection, NDIM, Tensor4, Vector4, ZERO_CONNECTION};

pub use kerr_schild::SphericalKerrSchild;
pub use minkowski::{CartesianMinkowski, SphericalMinkowski};

/// Native (logical) coordinates `(t, x1, x2, x3)`.
pub type NativeCoord = Vector4;
/// Embedding (physical) coordinates produced by [`CoordinateEmbedding::coord_to_embedding`].
pub type EmbeddingCoord = Vector4;

/// Capabilities the geometry layer needs from a coordinate system.
pub trait CoordinateEmbedding: Clone + Send + Sync {
    /// Whether the metric is independent of the third native coordinate.
    ///
    /// The cached strategy stores one `(i, j)` slice for every `k` and
    /// refuses systems that declare `false`.
    const X3_INVARIANT: bool;

    /// Step used by the finite-difference connection.
    const DELTA: f64 = 1e-5;

    /// Map native coordinates to embedding coordinates.
    fn coord_to_embedding(&self, x: &NativeCoord) -> EmbeddingCoord;

    /// Covariant metric `g_{mu nu}` at a native point.
    fn metric_cov_at_native(&self, x: &NativeCoord) -> Tensor4;

    /// Invert a covariant metric, returning `g^{mu nu}` and `sqrt(|det g|)`.
    ///
    /// A singular metric is not detected; its non-finite inverse is returned
    /// unchanged.
    fn invert_metric(&self, gcov: &Tensor4) -> (Tensor4, f64) {
        let (gcon, det) = tensor::invert(gcov);
        (gcon, det.abs().sqrt())
    }

    /// Connection coefficients `conn[lam][mu][nu] = Γ^lam_{mu nu}` at a native point.
    fn connection_at_native(&self, x: &NativeCoord) -> Connection {
        finite_difference_connection(self, x)
    }
}

/// Connection from central differences of the metric with step `E::DELTA`.
///
/// `Γ^lam_{kap mu} = g^{lam nu} · ½(∂_kap g_{nu mu} + ∂_mu g_{nu kap} − ∂_nu g_{kap mu})`,
/// symmetric in `kap`, `mu` by construction.
pub fn finite_difference_connection<E: CoordinateEmbedding>(
    embedding: &E,
    x: &NativeCoord,
) -> Connection {
    // dg[a][b][c] = ∂_c g_{ab}
    let mut dg = ZERO_CONNECTION;
    for c in 0..NDIM {
        let mut xh = *x;
        let mut xl = *x;
        xh[c] += E::DELTA;
        xl[c] -= E::DELTA;
        let gh = embedding.metric_cov_at_native(&xh);
        let gl = embedding.metric_cov_at_native(&xl);
        let h = xh[c] - xl[c];
        for (a, b) in iproduct!(0..NDIM, 0..NDIM) {
            dg[a][b][c] = (gh[a][b] - gl[a][b]) / h;
        }
    }

    let mut lowered = ZERO_CONNECTION;
    for (nu, kap, mu) in iproduct!(0..NDIM, 0..NDIM, 0..NDIM) {
        lowered[nu][kap][mu] = 0.5 * (dg[nu][mu][kap] + dg[nu][kap][mu] - dg[kap][mu][nu]);
    }

    let (gcon, _) = embedding.invert_metric(&embedding.metric_cov_at_native(x));
    let mut conn = ZERO_CONNECTION;
    for (lam, kap, mu) in iproduct!(0..NDIM, 0..NDIM, 0..NDIM) {
        conn[lam][kap][mu] = (0..NDIM).map(|nu| gcon[lam][nu] * lowered[nu][kap][mu]).sum();
    }
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spherical flat space without the analytic connection override.
    #[derive(Clone)]
    struct NumericSpherical;

    impl CoordinateEmbedding for NumericSpherical {
        const X3_INVARIANT: bool = true;

        fn coord_to_embedding(&self, x: &NativeCoord) -> EmbeddingCoord {
            SphericalMinkowski.coord_to_embedding(x)
        }

        fn metric_cov_at_native(&self, x: &NativeCoord) -> Tensor4 {
            SphericalMinkowski.metric_cov_at_native(x)
        }
    }

    #[test]
    fn finite_difference_matches_analytic_spherical() {
        let x = [0.0, 3.0, 0.7, 1.1];
        let numeric = NumericSpherical.connection_at_native(&x);
        let analytic = SphericalMinkowski.connection_at_native(&x);
        for (lam, mu, nu) in iproduct!(0..NDIM, 0..NDIM, 0..NDIM) {
            let diff = (numeric[lam][mu][nu] - analytic[lam][mu][nu]).abs();
            assert!(diff < 1e-7, "Γ^{lam}_{{{mu}{nu}}} off by {diff}");
        }
    }

    #[test]
    fn finite_difference_is_symmetric_in_lower_indices() {
        let ks = SphericalKerrSchild::new(0.9);
        let conn = ks.connection_at_native(&[0.0, 4.0, 1.2, 0.3]);
        for (lam, mu, nu) in iproduct!(0..NDIM, 0..NDIM, 0..NDIM) {
            assert!((conn[lam][mu][nu] - conn[lam][nu][mu]).abs() < 1e-12);
        }
    }

    #[test]
    fn default_inversion_reports_root_abs_determinant() {
        let g = SphericalMinkowski.metric_cov_at_native(&[0.0, 2.0, 0.5, 0.0]);
        let (_, gdet) = NumericSpherical.invert_metric(&g);
        let expected = 4.0 * 0.5f64.sin();
        assert!((gdet - expected).abs() < 1e-12);
    }
}
