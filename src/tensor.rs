//! Small fixed-size tensor kernels for 4D geometry.
//!
//! Index convention: `0` is time, `1..=3` the spatial logical axes.
//! Connection tensors are stored `conn[lam][mu][nu]` = `Γ^lam_{mu nu}`.

use itertools::iproduct;

/// Number of spacetime dimensions.
pub const NDIM: usize = 4;

/// A 4-vector.
pub type Vector4 = [f64; NDIM];
/// A rank-2 4x4 tensor (row-major `t[mu][nu]`).
pub type Tensor4 = [[f64; NDIM]; NDIM];
/// Connection coefficients `conn[lam][mu][nu]`.
pub type Connection = [[[f64; NDIM]; NDIM]; NDIM];

/// The zero rank-2 tensor.
pub const ZERO_TENSOR: Tensor4 = [[0.0; NDIM]; NDIM];
/// The zero connection.
pub const ZERO_CONNECTION: Connection = [[[0.0; NDIM]; NDIM]; NDIM];

/// Component of the flat metric `diag(-1, 1, 1, 1)`.
#[inline]
pub fn minkowski_component(mu: usize, nu: usize) -> f64 {
    match (mu, nu) {
        (0, 0) => -1.0,
        (a, b) if a == b => 1.0,
        _ => 0.0,
    }
}

/// The flat metric `diag(-1, 1, 1, 1)`; it is its own inverse.
#[inline]
pub fn minkowski() -> Tensor4 {
    let mut g = ZERO_TENSOR;
    for (mu, row) in g.iter_mut().enumerate() {
        row[mu] = minkowski_component(mu, mu);
    }
    g
}

/// `out[mu] = sum_nu m[mu][nu] * v[nu]`.
#[inline]
pub fn contract(m: &Tensor4, v: &Vector4) -> Vector4 {
    let mut out = [0.0; NDIM];
    for (mu, nu) in iproduct!(0..NDIM, 0..NDIM) {
        out[mu] += m[mu][nu] * v[nu];
    }
    out
}

/// Matrix product `a * b`.
pub fn mat_mul(a: &Tensor4, b: &Tensor4) -> Tensor4 {
    let mut out = ZERO_TENSOR;
    for (mu, nu, kap) in iproduct!(0..NDIM, 0..NDIM, 0..NDIM) {
        out[mu][nu] += a[mu][kap] * b[kap][nu];
    }
    out
}

/// Invert a 4x4 matrix, returning the inverse and the determinant.
///
/// No pivoting or singularity check: a singular input yields non-finite
/// entries, which the caller surfaces as-is.
pub fn invert(m: &Tensor4) -> (Tensor4, f64) {
    let (s, c) = minors(m);
    let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
    let inv_det = 1.0 / det;

    let mut inv = ZERO_TENSOR;
    inv[0][0] = (m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3]) * inv_det;
    inv[0][1] = (-m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3]) * inv_det;
    inv[0][2] = (m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3]) * inv_det;
    inv[0][3] = (-m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3]) * inv_det;

    inv[1][0] = (-m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1]) * inv_det;
    inv[1][1] = (m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1]) * inv_det;
    inv[1][2] = (-m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1]) * inv_det;
    inv[1][3] = (m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1]) * inv_det;

    inv[2][0] = (m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0]) * inv_det;
    inv[2][1] = (-m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0]) * inv_det;
    inv[2][2] = (m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0]) * inv_det;
    inv[2][3] = (-m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0]) * inv_det;

    inv[3][0] = (-m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0]) * inv_det;
    inv[3][1] = (m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0]) * inv_det;
    inv[3][2] = (-m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0]) * inv_det;
    inv[3][3] = (m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0]) * inv_det;

    (inv, det)
}

/// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
fn minors(m: &Tensor4) -> ([f64; 6], [f64; 6]) {
    let s = [
        m[0][0] * m[1][1] - m[1][0] * m[0][1],
        m[0][0] * m[1][2] - m[1][0] * m[0][2],
        m[0][0] * m[1][3] - m[1][0] * m[0][3],
        m[0][1] * m[1][2] - m[1][1] * m[0][2],
        m[0][1] * m[1][3] - m[1][1] * m[0][3],
        m[0][2] * m[1][3] - m[1][2] * m[0][3],
    ];
    let c = [
        m[2][0] * m[3][1] - m[3][0] * m[2][1],
        m[2][0] * m[3][2] - m[3][0] * m[2][2],
        m[2][0] * m[3][3] - m[3][0] * m[2][3],
        m[2][1] * m[3][2] - m[3][1] * m[2][2],
        m[2][1] * m[3][3] - m[3][1] * m[2][3],
        m[2][2] * m[3][3] - m[3][2] * m[2][3],
    ];
    (s, c)
}

/// Largest absolute componentwise difference between two tensors.
pub fn max_abs_diff(a: &Tensor4, b: &Tensor4) -> f64 {
    iproduct!(0..NDIM, 0..NDIM)
        .map(|(mu, nu)| (a[mu][nu] - b[mu][nu]).abs())
        .fold(0.0, f64::max)
}
