//! Geometry backend strategies.
//!
//! A [`Grid`](crate::grid::Grid) is generic over its backend, so every
//! accessor call is resolved statically to one of:
//! - [`Flat`]: closed-form Minkowski metric, no storage, no collaborator;
//! - [`Direct`]: recompute through the embedding on every call;
//! - [`Cached`]: look up a [`GeometryCache`] filled once at construction.
//!
//! [`ConfiguredBackend`] names the strategy `Grid::new` builds; it is
//! [`Cached`] unless the crate is built with the `no-cache` feature.

use crate::coords::{CoordinateEmbedding, EmbeddingCoord, NativeCoord};
use crate::geometry_error::GeometryError;
use crate::grid::cache::{GeometryCache, init_geometry_cache};
use crate::grid::config::GeometryConfig;
use crate::grid::validate::check_third_axis_invariance;
use crate::grid::Location;
use crate::mesh::ZoneCoordinates;
use crate::tensor::{self, Connection, Tensor4, ZERO_CONNECTION};

/// Numeric answers for the geometry facade.
///
/// Metric quantities are functions of `(loc, i, j)` only. Backends that consult
/// coordinates evaluate them at `k = 0`.
pub trait GeometryBackend: Send + Sync {
    /// Full covariant metric at `(loc, i, j)`.
    fn gcov_tensor(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize)
    -> Tensor4;

    /// Full contravariant metric at `(loc, i, j)`.
    fn gcon_tensor(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize)
    -> Tensor4;

    /// `sqrt(|det g|)` at `(loc, i, j)`.
    fn gdet(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> f64;

    /// Full connection at the center of zone `(i, j)`.
    fn conn_tensor(&self, zones: &ZoneCoordinates<'_>, i: usize, j: usize) -> Connection;

    /// Map native to embedding coordinates.
    fn embed(&self, x: &NativeCoord) -> EmbeddingCoord;

    /// Single covariant component.
    #[inline]
    fn gcov(
        &self,
        zones: &ZoneCoordinates<'_>,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.gcov_tensor(zones, loc, i, j)[mu][nu]
    }

    /// Single contravariant component.
    #[inline]
    fn gcon(
        &self,
        zones: &ZoneCoordinates<'_>,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.gcon_tensor(zones, loc, i, j)[mu][nu]
    }

    /// Single connection component `Γ^mu_{nu lam}`.
    #[inline]
    fn conn(
        &self,
        zones: &ZoneCoordinates<'_>,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
        lam: usize,
    ) -> f64 {
        self.conn_tensor(zones, i, j)[mu][nu][lam]
    }
}

/// A backend built from a coordinate-embedding collaborator.
pub trait EmbeddedBackend<E: CoordinateEmbedding>: GeometryBackend + Sized {
    /// Build the backend for the zones of one block.
    fn build(
        embedding: E,
        zones: ZoneCoordinates<'_>,
        config: &GeometryConfig,
    ) -> Result<Self, GeometryError>;
}

/// Strategy built by [`Grid::new`](crate::grid::Grid::new).
#[cfg(not(feature = "no-cache"))]
pub type ConfiguredBackend<E> = Cached<E>;
/// Strategy built by [`Grid::new`](crate::grid::Grid::new).
#[cfg(feature = "no-cache")]
pub type ConfiguredBackend<E> = Direct<E>;

/// Flat-space metric `diag(-1, 1, 1, 1)` everywhere, zero connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flat;

impl GeometryBackend for Flat {
    #[inline]
    fn gcov_tensor(&self, _: &ZoneCoordinates<'_>, _: Location, _: usize, _: usize) -> Tensor4 {
        tensor::minkowski()
    }

    #[inline]
    fn gcon_tensor(&self, _: &ZoneCoordinates<'_>, _: Location, _: usize, _: usize) -> Tensor4 {
        tensor::minkowski()
    }

    #[inline]
    fn gdet(&self, _: &ZoneCoordinates<'_>, _: Location, _: usize, _: usize) -> f64 {
        1.0
    }

    #[inline]
    fn conn_tensor(&self, _: &ZoneCoordinates<'_>, _: usize, _: usize) -> Connection {
        ZERO_CONNECTION
    }

    #[inline]
    fn embed(&self, x: &NativeCoord) -> EmbeddingCoord {
        *x
    }

    #[inline]
    fn gcov(
        &self,
        _: &ZoneCoordinates<'_>,
        _: Location,
        _: usize,
        _: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        tensor::minkowski_component(mu, nu)
    }

    #[inline]
    fn gcon(
        &self,
        _: &ZoneCoordinates<'_>,
        _: Location,
        _: usize,
        _: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        tensor::minkowski_component(mu, nu)
    }

    #[inline]
    fn conn(
        &self,
        _: &ZoneCoordinates<'_>,
        _: usize,
        _: usize,
        _: usize,
        _: usize,
        _: usize,
    ) -> f64 {
        0.0
    }
}

/// Recompute every quantity through the embedding on each call.
///
/// Slow; answers equal [`Cached`] for the same embedding.
#[derive(Clone, Debug)]
pub struct Direct<E> {
    embedding: E,
}

impl<E: CoordinateEmbedding> GeometryBackend for Direct<E> {
    fn gcov_tensor(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> Tensor4 {
        self.embedding
            .metric_cov_at_native(&zones.native(i, j, 0, loc))
    }

    fn gcon_tensor(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> Tensor4 {
        let g = self.gcov_tensor(zones, loc, i, j);
        self.embedding.invert_metric(&g).0
    }

    fn gdet(&self, zones: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> f64 {
        let g = self.gcov_tensor(zones, loc, i, j);
        self.embedding.invert_metric(&g).1
    }

    fn conn_tensor(&self, zones: &ZoneCoordinates<'_>, i: usize, j: usize) -> Connection {
        self.embedding
            .connection_at_native(&zones.native(i, j, 0, Location::Center))
    }

    fn embed(&self, x: &NativeCoord) -> EmbeddingCoord {
        self.embedding.coord_to_embedding(x)
    }
}

impl<E: CoordinateEmbedding> EmbeddedBackend<E> for Direct<E> {
    fn build(
        embedding: E,
        _zones: ZoneCoordinates<'_>,
        _config: &GeometryConfig,
    ) -> Result<Self, GeometryError> {
        Ok(Self { embedding })
    }
}

/// Look every quantity up in a cache filled once at construction.
///
/// Requires the metric to be independent of x3; see
/// [`CoordinateEmbedding::X3_INVARIANT`].
#[derive(Clone, Debug)]
pub struct Cached<E> {
    embedding: E,
    cache: GeometryCache,
}

impl<E> Cached<E> {
    /// The filled cache.
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }
}

impl<E: CoordinateEmbedding> GeometryBackend for Cached<E> {
    #[inline]
    fn gcov_tensor(&self, _: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> Tensor4 {
        *self.cache.gcov(loc, i, j)
    }

    #[inline]
    fn gcon_tensor(&self, _: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> Tensor4 {
        *self.cache.gcon(loc, i, j)
    }

    #[inline]
    fn gdet(&self, _: &ZoneCoordinates<'_>, loc: Location, i: usize, j: usize) -> f64 {
        self.cache.gdet(loc, i, j)
    }

    #[inline]
    fn conn_tensor(&self, _: &ZoneCoordinates<'_>, i: usize, j: usize) -> Connection {
        *self.cache.conn(i, j)
    }

    fn embed(&self, x: &NativeCoord) -> EmbeddingCoord {
        self.embedding.coord_to_embedding(x)
    }

    #[inline]
    fn gcov(
        &self,
        _: &ZoneCoordinates<'_>,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.cache.gcov(loc, i, j)[mu][nu]
    }

    #[inline]
    fn gcon(
        &self,
        _: &ZoneCoordinates<'_>,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.cache.gcon(loc, i, j)[mu][nu]
    }

    #[inline]
    fn conn(
        &self,
        _: &ZoneCoordinates<'_>,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
        lam: usize,
    ) -> f64 {
        self.cache.conn(i, j)[mu][nu][lam]
    }
}

impl<E: CoordinateEmbedding> EmbeddedBackend<E> for Cached<E> {
    fn build(
        embedding: E,
        zones: ZoneCoordinates<'_>,
        config: &GeometryConfig,
    ) -> Result<Self, GeometryError> {
        if !E::X3_INVARIANT {
            return Err(GeometryError::ThirdAxisDependent);
        }
        if config.check_third_axis {
            check_third_axis_invariance(&embedding, zones, config.invariance_tolerance)?;
        }
        let cache = init_geometry_cache(&embedding, zones);
        Ok(Self { embedding, cache })
    }
}
