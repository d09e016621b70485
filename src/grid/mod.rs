//! Geometry facade for one mesh block.
//!
//! A [`Grid`] answers two questions for every zone `(i, j, k)` and
//! [`Location`]:
//! 1. where is it, in native and embedding coordinates, and
//! 2. what are the local metric, inverse metric, `sqrt(|det g|)` and
//!    connection.
//!
//! Coordinates come from the borrowed arrays of a [`MeshBlock`]. Geometry
//! comes from the backend `B`, fixed at compile time. Metric quantities are
//! indexed by `(loc, i, j)` only.
//!
//! ```
//! use block_geometry::prelude::*;
//!
//! let block = UniformBlock::new([[0.0, 1.0]; 3], [4, 4, 4]).build()?;
//! let grid = Grid::flat(&block)?;
//! assert_eq!(grid.metric_det(Location::Center, 2, 2), 1.0);
//! assert_eq!(
//!     grid.lower_index(&[1.0, 0.0, 0.0, 0.0], 2, 2, 0, Location::Center),
//!     [-1.0, 0.0, 0.0, 0.0]
//! );
//! # Ok::<(), block_geometry::geometry_error::GeometryError>(())
//! ```

pub mod backend;
pub mod cache;
pub mod config;
pub mod location;
pub mod validate;

use static_assertions::assert_impl_all;

use crate::coords::{
    CartesianMinkowski, CoordinateEmbedding, EmbeddingCoord, NativeCoord, SphericalKerrSchild,
};
use crate::geometry_error::GeometryError;
use crate::mesh::{MeshBlock, ZoneCoordinates};
use crate::tensor::{self, Connection, Tensor4, Vector4};

pub use backend::{Cached, ConfiguredBackend, Direct, EmbeddedBackend, Flat, GeometryBackend};
pub use cache::GeometryCache;
pub use config::GeometryConfig;
pub use location::Location;

/// Geometry of one mesh block, answered by backend `B`.
#[derive(Clone, Debug)]
pub struct Grid<'a, B> {
    zones: ZoneCoordinates<'a>,
    backend: B,
}

assert_impl_all!(Grid<'static, Flat>: Send, Sync);
assert_impl_all!(Grid<'static, Direct<CartesianMinkowski>>: Send, Sync);
assert_impl_all!(Grid<'static, Cached<SphericalKerrSchild>>: Send, Sync);

impl<'a> Grid<'a, Flat> {
    /// Flat-space grid over `block`; no coordinate system is involved.
    pub fn flat<M: MeshBlock + ?Sized>(block: &'a M) -> Result<Self, GeometryError> {
        Ok(Self {
            zones: ZoneCoordinates::try_from_block(block)?,
            backend: Flat,
        })
    }
}

impl<'a, E: CoordinateEmbedding> Grid<'a, ConfiguredBackend<E>> {
    /// Grid over `block` using the build-configured strategy.
    ///
    /// With the default (cached) strategy this fills the geometry cache
    /// before returning.
    pub fn new<M: MeshBlock + ?Sized>(embedding: E, block: &'a M) -> Result<Self, GeometryError> {
        Self::with_config(embedding, block, &GeometryConfig::default())
    }

    /// Like [`Grid::new`] with explicit build-time validation settings.
    pub fn with_config<M: MeshBlock + ?Sized>(
        embedding: E,
        block: &'a M,
        config: &GeometryConfig,
    ) -> Result<Self, GeometryError> {
        Self::with_backend(embedding, block, config)
    }
}

impl<'a, B: GeometryBackend> Grid<'a, B> {
    /// Grid over `block` with an explicitly chosen embedding-backed strategy.
    pub fn with_backend<E, M>(
        embedding: E,
        block: &'a M,
        config: &GeometryConfig,
    ) -> Result<Self, GeometryError>
    where
        E: CoordinateEmbedding,
        B: EmbeddedBackend<E>,
        M: MeshBlock + ?Sized,
    {
        let zones = ZoneCoordinates::try_from_block(block)?;
        let backend = B::build(embedding, zones, config)?;
        Ok(Self { zones, backend })
    }

    /// Zone count along the first logical axis.
    pub fn n1(&self) -> usize {
        self.zones.n1()
    }

    /// Zone count along the second logical axis.
    pub fn n2(&self) -> usize {
        self.zones.n2()
    }

    /// Zone count along the third logical axis.
    pub fn n3(&self) -> usize {
        self.zones.n3()
    }

    /// The borrowed coordinate arrays.
    pub fn zones(&self) -> &ZoneCoordinates<'a> {
        &self.zones
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Native coordinates of zone `(i, j, k)` at `loc`.
    #[inline]
    pub fn coord(&self, i: usize, j: usize, k: usize, loc: Location) -> NativeCoord {
        self.zones.native(i, j, k, loc)
    }

    /// Embedding coordinates of zone `(i, j, k)` at `loc`. Never cached.
    #[inline]
    pub fn coord_embed(&self, i: usize, j: usize, k: usize, loc: Location) -> EmbeddingCoord {
        self.backend.embed(&self.coord(i, j, k, loc))
    }

    #[inline]
    pub fn metric_cov(&self, loc: Location, i: usize, j: usize) -> Tensor4 {
        self.backend.gcov_tensor(&self.zones, loc, i, j)
    }

    #[inline]
    pub fn metric_cov_component(
        &self,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.backend.gcov(&self.zones, loc, i, j, mu, nu)
    }

    #[inline]
    pub fn metric_con(&self, loc: Location, i: usize, j: usize) -> Tensor4 {
        self.backend.gcon_tensor(&self.zones, loc, i, j)
    }

    #[inline]
    pub fn metric_con_component(
        &self,
        loc: Location,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
    ) -> f64 {
        self.backend.gcon(&self.zones, loc, i, j, mu, nu)
    }

    /// `sqrt(|det g|)` at `(loc, i, j)`.
    #[inline]
    pub fn metric_det(&self, loc: Location, i: usize, j: usize) -> f64 {
        self.backend.gdet(&self.zones, loc, i, j)
    }

    /// Connection `conn[mu][nu][lam] = Γ^mu_{nu lam}` at the center of `(i, j)`.
    #[inline]
    pub fn connection(&self, i: usize, j: usize) -> Connection {
        self.backend.conn_tensor(&self.zones, i, j)
    }

    #[inline]
    pub fn connection_component(
        &self,
        i: usize,
        j: usize,
        mu: usize,
        nu: usize,
        lam: usize,
    ) -> f64 {
        self.backend.conn(&self.zones, i, j, mu, nu, lam)
    }

    /// `vcov[mu] = g_{mu nu} vcon[nu]` at `(loc, i, j)`; `k` does not enter.
    #[inline]
    pub fn lower_index(
        &self,
        vcon: &Vector4,
        i: usize,
        j: usize,
        _k: usize,
        loc: Location,
    ) -> Vector4 {
        tensor::contract(&self.metric_cov(loc, i, j), vcon)
    }

    /// `vcon[mu] = g^{mu nu} vcov[nu]` at `(loc, i, j)`; `k` does not enter.
    #[inline]
    pub fn raise_index(
        &self,
        vcov: &Vector4,
        i: usize,
        j: usize,
        _k: usize,
        loc: Location,
    ) -> Vector4 {
        tensor::contract(&self.metric_con(loc, i, j), vcov)
    }
}
