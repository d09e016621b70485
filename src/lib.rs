#![cfg_attr(docsrs, feature(doc_cfg))]
//! # block-geometry
//!
//! block-geometry is a per-mesh-block geometry cache for structured-mesh
//! solvers on curvilinear (or flat) 4D coordinate systems. For every zone
//! index and staggering [`Location`](grid::Location) it serves native and
//! embedding coordinates, the metric and its inverse, `sqrt(|det g|)`, and the
//! connection coefficients.
//!
//! ## Features
//! - One facade, [`Grid`](grid::Grid), generic over its backend strategy:
//!   flat-analytic, direct (recompute on every call) or cached (fill once)
//! - Static dispatch only: the strategy is part of the grid's type
//! - One-time, lock-free parallel cache fill (Rayon) over disjoint zone slots
//! - Pluggable coordinate systems through [`CoordinateEmbedding`](coords::CoordinateEmbedding)
//!   and mesh blocks through [`MeshBlock`](mesh::MeshBlock)
//!
//! ## Build configuration
//! `Grid::new` builds [`ConfiguredBackend`](grid::ConfiguredBackend): the
//! cached strategy by default, the direct strategy with the `no-cache`
//! feature. `Grid::flat` always builds the flat-analytic strategy. The
//! `rayon` feature (on by default) parallelizes the cache fill.
//!
//! ## x3 invariance
//! The cache stores one `(i, j)` slice per block and serves it for every `k`.
//! Cached construction refuses coordinate systems that do not declare
//! [`X3_INVARIANT`](coords::CoordinateEmbedding::X3_INVARIANT) and, unless
//! disabled in [`GeometryConfig`](grid::GeometryConfig), samples the metric
//! along x3 to confirm it.

pub mod coords;
pub mod data;
pub mod debug_invariants;
pub mod geometry_error;
pub mod grid;
pub mod mesh;
pub mod tensor;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::coords::{
        CartesianMinkowski, CoordinateEmbedding, EmbeddingCoord, NativeCoord,
        SphericalKerrSchild, SphericalMinkowski,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry_error::GeometryError;
    pub use crate::grid::{
        Cached, ConfiguredBackend, Direct, EmbeddedBackend, Flat, GeometryBackend,
        GeometryConfig, Grid, Location,
    };
    pub use crate::mesh::{Axis, BlockArrays, MeshBlock, UniformBlock, ZoneCoordinates};
    pub use crate::tensor::{Connection, NDIM, Tensor4, Vector4};
}
