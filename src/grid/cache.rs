//! Cached geometry fields and their one-time parallel fill.
//!
//! [`init_geometry_cache`] runs two independent sweeps over the `(i, j)`
//! zones of a block: a metric sweep (every [`Location`]) and a connection
//! sweep (`Center` only). Each zone writes only its own chunk of each field,
//! so the sweeps need no locks. Both finish before the cache is returned.
//!
//! The sweeps never see the facade: they take a by-value snapshot of the
//! embedding, the `Copy` coordinate view, and the mutable field buffers.

use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::coords::CoordinateEmbedding;
use crate::data::field::GeomField;
use crate::debug_invariants::DebugInvariants;
use crate::geometry_error::GeometryError;
use crate::grid::Location;
use crate::mesh::ZoneCoordinates;
use crate::tensor::{Connection, Tensor4, ZERO_CONNECTION, ZERO_TENSOR};

/// Pre-computed metric, inverse metric, `sqrt(|det g|)` and connection for a block.
///
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct GeometryCache {
    gcov: GeomField<Tensor4>,
    gcon: GeomField<Tensor4>,
    gdet: GeomField<f64>,
    conn: GeomField<Connection>,
}

impl GeometryCache {
    /// `g_{mu nu}` at `(loc, i, j)`.
    #[inline]
    pub fn gcov(&self, loc: Location, i: usize, j: usize) -> &Tensor4 {
        self.gcov.get(loc.index(), i, j)
    }

    /// `g^{mu nu}` at `(loc, i, j)`.
    #[inline]
    pub fn gcon(&self, loc: Location, i: usize, j: usize) -> &Tensor4 {
        self.gcon.get(loc.index(), i, j)
    }

    #[inline]
    pub fn gdet(&self, loc: Location, i: usize, j: usize) -> f64 {
        *self.gdet.get(loc.index(), i, j)
    }

    /// Connection at the center of zone `(i, j)`.
    #[inline]
    pub fn conn(&self, i: usize, j: usize) -> &Connection {
        self.conn.get(0, i, j)
    }

    /// `(n1, n2)` extent of the cached zones.
    pub fn extent(&self) -> (usize, usize) {
        let (n1, n2, _) = self.gcov.dims();
        (n1, n2)
    }

    pub fn gcov_field(&self) -> &GeomField<Tensor4> {
        &self.gcov
    }

    pub fn gcon_field(&self) -> &GeomField<Tensor4> {
        &self.gcon
    }

    pub fn gdet_field(&self) -> &GeomField<f64> {
        &self.gdet
    }

    pub fn conn_field(&self) -> &GeomField<Connection> {
        &self.conn
    }
}

impl DebugInvariants for GeometryCache {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "GeometryCache invalid");
    }

    fn validate_invariants(&self) -> Result<(), GeometryError> {
        self.gcov.validate_invariants()?;
        self.gcon.validate_invariants()?;
        self.gdet.validate_invariants()?;
        self.conn.validate_invariants()?;

        let (n1, n2) = self.extent();
        for (name, dims, slots) in [
            (self.gcon.name(), self.gcon.dims(), Location::COUNT),
            (self.gdet.name(), self.gdet.dims(), Location::COUNT),
            (self.conn.name(), self.conn.dims(), 1),
        ] {
            if dims != (n1, n2, slots) {
                return Err(GeometryError::InvariantViolation(format!(
                    "field `{name}` has shape {dims:?}, expected ({n1}, {n2}, {slots})"
                )));
            }
        }
        if self.gcov.dims().2 != Location::COUNT {
            return Err(GeometryError::InvariantViolation(format!(
                "field `gcov` has {} slots per zone, expected {}",
                self.gcov.dims().2,
                Location::COUNT
            )));
        }
        Ok(())
    }
}

/// Allocate and fill a cache for every `(i, j)` zone of `zones`.
///
/// Metric quantities are evaluated at `k = 0`; the caller is responsible for
/// the metric being independent of x3.
pub fn init_geometry_cache<E: CoordinateEmbedding>(
    embedding: &E,
    zones: ZoneCoordinates<'_>,
) -> GeometryCache {
    let (n1, n2) = (zones.n1(), zones.n2());
    debug!(
        "initializing geometry cache: {n1}x{n2} zones, {} locations",
        Location::COUNT
    );

    let mut gcov: GeomField<Tensor4> =
        GeomField::new("gcov", n1, n2, Location::COUNT, ZERO_TENSOR);
    let mut gcon: GeomField<Tensor4> =
        GeomField::new("gcon", n1, n2, Location::COUNT, ZERO_TENSOR);
    let mut gdet: GeomField<f64> = GeomField::new("gdet", n1, n2, Location::COUNT, 0.0);
    let mut conn: GeomField<Connection> = GeomField::new("conn", n1, n2, 1, ZERO_CONNECTION);

    // The sweeps read their own copy of the embedding, as a device kernel
    // would, never the backend that owns the original.
    let cs = embedding.clone();
    {
        let gcov = gcov.as_mut_slice();
        let gcon = gcon.as_mut_slice();
        let gdet = gdet.as_mut_slice();
        let conn = conn.as_mut_slice();

        #[cfg(feature = "rayon")]
        rayon::join(
            || metric_sweep(&cs, zones, gcov, gcon, gdet),
            || connection_sweep(&cs, zones, conn),
        );
        #[cfg(not(feature = "rayon"))]
        {
            metric_sweep(&cs, zones, gcov, gcon, gdet);
            connection_sweep(&cs, zones, conn);
        }
    }

    let cache = GeometryCache {
        gcov,
        gcon,
        gdet,
        conn,
    };
    cache.debug_assert_invariants();
    debug!(
        "geometry cache ready: {} metric slots, {} connection slots",
        n1 * n2 * Location::COUNT,
        n1 * n2
    );
    cache
}

fn metric_sweep<E: CoordinateEmbedding>(
    cs: &E,
    zones: ZoneCoordinates<'_>,
    gcov: &mut [Tensor4],
    gcon: &mut [Tensor4],
    gdet: &mut [f64],
) {
    let n2 = zones.n2();

    #[cfg(feature = "rayon")]
    gcov.par_chunks_mut(Location::COUNT)
        .zip(gcon.par_chunks_mut(Location::COUNT))
        .zip(gdet.par_chunks_mut(Location::COUNT))
        .enumerate()
        .for_each(|(zone, ((gcov, gcon), gdet))| {
            fill_metric_zone(cs, zones, zone / n2, zone % n2, gcov, gcon, gdet)
        });

    #[cfg(not(feature = "rayon"))]
    gcov.chunks_mut(Location::COUNT)
        .zip(gcon.chunks_mut(Location::COUNT))
        .zip(gdet.chunks_mut(Location::COUNT))
        .enumerate()
        .for_each(|(zone, ((gcov, gcon), gdet))| {
            fill_metric_zone(cs, zones, zone / n2, zone % n2, gcov, gcon, gdet)
        });
}

#[inline]
fn fill_metric_zone<E: CoordinateEmbedding>(
    cs: &E,
    zones: ZoneCoordinates<'_>,
    i: usize,
    j: usize,
    gcov: &mut [Tensor4],
    gcon: &mut [Tensor4],
    gdet: &mut [f64],
) {
    for loc in Location::ALL {
        let x = zones.native(i, j, 0, loc);
        let g = cs.metric_cov_at_native(&x);
        let (ginv, det) = cs.invert_metric(&g);
        let slot = loc.index();
        gcov[slot] = g;
        gcon[slot] = ginv;
        gdet[slot] = det;
    }
}

fn connection_sweep<E: CoordinateEmbedding>(
    cs: &E,
    zones: ZoneCoordinates<'_>,
    conn: &mut [Connection],
) {
    let n2 = zones.n2();
    let fill = |zone: usize, out: &mut Connection| {
        let x = zones.native(zone / n2, zone % n2, 0, Location::Center);
        *out = cs.connection_at_native(&x);
    };

    #[cfg(feature = "rayon")]
    conn.par_iter_mut()
        .enumerate()
        .for_each(|(zone, out)| fill(zone, out));

    #[cfg(not(feature = "rayon"))]
    conn.iter_mut()
        .enumerate()
        .for_each(|(zone, out)| fill(zone, out));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::SphericalKerrSchild;
    use crate::mesh::UniformBlock;

    #[test]
    fn every_slot_matches_a_fresh_evaluation() {
        let block = UniformBlock::new([[3.0, 8.0], [0.3, 2.8], [0.0, 1.0]], [5, 3, 2])
            .build()
            .unwrap();
        let zones = ZoneCoordinates::try_from_block(&block).unwrap();
        let ks = SphericalKerrSchild::new(0.6);
        let cache = init_geometry_cache(&ks, zones);

        assert_eq!(cache.extent(), (5, 3));
        assert!(cache.validate_invariants().is_ok());
        for i in 0..5 {
            for j in 0..3 {
                for loc in Location::ALL {
                    let g = ks.metric_cov_at_native(&zones.native(i, j, 0, loc));
                    let (ginv, det) = ks.invert_metric(&g);
                    assert_eq!(cache.gcov(loc, i, j), &g);
                    assert_eq!(cache.gcon(loc, i, j), &ginv);
                    assert_eq!(cache.gdet(loc, i, j), det);
                }
                let c = ks.connection_at_native(&zones.native(i, j, 0, Location::Center));
                assert_eq!(cache.conn(i, j), &c);
            }
        }
    }

    #[test]
    fn flat_views_cover_all_slots() {
        let block = UniformBlock::new([[1.0, 2.0]; 3], [2, 3, 1]).build().unwrap();
        let zones = ZoneCoordinates::try_from_block(&block).unwrap();
        let cache = init_geometry_cache(&crate::coords::CartesianMinkowski, zones);
        assert_eq!(cache.gcov_field().as_scalars::<f64>().len(), 2 * 3 * 5 * 16);
        assert_eq!(cache.conn_field().as_scalars::<f64>().len(), 2 * 3 * 64);
        assert!(cache.gdet_field().as_slice().iter().all(|&d| d == 1.0));
    }
}
