mod util;
use util::*;

use block_geometry::prelude::*;
use proptest::prelude::*;

fn kerr_grid_block() -> BlockArrays {
    spherical_block([6, 6, 1])
}

fn location() -> impl Strategy<Value = Location> {
    (0usize..Location::COUNT).prop_map(|slot| Location::try_from(slot).unwrap())
}

proptest! {
    #[test]
    fn prop_raise_lower_round_trip(
        v in prop::array::uniform4(-10.0f64..10.0),
        i in 0usize..6,
        j in 0usize..6,
        loc in location(),
        spin in -0.99f64..0.99,
    ) {
        let block = kerr_grid_block();
        let grid = Grid::new(SphericalKerrSchild::new(spin), &block).unwrap();
        let back = grid.raise_index(&grid.lower_index(&v, i, j, 0, loc), i, j, 0, loc);
        for mu in 0..NDIM {
            prop_assert!((back[mu] - v[mu]).abs() < 1e-9 * (1.0 + v[mu].abs()),
                "component {} came back as {} (was {})", mu, back[mu], v[mu]);
        }
    }

    #[test]
    fn prop_lower_matches_metric_contraction(
        v in prop::array::uniform4(-5.0f64..5.0),
        i in 0usize..6,
        j in 0usize..6,
        loc in location(),
    ) {
        let block = kerr_grid_block();
        let grid = Grid::new(SphericalMinkowski, &block).unwrap();
        let g = grid.metric_cov(loc, i, j);
        let vcov = grid.lower_index(&v, i, j, 0, loc);
        for mu in 0..NDIM {
            let expected: f64 = (0..NDIM).map(|nu| g[mu][nu] * v[nu]).sum();
            prop_assert!((vcov[mu] - expected).abs() < 1e-12 * (1.0 + expected.abs()));
        }
    }

    #[test]
    fn prop_flat_lowering_flips_time(
        v in prop::array::uniform4(-1e3f64..1e3),
        loc in location(),
    ) {
        let block = cube_block([4, 4, 4]);
        let grid = Grid::flat(&block).unwrap();
        let vcov = grid.lower_index(&v, 3, 1, 2, loc);
        prop_assert_eq!(vcov, [-v[0], v[1], v[2], v[3]]);
        prop_assert_eq!(grid.raise_index(&vcov, 3, 1, 2, loc), v);
    }
}
