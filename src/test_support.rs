//! Shared fixture polygons for the stage and scenario tests, mirroring the
//! teacher's `test_util` fixture-plus-template pattern (see `convex_hull.rs`
//! tests): one function per named shape, plus an `rstest_reuse` template
//! enumerating them for parametrized cases.

#![cfg(test)]

use crate::point::Point;
use rstest::fixture;
use rstest_reuse::template;

fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[fixture]
pub fn unit_square() -> Vec<Point> {
    pts(&[(0, 0), (1, 0), (1, 1), (0, 1)])
}

#[fixture]
pub fn l_shape() -> Vec<Point> {
    pts(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)])
}

#[fixture]
pub fn t_shape() -> Vec<Point> {
    pts(&[(0, 0), (3, 0), (3, 1), (2, 1), (2, 2), (1, 2), (1, 1), (0, 1)])
}

#[fixture]
pub fn plus_sign() -> Vec<Point> {
    pts(&[
        (1, 0),
        (2, 0),
        (2, 1),
        (3, 1),
        (3, 2),
        (2, 2),
        (2, 3),
        (1, 3),
        (1, 2),
        (0, 2),
        (0, 1),
        (1, 1),
    ])
}

#[fixture]
pub fn staircase() -> Vec<Point> {
    pts(&[(0, 0), (3, 0), (3, 1), (2, 1), (2, 2), (1, 2), (1, 3), (0, 3)])
}

#[fixture]
pub fn u_shape() -> Vec<Point> {
    pts(&[(0, 0), (3, 0), (3, 3), (2, 3), (2, 1), (1, 1), (1, 3), (0, 3)])
}

/// Every named fixture shape, for tests that want to sweep all of them
/// (e.g. the area/disjointness invariant checks in `polygon.rs`).
#[template]
#[rstest]
#[case::unit_square(unit_square())]
#[case::l_shape(l_shape())]
#[case::t_shape(t_shape())]
#[case::plus_sign(plus_sign())]
#[case::staircase(staircase())]
#[case::u_shape(u_shape())]
pub fn all_shapes(#[case] points: Vec<Point>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_have_at_least_four_points() {
        for shape in [
            unit_square(),
            l_shape(),
            t_shape(),
            plus_sign(),
            staircase(),
            u_shape(),
        ] {
            assert!(shape.len() >= 4);
        }
    }
}
