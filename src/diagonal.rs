//! Stage C: candidate chord (diagonal) enumeration between concave
//! vertices, per spec §4.C.

use itertools::Itertools;
use log::trace;

use crate::interval_tree::IntervalTree;
use crate::segment::Segment;
use crate::vertex::{VertexArena, VertexId};

/// `is_diagonal` from spec §4.C: the candidate chord between `u` and `w`
/// (which share a coordinate on the grouping axis) is rejected if any
/// segment in `opposite_tree` — boundary edges running perpendicular to
/// the candidate chord — crosses its open interior.
fn is_diagonal(
    arena: &VertexArena,
    u: VertexId,
    w: VertexId,
    horizontal_chord: bool,
    opposite_tree: &IntervalTree<Segment>,
) -> bool {
    let pu = arena.point(u);
    let pw = arena.point(w);
    let (query_coord, a, b) = if horizontal_chord {
        (pu.y, pu.x, pw.x)
    } else {
        (pu.x, pu.y, pw.y)
    };
    let (lo, hi) = (a.min(b), a.max(b));
    for seg in opposite_tree.query(query_coord) {
        let start = seg.fixed;
        if lo < start && start < hi {
            return false;
        }
    }
    true
}

/// Enumerates candidate chords that connect pairs of concave vertices
/// sharing a coordinate on one grouping axis. `horizontal_chord` selects
/// which axis produces the segment orientation (`true`: vertices share a
/// y-coordinate, candidate segment is horizontal); `opposite_tree` is the
/// boundary-segment tree for the perpendicular axis.
fn enumerate_for_axis(
    arena: &VertexArena,
    concave: &[VertexId],
    n: usize,
    horizontal_chord: bool,
    opposite_tree: &IntervalTree<Segment>,
) -> Vec<Segment> {
    let sorted: Vec<VertexId> = concave
        .iter()
        .copied()
        .sorted_by_key(|&id| {
            let p = arena.point(id);
            if horizontal_chord {
                (p.y, p.x)
            } else {
                (p.x, p.y)
            }
        })
        .collect();

    let mut chords = Vec::new();
    for (u, w) in sorted.iter().copied().tuple_windows() {
        let pu = arena.point(u);
        let pw = arena.point(w);
        let (share_u, share_w) = if horizontal_chord {
            (pu.y, pw.y)
        } else {
            (pu.x, pw.x)
        };
        if share_u != share_w {
            continue;
        }

        let iu = arena.index(u) as i64;
        let iw = arena.index(w) as i64;
        let diff = (iu - iw).rem_euclid(n as i64);
        if diff == 1 || diff == n as i64 - 1 {
            trace!("skip polygon-adjacent concave pair ({iu}, {iw})");
            continue;
        }

        if is_diagonal(arena, u, w, horizontal_chord, opposite_tree) {
            trace!("accepted chord between concave vertices {iu} and {iw}");
            chords.push(Segment::new(arena, u, w, horizontal_chord));
        } else {
            trace!("rejected chord between concave vertices {iu} and {iw}: blocked");
        }
    }
    chords
}

/// Runs stage C: produces the horizontal and vertical candidate chord
/// lists. `h_tree`/`v_tree` are the boundary interval trees from stage B.
pub fn enumerate_diagonals(
    arena: &VertexArena,
    h_tree: &IntervalTree<Segment>,
    v_tree: &IntervalTree<Segment>,
    n: usize,
) -> (Vec<Segment>, Vec<Segment>) {
    let concave: Vec<VertexId> = arena.ids().filter(|&id| arena.is_concave(id)).collect();
    let horizontal = enumerate_for_axis(arena, &concave, n, true, v_tree);
    let vertical = enumerate_for_axis(arena, &concave, n, false, h_tree);
    (horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::build_boundary;
    use crate::point::Point;
    use crate::segment::collect_edges;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn build_trees(
        arena: &VertexArena,
    ) -> (IntervalTree<Segment>, IntervalTree<Segment>) {
        let (h, v) = collect_edges(arena);
        (IntervalTree::new(h), IntervalTree::new(v))
    }

    #[test]
    fn test_plus_sign_two_chord_candidates_each_axis() {
        let p = pts(&[
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
        ]);
        let arena = build_boundary(&p).unwrap();
        let (h_tree, v_tree) = build_trees(&arena);
        let (h_chords, v_chords) = enumerate_diagonals(&arena, &h_tree, &v_tree, p.len());
        // The plus sign has 4 concave vertices: (1,1),(2,1),(2,2),(1,2).
        // Each axis pairs the two vertices sharing its coordinate: (1,1)-(2,1)
        // and (1,2)-(2,2) horizontally, (1,1)-(1,2) and (2,1)-(2,2) vertically.
        assert_eq!(h_chords.len(), 2);
        assert_eq!(v_chords.len(), 2);
    }

    #[test]
    fn test_l_shape_no_diagonal_needed() {
        let p = pts(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        let arena = build_boundary(&p).unwrap();
        let (h_tree, v_tree) = build_trees(&arena);
        let (h_chords, v_chords) = enumerate_diagonals(&arena, &h_tree, &v_tree, p.len());
        // Only one concave vertex exists, so no pair (and hence no
        // candidate chord) can form.
        assert!(h_chords.is_empty());
        assert!(v_chords.is_empty());
    }

    #[test]
    fn test_adjacent_concave_vertices_are_skipped() {
        // T-shape: concave vertices (2,1) and (1,1) are polygon-adjacent.
        let p = pts(&[(0, 0), (3, 0), (3, 1), (2, 1), (2, 2), (1, 2), (1, 1), (0, 1)]);
        let arena = build_boundary(&p).unwrap();
        let (h_tree, v_tree) = build_trees(&arena);
        let (h_chords, v_chords) = enumerate_diagonals(&arena, &h_tree, &v_tree, p.len());
        assert!(h_chords.is_empty());
        assert!(v_chords.is_empty());
    }
}
