//! Stage E: chord splitting. Splices the boundary along each selected
//! chord, turning one cycle into two, per spec §4.E's four-case table.

use log::debug;

use crate::segment::Segment;
use crate::vertex::{VertexArena, VertexId};

fn coord_of(arena: &VertexArena, id: VertexId, horizontal: bool) -> i64 {
    let p = arena.point(id);
    if horizontal {
        p.x
    } else {
        p.y
    }
}

/// Splices a single chord `s = (a -> b)` into the boundary, picking one of
/// the four relinking cases from spec §4.E based on whether each
/// endpoint's incoming edge runs parallel to the chord.
fn splice_chord(arena: &mut VertexArena, s: Segment) {
    let a = s.from;
    let b = s.to;
    arena.set_concave(a, false);
    arena.set_concave(b, false);

    let pa = arena.prev(a);
    let na = arena.next(a);
    let pb = arena.prev(b);
    let nb = arena.next(b);

    let ao = coord_of(arena, pa, s.horizontal) == coord_of(arena, a, s.horizontal);
    let bo = coord_of(arena, pb, s.horizontal) == coord_of(arena, b, s.horizontal);

    match (ao, bo) {
        (true, true) => {
            arena.set_prev(a, pb);
            arena.set_next(pb, a);
            arena.set_prev(b, pa);
            arena.set_next(pa, b);
        }
        (true, false) => {
            arena.set_prev(a, b);
            arena.set_next(b, a);
            arena.set_next(pa, nb);
            arena.set_prev(nb, pa);
        }
        (false, true) => {
            arena.set_next(a, b);
            arena.set_prev(b, a);
            arena.set_prev(na, pb);
            arena.set_next(pb, na);
        }
        (false, false) => {
            arena.set_next(a, nb);
            arena.set_prev(nb, a);
            arena.set_next(b, na);
            arena.set_prev(na, b);
        }
    }
}

/// Splices every selected splitter chord into the boundary in turn.
pub fn splice_chords(arena: &mut VertexArena, chords: &[Segment]) {
    for &s in chords {
        debug!(
            "stage E: splicing chord {:?}-{:?}",
            arena.point(s.from),
            arena.point(s.to)
        );
        splice_chord(arena, s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::select_splitters;
    use crate::classify::build_boundary;
    use crate::diagonal::enumerate_diagonals;
    use crate::interval_tree::IntervalTree;
    use crate::point::Point;
    use crate::segment::collect_edges;
    use std::collections::HashSet;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn count_faces(arena: &VertexArena, n: usize) -> usize {
        let mut seen = HashSet::new();
        let mut faces = 0;
        for i in 0..n {
            let start = VertexId(i);
            if seen.contains(&start.0) {
                continue;
            }
            faces += 1;
            let mut cur = start;
            loop {
                seen.insert(cur.0);
                cur = arena.next(cur);
                if cur == start {
                    break;
                }
            }
        }
        faces
    }

    #[test]
    fn test_plus_sign_splice_yields_three_faces() {
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
        let n = p.len();
        let mut arena = build_boundary(&p).unwrap();
        let (h_edges, v_edges) = collect_edges(&arena);
        let h_tree = IntervalTree::new(h_edges);
        let v_tree = IntervalTree::new(v_edges);
        let (h, v) = enumerate_diagonals(&arena, &h_tree, &v_tree, n);
        let splitters = select_splitters(&h, &v).unwrap();
        assert_eq!(splitters.len(), 2);

        splice_chords(&mut arena, &splitters);

        assert_eq!(count_faces(&arena, n), 3);
        for id in arena.ids() {
            assert!(!arena.is_concave(id), "both endpoints of every spliced chord must be cleared");
        }
    }

    #[test]
    fn test_no_chords_is_a_no_op() {
        let p = pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let n = p.len();
        let mut arena = build_boundary(&p).unwrap();
        splice_chords(&mut arena, &[]);
        assert_eq!(count_faces(&arena, n), 1);
    }
}
