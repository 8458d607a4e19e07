//! Stage G: face extraction. Walks each boundary cycle left after stages
//! E and F and emits its bounding rectangle, repairing the rare
//! zero-area face the splice/resolve surgery can leave behind.

use log::warn;

use crate::error::PartitionError;
use crate::point::Point;
use crate::rectangle::Rectangle;
use crate::vertex::{VertexArena, VertexId};

/// Extracts one rectangle per boundary cycle.
pub fn extract_faces(arena: &mut VertexArena) -> Result<Vec<Rectangle>, PartitionError> {
    arena.reset_visited();
    let mut rectangles = Vec::new();

    for start in arena.ids() {
        if arena.visited(start) {
            continue;
        }
        let mut path = Vec::new();
        let mut cur = start;
        loop {
            arena.set_visited(cur, true);
            path.push(cur);
            cur = arena.next(cur);
            if cur == start {
                break;
            }
        }

        let mut min = arena.point(start);
        let mut max = min;
        for &id in &path {
            let p = arena.point(id);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let rect = if min.x == max.x || min.y == max.y {
            repair_degenerate_face(arena, &path, min, max)?
        } else {
            Rectangle { min, max }
        };
        rectangles.push(rect);
    }

    Ok(rectangles)
}

/// Repairs a zero-area face by folding in the extents of each collapsed
/// extremum's backup pointers — the topology the vertex belonged to
/// before splice/resolve surgery rewired it.
fn repair_degenerate_face(
    arena: &VertexArena,
    path: &[VertexId],
    min: Point,
    max: Point,
) -> Result<Rectangle, PartitionError> {
    let x_collapsed = min.x == max.x;
    warn!("stage G: degenerate face detected ({min:?}-{max:?}), attempting backup repair");

    let (v1, v2) = if x_collapsed {
        let v1 = *path
            .iter()
            .min_by_key(|&&id| arena.point(id).y)
            .expect("face path is non-empty");
        let v2 = *path
            .iter()
            .max_by_key(|&&id| arena.point(id).y)
            .expect("face path is non-empty");
        (v1, v2)
    } else {
        let v1 = *path
            .iter()
            .min_by_key(|&&id| arena.point(id).x)
            .expect("face path is non-empty");
        let v2 = *path
            .iter()
            .max_by_key(|&&id| arena.point(id).x)
            .expect("face path is non-empty");
        (v1, v2)
    };

    let mut min = min;
    let mut max = max;
    for candidate in [
        arena.backup_prev(v1),
        arena.backup_next(v1),
        arena.backup_prev(v2),
        arena.backup_next(v2),
    ]
    .into_iter()
    .flatten()
    {
        let p = arena.point(candidate);
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    if min.x == max.x || min.y == max.y {
        return Err(PartitionError::DegenerateFace);
    }
    Ok(Rectangle { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::select_splitters;
    use crate::classify::build_boundary;
    use crate::concave::resolve_concave_vertices;
    use crate::diagonal::enumerate_diagonals;
    use crate::interval_tree::IntervalTree;
    use crate::segment::collect_edges;
    use crate::splice::splice_chords;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn run(points: &[Point]) -> Vec<Rectangle> {
        let n = points.len();
        let mut arena = build_boundary(points).unwrap();
        let (h_edges, v_edges) = collect_edges(&arena);
        let h_tree = IntervalTree::new(h_edges);
        let v_tree = IntervalTree::new(v_edges);
        let (h, v) = enumerate_diagonals(&arena, &h_tree, &v_tree, n);
        let splitters = select_splitters(&h, &v).unwrap();
        splice_chords(&mut arena, &splitters);
        resolve_concave_vertices(&mut arena).unwrap();
        extract_faces(&mut arena).unwrap()
    }

    #[test]
    fn test_unit_square_is_one_rectangle() {
        let p = pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let rects = run(&p);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rectangle::from_corners(Point::new(0, 0), Point::new(1, 1)));
    }

    #[test]
    fn test_l_shape_two_rectangles_disjoint_and_covering() {
        let p = pts(&[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)]);
        let rects = run(&p);
        assert_eq!(rects.len(), 2);
        let total_area: i64 = rects.iter().map(|r| r.area()).sum();
        assert_eq!(total_area, 3, "L-shape interior area is 2*1 + 1*1 = 3");
        assert!(!rects[0].interiors_intersect(&rects[1]));
    }
}
