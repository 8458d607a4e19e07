//! Stage A: vertex construction and concave/convex classification.

use log::debug;

use crate::error::PartitionError;
use crate::point::Point;
use crate::vertex::VertexArena;

fn malformed(msg: impl Into<String>) -> PartitionError {
    PartitionError::MalformedPolygon(msg.into())
}

/// Classifies the vertex at `curr` (with its cyclic neighbors `prev`/`next`)
/// as concave (`true`) or convex (`false`), per the rule in spec §4.A.
///
/// Returns an error if the incoming or outgoing edge is not axis-aligned, or
/// if both edges around `curr` run along the same axis (a collinear triple,
/// which includes the zero-length-edge case).
fn classify_vertex(prev: Point, curr: Point, next: Point) -> Result<bool, String> {
    let incoming_vertical = prev.x == curr.x;
    let incoming_horizontal = prev.y == curr.y;
    if incoming_vertical == incoming_horizontal {
        return Err(format!(
            "edge {prev:?}->{curr:?} is not a single axis-aligned segment"
        ));
    }

    let outgoing_vertical = curr.x == next.x;
    let outgoing_horizontal = curr.y == next.y;
    if outgoing_vertical == outgoing_horizontal {
        return Err(format!(
            "edge {curr:?}->{next:?} is not a single axis-aligned segment"
        ));
    }

    if incoming_vertical == outgoing_vertical {
        return Err(format!(
            "two successive edges at {curr:?} share an axis (collinear triple)"
        ));
    }

    let concave = if incoming_vertical {
        let dir0 = prev.y < curr.y;
        let dir1 = curr.x > next.x;
        dir0 != dir1
    } else {
        let dir0 = prev.x < curr.x;
        let dir1 = curr.y > next.y;
        dir0 == dir1
    };
    Ok(concave)
}

/// Builds the cyclic doubly-linked boundary for `points` and classifies
/// every vertex as concave or convex, per spec §4.A.
pub fn build_boundary(points: &[Point]) -> Result<VertexArena, PartitionError> {
    let n = points.len();
    if n < 4 {
        return Err(malformed(format!(
            "polygon must have at least 4 vertices, got {n}"
        )));
    }

    for i in 0..n {
        if points[i] == points[(i + 1) % n] {
            return Err(malformed(format!(
                "degenerate zero-length edge at vertex {i} ({:?})",
                points[i]
            )));
        }
    }

    let mut arena = VertexArena::new();
    let ids: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(i, p)| arena.push(*p, i))
        .collect();

    for i in 0..n {
        let next_i = ids[(i + 1) % n];
        let prev_i = ids[(i + n - 1) % n];
        arena.set_next(ids[i], next_i);
        arena.set_prev(ids[i], prev_i);
    }

    let mut concave_count = 0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        let concave = classify_vertex(prev, curr, next).map_err(malformed)?;
        if concave {
            concave_count += 1;
        }
        arena.set_concave(ids[i], concave);
    }

    debug!("stage A: {n} vertices, {concave_count} concave");
    Ok(arena)
}
