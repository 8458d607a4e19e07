//! `Segment`: an axis-aligned boundary edge or candidate chord, plus stage
//! B's walk that collects the polygon's edges into horizontal/vertical
//! lists keyed for the interval trees built on top of them.

use crate::interval_tree::Ranged;
use crate::vertex::{VertexArena, VertexId};

/// An axis-aligned segment between two vertices. `range` is the closed
/// interval on the segment's *varying* coordinate (x for a horizontal
/// segment, y for a vertical one) — this is what range trees key on.
/// `fixed` is the coordinate shared by both endpoints (the perpendicular
/// one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: VertexId,
    pub to: VertexId,
    pub horizontal: bool,
    pub range: (i64, i64),
    pub fixed: i64,
}

impl Segment {
    pub fn new(arena: &VertexArena, from: VertexId, to: VertexId, horizontal: bool) -> Self {
        let pf = arena.point(from);
        let pt = arena.point(to);
        let (range, fixed) = if horizontal {
            ((pf.x.min(pt.x), pf.x.max(pt.x)), pf.y)
        } else {
            ((pf.y.min(pt.y), pf.y.max(pt.y)), pf.x)
        };
        Segment {
            from,
            to,
            horizontal,
            range,
            fixed,
        }
    }

    pub fn contains(&self, coord: i64) -> bool {
        self.range.0 <= coord && coord <= self.range.1
    }
}

impl Ranged for Segment {
    fn range(&self) -> (i64, i64) {
        self.range
    }
}

/// Walks the boundary cycle once (starting from vertex `0`), collecting
/// each edge `(v, v.next)` into the horizontal or vertical list depending
/// on which coordinate stays fixed across the edge. Per spec §4.B.
pub fn collect_edges(arena: &VertexArena) -> (Vec<Segment>, Vec<Segment>) {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();

    let start = VertexId(0);
    let mut current = start;
    loop {
        let next = arena.next(current);
        let p = arena.point(current);
        let q = arena.point(next);
        if p.x == q.x {
            vertical.push(Segment::new(arena, current, next, false));
        } else {
            horizontal.push(Segment::new(arena, current, next, true));
        }
        current = next;
        if current == start {
            break;
        }
    }

    (horizontal, vertical)
}
