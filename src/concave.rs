//! Stage F: concave resolution. Any vertex still concave after stage E's
//! chord splicing is eliminated by shooting a horizontal cut to the
//! nearest vertical edge on the interior side.

use log::debug;

use crate::error::PartitionError;
use crate::interval_tree::IntervalTree;
use crate::point::Point;
use crate::segment::Segment;
use crate::vertex::{VertexArena, VertexId, NOT_ORIGINAL};

/// Collects every vertical edge currently in the (possibly multi-cycle)
/// boundary, split into left-facing (`v.next.y > v.y`, interior to the
/// left) and right-facing (`v.next.y < v.y`) lists. Enumerating every
/// vertex's forward edge covers all cycles without needing to know how
/// many there are or where they start.
fn classify_vertical_edges(arena: &VertexArena) -> (Vec<Segment>, Vec<Segment>) {
    let mut left_facing = Vec::new();
    let mut right_facing = Vec::new();
    for id in arena.ids() {
        let next = arena.next(id);
        let p = arena.point(id);
        let q = arena.point(next);
        if p.x != q.x {
            continue;
        }
        let seg = Segment::new(arena, id, next, false);
        if q.y > p.y {
            left_facing.push(seg);
        } else if q.y < p.y {
            right_facing.push(seg);
        }
    }
    (left_facing, right_facing)
}

/// Resolves one concave vertex `v`: picks a shoot direction, queries the
/// matching tree for the nearest vertical edge, splices two new vertices
/// at the hit point, and rewires `v`'s neighborhood through them.
fn resolve_one(
    arena: &mut VertexArena,
    l_tree: &mut IntervalTree<Segment>,
    r_tree: &mut IntervalTree<Segment>,
    v: VertexId,
) -> Result<(), PartitionError> {
    let p = arena.point(v);
    let y = p.y;
    let vx = p.x;
    let pv = arena.prev(v);
    let nv = arena.next(v);
    let incoming_vertical = arena.point(pv).x == p.x;

    // Which boundary of the vertical-edge trees faces the hit we want
    // depends on the local turn direction at `v`; this discriminant picks
    // between the right-facing tree (nearest wall to the left of `v`) and
    // the left-facing tree (nearest wall to the right of `v`).
    let prefer_r_tree = if incoming_vertical {
        arena.point(pv).y < y
    } else {
        arena.point(nv).y > y
    };

    let hit = if prefer_r_tree {
        r_tree
            .query(y)
            .into_iter()
            .filter(|s| s.fixed < vx)
            .max_by_key(|s| s.fixed)
    } else {
        l_tree
            .query(y)
            .into_iter()
            .filter(|s| s.fixed > vx)
            .min_by_key(|s| s.fixed)
    };

    let s = hit.ok_or_else(|| {
        PartitionError::MalformedPolygon(format!(
            "no {} vertical edge found to extend concave vertex {p:?}",
            if prefer_r_tree { "right-facing" } else { "left-facing" }
        ))
    })?;

    let x_star = s.fixed;
    let a = arena.push(Point::new(x_star, y), NOT_ORIGINAL);
    let b = arena.push(Point::new(x_star, y), NOT_ORIGINAL);

    arena.set_prev(a, s.from);
    arena.set_next(s.from, a);
    arena.set_next(b, s.to);
    arena.set_prev(s.to, b);

    let tree = if prefer_r_tree { &mut *r_tree } else { &mut *l_tree };
    tree.remove(s);
    tree.add(Segment::new(arena, s.from, a, false));
    tree.add(Segment::new(arena, b, s.to, false));

    arena.set_concave(v, false);

    if incoming_vertical {
        arena.set_next(a, nv);
        arena.set_prev(b, v);
    } else {
        arena.set_next(a, v);
        arena.set_prev(b, pv);
    }
    let a_next = arena.next(a);
    arena.set_prev(a_next, a);
    let b_prev = arena.prev(b);
    arena.set_next(b_prev, b);

    Ok(())
}

/// Resolves every vertex flagged concave at the time this is called.
/// Vertices created during resolution (`A`/`B` above) are never concave,
/// so processing a fixed snapshot taken up front is correct even though
/// the arena grows as we go.
pub fn resolve_concave_vertices(arena: &mut VertexArena) -> Result<(), PartitionError> {
    let (mut left_facing, mut right_facing) = classify_vertical_edges(arena);
    let mut l_tree = IntervalTree::new(left_facing.drain(..));
    let mut r_tree = IntervalTree::new(right_facing.drain(..));

    let pending: Vec<VertexId> = arena.ids().filter(|&id| arena.is_concave(id)).collect();
    debug!("stage F: resolving {} remaining concave vertices", pending.len());
    for v in pending {
        resolve_one(arena, &mut l_tree, &mut r_tree, v)?;
    }
    Ok(())
}
