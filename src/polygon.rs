//! Top-level orchestration: glues stages A through G into the single
//! public `partition` entry point.

use log::info;

use crate::bipartite::select_splitters;
use crate::classify::build_boundary;
use crate::diagonal::enumerate_diagonals;
use crate::error::PartitionError;
use crate::face::extract_faces;
use crate::concave::resolve_concave_vertices;
use crate::interval_tree::IntervalTree;
use crate::point::Point;
use crate::rectangle::Rectangle;
use crate::segment::collect_edges;
use crate::splice::splice_chords;

/// Decomposes a simple, axis-aligned, integer-coordinate polygon into the
/// minimum number of disjoint-interior axis-aligned rectangles whose
/// union equals the polygon's interior.
///
/// `points` must describe a closed rectilinear simple polygon with
/// consistent winding, at least 4 vertices, no zero-length edges, and no
/// three consecutive collinear points; the last point connects back to
/// the first implicitly. The returned rectangles are in no particular
/// order.
pub fn partition(points: Vec<Point>) -> Result<Vec<Rectangle>, PartitionError> {
    let n = points.len();
    let mut arena = build_boundary(&points)?;

    let (h_edges, v_edges) = collect_edges(&arena);
    let h_tree = IntervalTree::new(h_edges);
    let v_tree = IntervalTree::new(v_edges);

    let (h_chords, v_chords) = enumerate_diagonals(&arena, &h_tree, &v_tree, n);
    let splitters = select_splitters(&h_chords, &v_chords)?;
    splice_chords(&mut arena, &splitters);

    resolve_concave_vertices(&mut arena)?;

    let rectangles = extract_faces(&mut arena)?;
    info!("partitioned {n}-vertex polygon into {} rectangles", rectangles.len());
    Ok(rectangles)
}
