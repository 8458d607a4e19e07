//! Stage D: the optimal step. Builds the H×V crossing graph, finds a
//! maximum matching via Hopcroft–Karp, and reads off a maximum
//! independent set (the splitter chords) via König's theorem.

use log::debug;

use crate::error::PartitionError;
use crate::interval_tree::IntervalTree;
use crate::segment::Segment;

const INF: i64 = i64::MAX;

/// Crossing adjacency between horizontal (left) and vertical (right)
/// chords, indexed by position in the `h`/`v` slices passed to
/// `select_splitters`.
struct CrossingGraph {
    /// `adj_left[h]` = vertical indices crossing horizontal chord `h`.
    adj_left: Vec<Vec<usize>>,
    /// `adj_right[v]` = horizontal indices crossing vertical chord `v`.
    adj_right: Vec<Vec<usize>>,
}

/// Builds the crossing graph per spec §4.D: index horizontal chords by
/// their x-extent, then for each vertical chord query at its x-coordinate
/// and keep the horizontal chords whose y lies within the vertical
/// chord's y-range (inclusive on both ends).
fn build_crossing_graph(h: &[Segment], v: &[Segment]) -> CrossingGraph {
    let mut adj_left = vec![Vec::new(); h.len()];
    let mut adj_right = vec![Vec::new(); v.len()];

    let tree = IntervalTree::new(h.iter().copied().enumerate().map(|(i, s)| IndexedSegment(i, s)));
    for (vi, vseg) in v.iter().enumerate() {
        for IndexedSegment(hi, hseg) in tree.query(vseg.fixed) {
            if vseg.range.0 <= hseg.fixed && hseg.fixed <= vseg.range.1 {
                adj_left[hi].push(vi);
                adj_right[vi].push(hi);
            }
        }
    }

    CrossingGraph { adj_left, adj_right }
}

#[derive(Clone, Copy, PartialEq)]
struct IndexedSegment(usize, Segment);
impl crate::interval_tree::Ranged for IndexedSegment {
    fn range(&self) -> (i64, i64) {
        self.1.range
    }
}

struct DfsFrame {
    u: usize,
    idx: usize,
    pending_v: Option<usize>,
}

/// One Hopcroft–Karp augmenting-path search from free left node `start`,
/// as an explicit work-list rather than recursion (spec §9).
fn augment(
    start: usize,
    adj_left: &[Vec<usize>],
    dist: &mut [i64],
    match_left: &mut [Option<usize>],
    match_right: &mut [Option<usize>],
) -> bool {
    let mut stack = vec![DfsFrame {
        u: start,
        idx: 0,
        pending_v: None,
    }];

    while let Some(top) = stack.last_mut() {
        let u = top.u;
        if top.idx >= adj_left[u].len() {
            dist[u] = INF;
            stack.pop();
            continue;
        }
        let v = adj_left[u][top.idx];
        top.idx += 1;

        match match_right[v] {
            None => {
                match_left[u] = Some(v);
                match_right[v] = Some(u);
                stack.pop();
                while let Some(parent) = stack.pop() {
                    let pv = parent
                        .pending_v
                        .expect("a frame with a pushed child must have a pending edge");
                    match_left[parent.u] = Some(pv);
                    match_right[pv] = Some(parent.u);
                }
                return true;
            }
            Some(w) => {
                if dist[w] == dist[u] + 1 {
                    top.pending_v = Some(v);
                    stack.push(DfsFrame {
                        u: w,
                        idx: 0,
                        pending_v: None,
                    });
                }
            }
        }
    }
    false
}

/// Hopcroft–Karp maximum bipartite matching between `num_left` and
/// `num_right` nodes, given `adj_left[u]` = right neighbors of left node
/// `u`.
fn hopcroft_karp(
    adj_left: &[Vec<usize>],
    num_left: usize,
    num_right: usize,
) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
    let mut match_left: Vec<Option<usize>> = vec![None; num_left];
    let mut match_right: Vec<Option<usize>> = vec![None; num_right];
    let mut dist = vec![0i64; num_left];

    loop {
        let mut dist_nil = INF;
        let mut queue = std::collections::VecDeque::new();
        for u in 0..num_left {
            if match_left[u].is_none() {
                dist[u] = 0;
                queue.push_back(u);
            } else {
                dist[u] = INF;
            }
        }
        while let Some(u) = queue.pop_front() {
            if dist[u] >= dist_nil {
                continue;
            }
            for &v in &adj_left[u] {
                match match_right[v] {
                    None => {
                        if dist_nil == INF {
                            dist_nil = dist[u] + 1;
                        }
                    }
                    Some(w) => {
                        if dist[w] == INF {
                            dist[w] = dist[u] + 1;
                            queue.push_back(w);
                        }
                    }
                }
            }
        }
        if dist_nil == INF {
            break;
        }
        for u in 0..num_left {
            if match_left[u].is_none() {
                augment(u, adj_left, &mut dist, &mut match_left, &mut match_right);
            }
        }
    }

    (match_left, match_right)
}

/// König's alternating-path cover construction (spec §4.D): seeds from
/// unmatched right nodes, explicit work-list instead of recursion.
/// Returns `(visit_left, visit_right)`.
fn konig_alternation(
    adj_right: &[Vec<usize>],
    match_left: &[Option<usize>],
    match_right: &[Option<usize>],
    num_left: usize,
    num_right: usize,
) -> Result<(Vec<bool>, Vec<bool>), PartitionError> {
    let mut visit_left = vec![false; num_left];
    let mut visit_right = vec![false; num_right];

    let mut work: Vec<usize> = (0..num_right).filter(|&r| match_right[r].is_none()).collect();
    while let Some(u) = work.pop() {
        if visit_right[u] {
            continue;
        }
        visit_right[u] = true;
        for &v in &adj_right[u] {
            if visit_left[v] {
                continue;
            }
            visit_left[v] = true;
            match match_left[v] {
                None => return Err(PartitionError::UnreachableMatching(v)),
                Some(w) => {
                    if !visit_right[w] {
                        work.push(w);
                    }
                }
            }
        }
    }

    Ok((visit_left, visit_right))
}

/// Runs stage D end to end: crossing graph, matching, König cover,
/// complement. Returns the selected splitter chords (a subset of `h` and
/// `v`, as owned copies).
pub fn select_splitters(h: &[Segment], v: &[Segment]) -> Result<Vec<Segment>, PartitionError> {
    let graph = build_crossing_graph(h, v);
    let (match_left, match_right) = hopcroft_karp(&graph.adj_left, h.len(), v.len());
    let (visit_left, visit_right) =
        konig_alternation(&graph.adj_right, &match_left, &match_right, h.len(), v.len())?;

    let mut splitters = Vec::new();
    for (i, seg) in h.iter().enumerate() {
        if visit_left[i] {
            splitters.push(*seg);
        }
    }
    for (i, seg) in v.iter().enumerate() {
        if !visit_right[i] {
            splitters.push(*seg);
        }
    }
    debug!(
        "stage D: {} horizontal + {} vertical candidates -> {} splitters selected",
        h.len(),
        v.len(),
        splitters.len()
    );
    Ok(splitters)
}
