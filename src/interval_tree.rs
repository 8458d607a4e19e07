//! A small augmented interval tree: the "range tree" collaborator the spec
//! treats as an external library (§6). Used by stages B, C, D and F to
//! answer "which segments have a perpendicular-axis interval containing
//! this coordinate" queries.
//!
//! Construction is the classic centered-interval-tree recipe (split on a
//! median coordinate, bucket intervals into left/right/overlapping); `add`
//! and `remove` walk the same centers without rebalancing, so a tree that
//! sees many post-construction inserts (stage F) can skew. That is an
//! acceptable trade for this crate's scale — polygons have `O(k)` chords,
//! not millions — and keeps the implementation a single small module
//! instead of a rebalancing one.

/// Something with a closed integer interval, for indexing in an
/// `IntervalTree`.
pub trait Ranged {
    fn range(&self) -> (i64, i64);
}

struct Node<T> {
    center: i64,
    // Intervals overlapping `center`, kept in two orders for pruning:
    // ascending by low endpoint (used when querying points < center) and
    // descending by high endpoint (used when querying points > center).
    by_low: Vec<T>,
    by_high: Vec<T>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

pub struct IntervalTree<T: Ranged + Copy + PartialEq> {
    root: Option<Box<Node<T>>>,
}

impl<T: Ranged + Copy + PartialEq> IntervalTree<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        IntervalTree {
            root: build(items),
        }
    }

    pub fn add(&mut self, item: T) {
        insert(&mut self.root, item);
    }

    /// Removes one occurrence of `item` (matched by `PartialEq`). Returns
    /// whether anything was removed.
    pub fn remove(&mut self, item: T) -> bool {
        remove(&mut self.root, item)
    }

    /// All items whose interval contains `point`.
    pub fn query(&self, point: i64) -> Vec<T> {
        let mut out = Vec::new();
        query(&self.root, point, &mut out);
        out
    }
}

fn build<T: Ranged + Copy>(mut items: Vec<T>) -> Option<Box<Node<T>>> {
    if items.is_empty() {
        return None;
    }
    items.sort_by_key(|i| i.range().0);
    let center = items[items.len() / 2].range().0;

    let mut left_items = Vec::new();
    let mut right_items = Vec::new();
    let mut by_low = Vec::new();
    for item in items {
        let (lo, hi) = item.range();
        if hi < center {
            left_items.push(item);
        } else if lo > center {
            right_items.push(item);
        } else {
            by_low.push(item);
        }
    }
    by_low.sort_by_key(|i| i.range().0);
    let mut by_high = by_low.clone();
    by_high.sort_by_key(|i| std::cmp::Reverse(i.range().1));

    Some(Box::new(Node {
        center,
        by_low,
        by_high,
        left: build(left_items),
        right: build(right_items),
    }))
}

fn insert<T: Ranged + Copy>(node: &mut Option<Box<Node<T>>>, item: T) {
    let (lo, hi) = item.range();
    match node {
        None => {
            *node = Some(Box::new(Node {
                center: lo,
                by_low: vec![item],
                by_high: vec![item],
                left: None,
                right: None,
            }));
        }
        Some(n) => {
            if hi < n.center {
                insert(&mut n.left, item);
            } else if lo > n.center {
                insert(&mut n.right, item);
            } else {
                n.by_low.push(item);
                n.by_low.sort_by_key(|i| i.range().0);
                n.by_high.push(item);
                n.by_high.sort_by_key(|i| std::cmp::Reverse(i.range().1));
            }
        }
    }
}

fn remove<T: Ranged + Copy + PartialEq>(node: &mut Option<Box<Node<T>>>, item: T) -> bool {
    let (lo, hi) = item.range();
    match node {
        None => false,
        Some(n) => {
            if hi < n.center {
                remove(&mut n.left, item)
            } else if lo > n.center {
                remove(&mut n.right, item)
            } else {
                let before = n.by_low.len();
                n.by_low.retain(|i| *i != item);
                n.by_high.retain(|i| *i != item);
                before != n.by_low.len()
            }
        }
    }
}

fn query<T: Ranged + Copy>(node: &Option<Box<Node<T>>>, point: i64, out: &mut Vec<T>) {
    let Some(n) = node else { return };
    if point < n.center {
        for item in &n.by_low {
            if item.range().0 > point {
                break;
            }
            out.push(*item);
        }
        query(&n.left, point, out);
    } else if point > n.center {
        for item in &n.by_high {
            if item.range().1 < point {
                break;
            }
            out.push(*item);
        }
        query(&n.right, point, out);
    } else {
        out.extend(n.by_low.iter().copied());
    }
}
