//! Optimal rectilinear polygon partitioner.
//!
//! Given a simple, axis-aligned polygon with integer coordinates, decomposes
//! its interior into the minimum number of axis-aligned rectangles whose
//! union is the polygon and whose interiors are pairwise disjoint. The
//! optimality comes from stage D: a maximum non-crossing subset of
//! concave-to-concave chords is chosen via König's theorem over a bipartite
//! matching (Hopcroft–Karp), rather than a greedy or arbitrary cut order.
//!
//! Pipeline (leaves first, `mod`s below are ordered the same way):
//! classification (`classify`) -> edge indexing (`segment`) -> chord
//! enumeration (`diagonal`) -> bipartite chord selection (`bipartite`) ->
//! chord splicing (`splice`) -> concave resolution (`concave`) -> face
//! extraction (`face`). `polygon` wires the stages together behind the
//! single public [`partition`] entry point.

// rstest_reuse's `#[template]` macro expands to a crate-root `macro_rules!`;
// this no-op import is the documented workaround for making it visible to
// `#[apply]` call sites elsewhere in the crate.
#[cfg(test)]
use rstest_reuse;

// Only `Point`, `Rectangle`, `PartitionError`, and `partition` are public
// surface (spec §6); every stage module is an internal implementation
// detail reachable from the rest of the crate but not from callers.
pub(crate) mod bipartite;
pub(crate) mod classify;
pub(crate) mod concave;
pub(crate) mod diagonal;
pub(crate) mod error;
pub(crate) mod face;
pub(crate) mod interval_tree;
pub(crate) mod point;
pub(crate) mod polygon;
pub(crate) mod rectangle;
pub(crate) mod segment;
pub(crate) mod splice;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod vertex;

pub use error::PartitionError;
pub use point::Point;
pub use polygon::partition;
pub use rectangle::Rectangle;
