//! The crate's single error type.

/// Everything that can go wrong while partitioning a polygon.
///
/// `MalformedPolygon` is the only variant a caller should expect to see in
/// practice; `DegenerateFace` and `UnreachableMatching` indicate an internal
/// invariant was broken (a bug here, or input that slipped the checks in
/// stage A) rather than anything the caller did wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("malformed polygon: {0}")]
    MalformedPolygon(String),

    #[error("stage G produced a zero-area face that backup-pointer repair could not recover")]
    DegenerateFace,

    #[error("König alternation expected a matched partner for left node {0} but found none")]
    UnreachableMatching(usize),
}
