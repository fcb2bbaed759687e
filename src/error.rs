//! Error types for placement operations.

use std::collections::TryReserveError;

/// Errors returned by [`NodeSet`](crate::NodeSet) operations.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// A lookup was attempted against a set with no members.
    #[error("node set is empty, nothing can own the item")]
    Empty,

    /// The backing storage could not grow to hold another node.
    ///
    /// The set is unchanged and remains usable.
    #[error("node storage could not grow: {0}")]
    Capacity(#[from] TryReserveError),
}
