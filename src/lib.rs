//! Rendezvous (highest random weight) placement over a dynamic node set.
//!
//! Every (node, item) identifier pair gets a deterministic score from a
//! pluggable [`Scorer`], and an item belongs to the member with the greatest
//! score. A node's score for an item never depends on the rest of the set,
//! so membership changes disturb the minimum: a joining node takes only the
//! items it now wins, a leaving node hands off only the items it owned, and
//! everything else stays put.
//!
//! [`NodeSet`] is a plain single-threaded structure. Share it across threads
//! behind a `Mutex` or `RwLock`.
//!
//! # Example
//!
//! ```
//! use berth::NodeSet;
//!
//! let mut set = NodeSet::from_nodes([6969u64, 420, 7777])?;
//!
//! let owner = *set.node_for(&123)?;
//! assert!(set.contains(&owner));
//!
//! // Removing the owner reassigns the item to a surviving member.
//! set.remove(&owner);
//! assert_ne!(*set.node_for(&123)?, owner);
//! # Ok::<(), berth::PlacementError>(())
//! ```

mod error;
mod score;
mod set;

pub use error::PlacementError;
pub use score::{Blake3, Mix32, Mix64, Scorer};
pub use set::{NodeSet, Reassignment};
