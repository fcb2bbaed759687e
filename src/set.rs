//! Rendezvous placement over a dynamic set of nodes.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::PlacementError;
use crate::score::{Mix64, Scorer};

/// An item that changes owner between two membership states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment<I> {
    /// The item whose owner changed.
    pub item: I,
    /// Owner under the old membership.
    pub from: I,
    /// Owner under the new membership.
    pub to: I,
}

/// A set of nodes with rendezvous (highest random weight) placement.
///
/// Each member id is scored against an item id by the configured [`Scorer`]
/// and the member with the greatest score owns the item. Equal scores fall
/// back to the greater member id, so ownership never depends on insertion
/// order. Ids are unique: adding a present id is a no-op.
///
/// There is no interior synchronization. To mutate from several threads,
/// wrap the set in a `Mutex` or `RwLock`.
#[derive(Debug, Clone)]
pub struct NodeSet<I, S = Mix64> {
    /// Current members. Order is an implementation detail and never affects
    /// placement.
    nodes: Vec<I>,
    /// Scoring strategy shared by all lookups.
    scorer: S,
}

impl<I> NodeSet<I, Mix64>
where
    I: Ord + fmt::Debug,
    Mix64: Scorer<I>,
{
    /// Create an empty set with the default 64-bit scorer.
    pub fn new() -> Self {
        Self::with_scorer(Mix64)
    }

    /// Build a set from node ids with the default 64-bit scorer.
    ///
    /// Duplicate ids collapse to a single member.
    pub fn from_nodes(nodes: impl IntoIterator<Item = I>) -> Result<Self, PlacementError> {
        Self::from_nodes_with(Mix64, nodes)
    }
}

impl<I> Default for NodeSet<I, Mix64>
where
    I: Ord + fmt::Debug,
    Mix64: Scorer<I>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S> NodeSet<I, S> {
    /// Create an empty set with an explicit scoring strategy.
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            nodes: Vec::new(),
            scorer,
        }
    }

    /// Number of nodes currently in the set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current members, in unspecified order.
    pub fn nodes(&self) -> &[I] {
        &self.nodes
    }

    /// Drop every member and release the backing storage.
    ///
    /// The set afterwards behaves like a freshly created one and can be
    /// repopulated. Clearing an empty set is a no-op.
    pub fn clear(&mut self) {
        let dropped = self.nodes.len();
        self.nodes = Vec::new();
        debug!(dropped, "cleared node set");
    }
}

impl<I, S> NodeSet<I, S>
where
    I: Ord + fmt::Debug,
    S: Scorer<I>,
{
    /// Build a set with an explicit scorer from node ids.
    ///
    /// Duplicate ids collapse to a single member.
    pub fn from_nodes_with(
        scorer: S,
        nodes: impl IntoIterator<Item = I>,
    ) -> Result<Self, PlacementError> {
        let mut set = Self::with_scorer(scorer);
        for id in nodes {
            set.add(id)?;
        }
        Ok(set)
    }

    /// Insert a node id.
    ///
    /// Returns `Ok(true)` when the id joined the set and `Ok(false)` when it
    /// was already a member, in which case nothing changes. Only items the
    /// new node wins change owner; everything else stays put.
    ///
    /// # Errors
    ///
    /// [`PlacementError::Capacity`] when the backing storage cannot grow.
    /// The set is left unchanged and usable.
    pub fn add(&mut self, id: I) -> Result<bool, PlacementError> {
        if self.nodes.contains(&id) {
            return Ok(false);
        }
        self.nodes.try_reserve(1)?;
        debug!(node = ?id, "added node to set");
        self.nodes.push(id);
        Ok(true)
    }

    /// Remove a node id if present.
    ///
    /// Returns whether the id was a member. Removing an absent id is a
    /// no-op, not an error. Only items the departed node owned change owner.
    pub fn remove(&mut self, id: &I) -> bool {
        match self.nodes.iter().position(|node| node == id) {
            Some(index) => {
                self.nodes.swap_remove(index);
                debug!(node = ?id, "removed node from set");
                true
            }
            None => false,
        }
    }

    /// Whether `id` is currently a member.
    pub fn contains(&self, id: &I) -> bool {
        self.nodes.contains(id)
    }

    /// Return the member that owns `item`.
    ///
    /// Scores every member against `item` and picks the greatest score,
    /// breaking ties towards the greater member id. The result is a pure
    /// function of the member set and the item. O(n) in the member count,
    /// allocation free.
    ///
    /// # Errors
    ///
    /// [`PlacementError::Empty`] when the set has no members.
    pub fn node_for(&self, item: &I) -> Result<&I, PlacementError> {
        let mut best: Option<(S::Score, &I)> = None;

        for node in &self.nodes {
            let score = self.scorer.score(node, item);
            let wins = match &best {
                None => true,
                Some((best_score, best_node)) => match score.cmp(best_score) {
                    Ordering::Greater => true,
                    Ordering::Equal => node > *best_node,
                    Ordering::Less => false,
                },
            };
            if wins {
                best = Some((score, node));
            }
        }

        best.map(|(_, node)| node).ok_or(PlacementError::Empty)
    }

    /// Return up to `count` members ranked from most to least preferred
    /// for `item`.
    ///
    /// The first entry matches [`node_for`](Self::node_for); the rest are
    /// the fallbacks an owner failure would promote, in order. `count` is
    /// clamped to the member count, and an empty set yields an empty vec.
    pub fn ranked(&self, item: &I, count: usize) -> Vec<&I> {
        let count = count.min(self.nodes.len());
        if count == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(S::Score, &I)> = self
            .nodes
            .iter()
            .map(|node| (self.scorer.score(node, item), node))
            .collect();

        // Highest score first, greater id first on ties, matching node_for.
        let descending = |a: &(S::Score, &I), b: &(S::Score, &I)| {
            b.0.cmp(&a.0).then_with(|| b.1.cmp(a.1))
        };
        scored.select_nth_unstable_by(count - 1, descending);
        scored.truncate(count);
        scored.sort_unstable_by(descending);

        scored.into_iter().map(|(_, node)| node).collect()
    }

    /// Compute which of `items` change owner between two membership states.
    ///
    /// Items that keep their owner produce nothing; each item whose owner
    /// differs produces one [`Reassignment`]. With no items the result is
    /// empty regardless of membership.
    ///
    /// # Errors
    ///
    /// [`PlacementError::Empty`] when `items` is non-empty and either set
    /// has no members.
    pub fn diff(old: &Self, new: &Self, items: &[I]) -> Result<Vec<Reassignment<I>>, PlacementError>
    where
        I: Clone,
    {
        let mut moves = Vec::new();

        for item in items {
            let from = old.node_for(item)?;
            let to = new.node_for(item)?;
            if from != to {
                moves.push(Reassignment {
                    item: item.clone(),
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        Ok(moves)
    }
}
