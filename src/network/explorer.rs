//! Iterative expansion of a seed word's friendship network.
//!
//! The traversal never recurses: discovered words wait in an explicit frontier
//! and a visited set guarantees each word enters the frontier at most once, so
//! the walk terminates on any finite dictionary, cycles included.

use std::collections::VecDeque;

use ahash::AHashSet;
use log::{debug, trace};

use crate::network::config::TraversalOrder;
use crate::network::neighbors::NeighborFinder;

/// Snapshot handed to a progress hook after each expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Words expanded so far.
    pub expanded: usize,
    /// Network members discovered so far.
    pub discovered: usize,
    /// Words waiting in the frontier.
    pub frontier: usize,
}

/// The words reachable from a seed, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exploration {
    /// Network members in discovery order.
    pub members: Vec<String>,
    /// Number of frontier pops performed.
    pub expansions: usize,
}

/// Drives the traversal over a [`NeighborFinder`].
pub struct NetworkExplorer<'f, F: NeighborFinder + ?Sized> {
    finder: &'f F,
    order: TraversalOrder,
    include_seed: bool,
}

impl<'f, F: NeighborFinder + ?Sized> NetworkExplorer<'f, F> {
    /// Create a depth-first explorer that leaves the seed out of its network.
    pub fn new(finder: &'f F) -> Self {
        NetworkExplorer {
            finder,
            order: TraversalOrder::DepthFirst,
            include_seed: false,
        }
    }

    /// Set the frontier discipline.
    pub fn order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Report the seed as the first network member.
    pub fn include_seed(mut self, include_seed: bool) -> Self {
        self.include_seed = include_seed;
        self
    }

    /// Every word transitively reachable from `seed`.
    pub fn network_of(&self, seed: &str) -> Vec<String> {
        self.explore(seed, |_| {}).members
    }

    /// Like [`network_of`](Self::network_of), calling `on_progress` after every pop.
    pub fn explore<P>(&self, seed: &str, mut on_progress: P) -> Exploration
    where
        P: FnMut(&Progress),
    {
        // The seed is marked visited up front so a cycle can never report it.
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut discovered: Vec<&str> = Vec::new();
        let mut frontier: VecDeque<&str> = VecDeque::new();

        visited.insert(seed);
        if self.include_seed {
            discovered.push(seed);
        }
        frontier.push_back(seed);

        let mut expansions = 0;
        while let Some(current) = self.pop(&mut frontier) {
            expansions += 1;

            for friend in self.finder.friends_of(current) {
                if visited.insert(friend) {
                    discovered.push(friend);
                    frontier.push_back(friend);
                }
            }

            trace!(
                "Expanded {:?}: {} discovered, {} pending",
                current,
                discovered.len(),
                frontier.len()
            );
            on_progress(&Progress {
                expanded: expansions,
                discovered: discovered.len(),
                frontier: frontier.len(),
            });
        }

        debug!(
            "Network of {:?}: {} words after {} expansions",
            seed,
            discovered.len(),
            expansions
        );

        Exploration {
            members: discovered.into_iter().map(str::to_string).collect(),
            expansions,
        }
    }

    fn pop<'w>(&self, frontier: &mut VecDeque<&'w str>) -> Option<&'w str> {
        match self.order {
            TraversalOrder::DepthFirst => frontier.pop_back(),
            TraversalOrder::BreadthFirst => frontier.pop_front(),
        }
    }
}
