//! The frontier-shaped search tree, encoded as an Euler tour.
//!
//! Instead of storing a state copy per beam candidate, the tree keeps a
//! single mutable state plus an edge walk over the current frontier.
//! Reading the walk left to right — descend applies an action, ascend
//! rolls it back, a leaf applies/expands/rolls back — performs one DFS
//! over every live leaf in O(frontier + edges) per turn, independent of
//! tree depth.

use super::selector::{BeamSelector, Candidate};
use crate::traits::BeamState;

/// One edge of the tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourEdge<A> {
    /// Expandable frontier leaf: apply, expand, roll straight back.
    Leaf(usize, A),
    /// Descend: apply the action and keep walking.
    Down(A),
    /// Ascend: roll the action back.
    Up(A),
}

/// Euler-tour search tree over a single owned state.
///
/// The state is mutated only inside [`dfs`](Self::dfs) and
/// [`update`](Self::update); between calls it always reflects the root
/// with the [`road`](Self::road) applied.
pub struct EulerTourTree<S: BeamState> {
    state: S,
    road: Vec<S::Action>,
    curr_tour: Vec<TourEdge<S::Action>>,
    next_tour: Vec<TourEdge<S::Action>>,
    leaves: Vec<(S::Eval, S::Hash)>,
    buckets: Vec<Vec<usize>>,
}

impl<S: BeamState> EulerTourTree<S> {
    /// Tree owning `state`, prepared for beams of `beam_width` leaves.
    pub fn new(state: S, beam_width: usize) -> Self {
        Self {
            state,
            road: Vec::new(),
            curr_tour: Vec::new(),
            next_tour: Vec::new(),
            leaves: Vec::new(),
            buckets: vec![Vec::new(); beam_width],
        }
    }

    /// The owned state: root plus [`road`](Self::road).
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Common action prefix shared by every live leaf.
    pub fn road(&self) -> &[S::Action] {
        &self.road
    }

    /// Current edge walk; empty before the first
    /// [`update`](Self::update).
    pub fn tour(&self) -> &[TourEdge<S::Action>] {
        &self.curr_tour
    }

    /// Walk the tour once, expanding every live leaf into `selector`.
    ///
    /// On the first turn (empty tour) the root itself is expanded. The
    /// state is returned to its pre-walk configuration before this
    /// returns.
    pub fn dfs(&mut self, selector: &mut BeamSelector<S>) {
        if self.curr_tour.is_empty() {
            let (eval, hash) = self.state.make_initial_node();
            self.state
                .expand(&eval, hash, |a, e, h, f| selector.push(a, e, h, 0, f));
            return;
        }
        let state = &mut self.state;
        let leaves = &self.leaves;
        for edge in &self.curr_tour {
            match *edge {
                TourEdge::Leaf(i, action) => {
                    state.apply(action);
                    let (eval, hash) = &leaves[i];
                    state.expand(eval, *hash, |a, e, h, f| selector.push(a, e, h, i, f));
                    state.rollback(action);
                }
                TourEdge::Down(action) => state.apply(action),
                TourEdge::Up(action) => state.rollback(action),
            }
        }
    }

    /// Rewrite the tour so its leaves are exactly `candidates`.
    ///
    /// Dead leaves (no surviving child) are dropped and emptied subtrees
    /// pruned; a single-child prefix above the whole frontier is folded
    /// into the road, permanently shortening every future walk.
    pub fn update(&mut self, candidates: &[Candidate<S>]) {
        self.leaves.clear();

        if self.curr_tour.is_empty() {
            for candidate in candidates {
                self.curr_tour
                    .push(TourEdge::Leaf(self.leaves.len(), candidate.action));
                self.leaves.push((candidate.eval.clone(), candidate.hash));
            }
            return;
        }

        for (i, candidate) in candidates.iter().enumerate() {
            self.buckets[candidate.parent].push(i);
        }

        let peel = self.chain_depth();
        let len = self.curr_tour.len();
        for k in 0..peel {
            let TourEdge::Down(action) = self.curr_tour[k] else {
                unreachable!("chain prefix is made of descend edges");
            };
            self.state.apply(action);
            self.road.push(action);
        }
        #[cfg(feature = "tracing")]
        if peel > 0 {
            tracing::trace!(extended = peel, road = self.road.len(), "road extension");
        }

        let curr = &self.curr_tour;
        let next = &mut self.next_tour;
        let leaves = &mut self.leaves;
        let buckets = &mut self.buckets;
        for edge in &curr[peel..len - peel] {
            match *edge {
                TourEdge::Leaf(i, action) => {
                    if buckets[i].is_empty() {
                        continue; // dead leaf
                    }
                    next.push(TourEdge::Down(action));
                    for k in 0..buckets[i].len() {
                        let candidate = &candidates[buckets[i][k]];
                        next.push(TourEdge::Leaf(leaves.len(), candidate.action));
                        leaves.push((candidate.eval.clone(), candidate.hash));
                    }
                    buckets[i].clear();
                    next.push(TourEdge::Up(action));
                }
                TourEdge::Down(action) => next.push(TourEdge::Down(action)),
                TourEdge::Up(action) => {
                    if matches!(next.last(), Some(TourEdge::Down(_))) {
                        // the whole subtree died: prune the pair
                        next.pop();
                    } else {
                        next.push(TourEdge::Up(action));
                    }
                }
            }
        }
        std::mem::swap(&mut self.curr_tour, &mut self.next_tour);
        self.next_tour.clear();
    }

    /// Reconstruct the action path from the root to `leaves[parent]`.
    ///
    /// `turn` is only a capacity hint. Returns an empty path if the leaf
    /// is not on the tour.
    pub fn restore(&self, parent: usize, turn: usize) -> Vec<S::Action> {
        let mut path = Vec::with_capacity(turn);
        path.extend_from_slice(&self.road);
        for edge in &self.curr_tour {
            match *edge {
                TourEdge::Leaf(i, action) => {
                    if i == parent {
                        path.push(action);
                        return path;
                    }
                }
                TourEdge::Down(action) => path.push(action),
                TourEdge::Up(_) => {
                    path.pop();
                }
            }
        }
        Vec::new()
    }

    /// Number of levels at the top of the tour that form a single-child
    /// chain enclosing the entire walk.
    ///
    /// A level is peelable when its descend edge's subtree spans every
    /// remaining edge, i.e. the walk depth never returns below that
    /// level before the trailing ascend run.
    fn chain_depth(&self) -> usize {
        let tour = &self.curr_tour;
        let lead = tour
            .iter()
            .take_while(|e| matches!(e, TourEdge::Down(_)))
            .count();
        let trail = tour
            .iter()
            .rev()
            .take_while(|e| matches!(e, TourEdge::Up(_)))
            .count();
        if lead == 0 || trail == 0 {
            return 0;
        }
        let len = tour.len();
        let mut depth = 0usize;
        let mut min_interior = usize::MAX;
        for (i, edge) in tour.iter().enumerate() {
            match edge {
                TourEdge::Down(_) => depth += 1,
                TourEdge::Up(_) => depth -= 1,
                TourEdge::Leaf(..) => {}
            }
            if i + 1 >= lead && i + trail < len {
                min_interior = min_interior.min(depth);
            }
        }
        debug_assert_eq!(depth, 0, "tour descends and ascends must balance");
        lead.min(trail).min(min_interior)
    }
}
