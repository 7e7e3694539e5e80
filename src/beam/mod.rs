//! Euler-tour beam search.
//!
//! A beam search that never materializes per-candidate state copies: the
//! search tree is an [`EulerTourTree`] advancing one shared state along
//! the frontier, and a [`BeamSelector`] keeps the `W` best
//! hash-deduplicated children per turn. Per-turn work is O(W · branching)
//! independent of depth, and eviction is O(log W).
//!
//! Implement [`BeamState`](crate::traits::BeamState) for your problem
//! and call [`beam_search`], or configure a run through
//! [`crate::builder::BeamSearchBuilder`].

mod selector;
mod tour;

pub use selector::{BeamSelector, Candidate};
pub use tour::{EulerTourTree, TourEdge};

use crate::traits::BeamState;
use crate::utils::default_hash_capacity;

/// Search up to `max_turn` levels deep with a beam of `beam_width`
/// candidates, returning the action sequence of the chosen leaf.
///
/// The returned sequence, applied to a fresh copy of the root state,
/// reaches the first finished candidate found, or — at the turn cap —
/// the lowest-cost surviving leaf. It is empty when the frontier dies,
/// when `max_turn == 0`, or when the root has no children.
///
/// `hash_capacity` sizes the per-turn dedup table; pass `0` for the
/// default of 48 slots per beam slot. It must exceed the number of
/// distinct hashes pushed in any single turn.
///
/// # Panics
/// Panics if `beam_width == 0`, or if the dedup table overflows
/// (`hash_capacity` too small for the branching factor).
pub fn beam_search<S: BeamState>(
    state: S,
    max_turn: usize,
    beam_width: usize,
    hash_capacity: usize,
) -> Vec<S::Action> {
    let hash_capacity = if hash_capacity == 0 {
        default_hash_capacity(beam_width)
    } else {
        hash_capacity
    };

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("beam_search", beam_width, max_turn, hash_capacity);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut tree = EulerTourTree::new(state, beam_width);
    let mut selector = BeamSelector::new(beam_width, hash_capacity);

    for turn in 0..max_turn {
        #[cfg(feature = "tracing")]
        let turn_span = tracing::trace_span!("turn", turn);
        #[cfg(feature = "tracing")]
        let _turn_enter = turn_span.enter();

        tree.dfs(&mut selector);

        if selector.is_finished() {
            let finished = selector.finished_candidates()[0].clone();
            #[cfg(feature = "tracing")]
            tracing::trace!(turn, "finished candidate found");
            let mut path = tree.restore(finished.parent, turn + 1);
            path.push(finished.action);
            return path;
        }

        if selector.candidates().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(turn, "frontier died");
            return Vec::new();
        }

        if turn + 1 == max_turn {
            let best = selector.best_candidate();
            let (parent, action) = (best.parent, best.action);
            let mut path = tree.restore(parent, turn + 1);
            path.push(action);
            return path;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(turn, live = selector.candidates().len(), "turn complete");

        tree.update(selector.candidates());
        selector.clear();
    }
    Vec::new()
}
