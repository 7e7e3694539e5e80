//! Depth-limited negamax without pruning.
//!
//! The side to move always maximizes; scores flip sign on every
//! recursion. Mostly useful as a reference for validating
//! [`crate::alpha_beta`], which explores the same tree with the same
//! move ordering but prunes.

use crate::traits::{BoundedCost, GameState};

/// Best achievable score for the side to move, looking `depth` plies
/// ahead.
///
/// Positions with no legal moves evaluate in place, finished or not.
pub fn best_score<S: GameState>(state: &mut S, depth: usize) -> S::Cost {
    if depth == 0 || state.is_finished() {
        return state.evaluate();
    }
    let mut actions = Vec::new();
    state.expand(|a| actions.push(a));
    if actions.is_empty() {
        return state.evaluate();
    }
    let mut best = <S::Cost as BoundedCost>::MIN;
    for action in actions {
        state.apply(action);
        let score = -best_score(state, depth - 1);
        state.rollback(action);
        if score > best {
            best = score;
        }
    }
    best
}

/// Move maximizing [`best_score`] at the root.
///
/// # Panics
/// Panics if `depth == 0`, the state is finished, or the root has no
/// legal moves: all three are driver-contract violations.
pub fn best_action<S: GameState>(state: &mut S, depth: usize) -> S::Action {
    assert!(depth > 0, "minimax::best_action needs a positive depth");
    assert!(
        !state.is_finished(),
        "minimax::best_action called on a finished state"
    );
    let mut actions = Vec::new();
    state.expand(|a| actions.push(a));
    assert!(
        !actions.is_empty(),
        "minimax::best_action needs at least one legal move"
    );
    let mut best_seen = <S::Cost as BoundedCost>::MIN;
    let mut best = None;
    for action in actions {
        state.apply(action);
        let score = -best_score(state, depth - 1);
        state.rollback(action);
        if best.is_none() || score > best_seen {
            best_seen = score;
            best = Some(action);
        }
    }
    best.expect("argmax over a non-empty move list")
}
