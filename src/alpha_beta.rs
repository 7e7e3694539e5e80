//! Depth-limited negamax with alpha-beta pruning.
//!
//! Same tree and move ordering as [`crate::minimax`]; subtrees that
//! cannot influence the root value are cut once `alpha >= beta`. With a
//! full window the root score is identical to minimax's.

use crate::traits::{GameState, NegamaxCost};

/// Best achievable score within the window `(alpha, beta)`, looking
/// `depth` plies ahead.
///
/// Recursion narrows the window to `(-beta, -alpha)` and prunes as soon
/// as `alpha >= beta`. Positions with no legal moves evaluate in place.
pub fn best_score<S: GameState>(
    state: &mut S,
    mut alpha: S::Cost,
    beta: S::Cost,
    depth: usize,
) -> S::Cost {
    if depth == 0 || state.is_finished() {
        return state.evaluate();
    }
    let mut actions = Vec::new();
    state.expand(|a| actions.push(a));
    if actions.is_empty() {
        return state.evaluate();
    }
    for action in actions {
        state.apply(action);
        let score = -best_score(state, -beta, -alpha, depth - 1);
        state.rollback(action);
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            return alpha;
        }
    }
    alpha
}

/// Move maximizing the full-window score at the root.
///
/// # Panics
/// Panics if `depth == 0`, the state is finished, or the root has no
/// legal moves: all three are driver-contract violations.
pub fn best_action<S: GameState>(state: &mut S, depth: usize) -> S::Action {
    assert!(depth > 0, "alpha_beta::best_action needs a positive depth");
    assert!(
        !state.is_finished(),
        "alpha_beta::best_action called on a finished state"
    );
    let mut actions = Vec::new();
    state.expand(|a| actions.push(a));
    assert!(
        !actions.is_empty(),
        "alpha_beta::best_action needs at least one legal move"
    );
    let beta = <S::Cost as NegamaxCost>::MAX;
    let mut alpha = -beta;
    let mut best = None;
    for action in actions {
        state.apply(action);
        let score = -best_score(state, -beta, -alpha, depth - 1);
        state.rollback(action);
        if best.is_none() || score > alpha {
            alpha = score;
            best = Some(action);
        }
    }
    best.expect("argmax over a non-empty move list")
}
