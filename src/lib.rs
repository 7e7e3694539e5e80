//! Heuristic search toolkit for turn-based combinatorial problems.
//!
//! This crate bundles four search strategies behind a small set of
//! capability traits that user states opt into:
//!
//! - **Euler-tour beam search** ([`beam_search`]): keeps the `W` best
//!   partial solutions per turn without ever copying states. The search
//!   tree is an edge walk over one shared mutable state; candidate
//!   selection combines a segment tree (argmax-over-worst) with a
//!   generational hash map (per-turn dedup) for O(log W) eviction and
//!   per-turn work independent of depth.
//! - **Negamax** ([`minimax`], [`alpha_beta`]): depth-limited zero-sum
//!   game search over an `apply`/`rollback` state.
//! - **Time-bounded local search** ([`local_search`]): hill climbing and
//!   simulated annealing loops with batched clock reads.
//!
//! All searches are heuristic, single-threaded, and deterministic for a
//! fixed state implementation and PRNG seed.
//!
//! ## Quick start
//! ```
//! use frontier_search::{beam_search, problems::grid_path::GridPath};
//!
//! let grid = GridPath::new(vec![
//!     vec![1, 3, 1],
//!     vec![2, 9, 4],
//!     vec![1, 5, 2],
//! ]);
//! let plan = beam_search(grid.clone(), grid.plan_length(), 4, 0);
//! assert_eq!(plan.len(), 4);
//! assert!(grid.plan_value(&plan) >= 19);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains reference implementations:
//! - a monotone lattice walk (beam search template),
//! - a two-player tile-claiming duel (negamax template).
//!
//! These serve both as ready-to-use demos and as templates for wiring
//! your own states into the drivers.

pub mod alpha_beta;
pub mod beam;
pub mod builder;
pub mod local_search;
pub mod minimax;
pub mod probe_map;
pub mod problems;
pub mod rng;
pub mod segment_tree;
pub mod timer;
pub mod traits;
pub mod utils;

pub use crate::beam::{beam_search, BeamSelector, Candidate, EulerTourTree, TourEdge};
pub use crate::builder::BeamSearchBuilder;
pub use crate::local_search::{hill_climbing, hill_climbing_with_step, simulated_annealing};
pub use crate::rng::XorShift;
pub use crate::timer::Timer;
pub use crate::traits::{
    AnnealState, BeamState, BoundedCost, Evaluate, GameState, LocalState, NegamaxCost,
};
