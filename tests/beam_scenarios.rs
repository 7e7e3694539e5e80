//! End-to-end beam search scenarios and boundary cases.

use frontier_search::problems::grid_path::{GridPath, Step};
use frontier_search::{beam_search, BeamSearchBuilder, BeamState, Evaluate};

#[derive(Clone, Copy, Debug)]
struct ChainEval {
    cost: i64,
}

impl Evaluate for ChainEval {
    type Cost = i64;
    fn evaluate(&self) -> i64 {
        self.cost
    }
}

/// Integer line: start at 0, actions +1 and +2, finished at >= 5.
/// Cost is the negated position, the fingerprint the position itself,
/// so two ways of reaching the same sum deduplicate.
#[derive(Clone, Debug)]
struct ChainSum {
    x: i64,
}

impl BeamState for ChainSum {
    type Action = i64;
    type Eval = ChainEval;
    type Hash = u64;

    fn make_initial_node(&self) -> (ChainEval, u64) {
        (ChainEval { cost: 0 }, 0)
    }

    fn expand<F>(&self, _eval: &ChainEval, _hash: u64, mut push: F)
    where
        F: FnMut(i64, ChainEval, u64, bool),
    {
        for delta in [1i64, 2] {
            let next = self.x + delta;
            push(delta, ChainEval { cost: -next }, next as u64, next >= 5);
        }
    }

    fn apply(&mut self, action: i64) {
        self.x += action;
    }

    fn rollback(&mut self, action: i64) {
        self.x -= action;
    }
}

/// Root with no children at all.
#[derive(Clone)]
struct Barren;

impl BeamState for Barren {
    type Action = u32;
    type Eval = ChainEval;
    type Hash = u64;

    fn make_initial_node(&self) -> (ChainEval, u64) {
        (ChainEval { cost: 0 }, 0)
    }

    fn expand<F>(&self, _eval: &ChainEval, _hash: u64, _push: F)
    where
        F: FnMut(u32, ChainEval, u64, bool),
    {
    }

    fn apply(&mut self, _action: u32) {}
    fn rollback(&mut self, _action: u32) {}
}

/// Root whose very first child is already finished.
#[derive(Clone)]
struct InstantWin;

impl BeamState for InstantWin {
    type Action = u32;
    type Eval = ChainEval;
    type Hash = u64;

    fn make_initial_node(&self) -> (ChainEval, u64) {
        (ChainEval { cost: 0 }, 0)
    }

    fn expand<F>(&self, _eval: &ChainEval, _hash: u64, mut push: F)
    where
        F: FnMut(u32, ChainEval, u64, bool),
    {
        push(77, ChainEval { cost: -1 }, 1, true);
        push(78, ChainEval { cost: -2 }, 2, false);
    }

    fn apply(&mut self, _action: u32) {}
    fn rollback(&mut self, _action: u32) {}
}

#[test]
fn chain_reaches_the_target_in_minimum_turns() {
    let plan = beam_search(ChainSum { x: 0 }, 5, 2, 0);
    assert_eq!(plan.len(), 3, "5 is unreachable in two +2 steps");
    let total: i64 = plan.iter().sum();
    assert_eq!(total, 5, "first finished candidate stops exactly at 5");
    assert!(plan.iter().all(|&a| a == 1 || a == 2));
}

#[test]
fn zero_turns_returns_empty() {
    assert!(beam_search(ChainSum { x: 0 }, 0, 2, 0).is_empty());
}

#[test]
fn dead_frontier_returns_empty() {
    assert!(beam_search(Barren, 10, 4, 0).is_empty());
}

#[test]
fn finished_on_turn_zero_returns_single_action() {
    assert_eq!(beam_search(InstantWin, 3, 2, 0), vec![77]);
}

#[test]
fn width_one_degenerates_to_greedy() {
    // Greedy always grabs the locally best next cell.
    let grid = GridPath::new(vec![vec![0, 5, 0], vec![6, 1, 1]]);
    let plan = beam_search(grid.clone(), grid.plan_length(), 1, 0);
    assert_eq!(plan, vec![Step::Down, Step::Right, Step::Right]);
}

#[test]
fn turn_cap_returns_best_live_leaf() {
    // Cap the chain below the finish line: the driver must fall back to
    // the lowest-cost live leaf, which is the farthest position.
    let plan = beam_search(ChainSum { x: 0 }, 2, 2, 0);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.iter().sum::<i64>(), 4, "two +2 steps go farthest");
}

#[test]
fn explicit_hash_capacity_is_honored() {
    let plan = beam_search(ChainSum { x: 0 }, 5, 2, 64);
    assert_eq!(plan.iter().sum::<i64>(), 5);
}

#[test]
fn builder_matches_direct_call() {
    let direct = beam_search(ChainSum { x: 0 }, 5, 2, 0);
    let built = BeamSearchBuilder::new(2, 5).run(ChainSum { x: 0 });
    assert_eq!(direct, built);

    let capped = BeamSearchBuilder::new(2, 5)
        .with_hash_capacity(64)
        .run(ChainSum { x: 0 });
    assert_eq!(direct, capped);
}

#[test]
fn grid_plans_apply_cleanly_to_a_fresh_state() {
    let grid = GridPath::new(vec![
        vec![3, 1, 4, 1],
        vec![5, 9, 2, 6],
        vec![5, 3, 5, 8],
    ]);
    for width in [1usize, 2, 4, 16] {
        let plan = beam_search(grid.clone(), grid.plan_length(), width, 0);
        assert_eq!(plan.len(), grid.plan_length());
        let rights = plan.iter().filter(|&&s| s == Step::Right).count();
        let downs = plan.iter().filter(|&&s| s == Step::Down).count();
        assert_eq!(rights, grid.cols() - 1);
        assert_eq!(downs, grid.rows() - 1);
    }
}
