//! Time-bounded local search drivers.
//!
//! Both drivers hand control to the user state's `update` in batches,
//! reading the monotonic clock only between batches so the clock read
//! amortizes away.

use crate::rng::XorShift;
use crate::timer::Timer;
use crate::traits::{AnnealState, LocalState};

/// Updates performed between clock reads.
pub const DEFAULT_STEP: usize = 256;

/// Run `state.update()` until `budget_ms` milliseconds have elapsed,
/// in batches of [`DEFAULT_STEP`].
pub fn hill_climbing<S: LocalState>(state: &mut S, budget_ms: i64) {
    hill_climbing_with_step(state, budget_ms, DEFAULT_STEP);
}

/// [`hill_climbing`] with an explicit batch size.
pub fn hill_climbing_with_step<S: LocalState>(state: &mut S, budget_ms: i64, step: usize) {
    let timer = Timer::new();
    while timer.elapsed_ms() < budget_ms {
        for _ in 0..step {
            state.update();
        }
    }
}

/// Run simulated annealing for `budget_ms` milliseconds.
///
/// The temperature interpolates linearly from `start_temp` to
/// `end_temp` over the budget. Each update receives the acceptance
/// threshold `temp * ln(u)` for a fresh uniform `u`, plus the current
/// progress fraction; the state applies the threshold to its own cost
/// delta. Thresholds are drawn from a deterministically seeded
/// [`XorShift`], so the accept/reject stream depends only on the
/// temperature schedule.
pub fn simulated_annealing<S: AnnealState>(
    state: &mut S,
    start_temp: f64,
    end_temp: f64,
    budget_ms: i64,
    step: usize,
) {
    let timer = Timer::new();
    let mut rng = XorShift::new();
    loop {
        let now = timer.elapsed_ms();
        if now >= budget_ms {
            break;
        }
        let progress = now as f64 / budget_ms as f64;
        let temp = start_temp + (end_temp - start_temp) * progress;
        for _ in 0..step {
            state.update(temp * rng.probability().ln(), progress);
        }
    }
}
