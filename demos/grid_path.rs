//! Demo: beam search over a random value grid.
//!
//! Run with:
//! `cargo run --example grid_path`

use frontier_search::problems::grid_path::{GridPath, Step};
use frontier_search::{beam_search, XorShift};

fn main() {
    let mut rng = XorShift::new();
    let rows = 24;
    let cols = 24;
    let values: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| i64::from(rng.uniform(100))).collect())
        .collect();

    let grid = GridPath::new(values);
    for width in [1usize, 8, 64] {
        let plan = beam_search(grid.clone(), grid.plan_length(), width, 0);
        let rendered: String = plan
            .iter()
            .map(|s| match s {
                Step::Right => 'R',
                Step::Down => 'D',
            })
            .collect();
        println!(
            "width {width:>3}: collected {:>5}  plan {rendered}",
            grid.plan_value(&plan)
        );
    }
}
