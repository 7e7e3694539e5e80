//! Demo: two alpha-beta players fight out a full tile duel.
//!
//! Run with:
//! `cargo run --example tile_duel`

use frontier_search::alpha_beta;
use frontier_search::problems::tile_duel::TileDuel;
use frontier_search::traits::GameState;

fn main() {
    let mut duel = TileDuel::new([[2, 7, 1], [8, 2, 8]], [[1, 8], [2, 8], [4, 5]]);

    let mut turn = 1;
    while !duel.is_finished() {
        let (row, col) = alpha_beta::best_action(&mut duel, 9);
        let player = if turn % 2 == 1 { "first " } else { "second" };
        println!("turn {turn}: {player} claims ({row}, {col})");
        duel.apply((row, col));
        turn += 1;
    }

    let (first, second) = duel.scores();
    println!("final score: first {first}, second {second} (total {})", duel.total_bonus());
}
