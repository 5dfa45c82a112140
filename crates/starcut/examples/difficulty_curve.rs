//! Difficulty-curve report over the standard policy.
//!
//! Purpose
//! - Show, per level band, what the generator actually delivers: regions,
//!   placed vs requested objects, and the move budget.
//! - Confirm every sampled level is solvable by replaying its own division lines.
//!
//! Run: `cargo run -p starcut --release --example difficulty_curve`

use std::time::Instant;

use starcut::level::{generate_level, DifficultyPolicy, LevelCfg, StandardPolicy};
use starcut::moves::{Game, MoveCfg};
use starcut::prelude::ReplayToken;

const SEEDS: u64 = 20;

fn main() {
    let cfg = LevelCfg::default();
    println!("level  regions  stars(req)  junk(req)  moves  unsolved  ms/level");
    for level in [1u32, 10, 20, 40, 60, 80, 100] {
        let params = StandardPolicy.params(level);
        let (mut regions, mut stars, mut junk, mut unsolved) = (0usize, 0usize, 0usize, 0u64);
        let start = Instant::now();
        for seed in 0..SEEDS {
            let lvl = generate_level(
                (8.0, 12.0),
                &StandardPolicy,
                level,
                &cfg,
                ReplayToken::new(seed, level as u64),
            )
            .expect("standard policy yields valid params");
            regions += lvl.regions.len();
            stars += lvl.stars().count();
            junk += lvl.junk().count();

            let lines = lvl.division_lines.clone();
            let mut game = Game::new(lvl, MoveCfg::default());
            for l in &lines {
                game.begin_drag(l.start);
                game.end_drag(l.end);
            }
            if !lines.is_empty() && !game.is_solved() {
                unsolved += 1;
            }
        }
        let ms = start.elapsed().as_secs_f64() * 1e3 / SEEDS as f64;
        let n = SEEDS as f64;
        println!(
            "{level:>5}  {:>7.1}  {:>5.1}({:>2})  {:>5.1}({:>2})  {:>5}  {unsolved:>8}  {ms:>8.3}",
            regions as f64 / n,
            stars as f64 / n,
            params.star_count,
            junk as f64 / n,
            params.junk_count,
            params.move_budget,
        );
    }
}
