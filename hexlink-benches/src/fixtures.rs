//! Seeded inputs shared by the benchmarks.

use hexlink_board::{Board, Game, GameResult, RandomPlayer};
use hexlink_core::{RandomGraphBuilder, WeightedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Weight marking a missing edge in benchmark graphs.
pub const DISCONNECTED: u32 = u32::MAX;

/// Draws a reproducible graph with weights in `1..=100`.
///
/// # Errors
/// Returns [`BenchSetupError::Generate`] when `params` is rejected by the
/// builder.
pub fn random_graph(
    params: GraphBenchParams,
    seed: u64,
) -> Result<WeightedGraph<u32>, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(RandomGraphBuilder::new(params.vertices, DISCONNECTED)
        .with_edge_density(params.density)
        .with_weight_range(1, 100)
        .build(&mut rng)?)
}

/// Draws `count` vertex pairs in `0..vertices`.
#[must_use]
pub fn query_pairs(vertices: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..vertices), rng.gen_range(0..vertices)))
        .collect()
}

/// Plays a seeded random game to completion on a `size` by `size` board.
///
/// # Errors
/// Returns [`BenchSetupError::Board`] for a zero size and
/// [`BenchSetupError::Game`] if the game stops early.
pub fn random_game(size: usize, seed: u64) -> Result<GameResult, BenchSetupError> {
    let mut game = Game::new(Board::new(size, size)?);
    let mut one = RandomPlayer::new(SmallRng::seed_from_u64(seed));
    let mut two = RandomPlayer::new(SmallRng::seed_from_u64(seed ^ 0x9e37_79b9));
    Ok(game.play(&mut one, &mut two)?)
}
