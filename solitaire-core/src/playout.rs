//! Random playouts
//!
//! Plays uniformly random legal jumps until the game is over. Used by the
//! CLI to sample how often blind play finishes well from a given opening.

use crate::analysis::GameStatus;
use crate::game::Game;
use crate::moves::Jump;
use rand::prelude::*;
use serde::Serialize;

/// Outcome of one playout
#[derive(Clone, Debug, Serialize)]
pub struct PlayoutResult {
    pub status: GameStatus,
    pub marbles_left: usize,
    pub moves: Vec<Jump>,
}

impl PlayoutResult {
    pub fn moves_played(&self) -> usize {
        self.moves.len()
    }
}

/// Play random jumps on a copy of `game` until none remain
pub fn random_playout<R: Rng>(game: &Game, rng: &mut R) -> PlayoutResult {
    let mut current = game.clone();
    let mut moves = Vec::new();

    loop {
        let legal = current.legal_moves();
        let Some(&jump) = legal.choose(rng) else {
            break;
        };
        // Drawn from the legal list, so this cannot be rejected
        if current.apply_move(jump).is_err() {
            break;
        }
        moves.push(jump);
    }

    PlayoutResult {
        status: current.status(),
        marbles_left: current.count_marbles(),
        moves,
    }
}

/// Aggregate over many playouts
#[derive(Clone, Debug, Default, Serialize)]
pub struct PlayoutStats {
    pub games: usize,
    pub wins: usize,
    pub stuck: usize,
    /// Fewest marbles left by any playout
    pub best_marbles_left: Option<usize>,
    pub avg_marbles_left: f32,
    /// Move list of the best playout (first one found on ties)
    pub best_moves: Vec<Jump>,
}

impl PlayoutStats {
    pub fn from_results(results: &[PlayoutResult]) -> Self {
        let games = results.len();
        let wins = results
            .iter()
            .filter(|r| r.status == GameStatus::Won)
            .count();
        let stuck = games - wins;

        let best = results.iter().min_by_key(|r| r.marbles_left);
        let total_left: usize = results.iter().map(|r| r.marbles_left).sum();
        let avg_marbles_left = if games == 0 {
            0.0
        } else {
            total_left as f32 / games as f32
        };

        Self {
            games,
            wins,
            stuck,
            best_marbles_left: best.map(|r| r.marbles_left),
            avg_marbles_left,
            best_moves: best.map(|r| r.moves.clone()).unwrap_or_default(),
        }
    }
}

/// Run `games` playouts from `game`
pub fn run_playouts<R: Rng>(game: &Game, games: usize, rng: &mut R) -> PlayoutStats {
    let results: Vec<PlayoutResult> = (0..games).map(|_| random_playout(game, rng)).collect();
    PlayoutStats::from_results(&results)
}
