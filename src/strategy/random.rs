use log::{trace, warn};
use rand::Rng;

use super::AttackStrategy;
use crate::core::config::{CELL_COUNT, RANDOM_DRAW_ATTEMPTS};
use crate::core::history::AttackHistory;
use crate::core::position::Position;

/// Memoryless search drawing uniformly from unattacked cells.
///
/// Makes at most [`RANDOM_DRAW_ATTEMPTS`] draws, then falls back to the
/// first unattacked cell in scan order, so a turn never takes more than a
/// fixed amount of work however full the board is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearch;

impl RandomSearch {
    pub fn new() -> Self {
        RandomSearch
    }

    /// Pick an unattacked cell, or `None` if the board is exhausted.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R, history: &AttackHistory) -> Option<Position> {
        if history.is_full() {
            return None;
        }
        for _ in 0..RANDOM_DRAW_ATTEMPTS {
            let candidate = Position::from_index(rng.random_range(0..CELL_COUNT))?;
            if !history.contains(candidate) {
                trace!("random search drew {}", candidate);
                return Some(candidate);
            }
        }
        let fallback = history.first_unvisited();
        warn!(
            "random search missed {} times with {} cells attacked; scanning, found {:?}",
            RANDOM_DRAW_ATTEMPTS,
            history.len(),
            fallback
        );
        fallback
    }
}

impl AttackStrategy for RandomSearch {
    fn next_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &AttackHistory,
    ) -> Option<Position> {
        Self::pick(rng, history)
    }

    fn record_hit(&mut self, _pos: Position, _ship: Option<&str>, _sunk: bool) {}
    fn record_miss(&mut self, _pos: Position) {}
    fn reset(&mut self) {}
}
