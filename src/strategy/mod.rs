//! Attack selection for the automated opponent.
//!
//! Strategies see only the public outcome of their own shots. Each turn the
//! driver asks for a target, applies it to the defending board and reports
//! the outcome back before asking again.
//!
//! - [`RandomSearch`]: uniform choice among unattacked cells.
//! - [`DirectedHunt`]: finds and walks the axis of a ship that has been hit.
//! - [`AttackCoordinator`]: switches between the two on hit/miss/sunk events.

use rand::Rng;

use crate::core::history::AttackHistory;
use crate::core::position::Position;

pub mod coordinator;
pub mod hunt;
pub mod random;

pub use coordinator::AttackCoordinator;
pub use hunt::{DirectedHunt, DirectionPool, HuntPhase};
pub use random::RandomSearch;

/// Contract shared by every attack strategy.
pub trait AttackStrategy {
    /// Choose the next cell to attack. Never returns a cell in `history`;
    /// returns `None` only when every cell has been attacked.
    fn next_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &AttackHistory,
    ) -> Option<Position>;

    /// A shot at `pos` struck a ship. `ship` is the name reported by the
    /// defender, if any; strategies do not rely on it.
    fn record_hit(&mut self, pos: Position, ship: Option<&str>, sunk: bool);

    /// A shot at `pos` found open water.
    fn record_miss(&mut self, pos: Position);

    /// Forget all per-game state.
    fn reset(&mut self);
}
