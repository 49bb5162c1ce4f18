//! Player trait and implementations
//!
//! A Player is responsible for:
//! - Placing ships on its own board
//! - Selecting targets on the opponent's board
//! - Handling feedback from its attacks

use rand::Rng;

use crate::core::{
    board::{Board, BoardView},
    common::{AttackError, AttackResult, BoardError},
    position::Position,
};

/// Interface implemented by the sides of a game.
pub trait Player {
    /// Place all ships onto the provided board.
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to attack on `opponent`.
    fn select_target(&mut self, opponent: &dyn BoardView) -> Result<Position, AttackError>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, pos: Position, result: AttackResult) -> Result<(), AttackError>;

    /// Forget a selected target the opponent's board refused to resolve.
    fn abandon_target(&mut self, _pos: Position) {}
}

pub mod cpu;
pub use cpu::{CpuPlayer, CpuSnapshot};
