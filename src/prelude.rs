//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackCoordinator, AttackHistory, AttackOutcome, AttackResult, AttackStrategy, Board,
    BoardView, CpuPlayer, Direction, Player, Position, Skirmish,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_board};
