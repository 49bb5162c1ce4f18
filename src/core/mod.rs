//! Core game model (no_std compatible)
//!
//! Positions, the attack history, ships and the defending board. Nothing
//! here needs more than `alloc`, so the attacker can run on embedded targets
//! or compile to WebAssembly.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod history;
pub mod position;
pub mod ship;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError, CellSet};
pub use board::{Board, BoardView};
pub use common::{AttackError, AttackOutcome, AttackResult, BoardError, ContractViolation};
pub use config::*;
pub use history::{AttackHistory, DuplicateEntry};
pub use position::{Direction, Position, PositionError};
pub use ship::{Orientation, Ship, ShipType};
