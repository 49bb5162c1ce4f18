//! Shared result and error types.

use core::fmt;

use super::bitboard::BitBoardError;
use super::position::{Position, PositionError};

/// What the attacker learns about one of its shots.
///
/// Deliberately carries no ship identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Miss,
    Hit { sunk: bool },
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    pub fn is_sunk(self) -> bool {
        matches!(self, AttackOutcome::Hit { sunk: true })
    }
}

/// Result of an attack as resolved by the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Struck a ship that is still afloat.
    Hit(&'static str),
    Miss,
    /// Struck the last intact segment of the named ship.
    Sink(&'static str),
}

impl AttackResult {
    /// Name of the ship struck, if any.
    pub fn ship_name(self) -> Option<&'static str> {
        match self {
            AttackResult::Hit(name) | AttackResult::Sink(name) => Some(name),
            AttackResult::Miss => None,
        }
    }
}

impl From<AttackResult> for AttackOutcome {
    fn from(result: AttackResult) -> Self {
        match result {
            AttackResult::Miss => AttackOutcome::Miss,
            AttackResult::Hit(_) => AttackOutcome::Hit { sunk: false },
            AttackResult::Sink(_) => AttackOutcome::Hit { sunk: true },
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinates off the board.
    OutOfBounds(PositionError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// The cell was already attacked.
    AlreadyAttacked(Position),
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Occupancy mask and ship list disagree.
    UnknownShipHit(Position),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl From<PositionError> for BoardError {
    fn from(err: PositionError) -> Self {
        BoardError::OutOfBounds(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds(e) => write!(f, "{}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyAttacked(pos) => write!(f, "Position {} was already attacked", pos),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::UnknownShipHit(pos) => write!(f, "No ship found under hit at {}", pos),
        }
    }
}

/// Misuse of the attacker by the code driving turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// An outcome was reported while no target was outstanding.
    OutcomeWithoutTarget(Position),
    /// The reported position is not the one handed out.
    OutcomeMismatch { expected: Position, reported: Position },
    /// A new target was requested before the last one was reported.
    TargetStillPending(Position),
    /// The strategy proposed a cell that was already attacked.
    RepeatedTarget(Position),
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::OutcomeWithoutTarget(pos) => {
                write!(f, "outcome reported for {} but no attack was pending", pos)
            }
            ContractViolation::OutcomeMismatch { expected, reported } => write!(
                f,
                "outcome reported for {} but pending attack is {}",
                reported, expected
            ),
            ContractViolation::TargetStillPending(pos) => {
                write!(f, "attack on {} has not been reported yet", pos)
            }
            ContractViolation::RepeatedTarget(pos) => {
                write!(f, "strategy proposed already attacked cell {}", pos)
            }
        }
    }
}

/// Errors surfaced by the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Every cell on the board has been attacked; there is no move.
    ExhaustedSearchSpace,
    Contract(ContractViolation),
}

impl From<ContractViolation> for AttackError {
    fn from(v: ContractViolation) -> Self {
        AttackError::Contract(v)
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::ExhaustedSearchSpace => write!(f, "every cell has already been attacked"),
            AttackError::Contract(v) => write!(f, "contract violation: {}", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for AttackError {}
