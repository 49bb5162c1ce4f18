//! Append-only record of the cells the attacker has already targeted.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use super::bitboard::CellSet;
use super::config::CELL_COUNT;
use super::position::Position;

/// Every position attacked so far in one game, in the order attacked.
///
/// Membership is answered from a bitboard, so lookups are constant time.
/// The history never shrinks and never holds a position twice.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(try_from = "Vec<Position>", into = "Vec<Position>")
)]
pub struct AttackHistory {
    cells: CellSet,
    order: Vec<Position>,
}

impl AttackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(pos)
    }

    /// Append `pos`. Returns `false`, leaving the history untouched, if
    /// `pos` was already recorded.
    pub fn record(&mut self, pos: Position) -> bool {
        if !self.cells.insert(pos) {
            return false;
        }
        self.order.push(pos);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True once every board cell has been attacked.
    pub fn is_full(&self) -> bool {
        self.len() == CELL_COUNT
    }

    /// Attacked positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.order.iter().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.order.last().copied()
    }

    /// Bitboard of attacked cells.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    /// First cell in scan order not yet attacked.
    pub fn first_unvisited(&self) -> Option<Position> {
        Position::all().find(|&p| !self.contains(p))
    }

    /// Forget everything. Only used between games.
    pub(crate) fn clear(&mut self) {
        self.cells = CellSet::new();
        self.order.clear();
    }
}

impl core::fmt::Debug for AttackHistory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

/// A sequence with a repeated position cannot be a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEntry(pub Position);

impl core::fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "position {} appears twice in attack history", self.0)
    }
}

impl TryFrom<Vec<Position>> for AttackHistory {
    type Error = DuplicateEntry;

    fn try_from(order: Vec<Position>) -> Result<Self, Self::Error> {
        let mut history = AttackHistory::new();
        for pos in order {
            if !history.record(pos) {
                return Err(DuplicateEntry(pos));
            }
        }
        Ok(history)
    }
}

impl From<AttackHistory> for Vec<Position> {
    fn from(history: AttackHistory) -> Self {
        history.order
    }
}
