//! Ship definitions and placed ships backed by [`CellSet`] masks.

use core::fmt;

use super::bitboard::CellSet;
use super::common::BoardError;
use super::position::{Direction, Position};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends east (increasing `x`) from its origin.
    Horizontal,
    /// Extends south (increasing `y`) from its origin.
    Vertical,
}

impl Orientation {
    /// Direction in which the hull extends from its origin.
    pub fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::East,
            Orientation::Vertical => Direction::South,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board, with hits tracked per segment.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Position,
    mask: CellSet,
    hits: CellSet,
}

impl Ship {
    /// Lay `ship_type` out from `origin` along `orientation`.
    /// Fails with `ShipOutOfBounds` if any segment would leave the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Position,
    ) -> Result<Self, BoardError> {
        let mut mask = CellSet::new();
        let mut cursor = Some(origin);
        for _ in 0..ship_type.length() {
            let cell = cursor.ok_or(BoardError::ShipOutOfBounds)?;
            mask.insert(cell);
            cursor = cell.adjacent(orientation.direction());
        }
        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hits: CellSet::new(),
        })
    }

    /// Register an attack at `pos`. Returns `true` if it struck this ship.
    pub fn strike(&mut self, pos: Position) -> bool {
        if self.mask.contains(pos) {
            self.hits.insert(pos);
            true
        } else {
            false
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.mask.contains(pos)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mask(&self) -> CellSet {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn horizontal_ship_covers_cells_eastward() {
        let ship = Ship::new(ShipType::new("Destroyer", 2), Orientation::Horizontal, pos(3, 4))
            .unwrap();
        assert!(ship.occupies(pos(3, 4)));
        assert!(ship.occupies(pos(4, 4)));
        assert!(!ship.occupies(pos(3, 5)));
        assert_eq!(ship.mask().count_ones(), 2);
    }

    #[test]
    fn rejects_hull_past_the_edge() {
        let err = Ship::new(ShipType::new("Carrier", 5), Orientation::Vertical, pos(0, 6))
            .unwrap_err();
        assert_eq!(err, BoardError::ShipOutOfBounds);
    }

    #[test]
    fn sinks_once_every_segment_is_struck() {
        let mut ship =
            Ship::new(ShipType::new("Submarine", 3), Orientation::Vertical, pos(2, 2)).unwrap();
        assert!(!ship.strike(pos(3, 2)));
        assert!(ship.strike(pos(2, 2)));
        assert!(ship.strike(pos(2, 3)));
        assert!(!ship.is_sunk());
        assert!(ship.strike(pos(2, 4)));
        assert!(ship.is_sunk());
    }
}
