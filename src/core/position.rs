//! Board coordinates and compass directions.
//!
//! A [`Position`] can only be obtained through range-checked constructors,
//! so every value in circulation is on the board.

use core::fmt;

use super::config::{BOARD_SIZE, CELL_COUNT};

/// Errors returned when building a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Coordinates fall outside `[0, BOARD_SIZE)`.
    OutOfBounds { x: i16, y: i16 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfBounds { x, y } => {
                write!(f, "Position ({}, {}) is out of bounds", x, y)
            }
        }
    }
}

/// One of the four axis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in stable enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit `(dx, dy)` step. North decreases `y`.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Position of this direction within [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// A cell on the board. Immutable; compared and hashed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Build a position, failing with `OutOfBounds` off the board.
    pub fn new(x: u8, y: u8) -> Result<Self, PositionError> {
        Self::from_signed(x as i16, y as i16)
    }

    fn from_signed(x: i16, y: i16) -> Result<Self, PositionError> {
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Ok(Position {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(PositionError::OutOfBounds { x, y })
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Scan index in `[0, CELL_COUNT)`; `x` is the major axis.
    pub fn index(self) -> usize {
        self.x as usize * BOARD_SIZE as usize + self.y as usize
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Position {
            x: (index / size) as u8,
            y: (index % size) as u8,
        })
    }

    /// The neighbouring cell in `direction`, or `None` past the edge.
    pub fn adjacent(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Self::from_signed(self.x as i16 + dx as i16, self.y as i16 + dy as i16).ok()
    }

    /// Direction leading from `self` to `other` when the two are neighbours.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.adjacent(d) == Some(other))
    }

    /// Every board cell in scan order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Position::from_index)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(x, y)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn rejects_off_board_coordinates() {
        assert_eq!(
            Position::new(10, 3),
            Err(PositionError::OutOfBounds { x: 10, y: 3 })
        );
        assert!(Position::new(0, 9).is_ok());
    }

    #[test]
    fn adjacent_stops_at_edges() {
        let corner = pos(0, 0);
        assert_eq!(corner.adjacent(Direction::North), None);
        assert_eq!(corner.adjacent(Direction::West), None);
        assert_eq!(corner.adjacent(Direction::East), Some(pos(1, 0)));
        assert_eq!(corner.adjacent(Direction::South), Some(pos(0, 1)));
        assert_eq!(pos(9, 9).adjacent(Direction::East), None);
    }

    #[test]
    fn opposites_pair_up() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn index_round_trips_through_scan_order() {
        let cells: Vec<_> = Position::all().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], pos(0, 0));
        assert_eq!(cells[1], pos(0, 1));
        for (i, p) in cells.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(Position::from_index(CELL_COUNT), None);
    }

    #[test]
    fn direction_to_finds_neighbours_only() {
        assert_eq!(pos(5, 5).direction_to(pos(6, 5)), Some(Direction::East));
        assert_eq!(pos(5, 5).direction_to(pos(5, 4)), Some(Direction::North));
        assert_eq!(pos(5, 5).direction_to(pos(7, 5)), None);
    }
}
