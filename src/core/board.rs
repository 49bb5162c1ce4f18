//! Defending board: ship placement, legality checks and incoming attacks.

use core::fmt;
use log::debug;
use rand::Rng;

use super::bitboard::CellSet;
use super::common::{AttackResult, BoardError};
use super::config::{BOARD_SIZE, FLEET, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use super::position::Position;
use super::ship::{Orientation, Ship};

/// Read-only queries the attacker may make of the defending board.
pub trait BoardView {
    /// Has this cell already been targeted.
    fn is_attacked(&self, pos: Position) -> bool;
    /// Does this cell hold part of a ship.
    fn is_occupied(&self, pos: Position) -> bool;
}

/// Ship placements plus the cells attacked so far.
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: CellSet,
    hits: CellSet,
    misses: CellSet,
}

impl Board {
    /// An empty board with the whole fleet still unplaced.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: CellSet::new(),
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    /// Whether the fleet ship at `ship_index` fits at `origin` without
    /// leaving the board or overlapping a placed ship.
    pub fn can_place(&self, ship_index: usize, origin: Position, orientation: Orientation) -> bool {
        self.check_placement(ship_index, origin, orientation).is_ok()
    }

    fn check_placement(
        &self,
        ship_index: usize,
        origin: Position,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let def = FLEET.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(*def, orientation, origin)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(ship)
    }

    /// Place fleet ship `ship_index` at `origin`.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Position,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.check_placement(ship_index, origin, orientation)?;
        self.ship_map = self.ship_map | ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random legal `(origin, orientation)` for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Position, Orientation), BoardError> {
        let def = FLEET.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let span = BOARD_SIZE as usize - def.length();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (span, BOARD_SIZE as usize - 1),
                Orientation::Vertical => (BOARD_SIZE as usize - 1, span),
            };
            let origin = Position::new(
                rng.random_range(0..=max_x) as u8,
                rng.random_range(0..=max_y) as u8,
            )?;
            if self.can_place(ship_index, origin, orientation) {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every unplaced ship of the fleet at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            if self.ships[i].is_some() {
                continue;
            }
            let (origin, orientation) = self.random_placement(rng, i)?;
            self.place(i, origin, orientation)?;
        }
        Ok(())
    }

    /// Resolve an incoming attack at `pos`.
    pub fn receive_attack(&mut self, pos: Position) -> Result<AttackResult, BoardError> {
        if self.is_attacked(pos) {
            return Err(BoardError::AlreadyAttacked(pos));
        }
        if !self.ship_map.contains(pos) {
            self.misses.insert(pos);
            return Ok(AttackResult::Miss);
        }
        self.hits.insert(pos);
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.occupies(pos))
            .ok_or(BoardError::UnknownShipHit(pos))?;
        ship.strike(pos);
        let name = ship.ship_type().name();
        if ship.is_sunk() {
            debug!("{} sunk by attack at {}", name, pos);
            Ok(AttackResult::Sink(name))
        } else {
            Ok(AttackResult::Hit(name))
        }
    }

    /// True once the whole fleet is placed and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_some_and(|ship| ship.is_sunk()))
    }

    /// True once every fleet ship has been placed.
    pub fn fleet_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    pub fn ship_at(&self, pos: Position) -> Option<&Ship> {
        self.ships.iter().flatten().find(|s| s.occupies(pos))
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship_map(&self) -> CellSet {
        self.ship_map
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for Board {
    fn is_attacked(&self, pos: Position) -> bool {
        self.hits.contains(pos) || self.misses.contains(pos)
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.ship_map.contains(pos)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("hits", &self.hits.count_ones())
            .field("misses", &self.misses.count_ones())
            .finish()
    }
}
