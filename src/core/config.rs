use super::ship::ShipType;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;
/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Random draws a search makes before falling back to a row-major scan.
pub const RANDOM_DRAW_ATTEMPTS: usize = 100;

/// Placement attempts per ship before random placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

pub const NUM_SHIPS: usize = 4;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Convert a ship name to the canonical static name used by the fleet.
/// Returns `None` if the name does not match any ship in [`FLEET`].
pub fn ship_type_static(name: &str) -> Option<&'static str> {
    FLEET.iter().map(|def| def.name()).find(|n| *n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_cell_total_matches_definitions() {
        let total: usize = FLEET.iter().map(|s| s.length()).sum();
        assert_eq!(total, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn ship_names_resolve() {
        assert_eq!(ship_type_static("Submarine"), Some("Submarine"));
        assert_eq!(ship_type_static("Cruiser"), None);
    }
}
