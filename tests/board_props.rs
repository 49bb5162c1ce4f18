use cpu_battleship::{Board, BoardError, BoardView, Position, CELL_COUNT, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_covers_exact_cell_count(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
        let occupied = Position::all().filter(|&p| board.is_occupied(p)).count();
        prop_assert_eq!(occupied, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn attack_is_not_repeatable(seed in any::<u64>(), index in 0..CELL_COUNT) {
        let mut board = random_board(seed);
        let target = Position::from_index(index).unwrap();
        let hits_before = board.hits().count_ones();
        let first = board.receive_attack(target).unwrap();
        prop_assert!(board.is_attacked(target));
        prop_assert_eq!(first.ship_name().is_some(), board.is_occupied(target));
        prop_assert_eq!(
            board.receive_attack(target).unwrap_err(),
            BoardError::AlreadyAttacked(target)
        );
        let expected = hits_before + usize::from(board.is_occupied(target));
        prop_assert_eq!(board.hits().count_ones(), expected);
    }
}
