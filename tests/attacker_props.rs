use cpu_battleship::{
    AttackHistory, AttackOutcome, Board, CpuPlayer, Position, RandomSearch, CELL_COUNT,
    RANDOM_DRAW_ATTEMPTS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, RngCore, SeedableRng};

/// Wraps an RNG and counts how often it is drawn from.
struct CountingRng {
    inner: SmallRng,
    draws: usize,
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst)
    }
}

fn outcome(code: u8) -> AttackOutcome {
    match code % 4 {
        0 | 1 => AttackOutcome::Miss,
        2 => AttackOutcome::Hit { sunk: false },
        _ => AttackOutcome::Hit { sunk: true },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever the outcomes, a whole game never targets a cell twice.
    #[test]
    fn scripted_outcomes_never_repeat(
        seed in any::<u64>(),
        codes in prop::collection::vec(any::<u8>(), CELL_COUNT),
    ) {
        let mut cpu = CpuPlayer::seeded(seed);
        let board = Board::new();
        let mut seen = AttackHistory::new();
        for code in codes {
            let target = cpu.determine_next_attack(&board).unwrap();
            prop_assert!(seen.record(target), "{} targeted twice", target);
            cpu.report_outcome(target, outcome(code), None).unwrap();
            prop_assert_eq!(cpu.history().len(), seen.len());
        }
        prop_assert!(cpu.history().is_full());
    }

    /// Real fleets: the attacker only ever fires at fresh cells.
    #[test]
    fn real_fleet_never_repeats(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut cpu = CpuPlayer::seeded(seed ^ 0x5eed);
        while !board.all_sunk() {
            let target = cpu.determine_next_attack(&board).unwrap();
            let result = board.receive_attack(target).unwrap();
            cpu.report_outcome(target, result.into(), result.ship_name()).unwrap();
        }
        prop_assert!(cpu.history().len() <= CELL_COUNT);
    }

    /// Random search stays within a fixed draw budget however full the board.
    #[test]
    fn random_search_draws_are_bounded(
        seed in any::<u64>(),
        attacked in prop::collection::vec(any::<bool>(), CELL_COUNT),
        open in 0..CELL_COUNT,
    ) {
        let mut history = AttackHistory::new();
        for (index, &taken) in attacked.iter().enumerate() {
            if taken && index != open {
                history.record(Position::from_index(index).unwrap());
            }
        }
        let mut rng = CountingRng { inner: SmallRng::seed_from_u64(seed), draws: 0 };
        let target = RandomSearch::pick(&mut rng, &history).unwrap();
        prop_assert!(!history.contains(target));
        prop_assert!(rng.draws <= 4 * RANDOM_DRAW_ATTEMPTS, "{} draws", rng.draws);
    }
}
