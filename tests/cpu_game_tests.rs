use cpu_battleship::{
    AttackCoordinator, AttackOutcome, Board, CpuPlayer, Direction, Position, Skirmish, CELL_COUNT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Board the attacker never sees attacked; results are scripted by the test.
fn blank() -> Board {
    Board::new()
}

fn hit() -> AttackOutcome {
    AttackOutcome::Hit { sunk: false }
}

fn neighbours(p: Position) -> Vec<Position> {
    Direction::ALL.iter().filter_map(|&d| p.adjacent(d)).collect()
}

#[test]
fn test_cpu_vs_random_fleets() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut skirmish = Skirmish::new(CpuPlayer::seeded(seed), board);
        let stats = skirmish.run(CELL_COUNT).unwrap();
        assert!(stats.won, "seed {} did not finish", seed);
        assert!(stats.shots <= CELL_COUNT);
        assert_eq!(stats.ships_sunk, 4);
    }
}

#[test]
fn test_first_hit_probes_every_neighbour_then_searches() {
    for seed in 0..50 {
        let mut cpu = CpuPlayer::seeded(seed);
        let board = blank();
        let first = cpu.determine_next_attack(&board).unwrap();
        cpu.report_outcome(first, hit(), None).unwrap();

        let expected = neighbours(first);
        let mut probed = Vec::new();
        for _ in 0..expected.len() {
            let target = cpu.determine_next_attack(&board).unwrap();
            assert!(expected.contains(&target), "seed {}: {} not beside {}", seed, target, first);
            assert!(!probed.contains(&target));
            probed.push(target);
            cpu.report_outcome(target, AttackOutcome::Miss, None).unwrap();
        }

        let fallback = cpu.determine_next_attack(&board).unwrap();
        assert!(!cpu.history().contains(fallback));
        assert_eq!(cpu.strategy().hunt().and_then(|h| h.first_hit()), Some(first));
    }
}

#[test]
fn test_miss_at_axis_end_turns_back_through_first_hit() {
    let mut checked = 0;
    for seed in 0..200 {
        let mut cpu = CpuPlayer::seeded(seed);
        let board = blank();
        let first = cpu.determine_next_attack(&board).unwrap();
        if !(2..=7).contains(&first.x()) || !(2..=7).contains(&first.y()) {
            continue;
        }
        cpu.report_outcome(first, hit(), None).unwrap();
        let second = cpu.determine_next_attack(&board).unwrap();
        let direction = first.direction_to(second).unwrap();
        cpu.report_outcome(second, hit(), None).unwrap();

        let third = cpu.determine_next_attack(&board).unwrap();
        assert_eq!(Some(third), second.adjacent(direction));
        cpu.report_outcome(third, AttackOutcome::Miss, None).unwrap();

        let fourth = cpu.determine_next_attack(&board).unwrap();
        assert_eq!(Some(fourth), first.adjacent(direction.opposite()));
        checked += 1;
    }
    assert!(checked > 20, "only {} interior starts", checked);
}

#[test]
fn test_sink_discards_pursuit() {
    let mut near_ship = 0;
    let trials = 400;
    for seed in 0..trials {
        let mut cpu = CpuPlayer::seeded(seed);
        let board = blank();
        let first = cpu.determine_next_attack(&board).unwrap();
        cpu.report_outcome(first, hit(), None).unwrap();
        let second = cpu.determine_next_attack(&board).unwrap();
        cpu.report_outcome(second, AttackOutcome::Hit { sunk: true }, Some("Destroyer"))
            .unwrap();

        assert_eq!(*cpu.strategy(), AttackCoordinator::new());
        let next = cpu.determine_next_attack(&board).unwrap();
        if neighbours(first).contains(&next) || neighbours(second).contains(&next) {
            near_ship += 1;
        }
    }
    // Six cells border a two-cell ship; a uniform pick lands there about 6% of the time.
    assert!(near_ship < trials / 6, "{} of {} picks hugged the sunk ship", near_ship, trials);
}

#[test]
fn test_last_open_cell_is_found() {
    for seed in 0..10 {
        let mut cpu = CpuPlayer::seeded(seed);
        let board = blank();
        for _ in 0..CELL_COUNT - 1 {
            let target = cpu.determine_next_attack(&board).unwrap();
            cpu.report_outcome(target, AttackOutcome::Miss, None).unwrap();
        }
        let remaining = Position::all()
            .find(|&p| !cpu.history().contains(p))
            .unwrap();
        assert_eq!(cpu.determine_next_attack(&board), Ok(remaining));
    }
}

#[test]
fn test_reset_for_new_game_twice_matches_once() {
    let mut a = CpuPlayer::seeded(77);
    let board = blank();
    let target = a.determine_next_attack(&board).unwrap();
    a.report_outcome(target, hit(), None).unwrap();
    a.reset_for_new_game();
    let once = a.snapshot();
    a.reset_for_new_game();
    assert_eq!(a.snapshot(), once);
    assert!(once.history.is_empty());
    assert_eq!(once.pending, None);
}
