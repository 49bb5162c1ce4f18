//! Turn orchestration: one attacker against one defending board.

use core::fmt;
use log::{debug, info};

use crate::core::{
    board::Board,
    common::{AttackError, AttackResult, BoardError},
    config::CELL_COUNT,
    position::Position,
};
use crate::player::Player;

/// Errors that stop a skirmish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Attack(AttackError),
    Board(BoardError),
}

impl From<AttackError> for GameError {
    fn from(err: AttackError) -> Self {
        GameError::Attack(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Attack(e) => write!(f, "attacker error: {}", e),
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Tally of one skirmish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub ships_sunk: usize,
    /// Every ship on the board was sunk.
    pub won: bool,
}

/// One turn: where the attacker fired and what it struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub target: Position,
    pub result: AttackResult,
}

/// Drives a [`Player`] against a defending [`Board`] in strict
/// request, apply, report order.
pub struct Skirmish<P: Player> {
    attacker: P,
    board: Board,
    stats: GameStats,
}

impl<P: Player> Skirmish<P> {
    pub fn new(attacker: P, board: Board) -> Self {
        Skirmish {
            attacker,
            board,
            stats: GameStats::default(),
        }
    }

    /// Play a single turn.
    ///
    /// When the board refuses the attack, the attacker is told to abandon
    /// the target so a later turn can select again.
    pub fn play_turn(&mut self) -> Result<Turn, GameError> {
        let target = self.attacker.select_target(&self.board)?;
        let result = match self.board.receive_attack(target) {
            Ok(result) => result,
            Err(err) => {
                self.attacker.abandon_target(target);
                return Err(err.into());
            }
        };
        self.attacker.handle_attack_result(target, result)?;

        self.stats.shots += 1;
        match result {
            AttackResult::Miss => self.stats.misses += 1,
            AttackResult::Hit(_) => self.stats.hits += 1,
            AttackResult::Sink(name) => {
                self.stats.hits += 1;
                self.stats.ships_sunk += 1;
                debug!("{} sunk after {} shots", name, self.stats.shots);
            }
        }
        self.stats.won = self.board.all_sunk();
        Ok(Turn { target, result })
    }

    /// Play until the fleet is sunk or `max_turns` turns have been played.
    pub fn run(&mut self, max_turns: usize) -> Result<GameStats, GameError> {
        let limit = max_turns.min(CELL_COUNT);
        while !self.is_over() && self.stats.shots < limit {
            self.play_turn()?;
        }
        info!(
            "skirmish over after {} shots: {} hits, {} ships sunk",
            self.stats.shots, self.stats.hits, self.stats.ships_sunk
        );
        Ok(self.stats)
    }

    pub fn is_over(&self) -> bool {
        self.stats.won
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn attacker(&self) -> &P {
        &self.attacker
    }

    pub fn into_parts(self) -> (P, Board) {
        (self.attacker, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BoardView;
    use crate::core::ship::Orientation;
    use crate::player::CpuPlayer;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    /// Attacker that fires the same cell forever.
    struct Stubborn(Position);

    /// Fires the cells in order, refusing to move on until each is resolved.
    struct Queued {
        targets: Vec<Position>,
        pending: Option<Position>,
    }

    impl Player for Queued {
        fn place_ships<R: Rng + ?Sized>(&mut self, _rng: &mut R, _board: &mut Board) -> Result<(), BoardError> {
            Ok(())
        }

        fn select_target(&mut self, _opponent: &dyn BoardView) -> Result<Position, AttackError> {
            if let Some(p) = self.pending {
                return Err(crate::core::common::ContractViolation::TargetStillPending(p).into());
            }
            let next = self.targets.remove(0);
            self.pending = Some(next);
            Ok(next)
        }

        fn handle_attack_result(&mut self, _pos: Position, _result: AttackResult) -> Result<(), AttackError> {
            self.pending = None;
            Ok(())
        }

        fn abandon_target(&mut self, pos: Position) {
            if self.pending == Some(pos) {
                self.pending = None;
            }
        }
    }

    impl Player for Stubborn {
        fn place_ships<R: Rng + ?Sized>(&mut self, _rng: &mut R, _board: &mut Board) -> Result<(), BoardError> {
            Ok(())
        }

        fn select_target(&mut self, _opponent: &dyn BoardView) -> Result<Position, AttackError> {
            Ok(self.0)
        }

        fn handle_attack_result(&mut self, _pos: Position, _result: AttackResult) -> Result<(), AttackError> {
            Ok(())
        }
    }

    #[test]
    fn cpu_sinks_a_random_fleet() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut skirmish = Skirmish::new(CpuPlayer::seeded(42), board);
        let stats = skirmish.run(CELL_COUNT).unwrap();
        assert!(stats.won);
        assert_eq!(stats.ships_sunk, 4);
        assert_eq!(stats.hits + stats.misses, stats.shots);
        assert_eq!(skirmish.attacker().history().len(), stats.shots);
    }

    #[test]
    fn repeated_cell_surfaces_board_error() {
        let mut board = Board::new();
        board.place(3, pos(0, 0), Orientation::Horizontal).unwrap();
        let mut skirmish = Skirmish::new(Stubborn(pos(5, 5)), board);
        skirmish.play_turn().unwrap();
        assert_eq!(
            skirmish.play_turn(),
            Err(GameError::Board(BoardError::AlreadyAttacked(pos(5, 5))))
        );
        assert_eq!(skirmish.stats().shots, 1);
    }

    #[test]
    fn refused_attack_releases_the_pending_target() {
        let mut board = Board::new();
        board.place(3, pos(0, 0), Orientation::Horizontal).unwrap();
        board.receive_attack(pos(5, 5)).unwrap();
        let attacker = Queued {
            targets: vec![pos(5, 5), pos(0, 0)],
            pending: None,
        };
        let mut skirmish = Skirmish::new(attacker, board);
        assert_eq!(
            skirmish.play_turn(),
            Err(GameError::Board(BoardError::AlreadyAttacked(pos(5, 5))))
        );
        let turn = skirmish.play_turn().unwrap();
        assert_eq!(turn.target, pos(0, 0));
        assert_eq!(turn.result, AttackResult::Hit("Destroyer"));
        assert_eq!(skirmish.stats().shots, 1);
    }
}
