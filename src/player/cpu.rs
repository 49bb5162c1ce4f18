use log::{debug, error, info, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Player;
use crate::core::{
    board::{Board, BoardView},
    common::{AttackError, AttackOutcome, AttackResult, BoardError, ContractViolation},
    config::ship_type_static,
    history::AttackHistory,
    position::Position,
};
use crate::strategy::{AttackCoordinator, AttackStrategy};

/// Saved state of a [`CpuPlayer`] partway through one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuSnapshot {
    pub strategy: AttackCoordinator,
    pub history: AttackHistory,
    pub pending: Option<Position>,
}

/// The automated opponent.
///
/// Each turn the driver calls [`determine_next_attack`], applies the attack,
/// then calls [`report_outcome`] for exactly that position before asking
/// again. Out-of-order calls are rejected with a [`ContractViolation`].
///
/// [`determine_next_attack`]: CpuPlayer::determine_next_attack
/// [`report_outcome`]: CpuPlayer::report_outcome
pub struct CpuPlayer {
    strategy: AttackCoordinator,
    history: AttackHistory,
    pending: Option<Position>,
    rng: SmallRng,
}

impl CpuPlayer {
    pub fn new(rng: SmallRng) -> Self {
        CpuPlayer {
            strategy: AttackCoordinator::new(),
            history: AttackHistory::new(),
            pending: None,
            rng,
        }
    }

    /// Player whose every choice is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Pick the next cell to attack and mark it pending.
    ///
    /// `board` is only consulted to double check that the cell has not been
    /// attacked already.
    pub fn determine_next_attack<B: BoardView + ?Sized>(
        &mut self,
        board: &B,
    ) -> Result<Position, AttackError> {
        if let Some(pending) = self.pending {
            error!("next attack requested while {} is unreported", pending);
            return Err(ContractViolation::TargetStillPending(pending).into());
        }
        let target = self
            .strategy
            .next_target(&mut self.rng, &self.history)
            .ok_or(AttackError::ExhaustedSearchSpace)?;
        if self.history.contains(target) || board.is_attacked(target) {
            error!("strategy proposed already attacked cell {}", target);
            return Err(ContractViolation::RepeatedTarget(target).into());
        }
        trace!("attacking {}", target);
        self.pending = Some(target);
        Ok(target)
    }

    /// Record the result of the pending attack at `pos`.
    ///
    /// `ship` is matched against the fleet and passed through to the
    /// strategy; it never drives a decision. A cell already in the history
    /// is rejected with `RepeatedTarget` before the strategy sees it.
    pub fn report_outcome(
        &mut self,
        pos: Position,
        outcome: AttackOutcome,
        ship: Option<&str>,
    ) -> Result<(), AttackError> {
        let expected = self
            .pending
            .ok_or(ContractViolation::OutcomeWithoutTarget(pos))?;
        if expected != pos {
            error!("outcome for {} reported while {} is pending", pos, expected);
            return Err(ContractViolation::OutcomeMismatch {
                expected,
                reported: pos,
            }
            .into());
        }
        self.pending = None;
        if !self.history.record(pos) {
            error!("outcome for {} reported twice", pos);
            return Err(ContractViolation::RepeatedTarget(pos).into());
        }
        let ship = ship.and_then(|name| {
            let known = ship_type_static(name);
            if known.is_none() {
                warn!("hit at {} reported unknown ship {:?}", pos, name);
            }
            known
        });
        match outcome {
            AttackOutcome::Hit { sunk } => self.strategy.record_hit(pos, ship, sunk),
            AttackOutcome::Miss => self.strategy.record_miss(pos),
        }
        Ok(())
    }

    /// Drop the pending target at `pos` without recording an outcome, for
    /// when the defending board refused the attack.
    pub fn abandon_target(&mut self, pos: Position) {
        if self.pending == Some(pos) {
            debug!("abandoning unreported target {}", pos);
            self.pending = None;
        }
    }

    /// Forget everything about the previous game. The RNG keeps running.
    pub fn reset_for_new_game(&mut self) {
        info!("resetting attacker after {} shots", self.history.len());
        self.strategy.reset();
        self.history.clear();
        self.pending = None;
    }

    pub fn history(&self) -> &AttackHistory {
        &self.history
    }

    pub fn strategy(&self) -> &AttackCoordinator {
        &self.strategy
    }

    /// Target handed out but not yet reported.
    pub fn pending(&self) -> Option<Position> {
        self.pending
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            strategy: self.strategy,
            history: self.history.clone(),
            pending: self.pending,
        }
    }

    /// Resume a game from `snapshot`, drawing future randomness from `rng`.
    ///
    /// A pending target that is already in the history could be reported a
    /// second time, so such a snapshot is refused.
    pub fn from_snapshot(snapshot: CpuSnapshot, rng: SmallRng) -> Result<Self, ContractViolation> {
        if let Some(pending) = snapshot.pending {
            if snapshot.history.contains(pending) {
                error!("snapshot has {} both pending and attacked", pending);
                return Err(ContractViolation::RepeatedTarget(pending));
            }
        }
        Ok(CpuPlayer {
            strategy: snapshot.strategy,
            history: snapshot.history,
            pending: snapshot.pending,
            rng,
        })
    }

    /// Encode the current game state with bincode.
    #[cfg(feature = "std")]
    pub fn save(&self) -> bincode::Result<std::vec::Vec<u8>> {
        bincode::serialize(&self.snapshot())
    }

    /// Decode state written by [`CpuPlayer::save`].
    #[cfg(feature = "std")]
    pub fn restore(bytes: &[u8], rng: SmallRng) -> bincode::Result<Self> {
        let snapshot: CpuSnapshot = bincode::deserialize(bytes)?;
        Self::from_snapshot(snapshot, rng)
            .map_err(|e| Box::new(bincode::ErrorKind::Custom(e.to_string())))
    }
}

impl Player for CpuPlayer {
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
        board.place_fleet_randomly(rng)
    }

    fn select_target(&mut self, opponent: &dyn BoardView) -> Result<Position, AttackError> {
        self.determine_next_attack(opponent)
    }

    fn handle_attack_result(&mut self, pos: Position, result: AttackResult) -> Result<(), AttackError> {
        self.report_outcome(pos, result.into(), result.ship_name())
    }

    fn abandon_target(&mut self, pos: Position) {
        CpuPlayer::abandon_target(self, pos)
    }
}
