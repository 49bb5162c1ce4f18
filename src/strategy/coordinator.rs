use log::debug;
use rand::Rng;

use super::hunt::DirectedHunt;
use super::random::RandomSearch;
use super::AttackStrategy;
use crate::core::history::AttackHistory;
use crate::core::position::Position;

/// The sub-strategy currently answering target queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveStrategy {
    Search(RandomSearch),
    Hunt(DirectedHunt),
}

/// Switches between random search and directed hunting.
///
/// Starts out searching. The first hit that does not sink a ship hands
/// control to a fresh [`DirectedHunt`]; any sinking hands it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCoordinator {
    active: ActiveStrategy,
}

impl AttackCoordinator {
    pub fn new() -> Self {
        AttackCoordinator {
            active: ActiveStrategy::Search(RandomSearch::new()),
        }
    }

    pub fn active(&self) -> &ActiveStrategy {
        &self.active
    }

    pub fn is_hunting(&self) -> bool {
        matches!(self.active, ActiveStrategy::Hunt(_))
    }

    /// The hunt in progress, if any.
    pub fn hunt(&self) -> Option<&DirectedHunt> {
        match &self.active {
            ActiveStrategy::Hunt(hunt) => Some(hunt),
            ActiveStrategy::Search(_) => None,
        }
    }
}

impl Default for AttackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackStrategy for AttackCoordinator {
    fn next_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &AttackHistory,
    ) -> Option<Position> {
        match &mut self.active {
            ActiveStrategy::Search(search) => search.next_target(rng, history),
            ActiveStrategy::Hunt(hunt) => hunt.next_target(rng, history),
        }
    }

    fn record_hit(&mut self, pos: Position, ship: Option<&str>, sunk: bool) {
        match &mut self.active {
            ActiveStrategy::Search(search) => {
                search.record_hit(pos, ship, sunk);
                if !sunk {
                    debug!("hit at {}; switching to directed hunt", pos);
                    let mut hunt = DirectedHunt::new();
                    hunt.record_hit(pos, ship, false);
                    self.active = ActiveStrategy::Hunt(hunt);
                }
            }
            ActiveStrategy::Hunt(hunt) => hunt.record_hit(pos, ship, sunk),
        }
        if sunk {
            debug!("ship sunk at {}; back to random search", pos);
            self.active = ActiveStrategy::Search(RandomSearch::new());
        }
    }

    fn record_miss(&mut self, pos: Position) {
        match &mut self.active {
            ActiveStrategy::Search(search) => search.record_miss(pos),
            ActiveStrategy::Hunt(hunt) => hunt.record_miss(pos),
        }
    }

    fn reset(&mut self) {
        self.active = ActiveStrategy::Search(RandomSearch::new());
    }
}
