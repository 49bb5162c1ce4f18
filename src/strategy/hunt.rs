//! Directed hunting around a confirmed hit.
//!
//! The hunt moves through three phases:
//!
//! 1. **Idle**: no ship is being pursued; targets come from [`RandomSearch`].
//! 2. **Discovery**: a ship was hit at `first_hit`. Its unattacked
//!    neighbours are tried one direction at a time, in random order.
//! 3. **Axis**: a second hit fixed the ship's orientation. The walk
//!    continues from the latest hit until it misses or runs into an edge or
//!    an attacked cell, then restarts from `first_hit` in the opposite
//!    direction. When that side is exhausted too, the hunt drops back to
//!    discovery with whatever directions are left.
//!
//! Sinking a ship returns the hunt to idle.

use log::{debug, trace};
use rand::Rng;

use super::random::RandomSearch;
use super::AttackStrategy;
use crate::core::history::AttackHistory;
use crate::core::position::{Direction, Position};

/// Upper bound on phase changes inside a single [`DirectedHunt::next_target`]
/// call: flip to the opposite side, then fall back to discovery.
const MAX_TRANSITIONS: usize = 2;

/// Unordered set of directions still to be tried around a first hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionPool {
    mask: u8,
}

impl DirectionPool {
    pub const fn full() -> Self {
        DirectionPool { mask: 0b1111 }
    }

    pub const fn empty() -> Self {
        DirectionPool { mask: 0 }
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.mask & (1 << direction.index()) != 0
    }

    pub fn remove(&mut self, direction: Direction) {
        self.mask &= !(1 << direction.index());
    }

    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Remaining directions in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// Remove and return a uniformly chosen direction.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Direction> {
        if self.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..self.len());
        let direction = self.iter().nth(pick)?;
        self.remove(direction);
        Some(direction)
    }
}

impl Default for DirectionPool {
    fn default() -> Self {
        Self::full()
    }
}

/// Coarse view of where a [`DirectedHunt`] is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntPhase {
    Idle,
    Discovery,
    Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
enum Pursuit {
    #[default]
    Idle,
    Discovery {
        first_hit: Position,
        last_hit: Position,
        untried: DirectionPool,
    },
    Axis {
        first_hit: Position,
        last_hit: Position,
        direction: Direction,
        exploring_opposite: bool,
        untried: DirectionPool,
    },
}

/// Hunts down a ship once it has been hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedHunt {
    pursuit: Pursuit,
}

impl DirectedHunt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HuntPhase {
        match self.pursuit {
            Pursuit::Idle => HuntPhase::Idle,
            Pursuit::Discovery { .. } => HuntPhase::Discovery,
            Pursuit::Axis { .. } => HuntPhase::Axis,
        }
    }

    /// The hit that started the current pursuit.
    pub fn first_hit(&self) -> Option<Position> {
        match self.pursuit {
            Pursuit::Idle => None,
            Pursuit::Discovery { first_hit, .. } | Pursuit::Axis { first_hit, .. } => {
                Some(first_hit)
            }
        }
    }

    /// Most recent hit on the pursued ship; the walk continues from here.
    pub fn last_hit(&self) -> Option<Position> {
        match self.pursuit {
            Pursuit::Idle => None,
            Pursuit::Discovery { last_hit, .. } | Pursuit::Axis { last_hit, .. } => {
                Some(last_hit)
            }
        }
    }

    /// Direction of the axis walk, once established.
    pub fn current_direction(&self) -> Option<Direction> {
        match self.pursuit {
            Pursuit::Axis { direction, .. } => Some(direction),
            _ => None,
        }
    }

    pub fn direction_established(&self) -> bool {
        matches!(self.pursuit, Pursuit::Axis { .. })
    }

    pub fn exploring_opposite(&self) -> bool {
        matches!(
            self.pursuit,
            Pursuit::Axis {
                exploring_opposite: true,
                ..
            }
        )
    }

    /// Directions around the first hit not yet consumed.
    pub fn remaining_directions(&self) -> DirectionPool {
        match self.pursuit {
            Pursuit::Idle => DirectionPool::full(),
            Pursuit::Discovery { untried, .. } | Pursuit::Axis { untried, .. } => untried,
        }
    }

    /// Turn the walk around: restart from the first hit heading the other way.
    fn flip_axis(&mut self) {
        if let Pursuit::Axis {
            first_hit,
            direction,
            mut untried,
            exploring_opposite: false,
            ..
        } = self.pursuit
        {
            let reversed = direction.opposite();
            untried.remove(reversed);
            debug!(
                "axis {} exhausted past {}; reversing to {}",
                direction, first_hit, reversed
            );
            self.pursuit = Pursuit::Axis {
                first_hit,
                last_hit: first_hit,
                direction: reversed,
                exploring_opposite: true,
                untried,
            };
        }
    }

    /// Both ends of the axis are spent; go back to probing neighbours.
    fn abandon_axis(&mut self) {
        if let Pursuit::Axis {
            first_hit,
            last_hit,
            untried,
            ..
        } = self.pursuit
        {
            debug!(
                "both ends of axis through {} exhausted; {} directions left",
                first_hit,
                untried.len()
            );
            self.pursuit = Pursuit::Discovery {
                first_hit,
                last_hit,
                untried,
            };
        }
    }

    fn begin_pursuit(&mut self, pos: Position) {
        debug!("hunting ship hit at {}", pos);
        self.pursuit = Pursuit::Discovery {
            first_hit: pos,
            last_hit: pos,
            untried: DirectionPool::full(),
        };
    }
}

fn open(candidate: Option<Position>, history: &AttackHistory) -> Option<Position> {
    candidate.filter(|&c| !history.contains(c))
}

impl AttackStrategy for DirectedHunt {
    fn next_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &AttackHistory,
    ) -> Option<Position> {
        for _ in 0..=MAX_TRANSITIONS {
            match self.pursuit {
                Pursuit::Idle => return RandomSearch::pick(rng, history),
                Pursuit::Discovery {
                    first_hit,
                    ref mut untried,
                    ..
                } => {
                    while let Some(direction) = untried.take_random(rng) {
                        if let Some(target) = open(first_hit.adjacent(direction), history) {
                            trace!("probing {} of {} at {}", direction, first_hit, target);
                            return Some(target);
                        }
                    }
                    debug!(
                        "no open neighbours around {}; searching at random",
                        first_hit
                    );
                    return RandomSearch::pick(rng, history);
                }
                Pursuit::Axis {
                    last_hit,
                    direction,
                    exploring_opposite,
                    ..
                } => {
                    if let Some(target) = open(last_hit.adjacent(direction), history) {
                        trace!("walking {} from {} to {}", direction, last_hit, target);
                        return Some(target);
                    }
                    if exploring_opposite {
                        self.abandon_axis();
                    } else {
                        self.flip_axis();
                    }
                }
            }
        }
        RandomSearch::pick(rng, history)
    }

    fn record_hit(&mut self, pos: Position, _ship: Option<&str>, sunk: bool) {
        if sunk {
            debug!("ship sunk at {}; hunt returns to idle", pos);
            self.reset();
            return;
        }
        match self.pursuit {
            Pursuit::Idle => self.begin_pursuit(pos),
            Pursuit::Discovery {
                first_hit, untried, ..
            } => match first_hit.direction_to(pos) {
                Some(direction) => {
                    debug!("axis established {} from {}", direction, first_hit);
                    self.pursuit = Pursuit::Axis {
                        first_hit,
                        last_hit: pos,
                        direction,
                        exploring_opposite: false,
                        untried,
                    };
                }
                None => {
                    debug!(
                        "hit at {} is not beside {}; restarting pursuit",
                        pos, first_hit
                    );
                    self.begin_pursuit(pos);
                }
            },
            Pursuit::Axis {
                ref mut last_hit, ..
            } => *last_hit = pos,
        }
    }

    fn record_miss(&mut self, _pos: Position) {
        if self.exploring_opposite() {
            self.abandon_axis();
        } else {
            self.flip_axis();
        }
    }

    fn reset(&mut self) {
        self.pursuit = Pursuit::Idle;
    }
}
