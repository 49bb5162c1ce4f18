#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod strategy;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use game::{GameError, GameStats, Skirmish, Turn};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{CpuPlayer, CpuSnapshot, Player};
pub use strategy::{AttackCoordinator, AttackStrategy, DirectedHunt, RandomSearch};
