#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cellset;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod player_random;
pub mod search;

pub use board::*;
pub use cellset::{CellSet, CellSetError, Positions};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_random::*;
pub use search::best_move;
