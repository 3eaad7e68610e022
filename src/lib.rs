//! Guardian - turn-based monster battle game library
//!
//! A player fights a fixed roster of monsters, earns gold and experience,
//! levels up, and spends gold in a store. Everything here is presentation
//! agnostic: a front end drives a [`Session`] and renders the events it
//! returns.

pub mod audio;
pub mod character;
pub mod combat;
pub mod config;
pub mod core;
pub mod leaderboard;
pub mod monsters;
pub mod simulator;
pub mod store;
pub mod utils;

pub use character::Player;
pub use combat::BattleAction;
pub use config::SessionConfig;
pub use crate::core::{GamePhase, Session, SessionError, SessionEvent};
pub use monsters::{Monster, Roster};
pub use store::StoreItemId;
