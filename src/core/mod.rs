//! Core game state and logic.

#![allow(unused_imports)]

pub mod constants;
pub mod events;
pub mod progression;
pub mod session;

pub use constants::*;
pub use events::*;
pub use progression::*;
pub use session::*;
