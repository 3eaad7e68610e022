//! The player character and its baseline stats.

#![allow(unused_imports)]

pub mod player;

pub use player::*;
