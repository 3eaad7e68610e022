//! The Guardian's Store: a fixed catalog bought with gold.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
