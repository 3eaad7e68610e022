//! Utility modules: build info, JSON persistence.

#![allow(unused_imports)]

pub mod build_info;
pub mod persistence;

pub use build_info::*;
