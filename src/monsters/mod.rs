//! Monster definitions and the per-session roster.
//!
//! The world map shows every roster entry; defeated monsters stay listed
//! but can no longer be challenged.

mod data;
mod roster;

#[allow(unused_imports)]
pub use data::*;
#[allow(unused_imports)]
pub use roster::*;
