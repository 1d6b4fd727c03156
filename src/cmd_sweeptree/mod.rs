//! Subcommand modules for the `sweeptree` binary.

pub mod chains;
pub mod elbow;
pub mod emerge;
pub mod index;
pub mod query;
pub mod stat;
pub mod to_dot;
pub mod to_nwk;
