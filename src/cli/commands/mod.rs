//! CLI subcommands

pub mod compare;
pub mod solve;
pub mod verify;
