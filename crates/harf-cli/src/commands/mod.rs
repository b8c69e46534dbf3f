//! Subcommand implementations

pub mod batch;
pub mod info;
pub mod input;
pub mod inspect;
pub mod text;
