//! Substitution module

pub mod command;
pub mod context;
pub mod types;

pub use command::{Command, CommandErrorMode};
pub use context::LaunchContext;
pub use types::{resolve_substitutions, Substitution};
