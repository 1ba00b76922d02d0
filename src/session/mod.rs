//! Line-oriented session driver: the UI layer that feeds the engine.

pub mod command;
pub mod runner;

pub use command::SessionCommand;
pub use runner::{Flow, SessionRunner};
