//! App-Intent und App-Command Events.

pub mod command;
pub mod intent;

pub use command::AppCommand;
pub use intent::{AppIntent, PickResult, PointerModifiers};
