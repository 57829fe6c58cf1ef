mod addition;
mod cli;

pub use addition::{Addition, AdditionParseError};
pub use cli::{Cli, Command, LogLevel};
