mod application;
mod output;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use output::CommandOutput;
pub use runtime_config::RuntimeConfig;
