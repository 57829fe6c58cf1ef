use std::path::PathBuf;

use crate::cli::{Addition, Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command: Command,
    pub seed: Option<PathBuf>,
    pub root_name: String,
    pub additions: Vec<Addition>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            command: cli.command,
            seed: cli.seed,
            root_name: cli.root_name,
            additions: cli.additions,
        }
    }
}
