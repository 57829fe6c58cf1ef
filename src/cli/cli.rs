use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use canopy::namespace::DEFAULT_ROOT_NAME;

use crate::cli::Addition;

#[derive(Debug, Clone, ValueEnum, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Trace => Some(tracing::Level::TRACE),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Explore an in-memory tree of folders and files.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// YAML file describing the initial tree
    #[clap(long, short)]
    pub seed: Option<PathBuf>,

    /// Name of the root folder; the seed file names its own root
    #[clap(long, default_value = DEFAULT_ROOT_NAME, conflicts_with = "seed")]
    pub root_name: String,

    /// Node to insert after seeding, as PARENT:NAME[:file|folder]; repeatable
    #[clap(long = "add", short, value_name = "PARENT:NAME[:KIND]")]
    pub additions: Vec<Addition>,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw the tree with branch glyphs
    Tree,
    /// List nodes parent first
    Preorder,
    /// List nodes children first
    Postorder,
    /// List nodes level by level
    Levels,
    /// Show folder/file counts, height and balance
    Stats,
    /// Find the first node with the given name
    Find { name: String },
    /// Look up a node by its absolute path
    Resolve { path: String },
    /// Show the height of the first node with the given name
    Height { name: String },
}
