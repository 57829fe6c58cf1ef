//! In-memory hierarchical namespace of folders and files, with path
//! resolution, search, traversals and tree statistics.
//!
//! The [`namespace`] module is the engine and has no knowledge of any
//! presentation layer. [`config`] loads initial trees from YAML seed files.

pub mod config;
pub mod ext;
pub mod namespace;

pub use config::{NamespaceSeed, SeedError};
pub use namespace::{
    InsertError, Namespace, NodeId, NodeKind, NodeRef, SharedNamespace, Statistics,
};
