//! Hierarchical namespace of folders and files held in memory.
//!
//! [`Namespace`] owns every node in an arena and is the only way to create
//! them. Nodes are addressed by [`NodeId`] handles and inspected through
//! [`NodeRef`] views. Paths are `/`-separated and matched case-insensitively,
//! with the root's own name optional as the first segment.

mod error;
mod node;
mod path;
mod shared;
mod statistics;
mod traversal;
mod tree;

pub use error::{AddChildError, InsertError, NameError};
pub use node::{NodeId, NodeKind, NodeRef};
pub use path::path_segments;
pub use shared::SharedNamespace;
pub use statistics::{Efficiency, ElementCount, Statistics};
pub use traversal::level_separator;
pub use tree::{DEFAULT_ROOT_NAME, Namespace};
