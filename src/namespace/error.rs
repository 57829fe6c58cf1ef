use snafu::Snafu;

use crate::namespace::node::PATH_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum NameError {
    #[snafu(display("Node names must not be empty"))]
    Empty,
    #[snafu(display("Node name '{}' must not contain '{}'", name, PATH_SEPARATOR))]
    ContainsSeparator { name: String },
}

/// Reasons a folder refuses a new child.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(module)]
pub enum AddChildError {
    #[snafu(display("'{}' is a file and cannot hold children", parent))]
    NotAFolder { parent: String },
    #[snafu(display("Invalid node name"))]
    InvalidChildName { source: NameError },
    #[snafu(display("'{}' already contains an entry named '{}'", parent, name))]
    DuplicateName { parent: String, name: String },
}

/// Reasons [`Namespace::insert`](crate::namespace::Namespace::insert) leaves the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(module)]
pub enum InsertError {
    #[snafu(display("No node found at path '{}'", path))]
    ParentNotFound { path: String },
    #[snafu(display("Parent '{}' is a file and cannot hold children", path))]
    ParentNotAFolder { path: String },
    #[snafu(display("Invalid node name"))]
    InvalidName { source: NameError },
    #[snafu(display("'{}' already contains an entry named '{}'", parent, name))]
    DuplicateName { parent: String, name: String },
}

impl From<AddChildError> for InsertError {
    fn from(err: AddChildError) -> Self {
        match err {
            AddChildError::NotAFolder { parent } => InsertError::ParentNotAFolder { path: parent },
            AddChildError::InvalidChildName { source } => InsertError::InvalidName { source },
            AddChildError::DuplicateName { parent, name } => {
                InsertError::DuplicateName { parent, name }
            }
        }
    }
}
