use std::fmt;
use std::iter;

use derive_more::Display;

use crate::namespace::Namespace;
use crate::namespace::error::NameError;

pub(crate) const PATH_SEPARATOR: char = '/';

/// Handle to a node stored in a [`Namespace`].
///
/// Handles stay valid for the lifetime of the namespace that issued them,
/// since nodes are never removed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[display("FOLDER")]
    Folder,
    #[display("FILE")]
    File,
}

/// Payload of a node. Only folders carry a child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeContent {
    Folder { children: Vec<NodeId> },
    File,
}

impl NodeContent {
    pub(crate) fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Folder => NodeContent::Folder {
                children: Vec::new(),
            },
            NodeKind::File => NodeContent::File,
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            NodeContent::Folder { .. } => NodeKind::Folder,
            NodeContent::File => NodeKind::File,
        }
    }
}

/// Arena record of a single node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) content: NodeContent,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            name,
            content: NodeContent::empty(kind),
            parent,
        }
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match &self.content {
            NodeContent::Folder { children } => children,
            NodeContent::File => &[],
        }
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains(PATH_SEPARATOR) {
        return Err(NameError::ContainsSeparator {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Borrowed view of a node together with the namespace it lives in.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    namespace: &'a Namespace,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(namespace: &'a Namespace, id: NodeId) -> Self {
        Self { namespace, id }
    }

    fn record(&self) -> &'a Node {
        self.namespace.record(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.record().name
    }

    pub fn kind(&self) -> NodeKind {
        self.record().content.kind()
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.record()
            .parent
            .map(|parent| NodeRef::new(self.namespace, parent))
    }

    /// Child handles in insertion order; empty for files.
    pub fn child_ids(&self) -> &'a [NodeId] {
        self.record().children()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let namespace = self.namespace;
        self.child_ids()
            .iter()
            .map(move |&child| NodeRef::new(namespace, child))
    }

    /// This node followed by its parent, grandparent and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        iter::successors(Some(*self), |node| node.parent())
    }

    /// A file, or a folder without children.
    pub fn is_leaf(&self) -> bool {
        match &self.record().content {
            NodeContent::File => true,
            NodeContent::Folder { children } => children.is_empty(),
        }
    }

    /// Number of parent hops up to the root, which sits at level 0.
    pub fn level(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Length in edges of the longest downward path to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.id, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(
                self.namespace
                    .record(id)
                    .children()
                    .iter()
                    .map(|&child| (child, depth + 1)),
            );
        }

        height
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.name())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.namespace, other.namespace) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
