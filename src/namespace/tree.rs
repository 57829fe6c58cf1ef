use tracing::debug;

use crate::ext::NameExt;
use crate::namespace::error::{AddChildError, InsertError, NameError};
use crate::namespace::node::{Node, NodeContent, NodeId, NodeKind, NodeRef, validate_name};
use crate::namespace::path::path_segments;

pub const DEFAULT_ROOT_NAME: &str = "root";

/// In-memory hierarchical namespace of folders and files.
///
/// Nodes live in an arena owned by the namespace. A folder's child list is
/// the only ownership edge; the parent handle each node keeps is used for
/// upward navigation only. The root is node 0 and is never replaced.
#[derive(Debug, Clone)]
pub struct Namespace {
    nodes: Vec<Node>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            nodes: vec![Node::new(
                DEFAULT_ROOT_NAME.to_string(),
                NodeKind::Folder,
                None,
            )],
        }
    }
}

impl Namespace {
    pub fn new(root_name: impl Into<String>) -> Result<Self, NameError> {
        let root_name = root_name.into();
        validate_name(&root_name)?;
        Ok(Self {
            nodes: vec![Node::new(root_name, NodeKind::Folder, None)],
        })
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.node(self.root_id())
    }

    pub fn root_name(&self) -> &str {
        &self.record(self.root_id()).name
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root exists from construction on.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Panics if `id` was not issued by this namespace.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    pub(crate) fn record(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Attaches a new node under `parent`.
    ///
    /// Every check runs before the arena is touched, so a failed call
    /// leaves the namespace as it was. Panics if `parent` was not issued by
    /// this namespace; outside callers go through [`Namespace::insert`].
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, AddChildError> {
        let parent_node = self.record(parent);
        let NodeContent::Folder { children } = &parent_node.content else {
            return Err(AddChildError::NotAFolder {
                parent: self.absolute_path(parent),
            });
        };

        validate_name(name).map_err(|source| AddChildError::InvalidChildName { source })?;

        if children
            .iter()
            .any(|&child| self.record(child).name.eq_ignore_case(name))
        {
            return Err(AddChildError::DuplicateName {
                parent: self.absolute_path(parent),
                name: name.to_string(),
            });
        }

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(name.to_string(), kind, Some(parent)));
        if let NodeContent::Folder { children } = &mut self.nodes[parent.0].content {
            children.push(id);
        }

        Ok(id)
    }

    /// Creates `name` under the folder found at `parent_path`.
    pub fn insert(
        &mut self,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, InsertError> {
        let result = self.try_insert(parent_path, name, kind);
        match &result {
            Ok(id) => debug!(
                "Inserted {} '{}' under '{}' as {}",
                kind, name, parent_path, id
            ),
            Err(err) => debug!("Rejected {} '{}' under '{}': {}", kind, name, parent_path, err),
        }
        result
    }

    fn try_insert(
        &mut self,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, InsertError> {
        let parent = self
            .resolve_path(parent_path)
            .ok_or_else(|| InsertError::ParentNotFound {
                path: parent_path.to_string(),
            })?;

        if self.node(parent).is_file() {
            return Err(InsertError::ParentNotAFolder {
                path: parent_path.to_string(),
            });
        }

        Ok(self.add_child(parent, name, kind)?)
    }

    /// Follows `path` from the root one case-insensitive name at a time.
    pub fn resolve_path(&self, path: &str) -> Option<NodeId> {
        path_segments(path, self.root_name())
            .into_iter()
            .try_fold(self.root_id(), |current, segment| {
                self.record(current)
                    .children()
                    .iter()
                    .copied()
                    .find(|&child| self.record(child).name.eq_ignore_case(segment))
            })
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.find_by_name_from(name, self.root_id())
    }

    /// First node named `name` in preorder, starting with `start` itself.
    pub fn find_by_name_from(&self, name: &str, start: NodeId) -> Option<NodeId> {
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            let node = self.record(id);
            if node.name.eq_ignore_case(name) {
                return Some(id);
            }
            stack.extend(node.children().iter().rev());
        }

        None
    }

    /// Slash-separated names from the root down to `id`, with a leading slash.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = self.node(id).ancestors().map(|node| node.name()).collect();
        names.reverse();
        format!("/{}", names.join("/"))
    }

    pub fn tree_height(&self) -> usize {
        self.root().height()
    }

    /// Height of the first node named `name`, if any.
    pub fn node_height(&self, name: &str) -> Option<usize> {
        self.find_by_name(name).map(|id| self.node(id).height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::test_support::sample_namespace;
    use rstest::*;

    #[fixture]
    fn sample() -> Namespace {
        sample_namespace()
    }

    #[test]
    fn test_default_root_is_an_empty_folder() {
        let namespace = Namespace::default();
        let root = namespace.root();

        assert_eq!(root.name(), "root");
        assert!(root.is_folder());
        assert!(root.is_leaf());
        assert!(root.parent().is_none());
        assert_eq!(namespace.len(), 1);
        assert_eq!(namespace.tree_height(), 0);
    }

    #[rstest]
    #[case("", NameError::Empty)]
    #[case("a/b", NameError::ContainsSeparator { name: "a/b".to_string() })]
    fn test_new_rejects_invalid_root_name(#[case] name: &str, #[case] expected: NameError) {
        assert_eq!(Namespace::new(name).unwrap_err(), expected);
    }

    #[test]
    fn test_custom_root_name() {
        let namespace = Namespace::new("home").expect("Failed to create namespace");
        assert_eq!(namespace.root_name(), "home");
        assert_eq!(namespace.absolute_path(namespace.root_id()), "/home");
        assert_eq!(namespace.resolve_path("/home"), Some(namespace.root_id()));
    }

    #[rstest]
    fn test_sample_counts_and_height(sample: Namespace) {
        let count = sample.count_elements();
        assert_eq!(count.folders, 5);
        assert_eq!(count.files, 6);
        assert_eq!(sample.tree_height(), 3);
    }

    #[rstest]
    fn test_resolves_file_path(sample: Namespace) {
        let id = sample
            .resolve_path("/root/fotos/vacaciones/playa.jpg")
            .expect("Expected playa.jpg to resolve");
        let node = sample.node(id);

        assert_eq!(node.name(), "playa.jpg");
        assert_eq!(node.kind(), NodeKind::File);
    }

    #[rstest]
    #[case("/", "root")]
    #[case("", "root")]
    #[case("/root", "root")]
    #[case("fotos", "fotos")]
    #[case("/ROOT/FOTOS/Vacaciones/", "vacaciones")]
    #[case("//root//documentos//cv.docx", "cv.docx")]
    #[case("/root/fotos/vacaciones/MONTAÑA.JPG", "montaña.jpg")]
    fn test_resolve_path_variants(sample: Namespace, #[case] path: &str, #[case] name: &str) {
        let id = sample
            .resolve_path(path)
            .unwrap_or_else(|| panic!("Expected {} to resolve", path));
        assert_eq!(sample.node(id).name(), name);
    }

    #[rstest]
    #[case("/root/inexistente")]
    #[case("/root/documentos/cv.docx/nested")]
    #[case("/root/fotos/vacaciones/playa.jpg/extra")]
    #[case("/other/fotos")]
    fn test_resolve_path_misses(sample: Namespace, #[case] path: &str) {
        assert_eq!(sample.resolve_path(path), None);
    }

    #[rstest]
    fn test_find_by_name(sample: Namespace) {
        let cv = sample.find_by_name("CV.docx").expect("Expected cv.docx");
        assert_eq!(sample.absolute_path(cv), "/root/documentos/cv.docx");

        let vacaciones = sample.find_by_name("vacaciones").expect("Expected vacaciones");
        assert_eq!(sample.absolute_path(vacaciones), "/root/fotos/vacaciones");

        assert_eq!(sample.find_by_name("archivo_inexistente.txt"), None);
        assert_eq!(sample.find_by_name("root"), Some(sample.root_id()));
    }

    #[test]
    fn test_find_by_name_returns_first_preorder_match() {
        let mut namespace = Namespace::default();
        namespace.insert("/", "a", NodeKind::Folder).unwrap();
        namespace.insert("/", "b", NodeKind::Folder).unwrap();
        namespace.insert("/a", "deep", NodeKind::Folder).unwrap();
        let shadowed = namespace.insert("/a/deep", "target", NodeKind::File).unwrap();
        namespace.insert("/b", "target", NodeKind::File).unwrap();

        assert_eq!(namespace.find_by_name("target"), Some(shadowed));
    }

    #[rstest]
    fn test_find_by_name_from_subtree(sample: Namespace) {
        let fotos = sample.resolve_path("/root/fotos").unwrap();

        assert!(sample.find_by_name_from("playa.jpg", fotos).is_some());
        assert_eq!(sample.find_by_name_from("cv.docx", fotos), None);
        assert_eq!(sample.find_by_name_from("fotos", fotos), Some(fotos));
    }

    #[rstest]
    fn test_absolute_path(sample: Namespace) {
        assert_eq!(sample.absolute_path(sample.root_id()), "/root");

        let montana = sample.find_by_name("montaña.jpg").unwrap();
        assert_eq!(sample.absolute_path(montana), "/root/fotos/vacaciones/montaña.jpg");
    }

    #[rstest]
    fn test_insert_under_missing_parent_fails(mut sample: Namespace) {
        let before = sample.len();
        let result = sample.insert("/root/nada", "x.txt", NodeKind::File);

        assert_eq!(
            result,
            Err(InsertError::ParentNotFound {
                path: "/root/nada".to_string()
            })
        );
        assert_eq!(sample.len(), before);
    }

    #[rstest]
    fn test_insert_under_file_fails_and_leaves_tree_unchanged(mut sample: Namespace) {
        let before = sample.preorder();
        let result = sample.insert("/root/documentos/cv.docx", "x.txt", NodeKind::File);

        assert!(matches!(result, Err(InsertError::ParentNotAFolder { .. })));
        assert_eq!(sample.preorder(), before);
    }

    #[rstest]
    #[case("FOTOS")]
    #[case("fotos")]
    #[case("Fotos")]
    fn test_duplicate_name_fails_and_leaves_tree_unchanged(
        mut sample: Namespace,
        #[case] name: &str,
    ) {
        let before = sample.preorder();
        let result = sample.insert("/root", name, NodeKind::File);

        assert_eq!(
            result,
            Err(InsertError::DuplicateName {
                parent: "/root".to_string(),
                name: name.to_string()
            })
        );
        assert_eq!(sample.preorder(), before);
    }

    #[rstest]
    #[case("")]
    #[case("a/b")]
    fn test_insert_rejects_invalid_name(mut sample: Namespace, #[case] name: &str) {
        let before = sample.len();
        let result = sample.insert("/root", name, NodeKind::Folder);

        assert!(matches!(result, Err(InsertError::InvalidName { .. })));
        assert_eq!(sample.len(), before);
    }

    #[test]
    fn test_same_name_allowed_in_different_folders() {
        let mut namespace = Namespace::default();
        namespace.insert("/", "a", NodeKind::Folder).unwrap();
        namespace.insert("/", "b", NodeKind::Folder).unwrap();

        assert!(namespace.insert("/a", "readme", NodeKind::File).is_ok());
        assert!(namespace.insert("/b", "README", NodeKind::File).is_ok());
    }

    #[test]
    fn test_add_child_to_file_is_rejected() {
        let mut namespace = Namespace::default();
        let file = namespace.insert("/", "a.txt", NodeKind::File).unwrap();

        let result = namespace.add_child(file, "b.txt", NodeKind::File);

        assert_eq!(
            result,
            Err(AddChildError::NotAFolder {
                parent: "/root/a.txt".to_string()
            })
        );
        assert_eq!(namespace.len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_add_child_panics_on_foreign_parent() {
        let mut larger = Namespace::default();
        let foreign = larger.insert("/", "only_here", NodeKind::Folder).unwrap();

        let mut namespace = Namespace::default();
        let _ = namespace.add_child(foreign, "x", NodeKind::File);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut namespace = Namespace::default();
        for name in ["zeta", "alpha", "mid"] {
            namespace.insert("/", name, NodeKind::File).unwrap();
        }

        let names: Vec<_> = namespace.root().children().map(|node| node.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_child_named_like_root_is_reachable() {
        let mut namespace = Namespace::default();
        let child = namespace.insert("/", "root", NodeKind::Folder).unwrap();

        assert_eq!(namespace.resolve_path("/root"), Some(namespace.root_id()));
        assert_eq!(namespace.resolve_path("/root/root"), Some(child));
        assert_eq!(namespace.absolute_path(child), "/root/root");
    }

    #[rstest]
    #[case("fotos", Some(2))]
    #[case("vacaciones", Some(1))]
    #[case("cv.docx", Some(0))]
    #[case("root", Some(3))]
    #[case("archivo_inexistente.txt", None)]
    fn test_node_height(sample: Namespace, #[case] name: &str, #[case] expected: Option<usize>) {
        assert_eq!(sample.node_height(name), expected);
    }

    #[test]
    fn test_get_rejects_foreign_handles() {
        let namespace = Namespace::default();
        assert!(namespace.get(NodeId(0)).is_some());
        assert!(namespace.get(NodeId(7)).is_none());
    }
}
