//! Traversals over a [`Namespace`].
//!
//! Every walk uses an explicit stack or queue instead of recursion, so deep
//! trees cannot exhaust the call stack. The visit orders are exactly those
//! of the textbook recursive definitions.

use std::collections::VecDeque;

use crate::namespace::Namespace;
use crate::namespace::node::NodeId;

const INDENT: &str = "  ";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

pub fn level_separator(level: usize) -> String {
    format!("--- LEVEL {} ---", level)
}

impl Namespace {
    /// Node before its children, children left to right.
    pub fn walk_preorder(&self, start: NodeId) -> Vec<NodeId> {
        let mut visited = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            visited.push(id);
            stack.extend(self.record(id).children().iter().rev());
        }

        visited
    }

    /// Children left to right before their parent.
    pub fn walk_postorder(&self, start: NodeId) -> Vec<NodeId> {
        // Node-then-children-right-to-left, reversed, is left-to-right postorder.
        let mut visited = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            visited.push(id);
            stack.extend(self.record(id).children());
        }

        visited.reverse();
        visited
    }

    /// Nodes grouped by distance from `start`, each paired with that distance.
    pub fn walk_level_order(&self, start: NodeId) -> Vec<(NodeId, usize)> {
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([(start, 0)]);

        while let Some((id, level)) = queue.pop_front() {
            visited.push((id, level));
            queue.extend(
                self.record(id)
                    .children()
                    .iter()
                    .map(|&child| (child, level + 1)),
            );
        }

        visited
    }

    pub fn preorder(&self) -> Vec<String> {
        self.preorder_from(self.root_id())
    }

    pub fn preorder_from(&self, start: NodeId) -> Vec<String> {
        self.walk_preorder(start)
            .into_iter()
            .map(|id| self.indented_line(id))
            .collect()
    }

    pub fn postorder(&self) -> Vec<String> {
        self.postorder_from(self.root_id())
    }

    pub fn postorder_from(&self, start: NodeId) -> Vec<String> {
        self.walk_postorder(start)
            .into_iter()
            .map(|id| self.indented_line(id))
            .collect()
    }

    /// Level-order listing of the whole tree with a separator line opening
    /// each level.
    pub fn breadth_first(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_level = None;

        for (id, level) in self.walk_level_order(self.root_id()) {
            if current_level != Some(level) {
                lines.push(level_separator(level));
                current_level = Some(level);
            }
            lines.push(format!("{}{}", INDENT, self.node(id)));
        }

        lines
    }

    pub fn render(&self) -> Vec<String> {
        self.render_from(self.root_id())
    }

    /// ASCII drawing of the subtree at `start`, which is drawn as the last
    /// child of an empty prefix.
    pub fn render_from(&self, start: NodeId) -> Vec<String> {
        let mut lines = Vec::new();
        let mut stack = vec![(start, String::new(), true)];

        while let Some((id, prefix, is_last)) = stack.pop() {
            let record = self.record(id);
            let branch = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{}{}{}", prefix, branch, record.name));

            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            let children = record.children();
            stack.extend(children.iter().enumerate().rev().map(|(index, &child)| {
                (child, child_prefix.clone(), index == children.len() - 1)
            }));
        }

        lines
    }

    fn indented_line(&self, id: NodeId) -> String {
        let node = self.node(id);
        format!("{}{}", INDENT.repeat(node.level()), node)
    }
}
