use derive_more::{AddAssign, Display};
use hashlink::LinkedHashMap;

use crate::namespace::Namespace;
use crate::namespace::node::{NodeId, NodeKind};

/// Heights up to this multiple of the ideal height count as well balanced.
const EFFICIENCY_TOLERANCE: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AddAssign)]
pub struct ElementCount {
    pub folders: usize,
    pub files: usize,
}

impl ElementCount {
    pub fn total(&self) -> usize {
        self.folders + self.files
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    #[display("Good")]
    Good,
    #[display("Needs improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub folders: usize,
    pub files: usize,
    pub total_nodes: usize,
    pub height: usize,
    pub root_name: String,
    /// `log2(total_nodes + 1)`, rounded to two decimals.
    pub ideal_height: f64,
    pub efficiency: Efficiency,
}

impl Statistics {
    /// Display labels and values in a fixed order.
    pub fn to_mapping(&self) -> LinkedHashMap<String, String> {
        let mut mapping = LinkedHashMap::new();
        mapping.insert("Total folders".to_string(), self.folders.to_string());
        mapping.insert("Total files".to_string(), self.files.to_string());
        mapping.insert("Total nodes".to_string(), self.total_nodes.to_string());
        mapping.insert("Tree height".to_string(), self.height.to_string());
        mapping.insert("Root node".to_string(), self.root_name.clone());
        mapping.insert("Ideal height".to_string(), format!("{:.2}", self.ideal_height));
        mapping.insert("Efficiency".to_string(), self.efficiency.to_string());
        mapping
    }
}

impl Namespace {
    pub fn count_elements(&self) -> ElementCount {
        self.count_elements_from(self.root_id())
    }

    /// Folders and files in the subtree at `start`, `start` included.
    pub fn count_elements_from(&self, start: NodeId) -> ElementCount {
        self.walk_preorder(start)
            .into_iter()
            .fold(ElementCount::default(), |mut count, id| {
                match self.node(id).kind() {
                    NodeKind::Folder => count.folders += 1,
                    NodeKind::File => count.files += 1,
                }
                count
            })
    }

    pub fn statistics(&self) -> Statistics {
        let count = self.count_elements();
        let height = self.tree_height();
        let total_nodes = count.total();
        let ideal_height = ((total_nodes + 1) as f64).log2();

        let efficiency = if height as f64 <= ideal_height * EFFICIENCY_TOLERANCE {
            Efficiency::Good
        } else {
            Efficiency::NeedsImprovement
        };

        Statistics {
            folders: count.folders,
            files: count.files,
            total_nodes,
            height,
            root_name: self.root_name().to_string(),
            ideal_height: (ideal_height * 100.0).round() / 100.0,
            efficiency,
        }
    }
}
