use colored::Colorize;

use canopy::Namespace;

use crate::cli::Command;

/// Text produced by one command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub title: String,
    pub lines: Vec<String>,
    /// The command looked something up and found nothing.
    pub missing: bool,
}

impl CommandOutput {
    fn listing(title: &str, lines: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            lines,
            missing: false,
        }
    }

    fn miss(title: &str, line: String) -> Self {
        Self {
            title: title.to_string(),
            lines: vec![line],
            missing: true,
        }
    }

    pub fn from_command(namespace: &Namespace, command: &Command) -> Self {
        match command {
            Command::Tree => Self::listing("TREE", namespace.render()),
            Command::Preorder => Self::listing("PREORDER", namespace.preorder()),
            Command::Postorder => Self::listing("POSTORDER", namespace.postorder()),
            Command::Levels => Self::listing("LEVEL ORDER", namespace.breadth_first()),
            Command::Stats => Self::listing(
                "STATISTICS",
                namespace
                    .statistics()
                    .to_mapping()
                    .iter()
                    .map(|(label, value)| format!("{}: {}", label, value))
                    .collect(),
            ),
            Command::Find { name } => match namespace.find_by_name(name) {
                Some(id) => Self::listing(
                    "SEARCH BY NAME",
                    vec![
                        format!("Found '{}': {}", name, namespace.absolute_path(id)),
                        namespace.node(id).to_string(),
                    ],
                ),
                None => Self::miss("SEARCH BY NAME", format!("Not found: '{}'", name)),
            },
            Command::Resolve { path } => match namespace.resolve_path(path) {
                Some(id) => {
                    let node = namespace.node(id);
                    Self::listing(
                        "SEARCH BY PATH",
                        vec![
                            format!("Found '{}': {}", path, node),
                            format!("Level: {}", node.level()),
                            format!("Height: {}", node.height()),
                        ],
                    )
                }
                None => Self::miss("SEARCH BY PATH", format!("Not found: '{}'", path)),
            },
            Command::Height { name } => match namespace.node_height(name) {
                Some(height) => Self::listing(
                    "NODE HEIGHT",
                    vec![format!("Height of '{}': {}", name, height)],
                ),
                None => Self::miss("NODE HEIGHT", format!("Not found: '{}'", name)),
            },
        }
    }

    pub fn print(&self) {
        println!("{}", format!("=== {} ===", self.title).bold().cyan());
        for line in &self.lines {
            if self.missing {
                println!("{}", line.yellow());
            } else {
                println!("{}", line);
            }
        }
    }
}
