use std::borrow::Cow;
use std::path::Path;

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::ext::NameExt;
use crate::namespace::{DEFAULT_ROOT_NAME, InsertError, NameError, Namespace, NodeKind};

const ROOT_KEY: &str = "root";
const TREE_KEY: &str = "tree";
const FILE_KIND: &str = "file";
const FOLDER_KIND: &str = "folder";

/// One entry of a seed tree, with its children for folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<SeedEntry>,
}

/// Initial contents of a namespace, as described by a YAML seed file.
///
/// ```yaml
/// root: root
/// tree:
///   documentos:
///     cv.docx: file
///   empty: folder
/// ```
///
/// A mapping value makes a folder holding those entries, `file` makes a
/// file, and `folder`, null or `{}` make an empty folder. Mapping order is
/// child order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSeed {
    pub root_name: String,
    pub entries: Vec<SeedEntry>,
}

impl NamespaceSeed {
    pub async fn read(path: &Path) -> Result<Self, SeedError> {
        debug!("Reading seed file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read seed file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    /// Creates the namespace by inserting every entry, parents first.
    pub fn build(&self) -> Result<Namespace, SeedError> {
        let mut namespace = Namespace::new(self.root_name.as_str()).context(InvalidRootSnafu)?;
        let root_path = namespace.absolute_path(namespace.root_id());

        let mut pending: Vec<(String, &SeedEntry)> = self
            .entries
            .iter()
            .rev()
            .map(|entry| (root_path.clone(), entry))
            .collect();

        while let Some((parent_path, entry)) = pending.pop() {
            let id = namespace
                .insert(&parent_path, &entry.name, entry.kind)
                .context(InsertionSnafu {
                    path: parent_path.as_str(),
                    name: entry.name.as_str(),
                })?;
            let path = namespace.absolute_path(id);
            pending.extend(entry.children.iter().rev().map(|child| (path.clone(), child)));
        }

        debug!(
            "Built namespace '{}' with {} nodes from seed",
            namespace.root_name(),
            namespace.len()
        );
        Ok(namespace)
    }

    fn parse_root_name(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<String, SeedError> {
        match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(ROOT_KEY)))) {
            None | Some(Yaml::Value(Scalar::Null)) => Ok(DEFAULT_ROOT_NAME.to_string()),
            Some(value) => string_text(value).ok_or(SeedError::RootNotString),
        }
    }

    fn parse_entries(value: &Yaml, path: &str) -> Result<Vec<SeedEntry>, SeedError> {
        let entries = match value {
            Yaml::Value(Scalar::Null) => return Ok(Vec::new()),
            Yaml::Mapping(entries) => entries,
            _ => return TreeNotMapSnafu { path }.fail(),
        };

        entries
            .iter()
            .map(|(key, value)| {
                let name = string_text(key).context(UnsupportedKeySnafu {
                    path,
                    key: format!("{:?}", key),
                })?;
                Self::parse_entry(name, value, path)
            })
            .collect()
    }

    fn parse_entry(name: String, value: &Yaml, parent_path: &str) -> Result<SeedEntry, SeedError> {
        let path = format!("{}/{}", parent_path.trim_end_matches('/'), name);

        let (kind, children) = match value {
            Yaml::Mapping(_) | Yaml::Value(Scalar::Null) => {
                (NodeKind::Folder, Self::parse_entries(value, &path)?)
            }
            Yaml::Value(Scalar::String(kind)) if kind.eq_ignore_case(FILE_KIND) => {
                (NodeKind::File, Vec::new())
            }
            Yaml::Value(Scalar::String(kind)) if kind.eq_ignore_case(FOLDER_KIND) => {
                (NodeKind::Folder, Vec::new())
            }
            other => {
                return UnknownKindSnafu {
                    name,
                    kind: string_text(other).unwrap_or_else(|| format!("{:?}", other)),
                }
                .fail();
            }
        };

        Ok(SeedEntry {
            name,
            kind,
            children,
        })
    }
}

/// Text of a string scalar. Plain numbers and booleans are rejected since
/// YAML has already rewritten them (`01` reads as `1`), so such names must
/// be quoted.
fn string_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(text)) => Some(text.to_string()),
        _ => None,
    }
}

impl TryFrom<&str> for NamespaceSeed {
    type Error = SeedError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedSeedSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let root_name = Self::parse_root_name(top_level)?;
        let root_path = format!("/{}", root_name);
        let entries = match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(TREE_KEY)))) {
            Some(tree) => Self::parse_entries(tree, &root_path)?,
            None => {
                debug!("Seed has no '{}' section, starting with an empty root", TREE_KEY);
                Vec::new()
            }
        };

        Ok(NamespaceSeed { root_name, entries })
    }
}

#[derive(Debug, Snafu)]
pub enum SeedError {
    #[snafu(display("Failed to read the seed file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Seed file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the seed file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted seed file"))]
    MalformedSeed,
    #[snafu(display("Top level of the seed file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Root name should be a string"))]
    RootNotString,
    #[snafu(display("Invalid root name"))]
    InvalidRoot { source: NameError },
    #[snafu(display("Entries under '{}' should be a map", path))]
    TreeNotMap { path: String },
    #[snafu(display(
        "Unsupported entry name {} under '{}', quote names that read as numbers or booleans",
        key,
        path
    ))]
    UnsupportedKey { path: String, key: String },
    #[snafu(display("Entry '{}' has unknown kind '{}'", name, kind))]
    UnknownKind { name: String, kind: String },
    #[snafu(display("Failed to insert '{}' under '{}'", name, path))]
    InsertionError {
        path: String,
        name: String,
        source: InsertError,
    },
}
