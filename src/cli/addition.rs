use std::str::FromStr;

use snafu::Snafu;

use canopy::NodeKind;

/// A node to insert after seeding, written as `PARENT:NAME[:KIND]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    pub parent: String,
    pub name: String,
    pub kind: NodeKind,
}

impl FromStr for Addition {
    type Err = AdditionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(3, ':');
        let parent = parts.next().unwrap_or_default();
        let name = parts.next().ok_or_else(|| AdditionParseError::MissingName {
            raw: raw.to_string(),
        })?;
        let kind = match parts.next() {
            None => NodeKind::Folder,
            Some(kind) if kind.eq_ignore_ascii_case("folder") => NodeKind::Folder,
            Some(kind) if kind.eq_ignore_ascii_case("file") => NodeKind::File,
            Some(kind) => {
                return Err(AdditionParseError::UnknownKind {
                    kind: kind.to_string(),
                });
            }
        };

        Ok(Addition {
            parent: parent.to_string(),
            name: name.to_string(),
            kind,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum AdditionParseError {
    #[snafu(display("Expected PARENT:NAME[:KIND], got '{}'", raw))]
    MissingName { raw: String },
    #[snafu(display("Unknown node kind '{}', expected 'file' or 'folder'", kind))]
    UnknownKind { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/root:docs", "/root", "docs", NodeKind::Folder)]
    #[case("/root/docs:cv.docx:file", "/root/docs", "cv.docx", NodeKind::File)]
    #[case("/:photos:FOLDER", "/", "photos", NodeKind::Folder)]
    #[case(":top:file", "", "top", NodeKind::File)]
    fn test_parses_addition(
        #[case] raw: &str,
        #[case] parent: &str,
        #[case] name: &str,
        #[case] kind: NodeKind,
    ) {
        let addition: Addition = raw.parse().expect("Failed to parse addition");
        assert_eq!(
            addition,
            Addition {
                parent: parent.to_string(),
                name: name.to_string(),
                kind,
            }
        );
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = "/root".parse::<Addition>();
        assert!(matches!(result, Err(AdditionParseError::MissingName { .. })));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = "/root:link:symlink".parse::<Addition>();
        assert!(matches!(result, Err(AdditionParseError::UnknownKind { kind }) if kind == "symlink"));
    }
}
