use crate::ext::NameExt;
use crate::namespace::node::PATH_SEPARATOR;

/// Splits an absolute path into the names to follow from the root.
///
/// Empty segments are dropped, so repeated, leading and trailing slashes
/// collapse. A leading segment equal to the root's name is optional and
/// elided. An empty result denotes the root itself.
pub fn path_segments<'p>(path: &'p str, root_name: &str) -> Vec<&'p str> {
    let mut segments = path
        .trim_matches(PATH_SEPARATOR)
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .peekable();

    if segments
        .peek()
        .is_some_and(|first| first.eq_ignore_case(root_name))
    {
        segments.next();
    }

    segments.collect()
}
