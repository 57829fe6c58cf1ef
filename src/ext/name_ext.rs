/// Case-insensitive comparison of node names.
///
/// Names are compared character by character after Unicode lowercasing, so
/// `"MONTAÑA.jpg"` and `"montaña.JPG"` are the same name.
pub trait NameExt {
    fn eq_ignore_case(&self, other: &str) -> bool;
}

impl NameExt for str {
    fn eq_ignore_case(&self, other: &str) -> bool {
        if self.is_ascii() && other.is_ascii() {
            return self.eq_ignore_ascii_case(other);
        }
        self.chars()
            .flat_map(char::to_lowercase)
            .eq(other.chars().flat_map(char::to_lowercase))
    }
}

impl NameExt for String {
    fn eq_ignore_case(&self, other: &str) -> bool {
        self.as_str().eq_ignore_case(other)
    }
}
