use std::fmt;

/// An XForm field reference, e.g., `"/data/group/q1"`.
///
/// References are slash-delimited paths into the form's data model. Only the
/// last segment identifies a question inside a submission, since submission
/// documents are flat and keyed by the leaf name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResponsePath {
    /// Slash-separated path string, e.g. "/data/q1"
    path: String,
}

impl ResponsePath {
    /// Create a new path from a slash-separated string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The question identifier: everything after the last `/`.
    ///
    /// A reference without a slash is its own identifier, and a trailing slash
    /// yields an empty identifier, which never matches a submitted field.
    pub fn question_id(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for ResponsePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResponsePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_is_last_segment() {
        let path = ResponsePath::new("/data/group/q1");
        assert_eq!(path.question_id(), "q1");
    }

    #[test]
    fn question_id_without_slash() {
        let path = ResponsePath::new("q1");
        assert_eq!(path.question_id(), "q1");
    }

    #[test]
    fn question_id_trailing_slash_is_empty() {
        let path = ResponsePath::new("/data/");
        assert_eq!(path.question_id(), "");
    }

    #[test]
    fn display() {
        let path = ResponsePath::from("/data/q1");
        assert_eq!(format!("{}", path), "/data/q1");
        assert_eq!(path.as_str(), "/data/q1");
    }
}
