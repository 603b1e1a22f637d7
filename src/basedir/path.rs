//! Path-string primitives shared by the resolvers.
//!
//! Resolution works on plain strings, not [`PathBuf`](std::path::PathBuf):
//! the contract of this crate is that values pass through verbatim, trailing
//! separators included, and component-wise path types do not preserve that.

/// Classification of a path value read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate {
    /// The variable is unset, or set to the empty string.
    Missing,
    /// Set to a non-empty value that does not begin with `/`.
    Relative,
    /// Set to a non-empty absolute path, carried verbatim.
    Absolute(String),
}

impl Candidate {
    /// Classify a possibly-unset path value.
    ///
    /// A value is usable only when it is present, non-empty, and begins with
    /// `/`. Everything else splits into `Missing` (recoverable by whatever
    /// fallback the caller has) and `Relative` (rejected outright, so a
    /// misconfigured variable is noticed instead of silently papered over).
    pub(crate) fn classify(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Candidate::Missing,
            Some(path) if path.starts_with('/') => Candidate::Absolute(path.to_owned()),
            Some(_) => Candidate::Relative,
        }
    }
}

/// Concatenate path fragments into one newly allocated string.
///
/// `None` is the absorbing element of the concatenation: a single absent
/// fragment makes the whole join absent, so a broken link anywhere in a
/// fallback chain poisons the assembled path instead of yielding a partial
/// one. Fragments are joined in order with no separator handling.
pub(crate) fn join<'a>(fragments: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let mut joined = String::new();
    for fragment in fragments {
        joined.push_str(fragment?);
    }
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some_eq};

    #[test]
    fn unset_and_empty_are_missing() {
        assert_eq!(Candidate::classify(None), Candidate::Missing);
        assert_eq!(Candidate::classify(Some("")), Candidate::Missing);
    }

    #[test]
    fn non_absolute_values_are_relative() {
        assert_eq!(Candidate::classify(Some("./blah")), Candidate::Relative);
        assert_eq!(Candidate::classify(Some("blah")), Candidate::Relative);
        assert_eq!(Candidate::classify(Some("~/blah")), Candidate::Relative);
    }

    #[test]
    fn absolute_values_are_carried_verbatim() {
        assert_eq!(
            Candidate::classify(Some("/home/test")),
            Candidate::Absolute("/home/test".to_owned())
        );
        assert_eq!(Candidate::classify(Some("/")), Candidate::Absolute("/".to_owned()));
    }

    #[test]
    fn join_concatenates_in_order() {
        assert_some_eq!(join([Some("/home/"), Some("test")]), "/home/test");
    }

    #[test]
    fn join_of_no_fragments_is_empty() {
        assert_some_eq!(join([]), "");
    }

    #[test]
    fn absent_fragment_poisons_the_join() {
        assert_none!(join([Some("/home/"), None]));
        assert_none!(join([None, Some("/.cache/")]));
        assert_none!(join([Some("/home/"), None, Some("/.cache/")]));
    }

    #[test]
    fn join_does_no_separator_handling() {
        assert_some_eq!(
            join([Some("/home/test/"), Some("/.cache/")]),
            "/home/test//.cache/"
        );
        assert_some_eq!(join([Some(""), Some("x")]), "x");
    }
}
