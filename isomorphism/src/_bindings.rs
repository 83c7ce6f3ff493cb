// this module is transparently re-exported by its parent `lib`
use std::collections::BTreeMap;
use std::fmt;

/// A binding table,
/// mapping renameable identifiers of the *expected* tree
/// to renameable identifiers of the *actual* tree.
///
/// The mapping is injective:
/// two expected identifiers are never bound to the same actual identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    forward: BTreeMap<String, String>,
    backward: BTreeMap<String, String>,
}

impl Bindings {
    /// An empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The actual identifier bound to `expected`, if any.
    pub fn get(&self, expected: &str) -> Option<&str> {
        self.forward.get(expected).map(String::as_str)
    }

    /// The expected identifier bound to `actual`, if any.
    pub fn get_reverse(&self, actual: &str) -> Option<&str> {
        self.backward.get(actual).map(String::as_str)
    }

    /// The number of bound identifiers.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether no identifier is bound.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over (expected, actual) pairs, sorted by expected identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.forward.iter().map(|(e, a)| (e.as_str(), a.as_str()))
    }

    /// Bind `expected` to `actual`, unless that conflicts with an existing binding.
    ///
    /// Return `true` if the binding was added or was already present,
    /// `false` if `expected` is bound to another identifier,
    /// or if `actual` is already bound from another identifier.
    pub fn bind(&mut self, expected: &str, actual: &str) -> bool {
        if let Some(bound) = self.forward.get(expected) {
            let consistent = bound == actual;
            if !consistent {
                log::trace!("{expected} is already bound to {bound}, not {actual}");
            }
            return consistent;
        }
        if let Some(other) = self.backward.get(actual) {
            log::trace!("{actual} is already bound from {other}, not {expected}");
            return false;
        }
        log::trace!("binding {expected} -> {actual}");
        self.forward.insert(expected.to_string(), actual.to_string());
        self.backward.insert(actual.to_string(), expected.to_string());
        true
    }

    /// Convert into a map from expected to actual identifiers.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.forward
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (expected, actual) in self.iter() {
            writeln!(f, "{expected} -> {actual}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bind() {
        let mut b = Bindings::new();
        assert!(b.is_empty());
        assert!(b.bind("?x", "?a"));
        assert!(b.bind("?x", "?a"));
        assert!(!b.bind("?x", "?b"));
        assert!(!b.bind("?y", "?a"));
        assert!(b.bind("?y", "?b"));
        assert_eq!(b.len(), 2);
        assert_eq!(b.get("?x"), Some("?a"));
        assert_eq!(b.get_reverse("?b"), Some("?y"));
        assert_eq!(b.get("?z"), None);
    }

    #[test]
    fn display() {
        let mut b = Bindings::new();
        b.bind("?y", "?b");
        b.bind("?x", "?a");
        assert_eq!(b.to_string(), "?x -> ?a\n?y -> ?b\n");
        let map = b.into_map();
        assert_eq!(map.get("?y").map(String::as_str), Some("?b"));
    }
}
