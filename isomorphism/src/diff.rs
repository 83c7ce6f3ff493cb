//! I provide a structural diff between two trees,
//! used to explain why they are not isomorphic.
//!
//! The diff is positional: sequence elements are compared in order,
//! and identifiers of the same kind are not reported
//! (they are allowed to differ).
//! It is therefore only a hint of *where* the trees diverge.
use std::fmt;

use algiso_tree::path::TreePath;
use algiso_tree::{Scalar, Shape, Tree};

/// A local difference between two trees.
#[derive(Clone, Debug, PartialEq)]
pub struct Difference {
    /// Where the difference occurs (in both trees)
    pub path: TreePath,
    /// What the difference is
    pub kind: DifferenceKind,
}

/// The different kinds of [`Difference`].
#[derive(Clone, Debug, PartialEq)]
pub enum DifferenceKind {
    /// The nodes have different shapes
    Shape {
        /// Shape in the expected tree
        expected: Shape,
        /// Shape in the actual tree
        actual: Shape,
    },
    /// The nodes are different scalars
    Scalar {
        /// Value in the expected tree
        expected: Scalar,
        /// Value in the actual tree
        actual: Scalar,
    },
    /// The nodes are sequences of different lengths
    Length {
        /// Length in the expected tree
        expected: usize,
        /// Length in the actual tree
        actual: usize,
    },
    /// The expected record has a field that the actual one lacks
    MissingField(String),
    /// The actual record has a field that the expected one lacks
    ExtraField(String),
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: ", self.path)?;
        match &self.kind {
            DifferenceKind::Shape { expected, actual } => {
                write!(f, "expected {expected}, found {actual}")
            }
            DifferenceKind::Scalar { expected, actual } => {
                write!(f, "expected {expected}, found {actual}")
            }
            DifferenceKind::Length { expected, actual } => {
                write!(f, "expected {expected} element(s), found {actual}")
            }
            DifferenceKind::MissingField(name) => write!(f, "missing field '{name}'"),
            DifferenceKind::ExtraField(name) => write!(f, "unexpected field '{name}'"),
        }
    }
}

/// List the local differences between `expected` and `actual`.
pub fn structural_diff(expected: &Tree, actual: &Tree) -> Vec<Difference> {
    let mut diffs = vec![];
    diff_rec(expected, actual, TreePath::root(), &mut diffs);
    diffs
}

fn diff_rec(expected: &Tree, actual: &Tree, path: TreePath, diffs: &mut Vec<Difference>) {
    let kind = match (expected, actual) {
        (Tree::Scalar(e), Tree::Scalar(a)) => {
            let renameable = e.id_kind().is_some() && e.id_kind() == a.id_kind();
            if e == a || renameable {
                return;
            }
            DifferenceKind::Scalar {
                expected: e.clone(),
                actual: a.clone(),
            }
        }
        (Tree::Sequence(e), Tree::Sequence(a)) => {
            for (i, (e, a)) in e.iter().zip(a).enumerate() {
                diff_rec(e, a, path.index(i), diffs);
            }
            if e.len() == a.len() {
                return;
            }
            DifferenceKind::Length {
                expected: e.len(),
                actual: a.len(),
            }
        }
        (Tree::Record(e), Tree::Record(a)) => {
            for (name, value) in e {
                match a.get(name) {
                    Some(other) => diff_rec(value, other, path.field(name), diffs),
                    None => diffs.push(Difference {
                        path: path.clone(),
                        kind: DifferenceKind::MissingField(name.clone()),
                    }),
                }
            }
            for name in a.keys().filter(|name| !e.contains_key(*name)) {
                diffs.push(Difference {
                    path: path.clone(),
                    kind: DifferenceKind::ExtraField(name.clone()),
                });
            }
            return;
        }
        _ => DifferenceKind::Shape {
            expected: expected.shape(),
            actual: actual.shape(),
        },
    };
    diffs.push(Difference { path, kind });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_difference() {
        let t = Tree::record([("a", Tree::seq(["?x", "b"])), ("c", Tree::from(1))]);
        assert!(structural_diff(&t, &t).is_empty());
        let u = Tree::record([("a", Tree::seq(["?y", "b"])), ("c", Tree::from(1))]);
        assert!(structural_diff(&t, &u).is_empty());
    }

    #[test]
    fn nan_is_not_a_difference() {
        let t = Tree::seq([f64::NAN, 1.5]);
        assert!(structural_diff(&t, &t).is_empty());
        let u = Tree::seq([1.5, 1.5]);
        assert_eq!(structural_diff(&t, &u).len(), 1);
    }

    #[test]
    fn differences() {
        let e = Tree::record([
            ("a", Tree::seq(["x", "y"])),
            ("b", Tree::from("?x")),
            ("c", Tree::from(1)),
            ("d", Tree::from(true)),
        ]);
        let a = Tree::record([
            ("a", Tree::seq(["x", "z", "w"])),
            ("b", Tree::from("_:x")),
            ("c", Tree::seq([1])),
            ("e", Tree::from(true)),
        ]);
        let diffs: Vec<_> = structural_diff(&e, &a)
            .into_iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(
            diffs,
            vec![
                r#"at $.a[1]: expected "y", found "z""#,
                "at $.a: expected 2 element(s), found 3",
                r#"at $.b: expected "?x", found "_:x""#,
                "at $.c: expected scalar, found sequence",
                "at $: missing field 'd'",
                "at $: unexpected field 'e'",
            ]
        );
    }
}
