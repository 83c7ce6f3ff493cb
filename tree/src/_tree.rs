// this module is transparently re-exported by its parent `lib`
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::path::{PathStep, TreePath};
use crate::{IdKind, Scalar};

/// A query-algebra tree, as produced by a translator.
///
/// The shape of every node is decided at construction time,
/// so that comparing two trees is an exhaustive match on their shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// An atomic value
    Scalar(Scalar),
    /// A list of trees.
    ///
    /// Element order is *not* considered significant by the matcher.
    Sequence(Vec<Tree>),
    /// A set of named fields, all mandatory.
    Record(BTreeMap<String, Tree>),
}

/// The three shapes a [`Tree`] can have.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// See [`Tree::Scalar`]
    Scalar,
    /// See [`Tree::Sequence`]
    Sequence,
    /// See [`Tree::Record`]
    Record,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::Sequence => f.write_str("sequence"),
            Shape::Record => f.write_str("record"),
        }
    }
}

impl Tree {
    /// The [`Scalar::Null`] tree.
    pub fn null() -> Self {
        Tree::Scalar(Scalar::Null)
    }

    /// Build a sequence from anything convertible to trees.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tree>,
    {
        Tree::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a record from (field name, value) pairs.
    ///
    /// If a field name is given several times, the last value wins.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Tree>,
    {
        Tree::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The shape of this tree.
    pub fn shape(&self) -> Shape {
        match self {
            Tree::Scalar(_) => Shape::Scalar,
            Tree::Sequence(_) => Shape::Sequence,
            Tree::Record(_) => Shape::Record,
        }
    }

    /// The scalar value of this tree, if it is a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Tree::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The string value of this tree, if it is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// The elements of this tree, if it is a sequence.
    pub fn as_sequence(&self) -> Option<&[Tree]> {
        match self {
            Tree::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The fields of this tree, if it is a record.
    pub fn as_record(&self) -> Option<&BTreeMap<String, Tree>> {
        match self {
            Tree::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// The value of the given field, if this tree is a record having that field.
    pub fn get(&self, field: &str) -> Option<&Tree> {
        self.as_record().and_then(|fields| fields.get(field))
    }

    /// The node at the end of `path`, if any.
    pub fn at(&self, path: &TreePath) -> Option<&Tree> {
        path.steps().iter().try_fold(self, |node, step| match step {
            PathStep::Field(name) => node.get(name),
            PathStep::Index(i) => node.as_sequence().and_then(|items| items.get(*i)),
        })
    }

    /// The distinct renameable identifiers occurring in this tree.
    pub fn identifiers(&self) -> BTreeSet<&str> {
        let mut ids = BTreeSet::new();
        self.collect_identifiers(&mut ids);
        ids
    }

    fn collect_identifiers<'a>(&'a self, ids: &mut BTreeSet<&'a str>) {
        match self {
            Tree::Scalar(Scalar::Str(txt)) if IdKind::of(txt).is_some() => {
                ids.insert(txt.as_str());
            }
            Tree::Scalar(_) => {}
            Tree::Sequence(items) => items.iter().for_each(|t| t.collect_identifiers(ids)),
            Tree::Record(fields) => fields.values().for_each(|t| t.collect_identifiers(ids)),
        }
    }

    /// A copy of this tree where every renameable identifier `id`
    /// is replaced by `f(kind, id)`.
    ///
    /// `f` is called once per occurrence, so it must be deterministic
    /// for the renaming to be uniform.
    pub fn map_identifiers<F>(&self, mut f: F) -> Tree
    where
        F: FnMut(IdKind, &str) -> String,
    {
        self.map_identifiers_rec(&mut f)
    }

    fn map_identifiers_rec<F>(&self, f: &mut F) -> Tree
    where
        F: FnMut(IdKind, &str) -> String,
    {
        match self {
            Tree::Scalar(Scalar::Str(txt)) => match IdKind::of(txt) {
                Some(kind) => Tree::Scalar(Scalar::Str(f(kind, txt))),
                None => self.clone(),
            },
            Tree::Scalar(_) => self.clone(),
            Tree::Sequence(items) => {
                Tree::Sequence(items.iter().map(|t| t.map_identifiers_rec(f)).collect())
            }
            Tree::Record(fields) => Tree::Record(
                fields
                    .iter()
                    .map(|(k, t)| (k.clone(), t.map_identifiers_rec(f)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Scalar(s) => s.fmt(f),
            Tree::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Tree::Record(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Tree {
                fn from(value: $t) -> Self {
                    Tree::Scalar(value.into())
                }
            }
        )*
    };
}

impl_from_scalar!(Scalar, &str, String, bool, i32, i64, f64);

impl From<Vec<Tree>> for Tree {
    fn from(value: Vec<Tree>) -> Self {
        Tree::Sequence(value)
    }
}
