// this module is transparently re-exported by its parent `lib`
use std::fmt;

/// The prefix marking a blank node identifier, e.g. `_:b0`.
pub const BNODE_PREFIX: &str = "_:";

/// The prefix marking a variable identifier, e.g. `?x`.
pub const VARIABLE_PREFIX: &str = "?";

/// The two categories of renameable identifiers.
///
/// An identifier of one category can only ever be renamed
/// into an identifier of the same category.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IdKind {
    /// A blank node, written `_:label`
    BlankNode,
    /// A variable, written `?name`
    Variable,
}

impl IdKind {
    /// The prefix distinguishing this category.
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::BlankNode => BNODE_PREFIX,
            IdKind::Variable => VARIABLE_PREFIX,
        }
    }

    /// Classify `txt`, returning `None` if it is not a renameable identifier.
    pub fn of(txt: &str) -> Option<IdKind> {
        if txt.starts_with(BNODE_PREFIX) {
            Some(IdKind::BlankNode)
        } else if txt.starts_with(VARIABLE_PREFIX) {
            Some(IdKind::Variable)
        } else {
            None
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::BlankNode => f.write_str("blank node"),
            IdKind::Variable => f.write_str("variable"),
        }
    }
}

/// An atomic [`Tree`](crate::Tree) value.
///
/// Floats are compared by their bit pattern,
/// so that `NaN` equals itself (and `0.0` differs from `-0.0`).
#[derive(Clone, Debug)]
pub enum Scalar {
    /// The absence of a value (as found in JSON documents)
    Null,
    /// A boolean flag
    Bool(bool),
    /// An integer
    Integer(i64),
    /// A non-integer number
    Float(f64),
    /// A string, which may be a renameable identifier (see [`Scalar::id_kind`])
    Str(String),
}

impl Scalar {
    /// The category of this scalar, if it is a renameable identifier.
    ///
    /// Only [`Scalar::Str`] values can be renameable.
    pub fn id_kind(&self) -> Option<IdKind> {
        match self {
            Scalar::Str(txt) => IdKind::of(txt),
            _ => None,
        }
    }

    /// The underlying string, if this is a [`Scalar::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(txt) => Some(txt),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(b1), Scalar::Bool(b2)) => b1 == b2,
            (Scalar::Integer(i1), Scalar::Integer(i2)) => i1 == i2,
            (Scalar::Float(x1), Scalar::Float(x2)) => x1.to_bits() == x2.to_bits(),
            (Scalar::Str(t1), Scalar::Str(t2)) => t1 == t2,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x:?}"),
            Scalar::Str(txt) => write!(f, "{txt:?}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}
