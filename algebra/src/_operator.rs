// this module is transparently re-exported by its parent `lib`
use std::fmt;
use std::str::FromStr;

macro_rules! operators {
    ($($(#[$attr:meta])* $variant:ident => $key:literal,)*) => {
        /// The algebra operators known by [`algebra_element`](crate::algebra_element).
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Operator {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl Operator {
            /// All operators, in alphabetical order of their variant name.
            pub const ALL: &'static [Operator] = &[$(Operator::$variant,)*];

            /// The value of the `type` field of records built for this operator.
            pub fn key(self) -> &'static str {
                match self {
                    $(Operator::$variant => $key,)*
                }
            }
        }

        impl FromStr for Operator {
            type Err = UnknownOperator;

            fn from_str(key: &str) -> Result<Self, Self::Err> {
                match key {
                    $($key => Ok(Operator::$variant),)*
                    _ => Err(UnknownOperator(key.to_string())),
                }
            }
        }
    };
}

operators! {
    /// Aggregate function (`COUNT`, `SUM`, `GROUP_CONCAT`...)
    Aggregate => "aggregate",
    /// Alternative property path (`p1|p2`)
    Alt => "alt",
    /// Basic graph pattern
    Bgp => "bgp",
    /// `DISTINCT` modifier
    Distinct => "distinct",
    /// Function call or operator application
    Expression => "expression",
    /// `BIND` of an expression to a variable
    Extend => "extend",
    /// `FILTER`
    Filter => "filter",
    /// `GRAPH`
    Graph => "graph",
    /// `GROUP BY`
    Group => "group",
    /// Inverse property path (`^p`)
    Inv => "inv",
    /// Inner join
    Join => "join",
    /// `OPTIONAL`
    LeftJoin => "leftjoin",
    /// Single-IRI property path
    Link => "link",
    /// `MINUS`
    Minus => "minus",
    /// Negated property set (`!(p1|p2)`)
    Nps => "nps",
    /// `p+`
    OneOrMorePath => "OneOrMorePath",
    /// `ORDER BY`
    OrderBy => "orderby",
    /// Triple pattern with a property path as predicate
    Path => "path",
    /// `SELECT` projection
    Project => "project",
    /// `REDUCED` modifier
    Reduced => "reduced",
    /// Sequence property path (`p1/p2`)
    Seq => "seq",
    /// `OFFSET` / `LIMIT`
    Slice => "slice",
    /// Inline data, as written in the query (converted to [`Operator::Values`])
    Table => "table",
    /// Triple pattern
    Triple => "triple",
    /// `UNION`
    Union => "union",
    /// Inline data
    Values => "values",
    /// `p*`
    ZeroOrMorePath => "ZeroOrMorePath",
    /// `p?`
    ZeroOrOnePath => "ZeroOrOnePath",
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// This error is raised when parsing an unknown operator key.
#[derive(Debug, thiserror::Error)]
#[error("Unknown algebra operator '{0}'")]
pub struct UnknownOperator(pub String);
