use thiserror::Error;

/// Raised when a comparison exceeds the limits given to
/// [`isomorphic_trees_with`](crate::isomorphic_trees_with).
///
/// This is not a verdict: the trees may or may not be isomorphic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The trees are nested more deeply than allowed
    #[error("Tree too deep (depth limit set to {0})")]
    TooDeep(usize),
    /// The search performed more comparisons than allowed
    #[error("Too many comparison steps (limit set to {0})")]
    TooComplex(usize),
}
