// this module is transparently re-exported by its parent `lib`
use std::error::Error;
use std::fmt;

use algiso_tree::Tree;

use crate::diff::{structural_diff, Difference};
use crate::{isomorphic_trees_with, Bindings, MatchError, DEFAULT_DEPTH_LIMIT, DEFAULT_STEP_LIMIT};

/// Compare `expected` and `actual`, explaining the verdict when they differ.
///
/// This uses [`isomorphic_trees_with`] with the default limits.
///
/// # Errors
/// If the trees are not isomorphic (or if a limit was exceeded),
/// a [`Mismatch`] describing both trees is returned.
/// When the trees exceed [`DEFAULT_DEPTH_LIMIT`], the report lists no difference.
pub fn compare_trees(expected: &Tree, actual: &Tree) -> Result<Bindings, Mismatch> {
    match isomorphic_trees_with(expected, actual, DEFAULT_DEPTH_LIMIT, DEFAULT_STEP_LIMIT) {
        Ok(Some(bindings)) => Ok(bindings),
        Ok(None) => Err(Mismatch::new(expected, actual, None)),
        Err(err) => Err(Mismatch::new(expected, actual, Some(err))),
    }
}

/// The report of a failed [`compare_trees`].
#[derive(Clone, Debug)]
pub struct Mismatch {
    /// The expected tree
    pub expected: Tree,
    /// The actual tree
    pub actual: Tree,
    /// The local differences between both trees
    pub differences: Vec<Difference>,
    /// Set if the comparison was interrupted rather than concluded
    pub cause: Option<MatchError>,
}

impl Mismatch {
    fn new(expected: &Tree, actual: &Tree, cause: Option<MatchError>) -> Self {
        // the diff is not bounded in depth
        let differences = match cause {
            Some(MatchError::TooDeep(_)) => vec![],
            _ => structural_diff(expected, actual),
        };
        Mismatch {
            expected: expected.clone(),
            actual: actual.clone(),
            differences,
            cause,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => writeln!(f, "Could not compare trees: {cause}")?,
            None => writeln!(f, "Trees are not isomorphic")?,
        }
        for diff in &self.differences {
            writeln!(f, "- {diff}")?;
        }
        if self.differences.is_empty() && self.cause.is_none() {
            writeln!(f, "- identifiers can not be renamed consistently")?;
        }
        writeln!(f, "expected:\n{}", pretty(&self.expected))?;
        write!(f, "actual:\n{}", pretty(&self.actual))
    }
}

impl Error for Mismatch {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}

fn pretty(tree: &Tree) -> String {
    serde_json::to_string_pretty(tree).unwrap_or_else(|_| tree.to_string())
}

/// Assert that two trees are [isomorphic](crate::isomorphic_trees),
/// panicking with a [`Mismatch`] report otherwise.
///
/// ```
/// # use algiso_isomorphism::assert_isomorphic;
/// # use algiso_tree::Tree;
/// assert_isomorphic!(Tree::seq(["?x", "a"]), Tree::seq(["a", "?y"]));
/// ```
#[macro_export]
macro_rules! assert_isomorphic {
    ($expected:expr, $actual:expr $(,)?) => {
        if let Err(mismatch) = $crate::compare_trees(&$expected, &$actual) {
            panic!("{mismatch}");
        }
    };
}
