// this module is transparently re-exported by its parent `lib`
use std::collections::{BTreeMap, BTreeSet};

use algiso_tree::{IdKind, Scalar, Tree};

use crate::matching::find_perfect_matching;
use crate::{Bindings, MatchError};

/// The default value of `depth_limit` in [`compare_trees`](crate::compare_trees).
pub const DEFAULT_DEPTH_LIMIT: usize = 256;

/// The default value of `step_limit` in [`compare_trees`](crate::compare_trees).
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

/// Checks whether `expected` and `actual` are equal,
/// up to a consistent renaming of variables and blank nodes.
///
/// More precisely, they are isomorphic if an injective mapping exists
/// from the renameable identifiers of `expected`
/// to those of `actual`, preserving their [kind](IdKind),
/// such that, once applied:
/// * scalars are equal,
/// * records have exactly the same fields, with isomorphic values,
/// * sequences have the same length,
///   and their elements can be paired into isomorphic couples,
///   regardless of their order.
///
/// # Accuracy
///
/// If this function returns `true`, the trees are isomorphic.
///
/// The converse is true in practice, but not always:
/// once a sequence has been matched,
/// the bindings it produced are kept by its parent,
/// even if another pairing of the same sequence would have suited its siblings better.
/// For example, the record
/// ```text
///     {"a": ["?x", "?y"], "b": "?x"}
/// ```
/// is not recognized as isomorphic to
/// ```text
///     {"a": ["?p", "?q"], "b": "?q"}
/// ```
/// because `a` binds `?x` to `?p` before `b` is considered.
/// Trees produced by a translator rarely exhibit this pattern.
///
/// # Performance
///
/// Sequences are compared with [`find_perfect_matching`],
/// which is factorial in the worst case.
/// This function sets no limit;
/// see [`isomorphic_trees_with`] for a guarded version.
pub fn isomorphic_trees(expected: &Tree, actual: &Tree) -> bool {
    tree_bindings(expected, actual).is_some()
}

/// Same as [`isomorphic_trees`], but returns the bindings
/// from the identifiers of `expected` to those of `actual`
/// when the trees are isomorphic.
pub fn tree_bindings(expected: &Tree, actual: &Tree) -> Option<Bindings> {
    // limits set to usize::MAX can not be exceeded
    isomorphic_trees_with(expected, actual, usize::MAX, usize::MAX).unwrap_or_default()
}

/// Same as [`tree_bindings`], but gives up if the comparison becomes too complex.
///
/// * `depth_limit` is the maximum nesting level of the trees,
/// * `step_limit` is the maximum number of node comparisons,
///   including those performed in abandoned branches of the search.
///
/// Both trees are walked once, within `depth_limit`, before being compared,
/// so a tree deeper than `depth_limit` is rejected without exhausting the stack.
///
/// The default values ([`DEFAULT_DEPTH_LIMIT`] and [`DEFAULT_STEP_LIMIT`])
/// are expected to work with any realistic query.
///
/// # Errors
/// A [`MatchError`] is returned if a limit is exceeded.
pub fn isomorphic_trees_with(
    expected: &Tree,
    actual: &Tree,
    depth_limit: usize,
    step_limit: usize,
) -> Result<Option<Bindings>, MatchError> {
    // quick return condition: the mapping is injective and total
    let ids1 = count_identifiers(expected, depth_limit)?;
    let ids2 = count_identifiers(actual, depth_limit)?;
    if ids1 != ids2 {
        log::debug!("not isomorphic: identifier counts differ ({ids1:?} vs. {ids2:?})");
        return Ok(None);
    }

    let mut matcher = Matcher {
        depth_limit,
        step_limit,
        steps: 0,
    };
    let mut bindings = Bindings::new();
    let verdict = matcher.match_rec(expected, actual, &mut bindings, 0)?;
    log::debug!(
        "isomorphic: {verdict} ({} step(s), {} binding(s))",
        matcher.steps,
        bindings.len()
    );
    Ok(verdict.then_some(bindings))
}

fn count_identifiers(
    tree: &Tree,
    depth_limit: usize,
) -> Result<BTreeMap<IdKind, usize>, MatchError> {
    let mut ids = BTreeSet::new();
    collect_identifiers(tree, &mut ids, 0, depth_limit)?;
    let mut counts = BTreeMap::new();
    for kind in ids.into_iter().filter_map(IdKind::of) {
        *counts.entry(kind).or_default() += 1;
    }
    Ok(counts)
}

fn collect_identifiers<'a>(
    tree: &'a Tree,
    ids: &mut BTreeSet<&'a str>,
    depth: usize,
    depth_limit: usize,
) -> Result<(), MatchError> {
    if depth > depth_limit {
        return Err(MatchError::TooDeep(depth_limit));
    }
    match tree {
        Tree::Scalar(scalar) => {
            if let (Some(_), Some(txt)) = (scalar.id_kind(), scalar.as_str()) {
                ids.insert(txt);
            }
        }
        Tree::Sequence(items) => {
            for item in items {
                collect_identifiers(item, ids, depth + 1, depth_limit)?;
            }
        }
        Tree::Record(fields) => {
            for value in fields.values() {
                collect_identifiers(value, ids, depth + 1, depth_limit)?;
            }
        }
    }
    Ok(())
}

struct Matcher {
    depth_limit: usize,
    step_limit: usize,
    steps: usize,
}

impl Matcher {
    /// On success, `bindings` is extended with the bindings required by this pair.
    /// On failure, `bindings` may have been partially extended,
    /// and must be discarded by the caller.
    fn match_rec(
        &mut self,
        expected: &Tree,
        actual: &Tree,
        bindings: &mut Bindings,
        depth: usize,
    ) -> Result<bool, MatchError> {
        self.steps += 1;
        if self.steps > self.step_limit {
            return Err(MatchError::TooComplex(self.step_limit));
        }
        if depth > self.depth_limit {
            return Err(MatchError::TooDeep(self.depth_limit));
        }
        match (expected, actual) {
            (Tree::Scalar(e), Tree::Scalar(a)) => Ok(match_scalars(e, a, bindings)),
            (Tree::Sequence(e), Tree::Sequence(a)) => self.match_sequences(e, a, bindings, depth),
            (Tree::Record(e), Tree::Record(a)) => self.match_records(e, a, bindings, depth),
            _ => Ok(false),
        }
    }

    fn match_sequences(
        &mut self,
        expected: &[Tree],
        actual: &[Tree],
        bindings: &mut Bindings,
        depth: usize,
    ) -> Result<bool, MatchError> {
        if expected.len() != actual.len() {
            return Ok(false);
        }
        let found = find_perfect_matching(expected, actual, &*bindings, |e, a, b| {
            self.match_rec(e, a, b, depth + 1)
        })?;
        match found {
            Some(found) => {
                *bindings = found;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn match_records(
        &mut self,
        expected: &BTreeMap<String, Tree>,
        actual: &BTreeMap<String, Tree>,
        bindings: &mut Bindings,
        depth: usize,
    ) -> Result<bool, MatchError> {
        if expected.len() != actual.len() {
            return Ok(false);
        }
        for (name, e) in expected {
            let Some(a) = actual.get(name) else {
                return Ok(false);
            };
            if !self.match_rec(e, a, bindings, depth + 1)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn match_scalars(expected: &Scalar, actual: &Scalar, bindings: &mut Bindings) -> bool {
    let Some(kind) = expected.id_kind() else {
        return expected == actual;
    };
    if actual.id_kind() != Some(kind) {
        return false;
    }
    match (expected, actual) {
        (Scalar::Str(e), Scalar::Str(a)) => bindings.bind(e, a),
        _ => false,
    }
}
