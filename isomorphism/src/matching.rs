//! I provide a generic backtracking search for perfect matchings
//! between two slices.
//!
//! This is how sequences are compared by the matcher,
//! whose element order is not considered significant.

/// Search a bijection between `expected` and `actual`
/// such that every pair satisfies `compatible`.
///
/// `compatible(e, a, state)` decides whether `e` can be paired with `a`,
/// and may update `state` to record the consequences of that pairing
/// (e.g. identifier bindings).
/// Every candidate pairing receives its own copy of the state,
/// so a rejected pairing never affects the others.
///
/// Expected elements are fixed in order,
/// each one against every unused actual element, in the order of `actual`.
/// The first complete matching found wins,
/// and the state accumulated along it is returned.
/// `None` is returned if the slices have different lengths,
/// or if no perfect matching exists.
///
/// # Errors
/// The first error returned by `compatible` aborts the search.
///
/// # Performance
/// Branches are pruned as soon as a pairing is rejected,
/// but in the worst case, all `n!` pairings of `n` elements are explored,
/// each one cloning the state once per level.
/// This is acceptable for operator arguments,
/// but not for large collections.
pub fn find_perfect_matching<E, A, S, X, F>(
    expected: &[E],
    actual: &[A],
    state: &S,
    mut compatible: F,
) -> Result<Option<S>, X>
where
    S: Clone,
    F: FnMut(&E, &A, &mut S) -> Result<bool, X>,
{
    if expected.len() != actual.len() {
        return Ok(None);
    }
    let mut used = vec![false; actual.len()];
    extend(expected, actual, &mut used, state, &mut compatible)
}

fn extend<E, A, S, X, F>(
    expected: &[E],
    actual: &[A],
    used: &mut [bool],
    state: &S,
    compatible: &mut F,
) -> Result<Option<S>, X>
where
    S: Clone,
    F: FnMut(&E, &A, &mut S) -> Result<bool, X>,
{
    let Some((first, rest)) = expected.split_first() else {
        return Ok(Some(state.clone()));
    };
    for (i, candidate) in actual.iter().enumerate() {
        if used[i] {
            continue;
        }
        let mut branch = state.clone();
        if !compatible(first, candidate, &mut branch)? {
            continue;
        }
        used[i] = true;
        let found = extend(rest, actual, used, &branch, compatible)?;
        used[i] = false;
        if found.is_some() {
            return Ok(found);
        }
        log::trace!("backtracking from candidate #{i} ({} element(s) left)", rest.len());
    }
    Ok(None)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::Infallible;

    fn eq(e: &i32, a: &i32, state: &mut Vec<(i32, i32)>) -> Result<bool, Infallible> {
        state.push((*e, *a));
        Ok(e == a)
    }

    #[test]
    fn check_empty() {
        let found = find_perfect_matching::<i32, i32, _, _, _>(&[], &[], &vec![], eq).unwrap();
        assert_eq!(found, Some(vec![]));
    }

    #[test]
    fn check_permuted() {
        let found = find_perfect_matching(&[1, 2, 3], &[3, 1, 2], &vec![], eq).unwrap();
        assert_eq!(found, Some(vec![(1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn check_length() {
        let found = find_perfect_matching(&[1, 2], &[1, 2, 3], &vec![], eq).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn check_used_once() {
        let found = find_perfect_matching(&[1, 1], &[1, 2], &vec![], eq).unwrap();
        assert_eq!(found, None);
        let found = find_perfect_matching(&[1, 1, 2], &[1, 2, 1], &vec![], eq).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn check_backtracking() {
        // 1 is compatible with 1 and 2, 2 only with 1:
        // the first candidate for 1 must be abandoned
        let found = find_perfect_matching(&[1, 2], &[1, 2], &0, |e, a, calls| {
            *calls += 1;
            Ok::<_, Infallible>(*e == 1 || *a == 1)
        })
        .unwrap();
        // the state only counts calls along the successful branch
        assert_eq!(found, Some(2));
    }

    #[test]
    fn check_error() {
        let res = find_perfect_matching(&[1, 2], &[2, 1], &(), |e, _, _| {
            if *e == 2 {
                Err("boom")
            } else {
                Ok(true)
            }
        });
        assert_eq!(res, Err("boom"));
    }
}
