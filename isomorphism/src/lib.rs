//! This crate is part of Algiso,
//! a toolkit for checking that two query-algebra trees are equivalent
//! up to the renaming of variables and blank nodes.
//!
//! Two algebra trees produced from the same query may use different,
//! arbitrary names for their variables (`?x`) and blank nodes (`_:b`).
//! This crate decides whether an *expected* tree and an *actual* tree
//! are identical once such identifiers are consistently renamed:
//! ```
//! # use algiso_isomorphism::*;
//! # use algiso_tree::Tree;
//! let expected = Tree::seq([
//!     Tree::record([("s", "?s"), ("p", "http://example.org/p"), ("o", "?o")]),
//!     Tree::record([("s", "?o"), ("p", "http://example.org/q"), ("o", "_:b")]),
//! ]);
//! let actual = Tree::seq([
//!     Tree::record([("s", "?b"), ("p", "http://example.org/q"), ("o", "_:x")]),
//!     Tree::record([("s", "?a"), ("p", "http://example.org/p"), ("o", "?b")]),
//! ]);
//! let bindings = tree_bindings(&expected, &actual).unwrap();
//! assert_eq!(bindings.get("?s"), Some("?a"));
//! assert_eq!(bindings.get("_:b"), Some("_:x"));
//! ```
//!
//! See [`isomorphic_trees`] for the exact semantics,
//! and [`compare_trees`] / [`assert_isomorphic!`] for diagnostics.
#![deny(missing_docs)]

mod _bindings;
pub use _bindings::*;
mod _compare;
pub use _compare::*;
mod _error;
pub use _error::*;
mod _matcher;
pub use _matcher::*;
pub mod diff;
pub mod matching;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
