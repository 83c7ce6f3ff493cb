//! This crate is part of Algiso,
//! a toolkit for checking that two query-algebra trees are equivalent
//! up to the renaming of variables and blank nodes.
//!
//! It provides constructors for algebra operator [trees](algiso_tree::Tree),
//! convenient to write the *expected* side of a comparison by hand:
//! ```
//! # use algiso_algebra::*;
//! # use algiso_tree::Tree;
//! # fn main() -> Result<(), AlgebraError> {
//! let bgp = algebra_element("bgp", vec![
//!     triple("?s", "http://example.org/p", "?o"),
//! ])?;
//! let query = algebra_element("project", vec![bgp, Tree::seq(["?s"])])?;
//! assert_eq!(query.get("type").and_then(|t| t.as_str()), Some("project"));
//! # Ok(()) }
//! ```
//!
//! Every operator is a record with a `type` field holding its [key](Operator::key).
#![deny(missing_docs)]

mod _element;
pub use _element::*;
mod _error;
pub use _error::*;
mod _operator;
pub use _operator::*;
