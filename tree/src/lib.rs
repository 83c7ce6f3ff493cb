//! This crate is part of Algiso,
//! a toolkit for checking that two query-algebra trees are equivalent
//! up to the renaming of variables and blank nodes.
//!
//! It defines the [`Tree`] value model:
//! scalars, sequences and records,
//! where some string scalars (see [`IdKind`]) are renameable identifiers.
//!
//! Trees are usually built by a translator (or by `algiso_algebra`),
//! and compared by `algiso_isomorphism`.
#![deny(missing_docs)]

mod _scalar;
pub use _scalar::*;
mod _tree;
pub use _tree::*;
pub mod path;

#[cfg(feature = "serde")]
mod _serde;

#[cfg(test)]
mod test;
