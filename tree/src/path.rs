//! I define [`TreePath`], the address of a node inside a [`Tree`](crate::Tree).
use std::fmt;

/// One step from a node to one of its children.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PathStep {
    /// Descend into a record field
    Field(String),
    /// Descend into a sequence element
    Index(usize),
}

/// A path from the root of a tree to one of its nodes.
///
/// It is displayed as `$` followed by its steps,
/// e.g. `$.input.patterns[1]`.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TreePath(Vec<PathStep>);

impl TreePath {
    /// The path of the root node.
    pub fn root() -> Self {
        TreePath(vec![])
    }

    /// The steps of this path.
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Whether this is the path of the root node.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path, extending this one with a field step.
    pub fn field(&self, name: &str) -> Self {
        self.child(PathStep::Field(name.to_string()))
    }

    /// A new path, extending this one with an index step.
    pub fn index(&self, i: usize) -> Self {
        self.child(PathStep::Index(i))
    }

    fn child(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        TreePath(steps)
    }
}

impl FromIterator<PathStep> for TreePath {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        TreePath(iter.into_iter().collect())
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.0 {
            match step {
                PathStep::Field(name) => write!(f, ".{name}")?,
                PathStep::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}
