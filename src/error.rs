use thiserror::Error;

/// The ways a query on an [`Equivalence`](crate::Equivalence) can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EquivalenceError {
    /// `are_equivalent` needs at least one object to compare.
    #[error("no objects given")]
    NoObjects,
}
