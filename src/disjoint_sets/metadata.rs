use std::cell::Cell;

/// The tree links of one node in a forest.
///
/// Both fields sit in `Cell`s: `find` repoints parents while the forest is only borrowed.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// Index of the node above this one, equal to the node's own index for roots.
    parent: Cell<usize>,
    /// Upper bound on the height of the tree, kept up to date for roots only.
    rank: Cell<usize>,
}

impl Metadata {
    /// A root of rank 0 at `index`.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            rank: Cell::new(0),
        }
    }

    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    pub(crate) fn set_parent(&self, parent: usize) {
        self.parent.set(parent);
    }

    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    pub(crate) fn set_rank(&self, rank: usize) {
        self.rank.set(rank);
    }
}
