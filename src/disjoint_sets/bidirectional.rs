//! A disjoint-set forest that also knows the children of every node.

use {
    std::{
        cell::RefCell,
        collections::HashSet,
        fmt,
        hash::Hash,
    },
    crate::disjoint_sets::{
        Forest,
        RawForest,
        disjoint_set::DisjointSet,
    },
};

/// A [`DisjointSet<T>`] with a parent to children index.
///
/// Every time a parent is assigned, including the reassignments made by path compression,
/// the child moves to the children of its new parent.
/// The children always mirror the parents exactly, so `partition` only walks the tree of
/// the requested class.
/// This makes `partition` linear in the size of that class instead of the whole relation,
/// at the cost of more memory and slightly slower merges.
///
/// # Examples
///
/// ```
/// use equivalence::{BidirectionalDisjointSet, Equivalence};
///
/// let mut disjoint_set = BidirectionalDisjointSet::new();
/// disjoint_set.merge(&[1, 2, 3]);
/// disjoint_set.merge(&[4, 5]);
///
/// let mut class: Vec<_> = disjoint_set.partition(&2).into_iter().collect();
/// class.sort();
/// assert_eq!(class, vec![1, 2, 3]);
/// ```
///
/// [`DisjointSet<T>`]: struct.DisjointSet.html
#[derive(Clone)]
pub struct BidirectionalDisjointSet<T> {
    set: DisjointSet<T>,
    /// The inverse of the parents, roots are not listed as their own children.
    children: Vec<RefCell<HashSet<usize>>>,
}

impl<T> BidirectionalDisjointSet<T> {
    /// Constructs a new, empty `BidirectionalDisjointSet<T>`.
    #[inline]
    pub fn new() -> Self {
        Self {
            set: DisjointSet::new(),
            children: Vec::new(),
        }
    }

    /// Constructs a new, empty `BidirectionalDisjointSet<T>` with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: DisjointSet::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
        }
    }

    /// Returns the amount of values in the `BidirectionalDisjointSet<T>`.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` if no value has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterates over the values in the order they were added.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.set.iter()
    }
}

impl<T> RawForest for BidirectionalDisjointSet<T> where
    T: Hash + Eq + Clone,
{
    type Value = T;

    #[inline]
    fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    fn value(&self, index: usize) -> &T {
        self.set.value(index)
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize> {
        self.set.index_of(value)
    }

    fn push(&mut self, value: T) -> usize {
        self.children.push(RefCell::default());
        self.set.push(value)
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        self.set.parent(index)
    }

    #[inline]
    fn rank(&self, index: usize) -> usize {
        self.set.rank(index)
    }

    #[inline]
    fn set_rank(&self, index: usize, rank: usize) {
        self.set.set_rank(index, rank);
    }

    fn join(&self, index: usize, parent: usize) {
        let old_parent = self.set.parent(index);
        if old_parent != index {
            self.children[old_parent].borrow_mut().remove(&index);
        }

        self.set.join(index, parent);

        if parent != index {
            self.children[parent].borrow_mut().insert(index);
        }
    }

    fn class_members(&self, root: usize) -> Vec<usize> {
        let mut members = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            members.push(node);
            stack.extend(self.children[node].borrow().iter().copied());
        }

        members
    }
}

impl<T> Forest for BidirectionalDisjointSet<T> where T: Hash + Eq + Clone {}

impl<T> Default for BidirectionalDisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BidirectionalDisjointSet<T> where
    T: Hash + Eq + Clone + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.set, formatter)
    }
}

impl<T> Extend<T> for BidirectionalDisjointSet<T> where
    T: Hash + Eq + Clone,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = T> {
        for value in iter {
            if self.index_of(&value).is_none() {
                self.push(value);
            }
        }
    }
}

impl<T> std::iter::FromIterator<T> for BidirectionalDisjointSet<T> where
    T: Hash + Eq + Clone,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        let mut disjoint_set = Self::new();
        disjoint_set.extend(iter);

        disjoint_set
    }
}

#[cfg(test)]
mod tests {
    use {
        log::LevelFilter,
        simplelog::{Config, TestLogger},
        crate::relation::Equivalence,
        super::*,
    };

    /// Checks that the children are exactly the inverse of the parents.
    fn assert_consistent<T>(disjoint_set: &BidirectionalDisjointSet<T>) where
        T: Hash + Eq + Clone,
    {
        for index in 0 .. disjoint_set.len() {
            let parent = disjoint_set.parent(index);
            let is_child = disjoint_set.children[parent].borrow().contains(&index);

            assert_eq!(is_child, parent != index, "index {} with parent {}", index, parent);
        }

        let listed: usize = disjoint_set.children.iter().map(|children| children.borrow().len()).sum();
        let non_roots = (0 .. disjoint_set.len()).filter(|&index| disjoint_set.parent(index) != index).count();
        assert_eq!(listed, non_roots);
    }

    /// Builds a tree where 7 sits three levels below the root.
    fn deep_tree() -> BidirectionalDisjointSet<u32> {
        let mut disjoint_set = BidirectionalDisjointSet::<u32>::new();
        disjoint_set.merge(&[0, 1]);
        disjoint_set.merge(&[2, 3]);
        disjoint_set.merge(&[0, 2]);
        disjoint_set.merge(&[4, 5]);
        disjoint_set.merge(&[6, 7]);
        disjoint_set.merge(&[4, 6]);
        disjoint_set.merge(&[0, 4]);
        disjoint_set.update(&[8]);

        disjoint_set
    }

    #[test]
    fn children_follow_path_compression() {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
        let disjoint_set = deep_tree();
        assert_consistent(&disjoint_set);
        assert_eq!(disjoint_set.parent(7), 6);

        assert_eq!(disjoint_set.find(7), 0);
        assert_eq!(disjoint_set.parent(7), 0);
        assert_consistent(&disjoint_set);

        let mut class: Vec<_> = disjoint_set.partition(&5).into_iter().collect();
        class.sort();
        assert_eq!(class, (0 .. 8).collect::<Vec<_>>());
    }

    #[test]
    fn partition_after_full_compression() {
        let disjoint_set = deep_tree();
        for value in 0 .. 9 {
            disjoint_set.are_equivalent(&[value, 0]).unwrap();
        }
        assert_consistent(&disjoint_set);

        assert_eq!(disjoint_set.partition(&3).len(), 8);
        assert_eq!(disjoint_set.partition(&8).len(), 1);
        assert!(disjoint_set.partition(&9).is_empty());
    }

    #[test]
    fn agrees_with_scanning_forest() {
        let mut fast = deep_tree();
        let mut scanning = DisjointSet::<u32>::new();
        for value in fast.iter() {
            scanning.update(&[*value]);
        }
        scanning.merge(&[0, 1, 2, 3, 4, 5, 6, 7]);

        fast.merge(&[9, 8]);
        scanning.merge(&[9, 8]);

        for value in 0 .. 11 {
            assert_eq!(fast.partition(&value), scanning.partition(&value));
        }
        assert_consistent(&fast);
    }
}
