//! Contains the implementation of the [disjoint-sets/union-find] forests.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

use {
    std::{
        cmp::Ordering,
        collections::{
            HashMap,
            HashSet,
            hash_map::Entry,
        },
        hash::Hash,
    },
    log::trace,
    crate::{
        error::EquivalenceError,
        relation::Equivalence,
    },
};

mod metadata;
pub mod bidirectional;
pub mod disjoint_set;

pub(crate) use raw::RawForest;

mod raw {
    use super::*;

    /// The low level operations of a disjoint-set forest.
    ///
    /// Values are stored at indices and every index has a parent.
    /// An index that is its own parent is the root of its tree and the representative of its class.
    ///
    /// Implementors only provide storage and the `join` step.
    /// Finding roots and union by rank are built on top of these.
    ///
    /// The module is private so only this crate can name the trait and call these methods.
    /// Callers outside of it could otherwise push duplicates or join a root under its own child.
    pub trait RawForest {
        /// The values stored in the forest.
        type Value: Hash + Eq + Clone;

        /// Returns the amount of values in the forest.
        fn len(&self) -> usize;

        /// Returns the value stored at `index`.
        ///
        /// # Panics
        ///
        /// If `index` is out of bounds.
        fn value(&self, index: usize) -> &Self::Value;

        /// Returns the index of `value` if it is in the forest.
        fn index_of(&self, value: &Self::Value) -> Option<usize>;

        /// Adds `value` as a new singleton tree with rank 0 and returns its index.
        ///
        /// The caller makes sure `value` is not in the forest yet.
        fn push(&mut self, value: Self::Value) -> usize;

        /// Returns the parent of `index`.
        fn parent(&self, index: usize) -> usize;

        /// Returns the rank of `index`.
        /// This is only meaningful for roots.
        fn rank(&self, index: usize) -> usize;

        /// Sets the rank of `index`.
        fn set_rank(&self, index: usize, rank: usize);

        /// Makes `parent` the parent of `index`.
        ///
        /// This is the only way parents change, both when joining trees and during path compression.
        fn join(&self, index: usize, parent: usize);

        /// Returns the indices of every value in the tree with the given `root`.
        ///
        /// The default implementation scans the whole forest.
        fn class_members(&self, root: usize) -> Vec<usize> {
            (0 .. RawForest::len(self)).filter(|&index| self.find(index) == root).collect()
        }

        /// Gives the root of the tree that `index` belongs to.
        ///
        /// Every index visited on the way is pointed straight at the root.
        fn find(&self, index: usize) -> usize {
            let parent = self.parent(index);

            // If the node is its own parent we have found the root.
            if parent == index {
                return index
            }

            let root = self.find(parent);
            if parent != root {
                self.join(index, root);
            }

            root
        }

        /// Returns the index of `value`, adding it as a singleton when it is missing.
        fn insert(&mut self, value: &Self::Value) -> usize {
            match self.index_of(value) {
                Some(index) => index,
                None => self.push(value.clone()),
            }
        }

        /// Gives the root of `value`, adding it as a singleton when it is missing.
        fn find_or_insert(&mut self, value: &Self::Value) -> usize {
            let index = self.insert(value);
            self.find(index)
        }

        /// Joins the trees of the roots `root` and `other` by rank and returns the new root.
        ///
        /// On equal ranks `other` is placed under `root`.
        fn union_roots(&self, root: usize, other: usize) -> usize {
            if root == other {
                return root
            }

            match Ord::cmp(&self.rank(root), &self.rank(other)) {
                Ordering::Less => {
                    trace!("attaching root {} under root {}", root, other);
                    self.join(root, other);
                    other
                },
                Ordering::Equal => {
                    let rank = self.rank(root) + 1;
                    trace!("attaching root {} under root {}, rank becomes {}", other, root, rank);
                    self.join(other, root);
                    self.set_rank(root, rank);
                    root
                },
                Ordering::Greater => {
                    trace!("attaching root {} under root {}", other, root);
                    self.join(other, root);
                    root
                },
            }
        }
    }
}

/// A disjoint-set forest that can back an [`Equivalence`].
///
/// This trait is sealed: it is implemented by [`DisjointSet<T>`] and
/// [`BidirectionalDisjointSet<T>`] and cannot be implemented outside of this crate.
/// It names the forests a [`KeyedRelation`] can run on and every `Forest` is an
/// [`Equivalence`] over its values.
///
/// The parents and ranks stay out of reach, so a value cannot be pushed twice and
/// trees cannot be joined into a cycle:
///
/// ```compile_fail
/// use equivalence::{DisjointSet, Equivalence, Forest};
///
/// let mut disjoint_set = DisjointSet::new();
/// disjoint_set.update(&[1]);
/// disjoint_set.push(1);
/// ```
///
/// [`Equivalence`]: ../trait.Equivalence.html
/// [`DisjointSet<T>`]: ../struct.DisjointSet.html
/// [`BidirectionalDisjointSet<T>`]: ../struct.BidirectionalDisjointSet.html
/// [`KeyedRelation`]: ../struct.KeyedRelation.html
pub trait Forest: RawForest {
    /// Returns the amount of classes in the forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use equivalence::{DisjointSet, Equivalence, Forest};
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.merge(&[1, 2]);
    /// disjoint_set.update(&[3, 4]);
    ///
    /// assert_eq!(disjoint_set.amount_of_classes(), 3);
    /// ```
    fn amount_of_classes(&self) -> usize {
        let mut done = bit_vec![false; RawForest::len(self)];
        let mut count = 0;

        for index in 0 .. RawForest::len(self) {
            let root = self.find(index);
            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }
}

/// What a value resolves to without being inserted.
///
/// Values that are not in the forest are their own singleton class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Representative<V> {
    Root(usize),
    Untracked(V),
}

pub(crate) fn representative<'a, F>(forest: &F, value: &'a F::Value) -> Representative<&'a F::Value> where
    F: RawForest + ?Sized,
{
    match forest.index_of(value) {
        Some(index) => Representative::Root(forest.find(index)),
        None => Representative::Untracked(value),
    }
}

/// Groups the values by their representative.
///
/// The groups are ordered by their first value and keep the order of the values inside them.
pub(crate) fn group_by<R, V, I>(pairs: I) -> Vec<Vec<V>> where
    R: Hash + Eq,
    I: IntoIterator<Item = (R, V)>,
{
    let mut slots: HashMap<R, usize> = HashMap::new();
    let mut groups: Vec<Vec<V>> = Vec::new();

    for (representative, value) in pairs {
        match slots.entry(representative) {
            Entry::Occupied(occupied) => groups[*occupied.get()].push(value),
            Entry::Vacant(vacant) => {
                vacant.insert(groups.len());
                groups.push(vec![value]);
            },
        }
    }

    groups
}

impl<F> Equivalence<F::Value> for F where
    F: Forest,
{
    fn update(&mut self, objects: &[F::Value]) {
        for object in objects {
            self.insert(object);
        }
    }

    fn merge(&mut self, objects: &[F::Value]) {
        let mut objects = objects.iter();
        let first = match objects.next() {
            Some(first) => first,
            None => return,
        };

        let mut root = self.find_or_insert(first);
        for object in objects {
            let other = self.find_or_insert(object);
            root = self.union_roots(root, other);
        }
    }

    fn are_equivalent(&self, objects: &[F::Value]) -> Result<bool, EquivalenceError> {
        let (first, rest) = objects.split_first().ok_or(EquivalenceError::NoObjects)?;
        let root = representative(self, first);

        Ok(rest.iter().all(|object| representative(self, object) == root))
    }

    fn partition(&self, object: &F::Value) -> HashSet<F::Value> {
        match self.index_of(object) {
            Some(index) => {
                let root = self.find(index);
                self.class_members(root)
                    .into_iter()
                    .map(|member| self.value(member).clone())
                    .collect()
            },
            None => HashSet::new(),
        }
    }

    fn partitions(&self) -> Vec<Vec<F::Value>> {
        group_by((0 .. RawForest::len(self)).map(|index| (self.find(index), self.value(index).clone())))
    }

    fn partitions_of(&self, objects: &[F::Value]) -> Vec<Vec<F::Value>> {
        group_by(objects.iter().map(|object| (representative(self, object), object.clone())))
    }

    fn len(&self) -> usize {
        RawForest::len(self)
    }

    fn contains(&self, object: &F::Value) -> bool {
        self.index_of(object).is_some()
    }
}
