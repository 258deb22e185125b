//! The operations every equivalence relation supports, and a relation that picks its
//! implementation at runtime.

use {
    std::{
        collections::HashSet,
        fmt,
        hash::Hash,
    },
    crate::{
        error::EquivalenceError,
        keyed::KeyedRelation,
        disjoint_sets::{
            bidirectional::BidirectionalDisjointSet,
            disjoint_set::DisjointSet,
        },
    },
};

/// An equivalence relation over objects of type `T`.
///
/// The relation is reflexive, symmetric and transitive at all times.
/// Objects enter it through `update` and `merge` and are never removed.
/// Objects that never entered it are still equivalent to themselves.
///
/// Queries take `&self` but may still reorganize the internal forest to speed up later queries.
pub trait Equivalence<T> {
    /// Adds every object that is not in the relation yet as its own class.
    ///
    /// Objects that are already in the relation are left alone.
    fn update(&mut self, objects: &[T]);

    /// Puts all the given objects in the same class, adding the ones that are missing.
    ///
    /// Merging no objects does nothing.
    fn merge(&mut self, objects: &[T]);

    /// Returns `true` if all the given objects are in the same class.
    ///
    /// Objects do not have to be in the relation, an unknown object is only equivalent
    /// to itself.
    ///
    /// # Errors
    ///
    /// Returns [`EquivalenceError::NoObjects`] if `objects` is empty.
    ///
    /// [`EquivalenceError::NoObjects`]: enum.EquivalenceError.html#variant.NoObjects
    fn are_equivalent(&self, objects: &[T]) -> Result<bool, EquivalenceError>;

    /// Returns the objects in the relation that are equivalent to `object`.
    ///
    /// This is empty if `object` is not in the relation.
    fn partition(&self, object: &T) -> HashSet<T>;

    /// Divides all the objects in the relation into their classes.
    fn partitions(&self) -> Vec<Vec<T>>;

    /// Divides the given objects into classes.
    ///
    /// The objects do not have to be in the relation.
    /// Each class keeps the order and the duplicates of `objects`,
    /// and the classes are ordered by their first object.
    fn partitions_of(&self, objects: &[T]) -> Vec<Vec<T>>;

    /// Returns the amount of objects in the relation.
    fn len(&self) -> usize;

    /// Returns `true` if the relation has no objects.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `object` has been added to the relation.
    fn contains(&self, object: &T) -> bool;
}

/// An equivalence relation that chooses between the four implementations when constructed.
///
/// - [`Relation::new(false)`] uses a [`DisjointSet<T>`].
/// - [`Relation::new(true)`] uses a [`BidirectionalDisjointSet<T>`].
/// - [`Relation::with_key(key, false)`] uses a [`KeyedRelation`] over a [`DisjointSet<K>`].
/// - [`Relation::with_key(key, true)`] uses a [`KeyedRelation`] over a [`BidirectionalDisjointSet<K>`].
///
/// `'a` bounds the objects and the key function, so objects can borrow from local data.
///
/// A bidirectional relation finds the class of an object in time linear to the size of that
/// class instead of the size of the whole relation, for some extra memory and slower merges.
///
/// # Examples
///
/// ```
/// use equivalence::{Equivalence, Relation};
///
/// let mut relation = Relation::new(true);
/// relation.merge(&[1, 2]);
/// relation.merge(&[2, 3]);
/// relation.update(&[4]);
///
/// assert!(relation.are_equivalent(&[1, 3]).unwrap());
/// assert_eq!(relation.partition(&4).len(), 1);
/// assert!(relation.are_equivalent(&[]).is_err());
/// ```
///
/// [`Relation::new(false)`]: #method.new
/// [`Relation::new(true)`]: #method.new
/// [`Relation::with_key(key, false)`]: #method.with_key
/// [`Relation::with_key(key, true)`]: #method.with_key
/// [`DisjointSet<T>`]: struct.DisjointSet.html
/// [`DisjointSet<K>`]: struct.DisjointSet.html
/// [`BidirectionalDisjointSet<T>`]: struct.BidirectionalDisjointSet.html
/// [`BidirectionalDisjointSet<K>`]: struct.BidirectionalDisjointSet.html
/// [`KeyedRelation`]: struct.KeyedRelation.html
pub struct Relation<'a, T> {
    inner: Box<dyn Equivalence<T> + 'a>,
}

impl<'a, T> Relation<'a, T> where
    T: Hash + Eq + Clone + 'a,
{
    /// Constructs a new, empty relation without a key function.
    pub fn new(bidirectional: bool) -> Self {
        let inner: Box<dyn Equivalence<T> + 'a> = if bidirectional {
            Box::new(BidirectionalDisjointSet::<T>::new())
        } else {
            Box::new(DisjointSet::<T>::new())
        };

        Self { inner }
    }

    /// Constructs a new, empty relation where objects with equal keys are equivalent.
    ///
    /// `key` must return the same key for an object every time it is called.
    pub fn with_key<K, F>(key: F, bidirectional: bool) -> Self where
        K: Hash + Eq + Clone + 'a,
        F: Fn(&T) -> K + 'a,
    {
        let inner: Box<dyn Equivalence<T> + 'a> = if bidirectional {
            Box::new(KeyedRelation::<T, K, F, BidirectionalDisjointSet<K>>::bidirectional(key))
        } else {
            Box::new(KeyedRelation::<T, K, F>::new(key))
        };

        Self { inner }
    }
}

impl<T> Equivalence<T> for Relation<'_, T> {
    #[inline]
    fn update(&mut self, objects: &[T]) {
        self.inner.update(objects);
    }

    #[inline]
    fn merge(&mut self, objects: &[T]) {
        self.inner.merge(objects);
    }

    #[inline]
    fn are_equivalent(&self, objects: &[T]) -> Result<bool, EquivalenceError> {
        self.inner.are_equivalent(objects)
    }

    #[inline]
    fn partition(&self, object: &T) -> HashSet<T> {
        self.inner.partition(object)
    }

    #[inline]
    fn partitions(&self) -> Vec<Vec<T>> {
        self.inner.partitions()
    }

    #[inline]
    fn partitions_of(&self, objects: &[T]) -> Vec<Vec<T>> {
        self.inner.partitions_of(objects)
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn contains(&self, object: &T) -> bool {
        self.inner.contains(object)
    }
}

impl<T> fmt::Debug for Relation<'_, T> where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list()
            .entries(self.inner.partitions())
            .finish()
    }
}
