//! Equivalence with respect to a key function.
//!
//! See [`KeyedRelation<T, K, F, D>`] for more information.
//!
//! [`KeyedRelation<T, K, F, D>`]: struct.KeyedRelation.html

use {
    std::{
        collections::{
            HashMap,
            HashSet,
            hash_map::Entry,
        },
        fmt,
        hash::Hash,
        iter::FromIterator,
    },
    log::debug,
    crate::{
        error::EquivalenceError,
        relation::Equivalence,
        disjoint_sets::{
            Forest,
            bidirectional::BidirectionalDisjointSet,
            disjoint_set::DisjointSet,
            group_by,
            representative,
        },
    },
};

/// An equivalence where objects with equal keys are always equivalent.
///
/// Given a function `key`, two objects `a` and `b` are equivalent if `key(&a) == key(&b)`.
/// Objects can still be merged explicitly, even when their keys differ.
///
/// The forest `D` only ever sees keys.
/// Every object is remembered in the bucket of its key, so classes of keys can be expanded
/// back to the objects that were added.
/// With a [`BidirectionalDisjointSet<K>`] forest `partition` stays linear in the size of the class.
///
/// The key of an object has to stay the same for as long as the object is in the relation.
/// A key function that is not deterministic breaks reflexivity and transitivity.
///
/// # Examples
///
/// ```
/// use equivalence::{Equivalence, KeyedRelation};
///
/// let mut relation = KeyedRelation::new(|word: &&str| word.to_lowercase());
/// relation.update(&["Rust", "rust", "Go"]);
///
/// assert!(relation.are_equivalent(&["Rust", "rust"]).unwrap());
/// assert!(relation.are_equivalent(&["RUST", "rust"]).unwrap());
/// assert!(!relation.are_equivalent(&["Rust", "Go"]).unwrap());
///
/// relation.merge(&["go", "RUST"]);
/// assert_eq!(relation.partition(&"Go").len(), 5);
/// ```
///
/// [`BidirectionalDisjointSet<K>`]: struct.BidirectionalDisjointSet.html
#[derive(Clone)]
pub struct KeyedRelation<T, K, F, D = DisjointSet<K>> {
    forest: D,
    key: F,
    objects_by_key: HashMap<K, HashSet<T>>,
    len: usize,
}

impl<T, K, F> KeyedRelation<T, K, F> where
    T: Hash + Eq + Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
{
    /// Constructs a new, empty `KeyedRelation` over a [`DisjointSet<K>`].
    ///
    /// [`DisjointSet<K>`]: struct.DisjointSet.html
    pub fn new(key: F) -> Self {
        Self::with_forest(key, DisjointSet::new())
    }
}

impl<T, K, F> KeyedRelation<T, K, F, BidirectionalDisjointSet<K>> where
    T: Hash + Eq + Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
{
    /// Constructs a new, empty `KeyedRelation` over a [`BidirectionalDisjointSet<K>`].
    ///
    /// [`BidirectionalDisjointSet<K>`]: struct.BidirectionalDisjointSet.html
    pub fn bidirectional(key: F) -> Self {
        Self::with_forest(key, BidirectionalDisjointSet::new())
    }
}

impl<T, K, F, D> KeyedRelation<T, K, F, D> where
    T: Hash + Eq + Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
    D: Forest<Value = K>,
{
    /// Constructs a `KeyedRelation` on top of the given forest of keys.
    ///
    /// Keys already in `forest` have no objects, they only show up in classes once an
    /// object with that key is added.
    pub fn with_forest(key: F, forest: D) -> Self {
        Self {
            forest,
            key,
            objects_by_key: HashMap::new(),
            len: 0,
        }
    }

    /// Returns the key of `object`.
    #[inline]
    pub fn key_of(&self, object: &T) -> K {
        (self.key)(object)
    }

    /// Returns the forest of keys.
    #[inline]
    pub fn forest(&self) -> &D {
        &self.forest
    }

    /// Files every object under its key and returns the keys in the same order.
    fn record(&mut self, objects: &[T]) -> Vec<K> {
        let mut keys = Vec::with_capacity(objects.len());

        for object in objects {
            let key = (self.key)(object);
            let buckets = self.objects_by_key.len();

            let bucket = match self.objects_by_key.entry(key.clone()) {
                Entry::Occupied(occupied) => occupied.into_mut(),
                Entry::Vacant(vacant) => {
                    debug!("opening bucket {} for a new key", buckets);
                    vacant.insert(HashSet::new())
                },
            };
            if bucket.insert(object.clone()) {
                self.len += 1;
            }

            keys.push(key);
        }

        keys
    }

    /// Collects the objects of all the given keys.
    fn expand<'a, I, C>(&self, keys: I) -> C where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
        C: FromIterator<T>,
    {
        keys.into_iter()
            .filter_map(|key| self.objects_by_key.get(key))
            .flatten()
            .cloned()
            .collect()
    }
}

impl<T, K, F, D> Equivalence<T> for KeyedRelation<T, K, F, D> where
    T: Hash + Eq + Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
    D: Forest<Value = K>,
{
    fn update(&mut self, objects: &[T]) {
        let keys = self.record(objects);
        self.forest.update(&keys);
    }

    fn merge(&mut self, objects: &[T]) {
        let keys = self.record(objects);
        self.forest.merge(&keys);
    }

    fn are_equivalent(&self, objects: &[T]) -> Result<bool, EquivalenceError> {
        let keys: Vec<K> = objects.iter().map(&self.key).collect();
        self.forest.are_equivalent(&keys)
    }

    fn partition(&self, object: &T) -> HashSet<T> {
        let keys = self.forest.partition(&(self.key)(object));
        self.expand(&keys)
    }

    fn partitions(&self) -> Vec<Vec<T>> {
        // A forest handed to `with_forest` can hold classes of keys without any objects.
        self.forest.partitions()
            .iter()
            .map(|keys| self.expand::<_, Vec<T>>(keys))
            .filter(|class| !class.is_empty())
            .collect()
    }

    fn partitions_of(&self, objects: &[T]) -> Vec<Vec<T>> {
        let keys: Vec<K> = objects.iter().map(&self.key).collect();

        group_by(objects.iter().zip(&keys).map(|(object, key)| {
            (representative(&self.forest, key), object.clone())
        }))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, object: &T) -> bool {
        self.objects_by_key
            .get(&(self.key)(object))
            .map_or(false, |bucket| bucket.contains(object))
    }
}

impl<T, K, F, D> fmt::Debug for KeyedRelation<T, K, F, D> where
    T: fmt::Debug,
    K: fmt::Debug,
    D: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("KeyedRelation")
            .field("forest", &self.forest)
            .field("objects_by_key", &self.objects_by_key)
            .finish()
    }
}
