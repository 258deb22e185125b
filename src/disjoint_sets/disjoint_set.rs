//! A [disjoint-sets/union-find] forest over arbitrary hashable values.
//!
//! See [`DisjointSet<T>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T>`]: struct.DisjointSet.html

use {
    std::{
        fmt,
        hash::Hash,
        collections::HashMap,
        iter::FromIterator,
    },
    crate::disjoint_sets::{
        Forest,
        RawForest,
        metadata::Metadata,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use {
    proptest::prelude::*,
    crate::relation::Equivalence,
};

/// A [disjoint-sets/union-find] forest of values.
///
/// Values enter the forest as singleton classes through `update` or `merge`
/// and are never removed.
/// Classes are joined with union by rank and every `find` compresses the path it walked.
/// The metadata of each value lives in `Cell`s, so queries through `&self` still compress paths.
///
/// Finding the class of a single value with `partition` scans the whole forest.
/// Use a [`BidirectionalDisjointSet<T>`] when that is called often.
///
/// # Examples
///
/// ```
/// use equivalence::{DisjointSet, Equivalence};
///
/// let mut disjoint_set = DisjointSet::new();
/// disjoint_set.merge(&['a', 'b']);
/// disjoint_set.merge(&['b', 'c']);
/// disjoint_set.update(&['d']);
///
/// assert!(disjoint_set.are_equivalent(&['a', 'c']).unwrap());
/// assert!(!disjoint_set.are_equivalent(&['a', 'd']).unwrap());
/// assert_eq!(disjoint_set.partition(&'a').len(), 3);
/// assert!(disjoint_set.partition(&'z').is_empty());
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`BidirectionalDisjointSet<T>`]: struct.BidirectionalDisjointSet.html
#[derive(Clone)]
pub struct DisjointSet<T> {
    /// The values in insertion order.
    data: Vec<T>,
    /// The index of each value in `data`.
    map: HashMap<T, usize>,
    /// The metadata for each value, this vec will always have the same size as `data`.
    meta: Vec<Metadata>,
}

/// Creates a [`DisjointSet`] containing the arguments.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] containing a given list of values all in distinct classes:
///
/// ```
/// # use equivalence::{disjoint_set, Equivalence};
/// let disjoint_set = disjoint_set!['a', 'b', 'c'];
///
/// assert_eq!(disjoint_set.len(), 3);
/// assert!(!disjoint_set.are_equivalent(&['a', 'b']).unwrap());
/// ```
///
/// - Create a [`DisjointSet`] containing a given list of values in the classes specified:
///
/// ```
/// # use equivalence::{disjoint_set, Equivalence};
/// let disjoint_set = disjoint_set![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(disjoint_set.are_equivalent(&['a', 'e']).unwrap());
/// assert!(disjoint_set.are_equivalent(&['b', 'd']).unwrap());
/// assert_eq!(disjoint_set.partition(&'c').len(), 1);
/// ```
///
/// You can use any class labels that implement `Hash` and `Eq`.
/// The labels are only used while constructing the [`DisjointSet`] and are not stored.
///
/// [`DisjointSet`]: disjoint_sets/disjoint_set/struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($($elem: expr),*) => {
        {
            let len = $crate::equivalence_count_expr![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);

            $(
                $crate::Equivalence::update(&mut disjoint_set, &[$elem]);
            )*

            disjoint_set
        }
    };
    ($($elem: expr,)*) => {
        $crate::disjoint_set![$($elem),*]
    };
    ($($elem: expr => $class: expr),*) => {
        {
            let len = $crate::equivalence_count_expr![$($elem),*];
            let mut disjoint_set = $crate::DisjointSet::with_capacity(len);
            let mut map = ::std::collections::HashMap::new();

            $(
                let value = $elem;
                let class = $class;

                if let Some(first) = map.get(&class) {
                    let pair = [::std::clone::Clone::clone(first), value];
                    $crate::Equivalence::merge(&mut disjoint_set, &pair);
                } else {
                    $crate::Equivalence::update(&mut disjoint_set, ::std::slice::from_ref(&value));
                    map.insert(class, value);
                }
            )*

            disjoint_set
        }
    };
    ($($elem: expr => $class: expr,)*) => {
        $crate::disjoint_set![$($elem => $class),*]
    }
}

impl<T> DisjointSet<T> {
    /// Constructs a new, empty `DisjointSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use equivalence::DisjointSet;
    ///
    /// let mut disjoint_set: DisjointSet<u32> = DisjointSet::new();
    /// assert!(disjoint_set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            map: HashMap::new(),
            meta: Vec::new(),
        }
    }

    /// Constructs a new, empty `DisjointSet<T>` with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            map: HashMap::with_capacity(capacity),
            meta: Vec::with_capacity(capacity),
        }
    }

    /// Returns the amount of values in the `DisjointSet<T>`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no value has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the values in the order they were added.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> RawForest for DisjointSet<T> where
    T: Hash + Eq + Clone,
{
    type Value = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn value(&self, index: usize) -> &T {
        &self.data[index]
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize> {
        self.map.get(value).copied()
    }

    fn push(&mut self, value: T) -> usize {
        let index = self.data.len();

        self.map.insert(value.clone(), index);
        self.data.push(value);
        self.meta.push(Metadata::new(index));

        index
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        self.meta[index].parent()
    }

    #[inline]
    fn rank(&self, index: usize) -> usize {
        self.meta[index].rank()
    }

    #[inline]
    fn set_rank(&self, index: usize, rank: usize) {
        self.meta[index].set_rank(rank);
    }

    #[inline]
    fn join(&self, index: usize, parent: usize) {
        self.meta[index].set_parent(parent);
    }
}

impl<T> Forest for DisjointSet<T> where T: Hash + Eq + Clone {}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DisjointSet<T> where
    T: Hash + Eq + Clone + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut names = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();

        for index in 0 .. self.len() {
            let root = self.find(index);
            let next_name = names.len();
            let name = *names.entry(root).or_insert(next_name);

            builder.entry(&format_args!("{:?} => {}", self.data[index], name));
        }

        builder.finish()
    }
}

impl<'a, T> IntoIterator for &'a DisjointSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for DisjointSet<T> where
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

impl<'a, T> Extend<&'a T> for DisjointSet<T> where
    T: Hash + Eq + Clone + 'a,
{
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = &'a T> {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for DisjointSet<T> where
    T: Hash + Eq + Clone,
{
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        let mut disjoint_set = Self::new();
        disjoint_set.extend(iter);

        disjoint_set
    }
}

#[cfg(feature = "rayon")]
impl<T> FromParallelIterator<T> for DisjointSet<T> where
    T: Hash + Eq + Clone + Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = T> {
        let par_iter = par_iter.into_par_iter();

        let mut disjoint_set = if let Some(len) = par_iter.opt_len() {
            Self::with_capacity(len)
        } else {
            Self::new()
        };

        disjoint_set.par_extend(par_iter);

        disjoint_set
    }
}

#[cfg(feature = "rayon")]
impl<T> ParallelExtend<T> for DisjointSet<T> where
    T: Hash + Eq + Clone + Send,
{
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = T> {
        // The values are gathered in parallel, indices are handed out in order afterwards.
        let values: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(values);
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for DisjointSet<T> where
    T: Arbitrary + Hash + Eq + Clone,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut disjoint_set = Self::with_capacity(vec.len());

            // We map a `class_number` to the first value of that class.
            let mut map: HashMap<u32, T> = HashMap::with_capacity(vec.len());

            for (value, class_number) in vec {
                let class_number = class_number.trailing_zeros();

                if let Some(first) = map.get(&class_number) {
                    disjoint_set.merge(&[first.clone(), value]);
                } else {
                    disjoint_set.update(std::slice::from_ref(&value));
                    map.insert(class_number, value);
                }
            }

            disjoint_set
        }).boxed()
    }
}
