//! Equivalence relations over a dynamic universe of objects, built on
//! [disjoint-sets/union-find] forests.
//!
//! An equivalence relation partitions objects into classes while preserving reflexivity,
//! symmetry and transitivity.
//! Objects become equivalent either explicitly, by calling `merge` on them, or implicitly,
//! through a key function: two objects with equal keys are always equivalent.
//!
//! Every variant implements the [`Equivalence<T>`] trait:
//!
//! - [`DisjointSet<T>`] is the plain forest with union by rank and path compression.
//!   Most operations run in almost constant amortized time, but `partition` is linear
//!   in the size of the whole relation.
//! - [`BidirectionalDisjointSet<T>`] additionally keeps a parent to children index so
//!   `partition` is linear in the size of the returned class.
//! - [`KeyedRelation<T, K, F, D>`] maps every object to a key and runs either forest on keys.
//! - [`Relation<'a, T>`] picks one of the four combinations at runtime.
//!
//! ```
//! use equivalence::{Equivalence, Relation};
//!
//! let mut relation = Relation::with_key(|url: &&str| url.trim_end_matches('/').to_owned(), true);
//! relation.update(&["http://a.com/", "http://a.com", "http://b.com"]);
//!
//! assert!(relation.are_equivalent(&["http://a.com/", "http://a.com"]).unwrap());
//! assert!(!relation.are_equivalent(&["http://a.com", "http://b.com"]).unwrap());
//!
//! relation.merge(&["http://a.com", "http://b.com"]);
//! assert_eq!(relation.partitions().len(), 1);
//! ```
//!
//! None of the types are thread safe: queries compress paths through `Cell`s.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Equivalence<T>`]: trait.Equivalence.html
//! [`DisjointSet<T>`]: struct.DisjointSet.html
//! [`BidirectionalDisjointSet<T>`]: struct.BidirectionalDisjointSet.html
//! [`KeyedRelation<T, K, F, D>`]: struct.KeyedRelation.html
//! [`Relation<'a, T>`]: struct.Relation.html

/// We count the amount of expresions given to this macro.
#[doc(hidden)]
#[macro_export]
macro_rules! equivalence_count_expr {
    () => { 0usize };
    ($_single: expr) => { 1usize };
    // Even amount of expresions.
    ($($first: expr, $_second: expr),*) => {
        ($crate::equivalence_count_expr![$($first),*] << 1usize)
    };
    // Odd amount of expresions.
    ($_single: expr, $($first: expr, $_second: expr),*) => {
        ($crate::equivalence_count_expr![$($first),*] << 1usize) | 1
    };
}

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod disjoint_sets;
pub mod keyed;
pub mod relation;

pub use {
    error::EquivalenceError,
    disjoint_sets::{
        Forest,
        bidirectional::BidirectionalDisjointSet,
        disjoint_set::DisjointSet,
    },
    keyed::KeyedRelation,
    relation::{
        Equivalence,
        Relation,
    },
};
