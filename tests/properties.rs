//! Property-based tests of the equivalence laws against a naive model.

mod common;

use {
    std::collections::HashSet,
    proptest::prelude::*,
    equivalence::{
        BidirectionalDisjointSet,
        DisjointSet,
        Equivalence,
        Forest,
        KeyedRelation,
    },
    common::{init_logger, sorted},
};

/// Values are drawn below this bound so merges collide often.
const UNIVERSE: u8 = 24;

#[derive(Clone, Debug)]
enum Operation {
    Update(Vec<u8>),
    Merge(Vec<u8>),
}

fn operation() -> impl Strategy<Value = Operation> {
    let values = proptest::collection::vec(0 .. UNIVERSE, 0 .. 4);

    prop_oneof![
        values.clone().prop_map(Operation::Update),
        values.prop_map(Operation::Merge),
    ]
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(operation(), 0 .. 40)
}

fn apply<E: Equivalence<u8>>(relation: &mut E, operations: &[Operation]) {
    for operation in operations {
        match operation {
            Operation::Update(values) => relation.update(values),
            Operation::Merge(values) => relation.merge(values),
        }
    }
}

/// Labels every value with the smallest value of its class, `None` when it was never added.
fn model(operations: &[Operation]) -> Vec<Option<u8>> {
    let mut labels: Vec<Option<u8>> = vec![None; UNIVERSE as usize];

    for operation in operations {
        let values = match operation {
            Operation::Update(values) | Operation::Merge(values) => values,
        };
        for &value in values {
            if labels[value as usize].is_none() {
                labels[value as usize] = Some(value);
            }
        }

        if let Operation::Merge(values) = operation {
            let joined: HashSet<Option<u8>> = values.iter().map(|&value| labels[value as usize]).collect();
            if let Some(&smallest) = joined.iter().flatten().min() {
                for label in labels.iter_mut() {
                    if joined.contains(label) {
                        *label = Some(smallest);
                    }
                }
            }
        }
    }

    labels
}

fn model_class(labels: &[Option<u8>], value: u8) -> HashSet<u8> {
    match labels[value as usize] {
        Some(label) => (0 .. UNIVERSE).filter(|&other| labels[other as usize] == Some(label)).collect(),
        None => HashSet::new(),
    }
}

proptest! {
    #[test]
    fn matches_the_model(operations in operations()) {
        init_logger();
        let labels = model(&operations);
        let mut disjoint_set = DisjointSet::<u8>::new();
        apply(&mut disjoint_set, &operations);

        for a in 0 .. UNIVERSE {
            prop_assert_eq!(disjoint_set.contains(&a), labels[a as usize].is_some());
            prop_assert_eq!(disjoint_set.partition(&a), model_class(&labels, a));

            for b in 0 .. UNIVERSE {
                let expected = a == b || (labels[a as usize].is_some() && labels[a as usize] == labels[b as usize]);
                prop_assert_eq!(disjoint_set.are_equivalent(&[a, b]).unwrap(), expected);
            }
        }
    }

    #[test]
    fn reflexive_for_every_value(operations in operations(), value in any::<u8>()) {
        let mut disjoint_set = DisjointSet::<u8>::new();
        apply(&mut disjoint_set, &operations);

        prop_assert!(disjoint_set.are_equivalent(&[value, value]).unwrap());
        prop_assert!(disjoint_set.are_equivalent(&[value]).unwrap());
    }

    #[test]
    fn partitions_cover_every_value_once(operations in operations()) {
        let mut disjoint_set = DisjointSet::<u8>::new();
        apply(&mut disjoint_set, &operations);

        let mut covered: Vec<u8> = disjoint_set.partitions().into_iter().flatten().collect();
        covered.sort();
        let mut tracked: Vec<u8> = disjoint_set.iter().copied().collect();
        tracked.sort();

        prop_assert_eq!(covered, tracked);
        prop_assert_eq!(disjoint_set.partitions().len(), disjoint_set.amount_of_classes());
    }

    #[test]
    fn merge_order_does_not_matter(
        operations in operations(),
        values in proptest::collection::vec(0 .. UNIVERSE, 1 .. 5),
    ) {
        let mut forward = DisjointSet::<u8>::new();
        let mut backward = DisjointSet::<u8>::new();
        apply(&mut forward, &operations);
        apply(&mut backward, &operations);

        let reversed: Vec<u8> = values.iter().rev().copied().collect();
        forward.merge(&values);
        backward.merge(&reversed);

        prop_assert_eq!(sorted(forward.partitions()), sorted(backward.partitions()));
    }

    #[test]
    fn bidirectional_agrees_after_compression(operations in operations()) {
        let mut scanning = DisjointSet::<u8>::new();
        let mut fast = BidirectionalDisjointSet::<u8>::new();
        apply(&mut scanning, &operations);
        apply(&mut fast, &operations);

        // Compress every path before asking for classes.
        for value in 0 .. UNIVERSE {
            fast.are_equivalent(&[value, 0]).unwrap();
        }

        for value in 0 .. UNIVERSE {
            prop_assert_eq!(fast.partition(&value), scanning.partition(&value));
        }
        prop_assert_eq!(sorted(fast.partitions()), sorted(scanning.partitions()));
    }

    #[test]
    fn equal_keys_are_equivalent(operations in operations(), a in 0 .. UNIVERSE, b in 0 .. UNIVERSE) {
        let mut relation = KeyedRelation::bidirectional(|value: &u8| value % 4);
        apply(&mut relation, &operations);

        if a % 4 == b % 4 {
            prop_assert!(relation.are_equivalent(&[a, b]).unwrap());
        }
        prop_assert_eq!(relation.partition(&a).contains(&a), relation.contains(&a));
    }

    #[test]
    fn keyed_agrees_with_merging_keys(operations in operations()) {
        let mut keyed = KeyedRelation::new(|value: &u8| value % 4);
        let mut plain = DisjointSet::<u8>::new();
        apply(&mut keyed, &operations);
        apply(&mut plain, &operations);

        // Equal keys are what a plain relation gets from merging every value with its key class.
        for value in plain.iter().copied().collect::<Vec<_>>() {
            plain.merge(&[value, value % 4 + UNIVERSE]);
        }

        for value in (0 .. UNIVERSE).filter(|value| keyed.contains(value)) {
            prop_assert!(plain.contains(&value));
            let expected: HashSet<u8> = plain.partition(&value).into_iter().filter(|&other| other < UNIVERSE).collect();
            prop_assert_eq!(keyed.partition(&value), expected);
        }
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn arbitrary_disjoint_sets_are_consistent(disjoint_set in any::<DisjointSet<u8>>()) {
        let classes = disjoint_set.partitions();
        prop_assert_eq!(classes.len(), disjoint_set.amount_of_classes());

        for class in classes {
            prop_assert!(disjoint_set.are_equivalent(&class).unwrap());
            prop_assert_eq!(disjoint_set.partition(&class[0]), class.iter().copied().collect::<HashSet<_>>());
        }
    }
}
