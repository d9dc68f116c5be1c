//! Generators for arbitrary trees over the test dimension catalog.
//!
//! Every generated condition is complete and uses an operator its dimension
//! allows, so a generated tree is valid whenever it stays within the limits.

use proptest::prelude::*;

use super::{Condition, Connector, FilterNode, FilterValue, Group, Operator, Tree};

const TEXT_DIMENSIONS: [&str; 3] = ["country", "browser", "referrer"];

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9/]{0,7}"
}

fn single_text() -> impl Strategy<Value = Condition> {
    let text = (
        prop::sample::select(TEXT_DIMENSIONS.to_vec()),
        prop::sample::select(vec![
            Operator::Equals,
            Operator::DoesNotEqual,
            Operator::Contains,
            Operator::DoesNotContain,
        ]),
    );
    let page = (
        Just("page"),
        prop::sample::select(vec![
            Operator::Equals,
            Operator::Contains,
            Operator::StartsWith,
            Operator::EndsWith,
        ]),
    );
    (prop_oneof![text, page], word())
        .prop_map(|((dimension, operator), value)| Condition::new(dimension, operator, value))
}

fn multi_text() -> impl Strategy<Value = Condition> {
    (
        prop::sample::select(TEXT_DIMENSIONS.to_vec()),
        prop::sample::select(vec![Operator::IsOneOf, Operator::IsNotOneOf]),
        prop::collection::vec(word(), 1..4),
    )
        .prop_map(|(dimension, operator, values)| {
            Condition::new(dimension, operator, FilterValue::List(values))
        })
}

fn presence() -> impl Strategy<Value = Condition> {
    (
        prop::sample::select(TEXT_DIMENSIONS.to_vec()),
        prop::sample::select(vec![Operator::IsSet, Operator::IsNotSet]),
    )
        .prop_map(|(dimension, operator)| {
            Condition::new(dimension, operator, FilterValue::default())
        })
}

fn numeric() -> impl Strategy<Value = Condition> {
    (
        prop::sample::select(vec![Operator::GreaterThan, Operator::LessThan]),
        0u32..10_000,
    )
        .prop_map(|(operator, seconds)| {
            Condition::new("visit_duration", operator, f64::from(seconds))
        })
}

/// A complete, non-negated condition.
pub(crate) fn plain_condition() -> impl Strategy<Value = Condition> {
    prop_oneof![single_text(), multi_text(), presence(), numeric()]
}

/// A complete condition, negated at random.
pub(crate) fn condition() -> impl Strategy<Value = Condition> {
    (plain_condition(), any::<bool>())
        .prop_map(|(condition, negated)| condition.with_negated(negated))
}

fn connector() -> impl Strategy<Value = Connector> {
    prop_oneof![Just(Connector::And), Just(Connector::Or)]
}

/// A group with up to `levels` further group levels below it.
pub(crate) fn group(levels: u32) -> BoxedStrategy<Group> {
    let leaf = condition().prop_map(FilterNode::from);
    let child = if levels == 0 {
        leaf.boxed()
    } else {
        let nested = group(levels - 1).prop_map(FilterNode::from);
        prop_oneof![3 => leaf, 1 => nested].boxed()
    };
    (connector(), prop::collection::vec(child, 0..5))
        .prop_map(|(connector, children)| Group::new(connector, children))
        .boxed()
}

/// Any tree nested at most `levels` deep.
pub(crate) fn tree(levels: u32) -> impl Strategy<Value = Tree> {
    group(levels).prop_map(Tree::from_root)
}

/// A tree that has the flat wire shape: an AND root over plain conditions.
pub(crate) fn flat_tree() -> impl Strategy<Value = Tree> {
    prop::collection::vec(plain_condition(), 0..12).prop_map(|conditions| {
        let children = conditions.into_iter().map(FilterNode::from).collect();
        Tree::from_root(Group::new(Connector::And, children))
    })
}
