//! Conversion between trees and the wire format.

use std::str::FromStr;

use super::{WireCondition, WireError, WireFilter, WireGroup, WireNode, WireResult, WireTriple, WireValue};
use crate::TRACING_TARGET;
use crate::node::{Condition, Connector, FilterNode, FilterValue, Group, Operator, Tree, ValueArity};

/// Converts a tree to the wire format.
///
/// Trees made of a single AND over plain (non-negated) conditions use the flat
/// triple shape; everything else uses the nested shape, so OR connectors and
/// nesting are never lost.
pub fn to_wire(tree: &Tree) -> WireFilter {
    match to_wire_flat(tree) {
        Some(triples) => WireFilter::Flat(triples),
        None => to_wire_nested(tree),
    }
}

/// Converts a tree to the flat triple shape, if it can be expressed in it.
pub fn to_wire_flat(tree: &Tree) -> Option<Vec<WireTriple>> {
    if tree.root.connector != Connector::And {
        return None;
    }
    tree.root
        .children
        .iter()
        .map(|child| match child {
            FilterNode::Condition(condition) if !condition.negated => Some(WireTriple(
                wire_operator(condition),
                condition.dimension.clone(),
                encode_value(condition.operator, &condition.value),
            )),
            _ => None,
        })
        .collect()
}

/// Converts a tree to the nested shape regardless of its structure.
pub fn to_wire_nested(tree: &Tree) -> WireFilter {
    WireFilter::Nested(encode_group(&tree.root))
}

/// Rebuilds a tree from either wire shape, assigning fresh IDs.
///
/// Flat triples become sibling conditions under an AND root; a nested root
/// group becomes the tree's root. Malformed input rejects the whole filter.
pub fn from_wire(wire: &WireFilter) -> WireResult<Tree> {
    let mut position = 0;
    let result = match wire {
        WireFilter::Flat(triples) => triples
            .iter()
            .map(|WireTriple(operator, dimension, values)| {
                position += 1;
                decode_condition(position, operator, dimension, values, false).map(FilterNode::from)
            })
            .collect::<WireResult<Vec<_>>>()
            .map(|children| Tree::from_root(Group::new(Connector::And, children))),
        WireFilter::Nested(group) => decode_group(group, &mut position).map(Tree::from_root),
    };

    if let Err(error) = &result {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %error,
            flat = wire.is_flat(),
            "Rejected wire filter"
        );
    }
    result
}

fn wire_operator(condition: &Condition) -> String {
    condition
        .operator
        .map(Operator::wire_name)
        .unwrap_or_default()
        .to_owned()
}

fn encode_group(group: &Group) -> WireGroup {
    let children = group
        .children
        .iter()
        .map(|child| match child {
            FilterNode::Condition(condition) => WireNode::Condition(WireCondition {
                dimension: condition.dimension.clone(),
                operator: wire_operator(condition),
                value: encode_value(condition.operator, &condition.value),
                negated: condition.negated,
            }),
            FilterNode::Group(inner) => WireNode::Group(encode_group(inner)),
        })
        .collect();

    WireGroup {
        operator: group.connector.wire_name().to_owned(),
        children,
    }
}

/// Values always travel as a list: empty for no-value operators, one element
/// for single-value operators, every entry for multi-value operators.
fn encode_value(operator: Option<Operator>, value: &FilterValue) -> Vec<WireValue> {
    let arity = operator.map(Operator::arity);
    match (arity, value) {
        (Some(ValueArity::None), _) => Vec::new(),
        (Some(ValueArity::Multi), FilterValue::Text(text)) if text.is_empty() => Vec::new(),
        (Some(ValueArity::Multi), value) => value
            .to_strings()
            .into_iter()
            .map(WireValue::Text)
            .collect(),
        (_, FilterValue::Number(n)) => vec![WireValue::Number(*n)],
        (_, FilterValue::Text(text)) => vec![WireValue::Text(text.clone())],
        (_, FilterValue::List(items)) => items.iter().cloned().map(WireValue::Text).collect(),
    }
}

fn decode_group(group: &WireGroup, position: &mut usize) -> WireResult<Group> {
    let connector = Connector::from_str(&group.operator)
        .map_err(|_| WireError::UnknownConnector(group.operator.clone()))?;

    let children = group
        .children
        .iter()
        .map(|child| match child {
            WireNode::Condition(condition) => {
                *position += 1;
                decode_condition(
                    *position,
                    &condition.operator,
                    &condition.dimension,
                    &condition.value,
                    condition.negated,
                )
                .map(FilterNode::from)
            }
            WireNode::Group(inner) => decode_group(inner, position).map(FilterNode::from),
        })
        .collect::<WireResult<Vec<_>>>()?;

    Ok(Group::new(connector, children))
}

fn decode_condition(
    position: usize,
    operator: &str,
    dimension: &str,
    values: &[WireValue],
    negated: bool,
) -> WireResult<Condition> {
    let parsed = Operator::from_wire_name(operator).ok_or_else(|| WireError::UnknownOperator {
        position,
        operator: operator.to_owned(),
    })?;
    if dimension.is_empty() {
        return Err(WireError::EmptyDimension { position });
    }

    let value_count = |expected| WireError::ValueCount {
        position,
        operator: operator.to_owned(),
        expected,
        found: values.len(),
    };
    let value = match (parsed.arity(), values) {
        (ValueArity::None, []) => FilterValue::default(),
        (ValueArity::None, _) => return Err(value_count("no values")),
        (ValueArity::Single, [WireValue::Number(n)]) => FilterValue::Number(*n),
        (ValueArity::Single, [WireValue::Text(text)]) => FilterValue::Text(text.clone()),
        (ValueArity::Single, _) => return Err(value_count("exactly one value")),
        (ValueArity::Multi, []) => return Err(value_count("at least one value")),
        (ValueArity::Multi, values) => {
            FilterValue::List(values.iter().map(WireValue::to_text).collect())
        }
    };

    Ok(Condition::new(dimension, parsed, value).with_negated(negated))
}


#[cfg(test)]
mod proptest_round_trip {
    use proptest::prelude::*;

    use super::*;
    use crate::config::FilterLimits;
    use crate::dimension::fixtures::catalog;
    use crate::node::strategy;
    use crate::validate::Validator;

    fn triples(tree: &Tree) -> Vec<(String, Option<Operator>, FilterValue)> {
        tree.conditions()
            .map(|c| (c.dimension.clone(), c.operator, c.value.clone()))
            .collect()
    }

    proptest! {
        /// AND-only trees without nesting keep their ordered triples.
        #[test]
        fn flat_trees_keep_triples(tree in strategy::flat_tree()) {
            let wire = to_wire(&tree);
            prop_assert!(wire.is_flat());

            let back = from_wire(&wire).unwrap();
            prop_assert_eq!(triples(&back), triples(&tree));
        }

        /// The wire form carries exactly the tree's conditions.
        #[test]
        fn condition_count_survives(tree in strategy::tree(3)) {
            let wire = to_wire(&tree);
            prop_assert_eq!(wire.condition_count(), tree.count_conditions());

            let back = from_wire(&wire).unwrap();
            prop_assert_eq!(back.count_conditions(), tree.count_conditions());
            prop_assert_eq!(to_wire(&back), wire);
        }

        /// A valid tree is still valid after a round trip.
        #[test]
        fn valid_trees_stay_valid(tree in strategy::tree(3)) {
            let catalog = catalog();
            let validator = Validator::new(&catalog, FilterLimits::default());
            let report = validator.validate(&tree);

            let back = from_wire(&to_wire(&tree)).unwrap();
            prop_assert_eq!(validator.validate(&back).is_valid(), report.is_valid());
            if report.is_valid() {
                prop_assert!(back.count_conditions() >= 1);
            }
        }
    }
}
