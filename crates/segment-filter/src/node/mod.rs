//! Filter tree data model.
//!
//! A [`Tree`] wraps a root [`Group`]; groups hold an ordered list of
//! [`FilterNode`]s, each either a [`Condition`] leaf or another group.

mod condition;
mod group;
mod id;
mod operator;
mod tree;
mod value;

#[cfg(test)]
pub(crate) mod strategy;

pub use condition::Condition;
pub use group::{FilterNode, Group};
pub use id::{NodeId, ROOT_ID};
pub use operator::{Connector, Operator, ValueArity};
pub use tree::{Conditions, TREE_VERSION, Tree};
pub use value::FilterValue;
