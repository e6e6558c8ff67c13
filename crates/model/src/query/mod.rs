//! The document query tree produced by the condition builders, and its
//! rendering into the document store's native syntax.

pub mod node;
pub mod render;

pub use node::{Predicate, PredicateValue, QueryNode};
