#![warn(missing_docs)]

//! Graph model and pattern algebra for authorization decisions.
//!
//! Decisions are phrased as a single yes/no question against a graph: "is
//! there at least one way to satisfy this [Condition]?". This crate provides
//! the vocabulary for building that question and the contract for asking it:
//!
//! - [Node], [Triple]: the facts a graph holds
//! - [Variable], [Term], [PropertyPath], [Pattern]: the leaves of a question
//! - [Condition]: an expression tree of conjunction, disjunction, negation
//!   and value bindings over patterns
//! - [Ask]: a complete question, renderable as SPARQL 1.1 text
//! - [GraphStore]: anything that can answer an [Ask]
//!
//! [MemoryGraph] is an in-process [GraphStore] that evaluates questions
//! directly over a set of triples:
//!
//! ```rust
//! use wac_graph::{Ask, Condition, Node, Pattern, Variable};
//!
//! let who = Variable::from("who");
//! let ask = Ask::new(Condition::all([
//!     Condition::values(&who, [Node::named("http://example.com/Leonard")]),
//!     Pattern::new(&who, Node::named("http://xmlns.com/foaf/0.1/knows"), &who).into(),
//! ]));
//!
//! assert!(ask.to_string().starts_with("ASK {"));
//! ```

mod sync;
pub use sync::*;

mod error;
pub use error::*;

mod node;
pub use node::*;

mod term;
pub use term::*;

mod pattern;
pub use pattern::*;

mod condition;
pub use condition::*;

mod bindings;
pub use bindings::*;

mod ask;
pub use ask::*;

pub mod ntriples;

mod store;
pub use store::*;
