#![warn(missing_docs)]

//! Web Access Control decisions.
//!
//! An [AccessControl] engine answers "may this agent access these
//! resources (or create resources of these classes) in these modes?" by
//! composing every way access could be granted into one [wac_graph::Ask]
//! and putting it to a [wac_graph::GraphStore] holding the authorization
//! rules. A grant holds when any of these is satisfied:
//!
//! - the agent owns one of the resources (`acl:owner`)
//! - an `acl:Authorization` grants one of the requested modes, or
//!   `acl:Control`, over one of the resources (`acl:accessTo`) or one of
//!   their classes (`acl:accessToClass`), to the agent by any configured
//!   [GranteeMatcher]
//!
//! Rule-based grants can be narrowed further with [RulePredicate]s. A
//! [Gate] sits in front of the engine for request handling code.
//!
//! ```rust
//! use wac_control::{AccessControl, AccessMode, Agent, ResourceCheck};
//! use wac_graph::{MemoryGraph, Node};
//!
//! let access = AccessControl::new(MemoryGraph::new());
//! let check = ResourceCheck::resource(Node::named("http://example.com/Penny"))
//!     .mode(AccessMode::Write)
//!     .agent(Agent::named("http://example.com/Leonard"));
//!
//! let sparql = access.query(&check).to_sparql();
//! assert!(sparql.contains("VALUES ?term { <http://example.com/Penny> }"));
//! ```

pub mod vocab;

mod error;
pub use error::*;

mod mode;
pub use mode::*;

mod agent;
pub use agent::*;

mod check;
pub use check::*;

mod extension;
pub use extension::*;

mod request;
pub use request::*;

mod compose;
pub use compose::*;

mod instance;
mod class;

mod engine;
pub use engine::*;

mod gate;
pub use gate::*;

mod config;
pub use config::*;
