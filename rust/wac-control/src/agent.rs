use serde::{Deserialize, Serialize};
use wac_graph::Node;

/// The party requesting access.
///
/// The absence of an agent (an anonymous request) is expressed with
/// `Option<Agent>` at call sites. An agent whose identifier is not a named
/// node still counts as authenticated, but can never be matched by a grant
/// naming a specific agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// The agent's identifier
    pub id: Node,
    /// The agent's `rdf:type` memberships
    #[serde(default)]
    pub types: Vec<Node>,
}

impl Agent {
    /// An agent with no known type memberships
    pub fn new<N: Into<Node>>(id: N) -> Self {
        Self {
            id: id.into(),
            types: Vec::new(),
        }
    }

    /// Shorthand for an agent identified by `iri`
    pub fn named<I: Into<String>>(iri: I) -> Self {
        Self::new(Node::named(iri))
    }

    /// Add a type membership
    pub fn with_type<N: Into<Node>>(mut self, class: N) -> Self {
        self.types.push(class.into());
        self
    }

    /// The identifier, if it is usable for matching specific grants
    pub fn identity(&self) -> Option<&Node> {
        Some(&self.id).filter(|id| id.is_named())
    }

    /// Named type memberships; anonymous ones never take part in matching
    pub fn classes(&self) -> impl Iterator<Item = &Node> {
        self.types.iter().filter(|class| class.is_named())
    }
}

impl From<Node> for Agent {
    fn from(value: Node) -> Self {
        Self::new(value)
    }
}
