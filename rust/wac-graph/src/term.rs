use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Node;

/// A named placeholder in a pattern. All occurrences of the same variable
/// within one solution must bind to the same [Node].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    /// Create a variable with the given name. Names should be usable as
    /// SPARQL variable names (letters, digits and underscores).
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self(name.into())
    }

    /// The bare name, without the leading `?`
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Either a concrete [Node] or a [Variable] to be bound during matching
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Matches anything, binding the variable
    Variable(Variable),
    /// Matches exactly this node
    Constant(Node),
}

impl Term {
    /// Shorthand for a variable term
    pub fn var<N: Into<String>>(name: N) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// The variable, if this term is one
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(variable) => Some(variable),
            Term::Constant(_) => None,
        }
    }

    /// The node, if this term is a constant
    pub fn as_constant(&self) -> Option<&Node> {
        match self {
            Term::Constant(node) => Some(node),
            Term::Variable(_) => None,
        }
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Term::Variable(value)
    }
}

impl From<&Variable> for Term {
    fn from(value: &Variable) -> Self {
        Term::Variable(value.clone())
    }
}

impl From<Node> for Term {
    fn from(value: Node) -> Self {
        Term::Constant(value)
    }
}

impl From<&Node> for Term {
    fn from(value: &Node) -> Self {
        Term::Constant(value.clone())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(variable) => fmt::Display::fmt(variable, f),
            Term::Constant(node) => fmt::Display::fmt(node, f),
        }
    }
}
