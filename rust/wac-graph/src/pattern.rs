use std::fmt;
use std::slice;

use crate::{Node, Term, Variable};

/// The relation a [Pattern] follows from its subject to its object: either
/// a single predicate, or a sequence of predicates walked one after another
/// (SPARQL `p1/p2` paths).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// A single predicate
    Link(Node),
    /// Predicates followed in order through unnamed intermediate nodes
    Sequence(Vec<Node>),
}

impl PropertyPath {
    /// A path consisting of the one predicate identified by `iri`
    pub fn link<I: Into<String>>(iri: I) -> Self {
        PropertyPath::Link(Node::named(iri))
    }

    /// A path walking the predicates identified by `iris` in order
    pub fn sequence<I, S>(iris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyPath::Sequence(iris.into_iter().map(Node::named).collect())
    }

    /// The predicates to walk, in order. An empty sequence never matches.
    pub fn steps(&self) -> &[Node] {
        match self {
            PropertyPath::Link(predicate) => slice::from_ref(predicate),
            PropertyPath::Sequence(predicates) => predicates,
        }
    }
}

impl From<Node> for PropertyPath {
    fn from(value: Node) -> Self {
        PropertyPath::Link(value)
    }
}

impl From<&Node> for PropertyPath {
    fn from(value: &Node) -> Self {
        PropertyPath::Link(value.clone())
    }
}

impl From<&str> for PropertyPath {
    fn from(value: &str) -> Self {
        PropertyPath::link(value)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps().iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A triple pattern: matches every way `subject` reaches `object` through
/// `path` in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Start of the path
    pub subject: Term,
    /// Relation followed from subject to object
    pub path: PropertyPath,
    /// End of the path
    pub object: Term,
}

impl Pattern {
    /// Assemble a pattern from its parts
    pub fn new<S, P, O>(subject: S, path: P, object: O) -> Self
    where
        S: Into<Term>,
        P: Into<PropertyPath>,
        O: Into<Term>,
    {
        Self {
            subject: subject.into(),
            path: path.into(),
            object: object.into(),
        }
    }

    /// Variables mentioned by this pattern
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        [&self.subject, &self.object]
            .into_iter()
            .filter_map(Term::as_variable)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.path, self.object)
    }
}
