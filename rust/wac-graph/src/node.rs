use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GraphError;

/// A node in the graph: a named resource, an anonymous (blank) resource, or
/// a literal value.
///
/// Nodes serialize as their N-Triples spelling, e.g. `"<http://example.com/a>"`,
/// `"_:b0"` or `"\"text\""`. Characters an IRI may not contain are written
/// percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Node {
    /// A resource identified by an IRI
    Named(String),
    /// An anonymous resource, identified only within one graph
    Blank(String),
    /// A literal; only the lexical form is retained
    Literal(String),
}

impl Node {
    /// A node for the resource identified by `iri`
    pub fn named<I: Into<String>>(iri: I) -> Self {
        Node::Named(iri.into())
    }

    /// A blank node carrying the given label
    pub fn blank<L: Into<String>>(label: L) -> Self {
        Node::Blank(label.into())
    }

    /// A literal with the given lexical form
    pub fn literal<V: Into<String>>(lexical: V) -> Self {
        Node::Literal(lexical.into())
    }

    /// True for IRI-identified nodes. Only these are usable as classes,
    /// types or identities.
    pub fn is_named(&self) -> bool {
        matches!(self, Node::Named(_))
    }

    /// The IRI of a named node
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Named(iri) => Some(iri),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(iri) => {
                f.write_str("<")?;
                for character in iri.chars() {
                    if is_excluded_from_iri(character) {
                        write!(f, "%{:02X}", u32::from(character))?;
                    } else {
                        write!(f, "{character}")?;
                    }
                }
                f.write_str(">")
            }
            Node::Blank(label) => write!(f, "_:{label}"),
            Node::Literal(lexical) => {
                f.write_str("\"")?;
                for character in lexical.chars() {
                    match character {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// Characters an `IRIREF` may not hold. They are written percent-encoded so
/// an identifier can never close the IRI it is written in.
fn is_excluded_from_iri(character: char) -> bool {
    character <= ' ' || matches!(character, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
}

impl FromStr for Node {
    type Err = GraphError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        crate::ntriples::parse_node(value.trim())
    }
}

impl TryFrom<String> for Node {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Node> for String {
    fn from(value: Node) -> Self {
        value.to_string()
    }
}

impl From<&Node> for Node {
    fn from(value: &Node) -> Self {
        value.clone()
    }
}

/// A single subject-predicate-object fact
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// What the fact is about
    pub subject: Node,
    /// The relation being asserted
    pub predicate: Node,
    /// The value of the relation
    pub object: Node,
}

impl Triple {
    /// Assemble a triple from its parts
    pub fn new<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<Node>,
        P: Into<Node>,
        O: Into<Node>,
    {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
