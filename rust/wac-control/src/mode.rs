use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wac_graph::Node;

use crate::{AccessControlError, vocab::acl};

/// A kind of access that may be requested of, and granted over, a target.
///
/// Control is special: a rule granting Control grants every mode, so it is
/// always implicitly requested alongside whatever was asked for.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessMode {
    /// `acl:Read`
    Read,
    /// `acl:Write`
    Write,
    /// `acl:Append`
    Append,
    /// `acl:Delete`
    Delete,
    /// `acl:Control`
    Control,
    /// Any other mode, by absolute IRI
    Other(String),
}

impl AccessMode {
    /// Interpret a mode IRI. Well-known IRIs map onto their variant; anything
    /// that is not an absolute IRI is rejected, so an [AccessMode::Other]
    /// never reads as one of the short names.
    pub fn from_iri<I: AsRef<str>>(iri: I) -> Result<Self, AccessControlError> {
        let mode = match iri.as_ref() {
            acl::READ => AccessMode::Read,
            acl::WRITE => AccessMode::Write,
            acl::APPEND => AccessMode::Append,
            acl::DELETE => AccessMode::Delete,
            acl::CONTROL => AccessMode::Control,
            other if other.contains(':') && !other.contains(char::is_whitespace) => {
                AccessMode::Other(other.to_owned())
            }
            other => return Err(AccessControlError::InvalidMode(other.to_owned())),
        };
        Ok(mode)
    }

    /// The IRI identifying this mode in rule graphs
    pub fn iri(&self) -> &str {
        match self {
            AccessMode::Read => acl::READ,
            AccessMode::Write => acl::WRITE,
            AccessMode::Append => acl::APPEND,
            AccessMode::Delete => acl::DELETE,
            AccessMode::Control => acl::CONTROL,
            AccessMode::Other(iri) => iri,
        }
    }

    /// The graph node for this mode
    pub fn node(&self) -> Node {
        Node::named(self.iri())
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => f.write_str("Read"),
            AccessMode::Write => f.write_str("Write"),
            AccessMode::Append => f.write_str("Append"),
            AccessMode::Delete => f.write_str("Delete"),
            AccessMode::Control => f.write_str("Control"),
            AccessMode::Other(iri) => f.write_str(iri),
        }
    }
}

/// Accepts a short name (`"write"`, case-insensitive) or a full IRI
impl FromStr for AccessMode {
    type Err = AccessControlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "read" => Ok(AccessMode::Read),
            "write" => Ok(AccessMode::Write),
            "append" => Ok(AccessMode::Append),
            "delete" => Ok(AccessMode::Delete),
            "control" => Ok(AccessMode::Control),
            _ => AccessMode::from_iri(value),
        }
    }
}

impl TryFrom<String> for AccessMode {
    type Error = AccessControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccessMode> for String {
    fn from(value: AccessMode) -> Self {
        value.to_string()
    }
}

impl From<&AccessMode> for AccessMode {
    fn from(value: &AccessMode) -> Self {
        value.clone()
    }
}
