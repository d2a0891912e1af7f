use std::fmt;

use crate::Condition;

/// A complete yes/no question: "does [Ask::condition] have a solution?"
///
/// The [fmt::Display] rendering is SPARQL 1.1 `ASK` query text, suitable for
/// a remote query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ask {
    condition: Condition,
}

impl Ask {
    /// Wrap a condition as a question
    pub fn new(condition: Condition) -> Self {
        Self { condition }
    }

    /// The condition whose satisfiability is asked
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Render as SPARQL query text
    pub fn to_sparql(&self) -> String {
        self.to_string()
    }
}

impl From<Condition> for Ask {
    fn from(value: Condition) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Ask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ASK {{")?;
        write_group(f, &self.condition, 1)?;
        write!(f, "}}")
    }
}

/// Writes the body of a group. Negations of a conjunction are written after
/// its positive members so that they see every binding the group produces.
fn write_group(f: &mut fmt::Formatter<'_>, condition: &Condition, depth: usize) -> fmt::Result {
    match condition {
        Condition::All(members) => {
            let (negated, positive): (Vec<_>, Vec<_>) = members
                .iter()
                .partition(|member| matches!(member, Condition::Not(_)));
            for member in positive.into_iter().chain(negated) {
                write_element(f, member, depth)?;
            }
            Ok(())
        }
        other => write_element(f, other, depth),
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, condition: &Condition, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match condition {
        Condition::Pattern(pattern) => writeln!(f, "{indent}{pattern}"),
        Condition::All(_) => {
            writeln!(f, "{indent}{{")?;
            write_group(f, condition, depth + 1)?;
            writeln!(f, "{indent}}}")
        }
        Condition::Any(members) if members.is_empty() => writeln!(f, "{indent}FILTER(false)"),
        Condition::Any(members) => {
            for (index, member) in members.iter().enumerate() {
                if index > 0 {
                    writeln!(f, "{indent}UNION")?;
                }
                writeln!(f, "{indent}{{")?;
                write_group(f, member, depth + 1)?;
                writeln!(f, "{indent}}}")?;
            }
            Ok(())
        }
        Condition::Not(inner) => {
            writeln!(f, "{indent}FILTER NOT EXISTS {{")?;
            write_group(f, inner, depth + 1)?;
            writeln!(f, "{indent}}}")
        }
        Condition::Values(variable, nodes) => {
            write!(f, "{indent}VALUES {variable} {{")?;
            for node in nodes {
                write!(f, " {node}")?;
            }
            writeln!(f, " }}")
        }
    }
}
