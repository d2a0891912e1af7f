use thiserror::Error;

/// Errors raised while loading graph data or asking a [crate::GraphStore]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The store could not be reached, or the exchange with it failed
    #[error("Graph store unreachable: {0}")]
    Transport(String),

    /// The store answered, but the answer could not be interpreted
    #[error("Graph store returned a malformed answer: {0}")]
    Malformed(String),

    /// A line of N-Triples input could not be parsed
    #[error("Invalid N-Triples on line {line}: {reason}")]
    Syntax {
        /// One-based line number of the offending statement
        line: usize,
        /// Parser diagnostic
        reason: String,
    },
}
