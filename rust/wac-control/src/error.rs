use thiserror::Error;
use wac_graph::GraphError;

/// Errors raised while configuring or reaching a decision. A denial is not
/// an error: it is an `Ok(false)` verdict.
#[derive(Error, Debug)]
pub enum AccessControlError {
    /// The graph store failed to answer
    #[error("Authorization query failed: {0}")]
    Store(#[from] GraphError),

    /// No access mode is configured for the request method
    #[error("No access mode is configured for method \"{method}\"")]
    UnresolvedMode {
        /// The request method, as received
        method: String,
    },

    /// A configured access mode could not be interpreted
    #[error("Invalid access mode: {0}")]
    InvalidMode(String),

    /// A configuration document could not be read
    #[error("Invalid access control configuration: {0}")]
    Config(#[from] serde_json::Error),
}
