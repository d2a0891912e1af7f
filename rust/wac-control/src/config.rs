use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    AccessControlError, AgentClassMatch, AgentGroupMatch, AgentMatch, GranteeMatcher, ModeTable,
    RuleAsserts,
};

/// Built-in ways a rule may name its grantees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grantee {
    /// `acl:agent`
    Agent,
    /// `acl:agentClass`
    AgentClass,
    /// `acl:agentGroup` with `vcard:hasMember`
    AgentGroup,
}

impl Grantee {
    /// The matcher implementing this kind
    pub fn matcher(self) -> Arc<dyn GranteeMatcher> {
        match self {
            Grantee::Agent => Arc::new(AgentMatch),
            Grantee::AgentClass => Arc::new(AgentClassMatch),
            Grantee::AgentGroup => Arc::new(AgentGroupMatch),
        }
    }
}

/// Settings for an [crate::AccessControl] engine and the [crate::Gate] in
/// front of it. Every field is optional in serialized form.
///
/// ```rust
/// use wac_control::{AccessControlConfig, AccessMode, Grantee};
///
/// let config = AccessControlConfig::from_json(r#"{
///     "methods": { "PATCH": "Append" },
///     "grantees": ["agent", "agent_group"]
/// }"#).unwrap();
///
/// assert_eq!(config.methods.resolve("patch"), Some(&AccessMode::Append));
/// assert_eq!(config.grantees, vec![Grantee::Agent, Grantee::AgentGroup]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessControlConfig {
    /// Access mode requested by each request method. A configured table
    /// replaces the default one entirely.
    pub methods: ModeTable,
    /// Grantee kinds the engine matches rules by
    pub grantees: Vec<Grantee>,
    /// Assertions every rule must carry to grant through the gate
    pub required: Vec<RuleAsserts>,
}

impl AccessControlConfig {
    /// Read a configuration from JSON
    pub fn from_json(document: &str) -> Result<Self, AccessControlError> {
        Ok(serde_json::from_str(document)?)
    }
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self {
            methods: ModeTable::default(),
            grantees: vec![Grantee::Agent, Grantee::AgentClass],
            required: Vec::new(),
        }
    }
}
