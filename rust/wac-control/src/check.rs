use wac_graph::{Condition, ConditionalSync, Node, PropertyPath, Variable};

use crate::{
    Agent,
    vocab::{acl, vcard},
};

/// What a [GranteeMatcher] gets to work with when deciding whether a
/// candidate rule grants to the requesting agent.
#[derive(Debug, Clone)]
pub struct AuthorizationCheck {
    /// Variable bound to the candidate authorization rule
    pub authorization: Variable,
    /// The requesting agent, if any
    pub agent: Option<Agent>,
    /// Variable ranging over every class the agent belongs to, including
    /// `foaf:Agent` and (when an agent is present) `acl:AuthenticatedAgent`
    pub agent_class: Variable,
}

impl AuthorizationCheck {
    /// The agent's identifier, when it can be matched against specific
    /// grants
    pub fn identity(&self) -> Option<&Node> {
        self.agent.as_ref().and_then(Agent::identity)
    }
}

/// Produces the condition under which a candidate rule grants to the agent.
///
/// The engine unions every configured matcher, so a rule grants if any one
/// of them is satisfied. Plain functions and closures of the right shape are
/// matchers too:
///
/// ```rust
/// use wac_control::{AuthorizationCheck, GranteeMatcher};
/// use wac_graph::{Condition, Node};
///
/// let public = |check: &AuthorizationCheck| {
///     Condition::pattern(
///         &check.authorization,
///         Node::named("http://example.com/vocab#public"),
///         Node::literal("true"),
///     )
/// };
///
/// let check = AuthorizationCheck {
///     authorization: "acl".into(),
///     agent: None,
///     agent_class: "agentClass".into(),
/// };
/// assert!(!public.matches(&check).is_never());
/// ```
pub trait GranteeMatcher: ConditionalSync {
    /// Condition over [AuthorizationCheck::authorization]
    fn matches(&self, check: &AuthorizationCheck) -> Condition;
}

impl<F> GranteeMatcher for F
where
    F: Fn(&AuthorizationCheck) -> Condition + ConditionalSync,
{
    fn matches(&self, check: &AuthorizationCheck) -> Condition {
        self(check)
    }
}

/// Grants through `acl:agent` naming the agent directly
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentMatch;

impl GranteeMatcher for AgentMatch {
    fn matches(&self, check: &AuthorizationCheck) -> Condition {
        match check.identity() {
            Some(agent) => Condition::pattern(
                &check.authorization,
                PropertyPath::link(acl::AGENT),
                agent,
            ),
            None => Condition::never(),
        }
    }
}

/// Grants through `acl:agentClass` naming one of the agent's classes
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentClassMatch;

impl GranteeMatcher for AgentClassMatch {
    fn matches(&self, check: &AuthorizationCheck) -> Condition {
        Condition::pattern(
            &check.authorization,
            PropertyPath::link(acl::AGENT_CLASS),
            &check.agent_class,
        )
    }
}

/// Grants through `acl:agentGroup` naming a group the agent is a
/// `vcard:hasMember` of
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentGroupMatch;

impl GranteeMatcher for AgentGroupMatch {
    fn matches(&self, check: &AuthorizationCheck) -> Condition {
        match check.identity() {
            Some(agent) => Condition::pattern(
                &check.authorization,
                PropertyPath::sequence([acl::AGENT_GROUP, vcard::HAS_MEMBER]),
                agent,
            ),
            None => Condition::never(),
        }
    }
}
