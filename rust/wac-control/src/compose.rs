use std::sync::Arc;

use wac_graph::{Condition, Node, PropertyPath, Variable};

use crate::{
    AccessMode, Agent, AuthorizationCheck, Check, GranteeMatcher, RulePredicate,
    vocab::{acl, foaf, rdf},
};

/// Everything a [crate::Target] needs to compose its condition: the
/// variables shared between branches, and the candidate sets they range
/// over.
///
/// The variable names `acl`, `mode`, `agentClass`, `term` and `type` are
/// reserved; extension predicates and matchers may refer to them but should
/// not reuse them for anything else.
pub struct Scope<'a> {
    /// The candidate rule
    pub authorization: Variable,
    /// Ranges over the requested modes
    pub mode: Variable,
    /// Ranges over the agent's classes
    pub agent_class: Variable,
    /// Ranges over the target resources
    pub target: Variable,
    /// Ranges over classes: target types, or the candidate types of a type
    /// check
    pub class: Variable,

    agent: Option<&'a Agent>,
    modes: Vec<Node>,
    agent_classes: Vec<Node>,
    patterns: &'a [Arc<dyn RulePredicate>],
    matchers: Vec<&'a dyn GranteeMatcher>,
}

impl<'a> Scope<'a> {
    /// Prepare to compose `check`, using `defaults` ahead of the check's own
    /// matchers
    pub fn new<T>(check: &'a Check<T>, defaults: &'a [Arc<dyn GranteeMatcher>]) -> Self {
        let mut modes = vec![AccessMode::Control.node()];
        for mode in &check.modes {
            push_unique(&mut modes, mode.node());
        }

        let agent = check.agent.as_ref();
        let mut agent_classes = vec![Node::named(foaf::AGENT)];
        if let Some(agent) = agent {
            for class in agent.classes() {
                push_unique(&mut agent_classes, class.clone());
            }
            push_unique(&mut agent_classes, Node::named(acl::AUTHENTICATED_AGENT));
        }

        let matchers = defaults
            .iter()
            .chain(&check.matchers)
            .map(|matcher| matcher.as_ref())
            .collect();

        Self {
            authorization: Variable::from("acl"),
            mode: Variable::from("mode"),
            agent_class: Variable::from("agentClass"),
            target: Variable::from("term"),
            class: Variable::from("type"),
            agent,
            modes,
            agent_classes,
            patterns: &check.patterns,
            matchers,
        }
    }

    /// The requesting agent's identifier, when it can be matched against
    /// specific grants
    pub fn identity(&self) -> Option<&Node> {
        self.agent.and_then(Agent::identity)
    }

    /// Binds [Scope::mode] to `acl:Control` and each requested mode
    pub fn mode_values(&self) -> Condition {
        Condition::values(&self.mode, self.modes.iter().cloned())
    }

    /// Binds [Scope::agent_class] to each class the agent belongs to
    pub fn agent_class_values(&self) -> Condition {
        Condition::values(&self.agent_class, self.agent_classes.iter().cloned())
    }

    /// One branch per grantee matcher: a rule anchored by `anchor`, granting
    /// one of the modes, to the agent, and satisfying every extension
    /// predicate. Matchers that can never hold contribute no branch.
    pub fn rules(&self, anchor: &[Condition]) -> Vec<Condition> {
        let check = AuthorizationCheck {
            authorization: self.authorization.clone(),
            agent: self.agent.cloned(),
            agent_class: self.agent_class.clone(),
        };

        self.matchers
            .iter()
            .map(|matcher| matcher.matches(&check))
            .filter(|grantee| !grantee.is_never())
            .map(|grantee| {
                let mut members = anchor.to_vec();
                members.push(Condition::pattern(
                    &self.authorization,
                    PropertyPath::link(rdf::TYPE),
                    Node::named(acl::AUTHORIZATION),
                ));
                members.push(Condition::pattern(
                    &self.authorization,
                    PropertyPath::link(acl::MODE),
                    &self.mode,
                ));
                members.push(grantee);
                members.extend(
                    self.patterns
                        .iter()
                        .map(|pattern| pattern.condition(&self.authorization)),
                );
                Condition::All(members)
            })
            .collect()
    }
}

fn push_unique(nodes: &mut Vec<Node>, node: Node) {
    if !nodes.contains(&node) {
        nodes.push(node);
    }
}
