use serde::{Deserialize, Serialize};
use wac_graph::{Condition, ConditionalSync, Node, PropertyPath, Variable};

/// An extra condition every candidate rule must also satisfy.
///
/// Predicates narrow rule-based grants only: they are joined onto each rule
/// branch on that branch's rule variable, and never onto ownership.
/// Closures taking the rule variable are predicates too.
pub trait RulePredicate: ConditionalSync {
    /// Condition over the candidate rule bound to `authorization`
    fn condition(&self, authorization: &Variable) -> Condition;
}

impl<F> RulePredicate for F
where
    F: Fn(&Variable) -> Condition + ConditionalSync,
{
    fn condition(&self, authorization: &Variable) -> Condition {
        self(authorization)
    }
}

/// Requires that the rule assert `<predicate> <object>`.
///
/// This is the shape extension predicates usually take (e.g. "the rule is
/// a component of this application"), and the one configuration documents
/// can express.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleAsserts {
    /// IRI of the property the rule must carry
    pub predicate: String,
    /// Required value of that property
    pub object: Node,
}

impl RuleAsserts {
    /// Require `rule <predicate> object`
    pub fn new<P: Into<String>, O: Into<Node>>(predicate: P, object: O) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl RulePredicate for RuleAsserts {
    fn condition(&self, authorization: &Variable) -> Condition {
        Condition::pattern(
            authorization,
            PropertyPath::link(self.predicate.as_str()),
            &self.object,
        )
    }
}
