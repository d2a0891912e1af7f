use wac_graph::{Condition, PropertyPath};

use crate::{
    Resources, Scope, Target,
    vocab::{acl, rdf},
};

/// Access to existing resources is granted by any of:
///
/// - ownership of one of the resources by the agent
/// - a rule naming one of the resources through `acl:accessTo`
/// - a rule naming one of the resources' types through `acl:accessToClass`
///
/// Extension predicates narrow the rule branches but never ownership. Only
/// IRI-identified resources are candidates; blank and literal targets are
/// never granted.
impl Target for Resources {
    const KIND: &'static str = "instance";

    fn len(&self) -> usize {
        self.0.len()
    }

    fn compose(&self, scope: &Scope<'_>) -> Condition {
        let mut branches = Vec::new();

        if let Some(agent) = scope.identity() {
            branches.push(Condition::pattern(
                &scope.target,
                PropertyPath::link(acl::OWNER),
                agent,
            ));
        }

        branches.extend(scope.rules(&[Condition::pattern(
            &scope.authorization,
            PropertyPath::link(acl::ACCESS_TO),
            &scope.target,
        )]));

        branches.extend(scope.rules(&[
            Condition::pattern(&scope.target, PropertyPath::link(rdf::TYPE), &scope.class),
            Condition::pattern(
                &scope.authorization,
                PropertyPath::link(acl::ACCESS_TO_CLASS),
                &scope.class,
            ),
        ]));

        Condition::all([
            Condition::values(
                &scope.target,
                self.0.iter().filter(|target| target.is_named()).cloned(),
            ),
            scope.mode_values(),
            scope.agent_class_values(),
            Condition::Any(branches),
        ])
    }
}
