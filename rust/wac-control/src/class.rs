use wac_graph::{Condition, Node, PropertyPath};

use crate::{
    Scope, Target, Types,
    vocab::{acl, rdfs},
};

/// Access to a class of resources, checked before any instance exists, is
/// granted by a rule naming one of the candidate classes (or
/// `rdfs:Resource`) through `acl:accessToClass`. There is no ownership to
/// consult.
impl Target for Types {
    const KIND: &'static str = "type";

    fn len(&self) -> usize {
        self.0.len()
    }

    fn compose(&self, scope: &Scope<'_>) -> Condition {
        let mut classes = vec![Node::named(rdfs::RESOURCE)];
        for class in self.0.iter().filter(|class| class.is_named()) {
            if !classes.contains(class) {
                classes.push(class.clone());
            }
        }

        Condition::all([
            Condition::values(&scope.class, classes),
            scope.mode_values(),
            scope.agent_class_values(),
            Condition::Any(scope.rules(&[Condition::pattern(
                &scope.authorization,
                PropertyPath::link(acl::ACCESS_TO_CLASS),
                &scope.class,
            )])),
        ])
    }
}
