use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Node, Term, Variable};

/// One solution: an assignment of nodes to variables.
///
/// Bindings are immutable and cheap to clone. Extending them produces a new
/// set; the one it was extended from is left as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(Arc<BTreeMap<Variable, Node>>);

impl Bindings {
    /// An empty solution
    pub fn new() -> Self {
        Self::default()
    }

    /// The node bound to `variable`, if any
    pub fn get(&self, variable: &Variable) -> Option<&Node> {
        self.0.get(variable)
    }

    /// Resolve a term against these bindings: constants resolve to
    /// themselves, bound variables to their node
    pub fn resolve<'a>(&'a self, term: &'a Term) -> Option<&'a Node> {
        match term {
            Term::Constant(node) => Some(node),
            Term::Variable(variable) => self.get(variable),
        }
    }

    /// Extend with `variable = node`. Returns [None] when the variable is
    /// already bound to a different node.
    pub fn bind(&self, variable: &Variable, node: &Node) -> Option<Self> {
        match self.0.get(variable) {
            Some(existing) if existing == node => Some(self.clone()),
            Some(_) => None,
            None => {
                let mut map = self.0.as_ref().clone();
                map.insert(variable.clone(), node.clone());
                Some(Self(Arc::new(map)))
            }
        }
    }

    /// Like [Bindings::bind], but a constant term only checks for equality
    pub fn unify(&self, term: &Term, node: &Node) -> Option<Self> {
        match term {
            Term::Constant(constant) if constant == node => Some(self.clone()),
            Term::Constant(_) => None,
            Term::Variable(variable) => self.bind(variable, node),
        }
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the bound variables in name order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Node)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_conflicting_bindings() {
        let x = Variable::from("x");
        let bindings = Bindings::new()
            .bind(&x, &Node::named("urn:a"))
            .expect("first binding succeeds");

        assert!(bindings.bind(&x, &Node::named("urn:a")).is_some());
        assert!(bindings.bind(&x, &Node::named("urn:b")).is_none());
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn it_leaves_the_base_untouched() {
        let base = Bindings::new();
        let extended = base
            .bind(&Variable::from("y"), &Node::blank("b"))
            .expect("binding succeeds");

        assert!(base.is_empty());
        assert_eq!(extended.get(&Variable::from("y")), Some(&Node::blank("b")));
    }

    #[test]
    fn it_unifies_constants_by_equality() {
        let bindings = Bindings::new();
        let constant = Term::from(Node::named("urn:a"));

        assert!(bindings.unify(&constant, &Node::named("urn:a")).is_some());
        assert!(bindings.unify(&constant, &Node::named("urn:b")).is_none());
    }
}
