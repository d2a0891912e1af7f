use crate::{Node, Pattern, PropertyPath, Term, Variable};

/// A boolean expression over graph patterns.
///
/// A condition denotes a set of solutions (variable bindings). A question is
/// answered "yes" when the root condition has at least one solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Solutions are the ways the pattern matches
    Pattern(Pattern),
    /// Conjunction: solutions compatible with every member. The empty
    /// conjunction has exactly one, empty, solution.
    All(Vec<Condition>),
    /// Disjunction: solutions of any member. The empty disjunction has none.
    Any(Vec<Condition>),
    /// Negation: keeps a solution only if the inner condition has no
    /// solution extending it. Within an [Condition::All] it is applied after
    /// every positive member, like a SPARQL `FILTER NOT EXISTS`.
    Not(Box<Condition>),
    /// Constrains the variable to one of the given nodes
    Values(Variable, Vec<Node>),
}

impl Condition {
    /// A condition that always holds
    pub fn always() -> Self {
        Condition::All(Vec::new())
    }

    /// A condition that never holds
    pub fn never() -> Self {
        Condition::Any(Vec::new())
    }

    /// Shorthand for a single-pattern condition
    pub fn pattern<S, P, O>(subject: S, path: P, object: O) -> Self
    where
        S: Into<Term>,
        P: Into<PropertyPath>,
        O: Into<Term>,
    {
        Condition::Pattern(Pattern::new(subject, path, object))
    }

    /// Conjunction of the given conditions
    pub fn all<I: IntoIterator<Item = Condition>>(conditions: I) -> Self {
        Condition::All(conditions.into_iter().collect())
    }

    /// Disjunction of the given conditions
    pub fn any<I: IntoIterator<Item = Condition>>(conditions: I) -> Self {
        Condition::Any(conditions.into_iter().collect())
    }

    /// Negation of the given condition
    #[allow(clippy::should_implement_trait)]
    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    /// Binds `variable` to each of `nodes` in turn
    pub fn values<I: IntoIterator<Item = Node>>(variable: &Variable, nodes: I) -> Self {
        Condition::Values(variable.clone(), nodes.into_iter().collect())
    }

    /// True for conditions that trivially have no solution
    pub fn is_never(&self) -> bool {
        match self {
            Condition::Any(members) => members.iter().all(Condition::is_never),
            Condition::All(members) => members.iter().any(Condition::is_never),
            Condition::Values(_, nodes) => nodes.is_empty(),
            _ => false,
        }
    }
}

impl From<Pattern> for Condition {
    fn from(value: Pattern) -> Self {
        Condition::Pattern(value)
    }
}
