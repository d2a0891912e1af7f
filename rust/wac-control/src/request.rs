use std::fmt;
use std::sync::Arc;

use wac_graph::{Condition, ConditionalSync, Node};

use crate::{AccessMode, Agent, GranteeMatcher, RulePredicate, Scope};

/// What a decision is about: concrete resources, or classes of resources
/// not yet in existence.
pub trait Target: ConditionalSync + Sized {
    /// Short label used in diagnostics
    const KIND: &'static str;

    /// Number of alternatives; access to any one of them suffices
    fn len(&self) -> usize;

    /// True when there is nothing to decide over
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The complete condition under which access is granted
    fn compose(&self, scope: &Scope<'_>) -> Condition;
}

/// Concrete resources, typically aliases of the same requested resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources(pub Vec<Node>);

/// Candidate classes for a resource that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Types(pub Vec<Node>);

/// A single access decision to be made.
///
/// Build one with [Check::resource] / [Check::resources] (an instance
/// check) or [Check::of_type] / [Check::types] (a type check), then narrow
/// it with the builder methods.
#[derive(Clone)]
pub struct Check<T> {
    /// Requested modes. `acl:Control` is always requested in addition.
    pub modes: Vec<AccessMode>,
    /// What access is requested to
    pub target: T,
    /// Who is asking; [None] for anonymous requests
    pub agent: Option<Agent>,
    /// Conditions every candidate rule must also satisfy
    pub patterns: Vec<Arc<dyn RulePredicate>>,
    /// Grantee matchers used in addition to the engine's own
    pub matchers: Vec<Arc<dyn GranteeMatcher>>,
}

/// A decision over concrete resources
pub type ResourceCheck = Check<Resources>;

/// A decision over candidate classes
pub type TypeCheck = Check<Types>;

impl<T> Check<T> {
    /// Begin a check over `target` with nothing else specified
    pub fn new(target: T) -> Self {
        Self {
            modes: Vec::new(),
            target,
            agent: None,
            patterns: Vec::new(),
            matchers: Vec::new(),
        }
    }

    /// Request an additional mode
    pub fn mode<M: Into<AccessMode>>(mut self, mode: M) -> Self {
        self.modes.push(mode.into());
        self
    }

    /// Request additional modes
    pub fn modes<I>(mut self, modes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AccessMode>,
    {
        self.modes.extend(modes.into_iter().map(Into::into));
        self
    }

    /// Set the requesting agent
    pub fn agent<A: Into<Agent>>(mut self, agent: A) -> Self {
        self.agent = Some(agent.into());
        self
    }

    /// Set or clear the requesting agent
    pub fn maybe_agent(mut self, agent: Option<Agent>) -> Self {
        self.agent = agent;
        self
    }

    /// Add a condition candidate rules must satisfy
    pub fn pattern<P: RulePredicate + 'static>(mut self, pattern: P) -> Self {
        self.patterns.push(Arc::new(pattern));
        self
    }

    /// Add already shared rule conditions
    pub fn patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn RulePredicate>>,
    {
        self.patterns.extend(patterns);
        self
    }

    /// Add a grantee matcher for this check only
    pub fn matcher<M: GranteeMatcher + 'static>(mut self, matcher: M) -> Self {
        self.matchers.push(Arc::new(matcher));
        self
    }
}

impl Check<Resources> {
    /// An instance check over one resource
    pub fn resource<N: Into<Node>>(resource: N) -> Self {
        Self::new(Resources(vec![resource.into()]))
    }

    /// An instance check over several aliases of one resource
    pub fn resources<I>(resources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self::new(Resources(resources.into_iter().map(Into::into).collect()))
    }
}

impl Check<Types> {
    /// A type check over one candidate class
    pub fn of_type<N: Into<Node>>(class: N) -> Self {
        Self::new(Types(vec![class.into()]))
    }

    /// A type check over several candidate classes
    pub fn types<I>(classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self::new(Types(classes.into_iter().map(Into::into).collect()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("modes", &self.modes)
            .field("target", &self.target)
            .field("agent", &self.agent)
            .field("patterns", &self.patterns.len())
            .field("matchers", &self.matchers.len())
            .finish()
    }
}
