use std::sync::Arc;

use tracing::{debug, trace};
use wac_graph::{Ask, GraphStore};

use crate::{
    AccessControlConfig, AccessControlError, AgentClassMatch, AgentMatch, Check, GranteeMatcher,
    ResourceCheck, Scope, Target, TypeCheck,
};

/// Decides access by composing each [Check] into a single [Ask] and putting
/// it to a [GraphStore].
///
/// The engine holds no mutable state; share it between tasks with [Arc] (or
/// by reference) when the store allows.
#[derive(Clone)]
pub struct AccessControl<S> {
    store: S,
    matchers: Vec<Arc<dyn GranteeMatcher>>,
}

impl<S> AccessControl<S>
where
    S: GraphStore,
{
    /// An engine granting through `acl:agent` and `acl:agentClass`
    pub fn new(store: S) -> Self {
        Self {
            store,
            matchers: vec![Arc::new(AgentMatch), Arc::new(AgentClassMatch)],
        }
    }

    /// An engine granting through the configured grantee kinds
    pub fn with_config(store: S, config: &AccessControlConfig) -> Self {
        Self {
            store,
            matchers: config.grantees.iter().map(|grantee| grantee.matcher()).collect(),
        }
    }

    /// Additionally grant through `matcher` in every check
    pub fn matcher<M: GranteeMatcher + 'static>(mut self, matcher: M) -> Self {
        self.matchers.push(Arc::new(matcher));
        self
    }

    /// The store questions are put to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The question a check would put to the store
    pub fn query<T: Target>(&self, check: &Check<T>) -> Ask {
        let scope = Scope::new(check, &self.matchers);
        Ask::new(check.target.compose(&scope))
    }

    /// Decide a check of any kind. Exactly one question is put to the store.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            kind = T::KIND,
            modes = check.modes.len(),
            targets = check.target.len(),
            agent = ?check.agent.as_ref().map(|agent| &agent.id),
        )
    )]
    pub async fn check<T: Target>(&self, check: &Check<T>) -> Result<bool, AccessControlError> {
        let query = self.query(check);
        trace!(sparql = %query, "Composed authorization query");

        let granted = self.store.ask(&query).await?;
        debug!(granted, "Reached authorization decision");

        Ok(granted)
    }

    /// Decide access to existing resources
    pub async fn check_instance(&self, check: &ResourceCheck) -> Result<bool, AccessControlError> {
        self.check(check).await
    }

    /// Decide access to resources of a class, before any exist
    pub async fn check_type(&self, check: &TypeCheck) -> Result<bool, AccessControlError> {
        self.check(check).await
    }
}
