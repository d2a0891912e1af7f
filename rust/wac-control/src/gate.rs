use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wac_graph::{GraphStore, Node};

use crate::{
    AccessControl, AccessControlConfig, AccessControlError, AccessMode, Agent, ResourceCheck,
    RulePredicate,
};

/// What the caller should do with a request after the gate has looked at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Access granted, or nothing to protect
    Proceed,
    /// Access denied to an anonymous request; identifying may help
    Unauthenticated,
    /// Access denied to an identified agent
    Forbidden,
}

/// The parts of an incoming request the gate needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardedRequest {
    /// Request method, e.g. `GET`
    pub method: String,
    /// Mode declared by the operation being invoked; overrides the method
    pub mode: Option<AccessMode>,
    /// Identifiers of the protected resource. Empty when the request does
    /// not address a protected resource.
    pub targets: Vec<Node>,
    /// Who is asking; [None] for anonymous requests
    pub agent: Option<Agent>,
}

impl GuardedRequest {
    /// A request with the given method and nothing else known
    pub fn new<M: Into<String>>(method: M) -> Self {
        Self {
            method: method.into(),
            mode: None,
            targets: Vec::new(),
            agent: None,
        }
    }

    /// Declare the mode the operation requires
    pub fn mode<M: Into<AccessMode>>(mut self, mode: M) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Add an identifier of the protected resource
    pub fn target<N: Into<Node>>(mut self, target: N) -> Self {
        self.targets.push(target.into());
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
}

/// Maps request methods to the access mode they require. Method names are
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeTable(BTreeMap<String, AccessMode>);

impl ModeTable {
    /// A table with no methods mapped
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Map `method` to `mode`, returning the previous mapping
    pub fn insert<M: Into<String>>(&mut self, method: M, mode: AccessMode) -> Option<AccessMode> {
        let method = method.into().to_ascii_uppercase();
        let previous = self.remove(&method);
        self.0.insert(method, mode);
        previous
    }

    /// Unmap `method`, returning its mode
    pub fn remove(&mut self, method: &str) -> Option<AccessMode> {
        let key = self
            .0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(method))
            .cloned()?;
        self.0.remove(&key)
    }

    /// The mode `method` requires, if mapped
    pub fn resolve(&self, method: &str) -> Option<&AccessMode> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(method))
            .map(|(_, mode)| mode)
    }
}

/// `GET` reads, `POST` and `PUT` write, `DELETE` deletes
impl Default for ModeTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("GET", AccessMode::Read);
        table.insert("POST", AccessMode::Write);
        table.insert("PUT", AccessMode::Write);
        table.insert("DELETE", AccessMode::Delete);
        table
    }
}

/// Guards requests with an [AccessControl] engine: works out the mode a
/// request needs, asks for a decision over its targets, and translates the
/// verdict into an [Outcome].
pub struct Gate<S> {
    access: AccessControl<S>,
    modes: ModeTable,
    patterns: Vec<Arc<dyn RulePredicate>>,
}

impl<S> Gate<S>
where
    S: GraphStore,
{
    /// A gate using the default method table
    pub fn new(access: AccessControl<S>) -> Self {
        Self {
            access,
            modes: ModeTable::default(),
            patterns: Vec::new(),
        }
    }

    /// A gate and engine built from configuration
    pub fn with_config(store: S, config: &AccessControlConfig) -> Self {
        Self {
            access: AccessControl::with_config(store, config),
            modes: config.methods.clone(),
            patterns: config
                .required
                .iter()
                .cloned()
                .map(|required| Arc::new(required) as Arc<dyn RulePredicate>)
                .collect(),
        }
    }

    /// Replace the method table
    pub fn modes(mut self, modes: ModeTable) -> Self {
        self.modes = modes;
        self
    }

    /// Require every granting rule to also satisfy `pattern`
    pub fn pattern<P: RulePredicate + 'static>(mut self, pattern: P) -> Self {
        self.patterns.push(Arc::new(pattern));
        self
    }

    /// The engine decisions are delegated to
    pub fn access(&self) -> &AccessControl<S> {
        &self.access
    }

    /// Decide what to do with `request`
    pub async fn authorize(&self, request: &GuardedRequest) -> Result<Outcome, AccessControlError> {
        if request.targets.is_empty() {
            debug!(method = %request.method, "No protected resource, proceeding");
            return Ok(Outcome::Proceed);
        }

        let mode = match request
            .mode
            .as_ref()
            .or_else(|| self.modes.resolve(&request.method))
        {
            Some(mode) => mode.clone(),
            None => {
                warn!(method = %request.method, "No access mode configured for request method");
                return Err(AccessControlError::UnresolvedMode {
                    method: request.method.clone(),
                });
            }
        };

        let check = ResourceCheck::resources(request.targets.iter().cloned())
            .mode(mode)
            .maybe_agent(request.agent.clone())
            .patterns(self.patterns.iter().cloned());

        let outcome = match (self.access.check_instance(&check).await?, &request.agent) {
            (true, _) => Outcome::Proceed,
            (false, None) => Outcome::Unauthenticated,
            (false, Some(_)) => Outcome::Forbidden,
        };

        Ok(outcome)
    }
}
