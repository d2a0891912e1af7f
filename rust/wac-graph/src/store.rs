use std::sync::Arc;

use async_trait::async_trait;

use crate::{Ask, ConditionalSync, GraphError};

mod memory;
pub use memory::*;

mod measure;
pub use measure::*;

/// A [GraphStore] is a facade over some graph database that can answer a
/// yes/no [Ask] about its current contents. One call is one round trip;
/// timeouts and retries belong to the implementation.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait GraphStore: ConditionalSync {
    /// True if the question's condition has at least one solution
    async fn ask(&self, query: &Ask) -> Result<bool, GraphError>;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<S> GraphStore for Arc<S>
where
    S: GraphStore + ?Sized,
{
    async fn ask(&self, query: &Ask) -> Result<bool, GraphError> {
        self.as_ref().ask(query).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<S> GraphStore for &S
where
    S: GraphStore + ?Sized,
{
    async fn ask(&self, query: &Ask) -> Result<bool, GraphError> {
        (**self).ask(query).await
    }
}
