use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{Ask, GraphError, GraphStore};

/// A [MeasuredGraph] acts as a proxy over a [GraphStore] implementation that
/// counts the questions asked of it.
#[derive(Clone, Debug)]
pub struct MeasuredGraph<Store>
where
    Store: GraphStore,
{
    asks: Arc<AtomicUsize>,
    store: Store,
}

impl<Store> MeasuredGraph<Store>
where
    Store: GraphStore,
{
    /// Wrap the provided [GraphStore] so that asks against it may be
    /// measured.
    pub fn new(store: Store) -> Self {
        Self {
            asks: Arc::new(AtomicUsize::default()),
            store,
        }
    }

    /// The aggregate number of asks made of the wrapped [GraphStore]
    pub fn asks(&self) -> usize {
        self.asks.load(Ordering::Relaxed)
    }

    /// The wrapped [GraphStore]
    pub fn inner(&self) -> &Store {
        &self.store
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Store> GraphStore for MeasuredGraph<Store>
where
    Store: GraphStore,
{
    async fn ask(&self, query: &Ask) -> Result<bool, GraphError> {
        self.asks.fetch_add(1, Ordering::Relaxed);
        self.store.ask(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, MemoryGraph};
    use anyhow::Result;

    #[tokio::test]
    async fn it_counts_asks_across_clones() -> Result<()> {
        let graph = MeasuredGraph::new(MemoryGraph::new());
        let shared = graph.clone();

        graph.ask(&Ask::new(Condition::always())).await?;
        shared.ask(&Ask::new(Condition::never())).await?;

        assert_eq!(graph.asks(), 2);
        Ok(())
    }
}
