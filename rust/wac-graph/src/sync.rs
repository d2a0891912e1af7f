//! A thread-safety bound that relaxes on wasm
//!
//! Store adapters and extension points may be shared across threads on
//! native targets, while `wasm32-unknown-unknown` has no threads to share
//! them across. [ConditionalSync] means `Send + Sync` on native targets and
//! no bound at all on wasm.

/// `Send + Sync` on native targets
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> ConditionalSync for T {}

/// No bound on wasm
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSync {}

#[cfg(target_arch = "wasm32")]
impl<T> ConditionalSync for T {}
