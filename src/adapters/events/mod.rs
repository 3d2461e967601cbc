//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus implementing both event ports

mod in_memory;

pub use in_memory::{InMemoryEventBus, ALL_EVENTS};
