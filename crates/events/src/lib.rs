//! List invalidation infrastructure.
//!
//! Mutation handlers publish an [`InvalidationEvent`] keyed by entity kind
//! after each successful write; list views subscribe and refetch. This
//! replaces ad hoc cross-component signalling with an explicit
//! publish/subscribe channel.

pub mod bus;

pub use bus::{EntityKind, EventBus, InvalidationEvent};
