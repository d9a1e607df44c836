//! In-process invalidation bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`InvalidationEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// The entity kind a list view subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Recipient,
    Gift,
}

impl EntityKind {
    /// Stable string form used in SSE event names.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Recipient => "recipient",
            EntityKind::Gift => "gift",
        }
    }
}

/// A signal that cached lists of `entity` are stale and should refetch.
///
/// Carries no payload beyond the entity kind: the contract is at-least-one
/// refetch after each mutation, with no ordering or deduplication guarantee.
/// Concurrent mutations may trigger redundant refetches but never miss one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidationEvent {
    /// Which entity's lists are stale.
    pub entity: EntityKind,
    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl InvalidationEvent {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            timestamp: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out invalidation bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`InvalidationEvent`].
pub struct EventBus {
    sender: broadcast::Sender<InvalidationEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`. A lagged list
    /// view still refetches, so the at-least-one guarantee holds.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an invalidation to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: InvalidationEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all invalidations published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<InvalidationEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
