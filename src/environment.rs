//! Host environment handle shared by plugins
//!
//! Carries the user agent and platform identifier the hint formatter and
//! keyboard heuristic read, plus the listener registry behaviors attach to.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::trace;

use crate::events::{EventType, KeyEvent};

/// Callback invoked for each dispatched event of the registered type
pub type Listener = Arc<dyn Fn(&KeyEvent) + Send + Sync>;

/// Identifies a registered listener so it can be removed later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    event_type: EventType,
    listener: Listener,
}

struct Inner {
    user_agent: String,
    platform: String,
    next_id: AtomicU64,
    listeners: Mutex<Vec<Registration>>,
}

/// Shared handle to the host runtime context
///
/// Clones refer to the same listener registry, so a plugin can move a
/// clone into its teardown.
#[derive(Clone)]
pub struct Environment {
    inner: Arc<Inner>,
}

impl Environment {
    /// Create an environment with the given user agent and platform identifier
    pub fn new(user_agent: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                user_agent: user_agent.into(),
                platform: platform.into(),
                next_id: AtomicU64::new(1),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub fn platform(&self) -> &str {
        &self.inner.platform
    }

    /// Whether the platform identifier names a Mac (`MacIntel`, `MacPPC`, ...)
    pub fn is_mac(&self) -> bool {
        self.inner.platform.starts_with("Mac")
    }

    /// Register a listener for one event type
    pub fn add_listener<F>(&self, event_type: EventType, listener: F) -> ListenerId
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.registry().push(Registration {
            id,
            event_type,
            listener: Arc::new(listener),
        });
        trace!(?id, ?event_type, "listener added");
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.registry();
        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        let removed = listeners.len() != before;
        trace!(?id, removed, "listener removed");
        removed
    }

    /// Deliver an event to every listener registered for its type
    ///
    /// Listeners run in registration order, outside the registry lock.
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &KeyEvent) -> usize {
        let event_type = event.event_type();
        let matching: Vec<Listener> = self
            .registry()
            .iter()
            .filter(|r| r.event_type == event_type)
            .map(|r| Arc::clone(&r.listener))
            .collect();

        for listener in &matching {
            listener(event);
        }
        matching.len()
    }

    /// Number of listeners currently registered, across all event types
    pub fn listener_count(&self) -> usize {
        self.registry().len()
    }

    fn registry(&self) -> MutexGuard<'_, Vec<Registration>> {
        // Registrations stay consistent even if a holder panicked
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("user_agent", &self.inner.user_agent)
            .field("platform", &self.inner.platform)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
