//! Callback subscriptions for external notifications.
//!
//! An [`Observer`] stands in for a notification source of the host environment, such as a
//! container resize observer or a viewport media query. Interested parties register a callback
//! and get a [`SubscriptionId`] back, which they use to unregister. Notifications are delivered
//! synchronously, in registration order.

use std::fmt;

use tracing::trace;

/// Handle to a registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Observer<T> {
    name: &'static str,
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Observer<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        trace!("{}: registered {id:?}", self.name);
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        let len = self.callbacks.len();
        self.callbacks.retain(|(cb_id, _)| *cb_id != id);
        let removed = self.callbacks.len() != len;
        if removed {
            trace!("{}: unregistered {id:?}", self.name);
        }
        removed
    }

    /// Delivers a notification to every registered callback.
    pub fn notify(&mut self, value: &T) {
        for (_, callback) in &mut self.callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("name", &self.name)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
