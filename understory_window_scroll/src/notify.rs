// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distinct-until-changed notifications of the first visible index.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Notification delivered to index-change listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexChange {
    /// The first visible index changed to the given value.
    Changed(usize),
    /// The stream ended; no further notifications follow.
    Completed,
}

/// Handle returned by [`IndexChangeNotifier::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(IndexChange)>;

/// Listener registry that only forwards values differing from the last one.
///
/// Completing the notifier delivers [`IndexChange::Completed`] to every
/// listener and drops them. A completed notifier ignores further values until
/// it is reopened.
pub struct IndexChangeNotifier {
    // Hosts rarely register more than a couple of listeners.
    listeners: SmallVec<[(SubscriptionId, Listener); 2]>,
    last: Option<usize>,
    next_id: u64,
    completed: bool,
}

impl IndexChangeNotifier {
    /// Creates an open notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: SmallVec::new(),
            last: None,
            next_id: 0,
            completed: false,
        }
    }

    /// Registers `listener`.
    ///
    /// On a completed notifier the listener immediately receives
    /// [`IndexChange::Completed`] and is not retained.
    pub fn subscribe(&mut self, listener: impl FnMut(IndexChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut listener: Listener = Box::new(listener);
        if self.completed {
            listener(IndexChange::Completed);
        } else {
            self.listeners.push((id, listener));
        }
        id
    }

    /// Removes a listener; returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Forwards `index` to every listener unless it equals the last value.
    ///
    /// Returns `true` if the value was forwarded.
    pub fn emit(&mut self, index: usize) -> bool {
        if self.completed || self.last == Some(index) {
            return false;
        }
        self.last = Some(index);
        for (_, listener) in &mut self.listeners {
            listener(IndexChange::Changed(index));
        }
        true
    }

    /// Ends the stream, notifying and dropping every listener.
    pub fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        for (_, mut listener) in self.listeners.drain(..) {
            listener(IndexChange::Completed);
        }
    }

    /// Reopens a completed notifier and forgets the last value.
    pub fn reopen(&mut self) {
        self.completed = false;
        self.last = None;
    }

    /// Returns `true` once [`IndexChangeNotifier::complete`] has run.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The last forwarded value, if any.
    #[must_use]
    pub fn last_emitted(&self) -> Option<usize> {
        self.last
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for IndexChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IndexChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexChangeNotifier")
            .field("listeners", &self.listeners.len())
            .field("last", &self.last)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
