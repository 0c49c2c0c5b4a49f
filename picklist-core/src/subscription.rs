//! Change notification with scoped subscriptions
//!
//! Observers register a callback and hold a [`Subscription`] guard;
//! dropping the guard unregisters the callback, so a torn-down consumer
//! cannot leak a listener. Notification is synchronous and runs after a
//! mutation has fully completed.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// What a completed mutation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Selected-set membership changed and both views were rederived
    Membership,
    /// Visual staging or a range anchor changed
    Staging,
    /// A pane query or its filtered view changed
    Filter,
    /// A pane cursor moved
    Cursor,
}

type Listener = Rc<dyn Fn(ChangeKind)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Listener registry owned by a selector
#[derive(Default)]
pub(crate) struct Notifier {
    inner: Rc<RefCell<ListenerTable>>,
}

impl Notifier {
    /// Register a listener, returning its guard
    pub fn subscribe(&self, listener: impl Fn(ChangeKind) + 'static) -> Subscription {
        let mut table = self.inner.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            table: Rc::downgrade(&self.inner),
        }
    }

    /// Invoke every registered listener
    ///
    /// The listener list is snapshotted first, so a callback may drop its
    /// own guard or register new listeners without deadlocking the table.
    pub fn notify(&self, change: ChangeKind) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(change);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.inner.borrow().listeners.len())
            .finish()
    }
}

/// Guard for a registered observer; dropping it unregisters
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listeners_receive_notifications() {
        let notifier = Notifier::default();
        let hits = Rc::new(Cell::new(0));

        let hits_in_listener = Rc::clone(&hits);
        let _guard = notifier.subscribe(move |_| hits_in_listener.set(hits_in_listener.get() + 1));

        notifier.notify(ChangeKind::Staging);
        notifier.notify(ChangeKind::Membership);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let notifier = Notifier::default();
        let hits = Rc::new(Cell::new(0));

        let hits_in_listener = Rc::clone(&hits);
        let guard = notifier.subscribe(move |_| hits_in_listener.set(hits_in_listener.get() + 1));
        assert_eq!(notifier.listener_count(), 1);

        drop(guard);
        assert_eq!(notifier.listener_count(), 0);

        notifier.notify(ChangeKind::Staging);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn guard_outliving_the_notifier_is_harmless() {
        let notifier = Notifier::default();
        let guard = notifier.subscribe(|_| {});
        drop(notifier);
        drop(guard);
    }

    #[test]
    fn change_kind_is_delivered() {
        let notifier = Notifier::default();
        let last = Rc::new(Cell::new(None));

        let last_in_listener = Rc::clone(&last);
        let _guard = notifier.subscribe(move |change| last_in_listener.set(Some(change)));

        notifier.notify(ChangeKind::Filter);
        assert_eq!(last.get(), Some(ChangeKind::Filter));
    }
}
