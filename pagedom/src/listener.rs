//! Click listener registry and the subscriptions that own its entries.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::element::Element;
use crate::event::ClickEvent;

/// Listener callback. Receives the event and the document's root element.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent, &mut Element)>;

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Sees every click that is not stopped on its way up.
    Document,
    /// Sees clicks on the element or any of its descendants.
    Element(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    target: ListenerTarget,
    handler: ClickHandler,
}

#[derive(Default)]
pub(crate) struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Registry {
    pub(crate) fn insert(&mut self, target: ListenerTarget, handler: ClickHandler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            target,
            handler,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Handlers attached to `target`, in registration order.
    pub(crate) fn handlers_for(&self, target: &ListenerTarget) -> Vec<(ListenerId, ClickHandler)> {
        self.entries
            .iter()
            .filter(|e| &e.target == target)
            .map(|e| (e.id, Rc::clone(&e.handler)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Owns one listener registration.
///
/// Dropping the subscription removes the listener. It only holds a weak
/// reference to the registry, so it can safely outlive its document.
#[must_use = "dropping a Subscription removes its listener immediately"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: ListenerId,
}

impl Subscription {
    pub(crate) fn new(registry: &Rc<RefCell<Registry>>, id: ListenerId) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            id,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered with a live document.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().contains(self.id))
            .unwrap_or(false)
    }

    /// Remove the listener now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                log::trace!("[listener] removed {:?}", self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
