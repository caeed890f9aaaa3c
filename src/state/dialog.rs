//! Modal dialog lifecycle and outside-click dismissal
//!
//! The dialog is either closed or open. While open it holds a
//! [`Subscription`] to the pointer [`ListenerRegistry`]; the subscription is
//! dropped on every path out of the open state, so at most one dismissal
//! listener exists at any time.

use crate::state::FieldKey;
use std::cell::Cell;
use std::rc::Rc;

/// Identity of an on-screen element that can receive a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Page shell outside any widget
    Page,
    /// The "Open Form" trigger on the page shell
    OpenButton,
    /// Full-screen overlay behind the dialog panel
    Backdrop,
    /// Dialog panel, excluding its inputs and buttons
    Content,
    Field(FieldKey),
    SubmitButton,
}

/// A click as seen by a handler bound to `current_target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Innermost element the pointer landed on
    pub target: ElementId,
    /// Element the receiving handler is bound to
    pub current_target: ElementId,
}

impl ClickEvent {
    pub fn new(target: ElementId, current_target: ElementId) -> Self {
        Self {
            target,
            current_target,
        }
    }

    /// Whether the click originated on the bound element itself rather than a descendant
    pub fn is_on_bound_element(&self) -> bool {
        self.target == self.current_target
    }
}

/// Registry of active global pointer listeners
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<Cell<usize>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the returned guard is dropped
    pub fn subscribe(&self) -> Subscription {
        self.active.set(self.active.get() + 1);
        tracing::debug!("Dismiss listener attached ({} active)", self.active.get());
        Subscription {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.active.get()
    }

    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }
}

/// RAII guard for a registered listener
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<usize>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::debug!("Dismiss listener detached ({} active)", self.active.get());
    }
}

/// Why the dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseCause {
    /// Click landed exactly on the backdrop
    Dismissed,
    /// Form was submitted and passed validation
    Submitted,
}

/// Owns the open/closed state and the dismissal rules
#[derive(Debug)]
pub struct DialogController {
    registry: ListenerRegistry,
    subscription: Option<Subscription>,
}

impl DialogController {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            subscription: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Open the dialog. Field values are left untouched.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.subscription = Some(self.registry.subscribe());
        tracing::info!("Dialog opened");
    }

    /// Close the dialog for `cause`. Returns false if it was already closed.
    pub fn close(&mut self, cause: CloseCause) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                drop(subscription);
                tracing::info!("Dialog closed ({cause:?})");
                true
            }
            None => false,
        }
    }

    /// Handle a click delivered to the backdrop's handler.
    ///
    /// Closes only when the click's target is the backdrop itself; clicks that
    /// bubbled up from the panel or its children are ignored. Returns whether
    /// the dialog closed, in which case the caller resets the form.
    pub fn request_close(&mut self, event: ClickEvent) -> bool {
        if event.current_target != ElementId::Backdrop || !event.is_on_bound_element() {
            return false;
        }
        self.close(CloseCause::Dismissed)
    }
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new(ListenerRegistry::new())
    }
}
