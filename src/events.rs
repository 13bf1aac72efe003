// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document-level pointer listeners with scoped lifetimes.
//!
//! A mounted search box has to hear pointer-downs anywhere on the page to
//! close itself on outside clicks. That listener lives on a shared target,
//! so it must be removed when the widget goes away or every mount leaks one.
//! [`DocumentEvents::on_pointer_down`] hands back a [`ListenerGuard`];
//! dropping the guard deregisters the listener.
//!
//! Single-threaded by construction (`Rc`/`RefCell`), like the UI event loop
//! it stands in for.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::{BTreeMap, HashSet};
use std::ops::{Deref, DerefMut};
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::widget::{Autocomplete, Navigator};

/// Identifies an element in the host's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A pointer-down, described by the path from the target up to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown {
    path: Vec<NodeId>,
}

impl PointerDown {
    pub fn new(path: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            path: path.into_iter().collect(),
        }
    }

    /// Whether the event target is `node` or one of its descendants.
    pub fn is_within(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

type ListenerId = u64;
type Listener = Box<dyn FnMut(&PointerDown)>;

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    listeners: BTreeMap<ListenerId, Listener>,
    /// Listeners currently running, taken out of `listeners`.
    in_flight: Vec<ListenerId>,
    /// In-flight listeners whose guard dropped while they ran.
    revoked: HashSet<ListenerId>,
}

impl Registry {
    fn remove(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_none() && self.in_flight.contains(&id) {
            self.revoked.insert(id);
        }
    }
}

/// The page-wide event target.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct DocumentEvents {
    registry: Rc<RefCell<Registry>>,
}

impl DocumentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener for as long as the guard lives.
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn on_pointer_down(&self, listener: impl FnMut(&PointerDown) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));
        trace!(listener = id, "pointer-down listener added");
        ListenerGuard {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver an event to every registered listener, in registration order.
    ///
    /// Listeners may add or drop guards (their own included) while running.
    pub fn dispatch_pointer_down(&self, event: &PointerDown) {
        let ids: Vec<ListenerId> = self.registry.borrow().listeners.keys().copied().collect();
        for id in ids {
            let taken = {
                let mut registry = self.registry.borrow_mut();
                let taken = registry.listeners.remove(&id);
                if taken.is_some() {
                    registry.in_flight.push(id);
                }
                taken
            };
            let Some(mut listener) = taken else {
                continue;
            };

            listener(event);

            let mut registry = self.registry.borrow_mut();
            registry.in_flight.retain(|&running| running != id);
            if !registry.revoked.remove(&id) {
                registry.listeners.insert(id, listener);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        let registry = self.registry.borrow();
        registry.listeners.len() + registry.in_flight.len() - registry.revoked.len()
    }
}

/// Keeps a listener registered. Dropping it deregisters the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Weak<RefCell<Registry>>,
    id: ListenerId,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.try_borrow_mut() {
                registry.remove(self.id);
                trace!(listener = self.id, "pointer-down listener removed");
            }
        }
    }
}

// =============================================================================
// MOUNTING
// =============================================================================

/// A widget attached to a page: it closes on pointer-downs outside `root`
/// until it is unmounted or dropped.
///
/// An outside click that arrives while the host holds a borrow of the widget
/// is parked and applied as soon as the widget is free again: when the
/// [`WidgetMut`] drops, or on the next [`MountedWidget::widget`] call.
pub struct MountedWidget<N: Navigator + 'static> {
    widget: Rc<RefCell<Autocomplete<N>>>,
    root: NodeId,
    pending_close: Rc<Cell<bool>>,
    _outside_click: ListenerGuard,
}

/// Attach `widget` under `root` and start listening for outside clicks.
pub fn mount<N: Navigator + 'static>(
    widget: Autocomplete<N>,
    root: NodeId,
    events: &DocumentEvents,
) -> MountedWidget<N> {
    let widget = Rc::new(RefCell::new(widget));
    let pending_close = Rc::new(Cell::new(false));
    let weak = Rc::downgrade(&widget);
    let pending = Rc::clone(&pending_close);
    let guard = events.on_pointer_down(move |event| {
        if event.is_within(root) {
            return;
        }
        let Some(widget) = weak.upgrade() else {
            return;
        };
        match widget.try_borrow_mut() {
            Ok(mut widget) => {
                pending.set(false);
                widget.pointer_down_outside();
            }
            Err(_) => {
                debug!(root = root.0, "outside click deferred while widget is borrowed");
                pending.set(true);
            }
        };
    });
    MountedWidget {
        widget,
        root,
        pending_close,
        _outside_click: guard,
    }
}

impl<N: Navigator + 'static> MountedWidget<N> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn widget(&self) -> Ref<'_, Autocomplete<N>> {
        self.apply_pending_close();
        self.widget.borrow()
    }

    /// Mutable access for the host.
    ///
    /// Pointer-downs dispatched while the returned handle is alive still
    /// close the widget, but only once the handle drops.
    pub fn widget_mut(&self) -> WidgetMut<'_, N> {
        self.apply_pending_close();
        WidgetMut {
            inner: self.widget.borrow_mut(),
            pending_close: &self.pending_close,
        }
    }

    /// Detach from the page, handing the widget back.
    pub fn unmount(self) -> Option<Autocomplete<N>> {
        self.apply_pending_close();
        let MountedWidget {
            widget,
            root,
            pending_close: _,
            _outside_click: listener,
        } = self;
        drop(listener);
        trace!(root = root.0, "widget unmounted");
        Rc::try_unwrap(widget).ok().map(RefCell::into_inner)
    }

    fn apply_pending_close(&self) {
        if !self.pending_close.get() {
            return;
        }
        if let Ok(mut widget) = self.widget.try_borrow_mut() {
            self.pending_close.set(false);
            widget.pointer_down_outside();
        }
    }
}

/// Mutable borrow of a mounted widget. Applies a deferred outside click on
/// drop.
pub struct WidgetMut<'a, N: Navigator> {
    inner: RefMut<'a, Autocomplete<N>>,
    pending_close: &'a Cell<bool>,
}

impl<N: Navigator> Deref for WidgetMut<'_, N> {
    type Target = Autocomplete<N>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<N: Navigator> DerefMut for WidgetMut<'_, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<N: Navigator> Drop for WidgetMut<'_, N> {
    fn drop(&mut self) {
        if self.pending_close.replace(false) {
            trace!("applying deferred outside click");
            self.inner.pointer_down_outside();
        }
    }
}
