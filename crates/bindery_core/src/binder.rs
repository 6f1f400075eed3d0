//! Bidirectional property binder
//!
//! The contract every form builder is a specialization of:
//!
//! 1. On render the widget's slot props are set to `to_widget(host[key])`.
//!    An absent host value leaves them unset so the widget shows its own
//!    default.
//! 2. When the trigger event fires, the binder reads the *live* widget through
//!    its [`NodeRef`] (not the event payload) and writes
//!    `from_widget(live value)` into the host.
//!
//! There is no validation step. A value the host type cannot hold is logged
//! and dropped.

use std::fmt;
use std::sync::Arc;

use crate::events::{Event, EventHandler, EventPhase, EventType};
use crate::fragment::Element;
use crate::host::{Host, Lens};
use crate::node_ref::NodeRef;
use crate::transform::{Identity, Transform};
use crate::value::{BindValue, Value};
use crate::widget::{props, WidgetInstance};

/// Where a widget keeps its bound value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A single prop
    Prop(&'static str),
    /// Two numeric props read as an ordered `(start, end)` pair
    Pair(&'static str, &'static str),
}

impl Slot {
    /// Read the slot from a live widget
    pub fn read(&self, widget: &WidgetInstance) -> Option<Value> {
        match *self {
            Slot::Prop(name) => widget.prop(name).cloned(),
            Slot::Pair(start, end) => {
                let a = widget.number(start)?;
                let b = widget.number(end)?;
                Some(Value::Pair(a.min(b), a.max(b)))
            }
        }
    }

    /// Write a widget value into an element description
    pub fn apply(&self, element: Element, value: Value) -> Element {
        match *self {
            Slot::Prop(name) => element.prop(name, value),
            Slot::Pair(start, end) => match value.as_pair() {
                Some((a, b)) => element.prop(start, a).prop(end, b),
                None => element,
            },
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Prop(props::VALUE)
    }
}

/// Binds one host field to one widget
pub struct Binder<H, T> {
    host: Host<H>,
    lens: Lens<H, T>,
    slot: Slot,
    transform: Arc<dyn Transform>,
    node_ref: NodeRef,
}

impl<H, T> Clone for Binder<H, T> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            lens: self.lens.clone(),
            slot: self.slot,
            transform: Arc::clone(&self.transform),
            node_ref: self.node_ref.clone(),
        }
    }
}

impl<H, T> Binder<H, T>
where
    H: Send + 'static,
    T: BindValue,
{
    pub fn new(host: &Host<H>, lens: &Lens<H, T>) -> Self {
        Self {
            host: host.clone(),
            lens: lens.clone(),
            slot: Slot::default(),
            transform: Arc::new(Identity),
            node_ref: NodeRef::new(),
        }
    }

    pub fn slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn transform(mut self, transform: impl Transform) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    /// Read the live value through an existing ref instead of a fresh one
    pub fn with_node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = node_ref.clone();
        self
    }

    pub fn node_ref(&self) -> &NodeRef {
        &self.node_ref
    }

    pub fn host(&self) -> &Host<H> {
        &self.host
    }

    pub fn lens(&self) -> &Lens<H, T> {
        &self.lens
    }

    /// Host value as the widget should display it, `None` when absent
    pub fn initial(&self) -> Option<Value> {
        self.host
            .get(&self.lens)
            .map(|v| self.transform.to_widget(&v.to_value()))
            .filter(|v| !v.is_null())
    }

    /// Set the slot props of `element` from the host
    pub fn apply_initial(&self, element: Element) -> Element {
        match self.initial() {
            Some(value) => self.slot.apply(element, value),
            None => element,
        }
    }

    /// Slot value of the live widget, `None` when it is gone or unset
    pub fn read_live(&self) -> Option<Value> {
        self.node_ref.with(|w| self.slot.read(w)).flatten()
    }

    /// Write `from_widget(widget_value)` into the host
    ///
    /// Returns whether a write happened.
    pub fn commit(&self, widget_value: &Value) -> bool {
        let host_value = self.transform.from_widget(widget_value);
        match T::from_value(&host_value) {
            Some(value) => {
                tracing::debug!(field = self.lens.name(), value = ?host_value, "commit");
                self.host.set(&self.lens, value);
                true
            }
            None => {
                tracing::warn!(
                    field = self.lens.name(),
                    value = ?host_value,
                    "widget value does not fit host field, write skipped"
                );
                false
            }
        }
    }

    /// Read the live widget and commit its value
    pub fn commit_live(&self) -> bool {
        match self.read_live() {
            Some(value) => self.commit(&value),
            None => {
                tracing::warn!(field = self.lens.name(), "bound widget unavailable, write skipped");
                false
            }
        }
    }

    /// Event handler that commits the live widget value
    pub fn listener(&self) -> EventHandler {
        let binder = self.clone();
        Arc::new(move |_event: &mut Event| {
            binder.commit_live();
        })
    }

    /// Wire `element`: initial value, ref, and a `trigger` listener
    pub fn bind(self, element: Element, trigger: EventType) -> Element {
        let listener = self.listener();
        self.apply_initial(element)
            .node_ref(&self.node_ref)
            .listener(trigger, EventPhase::Bubble, listener)
    }
}

impl<H, T> fmt::Debug for Binder<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("field", &self.lens.name())
            .field("slot", &self.slot)
            .field("node_ref", &self.node_ref)
            .finish()
    }
}
