//! Template fragments
//!
//! Builders return a [`Fragment`]: a description of widgets, their props and
//! their listeners. A renderer turns it into live widgets; nothing here owns
//! or draws a widget.
//!
//! ```rust
//! use bindery_core::prelude::*;
//!
//! let row = element(WidgetKind::Container)
//!     .class("flex items-center gap-3")
//!     .child(text("Volume"))
//!     .child(element(WidgetKind::Slider).prop("min", 0.0).prop("max", 10.0));
//! assert_eq!(row.children_len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::{Event, EventHandler, EventPhase, EventType};
use crate::node_ref::NodeRef;
use crate::value::Value;
use crate::widget::{props, WidgetInstance, WidgetKind};

/// One-shot hook run by the renderer right after the widget exists
pub type MountHook = Arc<dyn Fn(&mut WidgetInstance) + Send + Sync>;

/// A registered event listener
#[derive(Clone)]
pub struct Listener {
    pub event_type: EventType,
    pub phase: EventPhase,
    pub handler: EventHandler,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("event_type", &self.event_type)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Description of a single widget
#[derive(Clone)]
pub struct Element {
    kind: WidgetKind,
    props: FxHashMap<&'static str, Value>,
    slot: Option<&'static str>,
    class: Option<String>,
    listeners: SmallVec<[Listener; 2]>,
    node_ref: Option<NodeRef>,
    on_mount: Option<MountHook>,
    children: Vec<Fragment>,
}

impl Element {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            props: FxHashMap::default(),
            slot: None,
            class: None,
            listeners: SmallVec::new(),
            node_ref: None,
            on_mount: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Set a prop
    pub fn prop(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.props.insert(name, value.into());
        self
    }

    /// Set a prop only when a value is given
    pub fn prop_opt<V: Into<Value>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.prop(name, v),
            None => self,
        }
    }

    /// Set a boolean attribute; `false` leaves it absent
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.props.insert(name, Value::Bool(true));
        } else {
            self.props.remove(name);
        }
        self
    }

    pub fn get_prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn props(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.props.iter().map(|(k, v)| (*k, v))
    }

    /// Place the element in a named slot of its parent
    pub fn slot(mut self, slot: &'static str) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn slot_name(&self) -> Option<&'static str> {
        self.slot
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Listen for an event in the bubble phase
    pub fn on<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        self.listeners.push(Listener {
            event_type,
            phase: EventPhase::Bubble,
            handler: Arc::new(handler),
        });
        self
    }

    /// Listen for an event in the capture phase, ahead of the target's default action
    pub fn on_capture<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        self.listeners.push(Listener {
            event_type,
            phase: EventPhase::Capture,
            handler: Arc::new(handler),
        });
        self
    }

    /// Register an already shared handler
    pub fn listener(
        mut self,
        event_type: EventType,
        phase: EventPhase,
        handler: EventHandler,
    ) -> Self {
        self.listeners.push(Listener {
            event_type,
            phase,
            handler,
        });
        self
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Attach a ref the renderer fills in on mount
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    pub fn get_node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Run `hook` once, right after the widget is created
    pub fn on_mount<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut WidgetInstance) + Send + Sync + 'static,
    {
        self.on_mount = Some(Arc::new(hook));
        self
    }

    pub fn mount_hook(&self) -> Option<&MountHook> {
        self.on_mount.as_ref()
    }

    pub fn child(mut self, child: impl Into<Fragment>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, F>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    pub fn child_fragments(&self) -> &[Fragment] {
        &self.children
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("props", &self.props)
            .field("slot", &self.slot)
            .field("listeners", &self.listeners.len())
            .field("children", &self.children)
            .finish()
    }
}

/// A renderable template description
#[derive(Clone, Debug, Default)]
pub enum Fragment {
    #[default]
    Empty,
    Text(String),
    Element(Box<Element>),
    Group(Vec<Fragment>),
}

impl Fragment {
    /// The element, when this fragment is a single element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Element(el) => Some(el.as_ref()),
            _ => None,
        }
    }

    /// Depth-first search for the first element of `kind`
    pub fn find(&self, kind: WidgetKind) -> Option<&Element> {
        match self {
            Fragment::Element(el) if el.kind == kind => Some(el.as_ref()),
            Fragment::Element(el) => el.children.iter().find_map(|c| c.find(kind)),
            Fragment::Group(items) => items.iter().find_map(|c| c.find(kind)),
            _ => None,
        }
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(Box::new(element))
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(items: Vec<Fragment>) -> Self {
        Fragment::Group(items)
    }
}

/// Describe a widget of `kind`
pub fn element(kind: WidgetKind) -> Element {
    Element::new(kind)
}

/// Describe a text element
pub fn text(content: impl Into<String>) -> Element {
    Element::new(WidgetKind::Text).prop(props::TEXT, content.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_false_removes_prop() {
        let el = element(WidgetKind::TextField)
            .flag(props::REQUIRED, true)
            .flag(props::REQUIRED, false);
        assert!(el.get_prop(props::REQUIRED).is_none());
    }

    #[test]
    fn test_find_descends_into_children() {
        let fragment: Fragment = element(WidgetKind::Container)
            .child(element(WidgetKind::ListItem).child(element(WidgetKind::Switch).slot("start")))
            .into();
        let switch = fragment.find(WidgetKind::Switch).unwrap();
        assert_eq!(switch.slot_name(), Some("start"));
        assert!(fragment.find(WidgetKind::Slider).is_none());
    }

    #[test]
    fn test_listener_phases() {
        let el = element(WidgetKind::ChipSet)
            .on_capture(crate::events::event_types::CLICK, |_| {})
            .on(crate::events::event_types::CLICK, |_| {});
        assert_eq!(el.listeners()[0].phase, EventPhase::Capture);
        assert_eq!(el.listeners()[1].phase, EventPhase::Bubble);
    }
}
