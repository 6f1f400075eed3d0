//! Widget kinds and live widget instances

use rustc_hash::FxHashMap;
use slotmap::new_key_type;

use crate::node_ref::LiveWidget;
use crate::value::Value;

new_key_type! {
    /// Identifier of a mounted widget instance
    pub struct WidgetId;
}

/// Prop names shared by builders and renderers
pub mod props {
    pub const VALUE: &str = "value";
    pub const VALUE_START: &str = "value_start";
    pub const VALUE_END: &str = "value_end";
    pub const SELECTED: &str = "selected";
    pub const CHECKED: &str = "checked";
    pub const SELECTED_INDEX: &str = "selected_index";
    pub const LABEL: &str = "label";
    pub const TEXT: &str = "text";
    pub const REQUIRED: &str = "required";
    pub const DISABLED: &str = "disabled";
    pub const INERT: &str = "inert";
    pub const ERROR: &str = "error";
    pub const ERROR_TEXT: &str = "error_text";
    pub const SUPPORTING_TEXT: &str = "supporting_text";
    pub const FOCUSED: &str = "focused";
    pub const OPEN: &str = "open";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const STEP: &str = "step";
    pub const RANGE: &str = "range";
    pub const TICKS: &str = "ticks";
    pub const LABELED: &str = "labeled";
    pub const TYPE: &str = "type";
    pub const VARIANT: &str = "variant";
    pub const TOGGLE: &str = "toggle";
    pub const ICON: &str = "icon";
    pub const GAP: &str = "gap";
}

/// The visual controls supplied by the component library
///
/// Bindery never renders these itself; a renderer maps each kind to a
/// concrete widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Layout container without behavior
    Container,
    /// Plain text node
    Text,
    /// Clickable list row hosting other widgets in slots
    ListItem,
    Switch,
    Checkbox,
    Slider,
    Select,
    SelectOption,
    /// Anchor chip that opens a menu
    AssistChip,
    Menu,
    MenuItem,
    TextField,
    IconButton,
    Icon,
    ChipSet,
    FilterChip,
}

/// Live state of one widget, owned by the renderer
#[derive(Debug)]
pub struct WidgetInstance {
    id: WidgetId,
    kind: WidgetKind,
    props: FxHashMap<&'static str, Value>,
    children: Vec<LiveWidget>,
}

impl WidgetInstance {
    pub fn new(id: WidgetId, kind: WidgetKind) -> Self {
        Self {
            id,
            kind,
            props: FxHashMap::default(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn set_prop(&mut self, name: &'static str, value: impl Into<Value>) {
        self.props.insert(name, value.into());
    }

    pub fn remove_prop(&mut self, name: &str) -> Option<Value> {
        self.props.remove(name)
    }

    /// Boolean prop, `false` when absent
    pub fn flag(&self, name: &str) -> bool {
        self.prop(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.prop(name).and_then(Value::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.prop(name).and_then(Value::as_text)
    }

    pub fn props(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.props.iter().map(|(k, v)| (*k, v))
    }

    pub fn children(&self) -> &[LiveWidget] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: LiveWidget) {
        self.children.push(child);
    }
}
