//! Widget events
//!
//! The signals a renderer raises on user interaction. Binders listen for one
//! of them (the trigger) and copy the live widget value back to the host.

use std::sync::Arc;

use crate::widget::WidgetId;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 1;
    /// Continuous edit (typing, dragging)
    pub const INPUT: EventType = 2;
    /// Committed edit (blur, drag end, toggle)
    pub const CHANGE: EventType = 3;
    /// A menu closed, with or without a chosen item
    pub const CLOSED: EventType = 4;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;

    // Element lifecycle events, delivered to the widget's own listeners only
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;

    /// Human readable name, for logs
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            CLICK => "click",
            INPUT => "input",
            CHANGE => "change",
            CLOSED => "closed",
            FOCUS => "focus",
            BLUR => "blur",
            MOUNT => "mount",
            UNMOUNT => "unmount",
            _ => "unknown",
        }
    }
}

/// Dispatch phase a listener runs in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventPhase {
    /// Root to target, before the widget's own default action
    Capture,
    /// Target to root, after the default action
    #[default]
    Bubble,
}

/// Event-specific data
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    #[default]
    None,
    /// A menu closed; `item` is the chosen item's label, if any
    MenuClosed { item: Option<String> },
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Widget the interaction happened on
    pub target: WidgetId,
    /// Widget whose listener is currently running
    pub current_target: WidgetId,
    pub phase: EventPhase,
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
    /// Widget that should take focus once dispatch finishes
    pub focus_request: Option<WidgetId>,
}

impl Event {
    pub fn new(event_type: EventType, target: WidgetId) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            phase: EventPhase::Bubble,
            data: EventData::None,
            timestamp: 0,
            propagation_stopped: false,
            default_prevented: false,
            focus_request: None,
        }
    }

    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Cancel the widget's own reaction (e.g. a chip toggling itself)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Ask the renderer to move focus to `widget` after this event
    pub fn request_focus(&mut self, widget: WidgetId) {
        self.focus_request = Some(widget);
    }
}

/// Event handler function type
pub type EventHandler = Arc<dyn Fn(&mut Event) + Send + Sync>;
