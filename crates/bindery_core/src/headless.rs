//! Headless rendering for testing
//!
//! A reference renderer that turns [`Fragment`]s into live widget instances
//! without drawing anything, useful for:
//! - Unit and integration testing of builders
//! - Demos and CI runs without a display
//!
//! It also plays the user: interaction methods mutate a widget the way the
//! component library's widgets do and raise the same events. Dispatch runs
//! capture listeners (root to target), then the widget's default action unless
//! it was prevented, then bubble listeners (target to root), then any
//! follow-up `input`/`change` events the default action produced.

use std::sync::{Arc, Mutex};

use smallvec::SmallVec;
use slotmap::SlotMap;

use crate::error::{BindError, Result};
use crate::events::{event_types, Event, EventData, EventHandler, EventPhase, EventType};
use crate::fragment::{Element, Fragment, Listener, MountHook};
use crate::node_ref::{lock_widget, LiveWidget, NodeRef};
use crate::value::Value;
use crate::widget::{props, WidgetId, WidgetInstance, WidgetKind};

struct MountedNode {
    widget: LiveWidget,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    listeners: SmallVec<[Listener; 2]>,
    node_ref: Option<NodeRef>,
}

/// Renderer that keeps live widgets in memory
#[derive(Default)]
pub struct HeadlessRenderer {
    nodes: SlotMap<WidgetId, MountedNode>,
    /// Mounted ids in tree order
    order: Vec<WidgetId>,
    frame_count: u64,
    timestamp: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is mounted with `fragment`
    ///
    /// All previous widget instances are dropped, so refs into the old tree
    /// stop resolving. Mount hooks run once each, after the whole tree exists.
    pub fn render(&mut self, fragment: impl Into<Fragment>) {
        self.unmount();

        let fragment = fragment.into();
        let mut hooks = Vec::new();
        self.mount_fragment(&fragment, None, &mut hooks);

        for (widget, hook) in hooks {
            hook(&mut lock_widget(&widget));
        }
        for id in self.order.clone() {
            self.notify(event_types::MOUNT, id);
        }

        self.frame_count += 1;
        tracing::trace!(frame = self.frame_count, widgets = self.order.len(), "rendered");
    }

    /// Drop every mounted widget
    pub fn unmount(&mut self) {
        let mounted: Vec<WidgetId> = self.order.iter().rev().copied().collect();
        for id in mounted {
            self.notify(event_types::UNMOUNT, id);
        }
        for node in self.nodes.values() {
            if let Some(node_ref) = &node.node_ref {
                node_ref.detach();
            }
        }
        self.nodes.clear();
        self.order.clear();
    }

    /// Number of completed renders
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of mounted widgets
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn mount_fragment(
        &mut self,
        fragment: &Fragment,
        parent: Option<WidgetId>,
        hooks: &mut Vec<(LiveWidget, MountHook)>,
    ) {
        match fragment {
            Fragment::Empty => {}
            Fragment::Text(content) => {
                let el = Element::new(WidgetKind::Text).prop(props::TEXT, content.as_str());
                self.mount_element(&el, parent, hooks);
            }
            Fragment::Element(el) => self.mount_element(el, parent, hooks),
            Fragment::Group(items) => {
                for item in items {
                    self.mount_fragment(item, parent, hooks);
                }
            }
        }
    }

    fn mount_element(
        &mut self,
        el: &Element,
        parent: Option<WidgetId>,
        hooks: &mut Vec<(LiveWidget, MountHook)>,
    ) {
        let id = self.nodes.insert_with_key(|id| {
            let mut instance = WidgetInstance::new(id, el.kind());
            for (name, value) in el.props() {
                instance.set_prop(name, value.clone());
            }
            if let Some(slot) = el.slot_name() {
                instance.set_prop("slot", slot);
            }
            if let Some(class) = el.class_name() {
                instance.set_prop("class", class);
            }
            MountedNode {
                widget: Arc::new(Mutex::new(instance)),
                parent,
                children: Vec::new(),
                listeners: el.listeners().iter().cloned().collect(),
                node_ref: el.get_node_ref().cloned(),
            }
        });
        self.order.push(id);

        let widget = Arc::clone(&self.nodes[id].widget);
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                parent_node.children.push(id);
                lock_widget(&parent_node.widget).push_child(Arc::clone(&widget));
            }
        }
        if let Some(node_ref) = el.get_node_ref() {
            node_ref.attach(&widget);
        }
        if let Some(hook) = el.mount_hook() {
            hooks.push((Arc::clone(&widget), Arc::clone(hook)));
        }

        for child in el.child_fragments() {
            self.mount_fragment(child, Some(id), hooks);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Mounted widgets of `kind`, in tree order
    pub fn find(&self, kind: WidgetKind) -> Vec<WidgetId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.kind_of(*id) == Some(kind))
            .collect()
    }

    pub fn find_one(&self, kind: WidgetKind) -> Option<WidgetId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.kind_of(*id) == Some(kind))
    }

    /// Like [`find_one`](Self::find_one), but a missing widget is an error
    pub fn require(&self, kind: WidgetKind) -> Result<WidgetId> {
        self.find_one(kind).ok_or(BindError::NotFound(kind))
    }

    /// First text node showing exactly `content`
    pub fn find_text(&self, content: &str) -> Option<WidgetId> {
        self.order.iter().copied().find(|id| {
            self.kind_of(*id) == Some(WidgetKind::Text)
                && self.prop(*id, props::TEXT).as_ref().and_then(Value::as_text) == Some(content)
        })
    }

    pub fn kind_of(&self, id: WidgetId) -> Option<WidgetKind> {
        self.nodes.get(id).map(|n| lock_widget(&n.widget).kind())
    }

    pub fn widget(&self, id: WidgetId) -> Option<LiveWidget> {
        self.nodes.get(id).map(|n| Arc::clone(&n.widget))
    }

    pub fn prop(&self, id: WidgetId, name: &str) -> Option<Value> {
        self.nodes
            .get(id)
            .and_then(|n| lock_widget(&n.widget).prop(name).cloned())
    }

    /// Boolean prop, `false` when absent
    pub fn flag(&self, id: WidgetId, name: &str) -> bool {
        self.prop(id, name).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    pub fn children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Concatenated text of all text nodes under `id`
    pub fn text_content(&self, id: WidgetId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: WidgetId, out: &mut String) {
        if let Some(Value::Text(t)) = self.prop(id, props::TEXT) {
            out.push_str(&t);
        }
        for child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// Kinds and sorted props of every widget, in tree order
    pub fn snapshot(&self) -> Vec<(WidgetKind, Vec<(&'static str, Value)>)> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(*id))
            .map(|node| {
                let widget = lock_widget(&node.widget);
                let mut props: Vec<_> = widget.props().map(|(k, v)| (k, v.clone())).collect();
                props.sort_by(|a, b| a.0.cmp(b.0));
                (widget.kind(), props)
            })
            .collect()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatch `event` through capture and bubble listeners
    pub fn dispatch(&mut self, mut event: Event) -> Result<Event> {
        let path = self.path_to(event.target)?;
        self.run_phase(&path, &mut event, EventPhase::Capture);
        if !event.propagation_stopped {
            self.run_phase(&path, &mut event, EventPhase::Bubble);
        }
        self.settle(&event)?;
        Ok(event)
    }

    /// Apply requests listeners left on a finished event
    fn settle(&mut self, event: &Event) -> Result<()> {
        match event.focus_request {
            Some(id) if self.focused() != Some(id) => self.focus(id),
            _ => Ok(()),
        }
    }

    /// Run the target's own listeners for a lifecycle event, without propagation
    fn notify(&mut self, event_type: EventType, id: WidgetId) {
        let mut event = self.new_event(event_type, id);
        self.run_phase(&[id], &mut event, EventPhase::Capture);
        if !event.propagation_stopped {
            self.run_phase(&[id], &mut event, EventPhase::Bubble);
        }
    }

    fn new_event(&mut self, event_type: EventType, target: WidgetId) -> Event {
        self.timestamp += 1;
        let mut event = Event::new(event_type, target);
        event.timestamp = self.timestamp;
        event
    }

    fn fire(&mut self, event_type: EventType, target: WidgetId) -> Result<Event> {
        let event = self.new_event(event_type, target);
        self.dispatch(event)
    }

    /// Root-to-target list of ids
    fn path_to(&self, target: WidgetId) -> Result<Vec<WidgetId>> {
        if !self.nodes.contains_key(target) {
            return Err(BindError::UnknownWidget(target));
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.nodes.get(current).and_then(|n| n.parent) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }

    fn handlers(
        &self,
        id: WidgetId,
        event_type: EventType,
        phase: EventPhase,
    ) -> Vec<EventHandler> {
        self.nodes
            .get(id)
            .map(|n| {
                n.listeners
                    .iter()
                    .filter(|l| l.event_type == event_type && l.phase == phase)
                    .map(|l| Arc::clone(&l.handler))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn run_phase(&self, path: &[WidgetId], event: &mut Event, phase: EventPhase) {
        let ids: Vec<WidgetId> = match phase {
            EventPhase::Capture => path.to_vec(),
            EventPhase::Bubble => path.iter().rev().copied().collect(),
        };
        event.phase = phase;

        for id in ids {
            for handler in self.handlers(id, event.event_type, phase) {
                event.current_target = id;
                tracing::trace!(
                    target_id = ?event.target,
                    current = ?id,
                    event = event_types::name(event.event_type),
                    ?phase,
                    "dispatch"
                );
                handler(event);
                if event.propagation_stopped {
                    return;
                }
            }
        }
    }

    // =========================================================================
    // Interactions
    // =========================================================================

    fn expect_kind(
        &self,
        id: WidgetId,
        kinds: &[WidgetKind],
        expected: &'static str,
    ) -> Result<LiveWidget> {
        let widget = self.widget(id).ok_or(BindError::UnknownWidget(id))?;
        let actual = lock_widget(&widget).kind();
        if kinds.contains(&actual) {
            Ok(widget)
        } else {
            Err(BindError::WrongKind {
                id,
                actual,
                expected,
            })
        }
    }

    /// Click a widget
    ///
    /// Disabled widgets ignore clicks entirely.
    pub fn click(&mut self, id: WidgetId) -> Result<()> {
        let widget = self.widget(id).ok_or(BindError::UnknownWidget(id))?;
        if lock_widget(&widget).flag(props::DISABLED) {
            return Ok(());
        }

        let path = self.path_to(id)?;
        let mut event = self.new_event(event_types::CLICK, id);
        self.run_phase(&path, &mut event, EventPhase::Capture);

        let follow_up = if event.default_prevented {
            false
        } else {
            activate(&mut lock_widget(&widget))
        };

        if !event.propagation_stopped {
            self.run_phase(&path, &mut event, EventPhase::Bubble);
        }
        self.settle(&event)?;
        if follow_up {
            self.fire(event_types::INPUT, id)?;
            self.fire(event_types::CHANGE, id)?;
        }
        Ok(())
    }

    /// Replace a text field's content, raising `input`
    pub fn type_text(&mut self, id: WidgetId, content: &str) -> Result<()> {
        let widget = self.expect_kind(id, &[WidgetKind::TextField], "a text field")?;
        lock_widget(&widget).set_prop(props::VALUE, content);
        self.fire(event_types::INPUT, id)?;
        Ok(())
    }

    /// Commit a text field's content (blur), raising `change`
    pub fn commit_text(&mut self, id: WidgetId) -> Result<()> {
        self.expect_kind(id, &[WidgetKind::TextField], "a text field")?;
        self.fire(event_types::CHANGE, id)?;
        self.fire(event_types::BLUR, id)?;
        Ok(())
    }

    /// Drag a single-value slider to `value`, raising `input`
    pub fn slide(&mut self, id: WidgetId, value: f64) -> Result<()> {
        let widget = self.expect_kind(id, &[WidgetKind::Slider], "a slider")?;
        {
            let mut w = lock_widget(&widget);
            let value = clamp_to_bounds(&w, value);
            w.set_prop(props::VALUE, value);
        }
        self.fire(event_types::INPUT, id)?;
        Ok(())
    }

    /// Drag both handles of a range slider, raising `input`
    ///
    /// Handles may cross; the slider reports whatever positions they hold.
    pub fn slide_range(&mut self, id: WidgetId, start: f64, end: f64) -> Result<()> {
        let widget = self.expect_kind(id, &[WidgetKind::Slider], "a slider")?;
        {
            let mut w = lock_widget(&widget);
            let start = clamp_to_bounds(&w, start);
            let end = clamp_to_bounds(&w, end);
            w.set_prop(props::VALUE_START, start);
            w.set_prop(props::VALUE_END, end);
        }
        self.fire(event_types::INPUT, id)?;
        Ok(())
    }

    /// End a slider drag, raising `change`
    pub fn release(&mut self, id: WidgetId) -> Result<()> {
        self.expect_kind(id, &[WidgetKind::Slider], "a slider")?;
        self.fire(event_types::CHANGE, id)?;
        Ok(())
    }

    /// Pick option `index` of a select, raising `input` and `change`
    pub fn choose(&mut self, id: WidgetId, index: usize) -> Result<()> {
        let widget = self.expect_kind(id, &[WidgetKind::Select], "a select")?;
        let option_value = self
            .children(id)
            .into_iter()
            .filter(|c| self.kind_of(*c) == Some(WidgetKind::SelectOption))
            .nth(index)
            .and_then(|c| self.prop(c, props::VALUE));
        {
            let mut w = lock_widget(&widget);
            w.set_prop(props::SELECTED_INDEX, index);
            w.set_prop(props::VALUE, option_value.unwrap_or(Value::Number(index as f64)));
        }
        self.fire(event_types::INPUT, id)?;
        self.fire(event_types::CHANGE, id)?;
        Ok(())
    }

    /// Choose item `index` of an open menu, closing it
    pub fn choose_menu_item(&mut self, menu: WidgetId, index: usize) -> Result<()> {
        let widget = self.expect_kind(menu, &[WidgetKind::Menu], "a menu")?;
        let item = self
            .children(menu)
            .into_iter()
            .filter(|c| self.kind_of(*c) == Some(WidgetKind::MenuItem))
            .nth(index)
            .map(|c| match self.prop(c, props::LABEL) {
                Some(Value::Text(label)) => label,
                _ => self.text_content(c),
            });
        lock_widget(&widget).set_prop(props::OPEN, false);

        let event = self
            .new_event(event_types::CLOSED, menu)
            .with_data(EventData::MenuClosed { item });
        self.dispatch(event)?;
        Ok(())
    }

    /// Close a menu without choosing anything
    pub fn dismiss_menu(&mut self, menu: WidgetId) -> Result<()> {
        let widget = self.expect_kind(menu, &[WidgetKind::Menu], "a menu")?;
        lock_widget(&widget).set_prop(props::OPEN, false);
        let event = self
            .new_event(event_types::CLOSED, menu)
            .with_data(EventData::MenuClosed { item: None });
        self.dispatch(event)?;
        Ok(())
    }

    /// Move focus to `id`
    pub fn focus(&mut self, id: WidgetId) -> Result<()> {
        let widget = self.widget(id).ok_or(BindError::UnknownWidget(id))?;
        for node in self.nodes.values() {
            lock_widget(&node.widget).remove_prop(props::FOCUSED);
        }
        lock_widget(&widget).set_prop(props::FOCUSED, true);
        self.fire(event_types::FOCUS, id)?;
        Ok(())
    }

    /// Widget currently holding focus
    pub fn focused(&self) -> Option<WidgetId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.flag(*id, props::FOCUSED))
    }
}

/// The widget's own reaction to a click; returns whether its value changed
fn activate(widget: &mut WidgetInstance) -> bool {
    match widget.kind() {
        WidgetKind::Switch if !widget.flag(props::INERT) => {
            let on = widget.flag(props::SELECTED);
            widget.set_prop(props::SELECTED, !on);
            true
        }
        WidgetKind::Checkbox => {
            let on = widget.flag(props::CHECKED);
            widget.set_prop(props::CHECKED, !on);
            true
        }
        WidgetKind::IconButton if widget.flag(props::TOGGLE) => {
            let on = widget.flag(props::SELECTED);
            widget.set_prop(props::SELECTED, !on);
            true
        }
        WidgetKind::FilterChip => {
            let on = widget.flag(props::SELECTED);
            widget.set_prop(props::SELECTED, !on);
            false
        }
        _ => false,
    }
}

fn clamp_to_bounds(widget: &WidgetInstance, value: f64) -> f64 {
    let min = widget.number(props::MIN).unwrap_or(f64::NEG_INFINITY);
    let max = widget.number(props::MAX).unwrap_or(f64::INFINITY);
    if min <= max {
        value.clamp(min, max)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{element, text};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_render_mounts_tree_in_order() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(
            element(WidgetKind::Container)
                .child(text("Volume"))
                .child(element(WidgetKind::Slider).prop(props::MAX, 10.0)),
        );

        assert_eq!(renderer.len(), 3);
        let slider = renderer.find_one(WidgetKind::Slider).unwrap();
        let container = renderer.parent(slider).unwrap();
        assert_eq!(renderer.kind_of(container), Some(WidgetKind::Container));
        assert_eq!(renderer.text_content(container), "Volume");
    }

    #[test]
    fn test_lifecycle_events_reach_only_their_widget() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let container_log = Arc::clone(&log);
        let field_mounts = Arc::clone(&log);
        let field_unmounts = Arc::clone(&log);
        let build = move || {
            let container_log = Arc::clone(&container_log);
            let field_mounts = Arc::clone(&field_mounts);
            let field_unmounts = Arc::clone(&field_unmounts);
            element(WidgetKind::Container)
                .on(event_types::MOUNT, move |_| {
                    container_log.lock().unwrap().push("container mounted")
                })
                .child(
                    element(WidgetKind::TextField)
                        .on(event_types::MOUNT, move |_| {
                            field_mounts.lock().unwrap().push("field mounted")
                        })
                        .on(event_types::UNMOUNT, move |_| {
                            field_unmounts.lock().unwrap().push("field unmounted")
                        }),
                )
        };

        let mut renderer = HeadlessRenderer::new();
        renderer.render(build());
        assert_eq!(*log.lock().unwrap(), vec!["container mounted", "field mounted"]);

        renderer.render(build());
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "container mounted",
                "field mounted",
                "field unmounted",
                "container mounted",
                "field mounted",
            ]
        );
    }

    #[test]
    fn test_focus_request_moves_focus() {
        let mut renderer = HeadlessRenderer::new();
        let target = NodeRef::new();
        let reader = target.clone();
        renderer.render(
            element(WidgetKind::Container)
                .child(element(WidgetKind::TextField))
                .child(element(WidgetKind::TextField).node_ref(&target))
                .child(element(WidgetKind::IconButton).on(event_types::CLICK, move |e| {
                    if let Some(id) = reader.id() {
                        e.request_focus(id);
                    }
                })),
        );
        let fields = renderer.find(WidgetKind::TextField);
        renderer.focus(fields[0]).unwrap();

        let button = renderer.require(WidgetKind::IconButton).unwrap();
        renderer.click(button).unwrap();

        assert_eq!(renderer.focused(), Some(fields[1]));
        assert!(!renderer.flag(fields[0], props::FOCUSED));
    }

    #[test]
    fn test_require_missing_kind() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(element(WidgetKind::Checkbox));
        assert!(matches!(
            renderer.require(WidgetKind::Slider),
            Err(BindError::NotFound(WidgetKind::Slider))
        ));
    }

    #[test]
    fn test_rerender_kills_old_refs() {
        let node_ref = NodeRef::new();
        let mut renderer = HeadlessRenderer::new();
        renderer.render(element(WidgetKind::Switch).node_ref(&node_ref));
        assert!(node_ref.is_attached());

        renderer.render(element(WidgetKind::Checkbox));
        assert!(!node_ref.is_attached());
    }

    #[test]
    fn test_mount_hook_runs_once_per_mount() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut renderer = HeadlessRenderer::new();
        renderer.render(element(WidgetKind::TextField).on_mount(move |w| {
            counter.fetch_add(1, Ordering::SeqCst);
            w.set_prop(props::SUPPORTING_TEXT, "ready");
        }));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let field = renderer.find_one(WidgetKind::TextField).unwrap();
        assert_eq!(renderer.prop(field, props::SUPPORTING_TEXT), Some("ready".into()));
    }

    #[test]
    fn test_capture_runs_before_default_and_can_prevent_it() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(
            element(WidgetKind::ChipSet)
                .on_capture(event_types::CLICK, |e| e.prevent_default())
                .child(element(WidgetKind::FilterChip).prop(props::LABEL, "a")),
        );

        let chip = renderer.find_one(WidgetKind::FilterChip).unwrap();
        renderer.click(chip).unwrap();
        assert!(!renderer.flag(chip, props::SELECTED));
    }

    #[test]
    fn test_bubble_sees_default_action() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let chip_ref = NodeRef::new();
        let reader = chip_ref.clone();
        let mut renderer = HeadlessRenderer::new();
        renderer.render(
            element(WidgetKind::ChipSet)
                .on(event_types::CLICK, move |_| {
                    *sink.lock().unwrap() = reader.with(|w| w.flag(props::SELECTED));
                })
                .child(element(WidgetKind::FilterChip).node_ref(&chip_ref)),
        );

        let chip = renderer.find_one(WidgetKind::FilterChip).unwrap();
        renderer.click(chip).unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(element(WidgetKind::Checkbox).flag(props::DISABLED, true));
        let checkbox = renderer.find_one(WidgetKind::Checkbox).unwrap();
        renderer.click(checkbox).unwrap();
        assert!(!renderer.flag(checkbox, props::CHECKED));
    }

    #[test]
    fn test_wrong_kind_is_an_error() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(element(WidgetKind::Checkbox));
        let checkbox = renderer.find_one(WidgetKind::Checkbox).unwrap();
        assert!(matches!(
            renderer.slide(checkbox, 1.0),
            Err(BindError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_slide_clamps_to_bounds() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render(
            element(WidgetKind::Slider)
                .prop(props::MIN, 0.0)
                .prop(props::MAX, 10.0),
        );
        let slider = renderer.find_one(WidgetKind::Slider).unwrap();
        renderer.slide(slider, 42.0).unwrap();
        assert_eq!(renderer.prop(slider, props::VALUE), Some(Value::Number(10.0)));
    }
}
