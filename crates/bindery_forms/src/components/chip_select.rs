//! Assist chip that opens a menu of choices
//!
//! Clicking the chip toggles its popover menu. Choosing a menu item closes
//! the menu and writes the item's label; dismissing the menu writes nothing.
//! Open/closed is tracked by a two-state machine so the chip and the menu's
//! own close agree on what is showing.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, text, Binder, BindValue, Element, Event, EventData, Host, Lens, NodeRef, Slot, StateId,
    StateMachine, Value, WidgetKind,
};

const MENU_CLOSED: StateId = 0;
const MENU_OPEN: StateId = 1;
const MENU_HISTORY: usize = 8;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChipSelectOptions {
    /// Leading icon of the chip
    pub icon: Option<String>,
    pub disabled: bool,
}

impl ChipSelectOptions {
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

fn menu_machine(menu: &NodeRef) -> StateMachine {
    let opened = menu.clone();
    let closed = menu.clone();
    StateMachine::new(MENU_CLOSED)
        .with_history_limit(MENU_HISTORY)
        .on(MENU_CLOSED, event_types::CLICK, MENU_OPEN)
        .on(MENU_OPEN, event_types::CLICK, MENU_CLOSED)
        .on(MENU_OPEN, event_types::CLOSED, MENU_CLOSED)
        .on_enter(MENU_OPEN, move || {
            opened.with_mut(|w| w.set_prop(props::OPEN, true));
        })
        .on_enter(MENU_CLOSED, move || {
            closed.with_mut(|w| w.set_prop(props::OPEN, false));
        })
}

/// Chip showing the current choice (or `label` when unset) with a menu of `choices`
pub fn chip_select<H, T, I, S>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    choices: I,
    options: ChipSelectOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let chip_ref = NodeRef::new();
    let menu_ref = NodeRef::new();
    let binder = Binder::new(host, lens)
        .slot(Slot::Prop(props::LABEL))
        .with_node_ref(&chip_ref);
    let machine = Arc::new(Mutex::new(menu_machine(&menu_ref)));

    let chip = binder
        .apply_initial(element(WidgetKind::AssistChip).prop(props::LABEL, label))
        .node_ref(&chip_ref)
        .prop_opt(props::ICON, options.icon)
        .flag(props::DISABLED, options.disabled)
        .on(event_types::CLICK, {
            let machine = Arc::clone(&machine);
            move |_: &mut Event| {
                machine
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .send(event_types::CLICK);
            }
        });

    let items: Vec<Element> = choices
        .into_iter()
        .map(|choice| {
            let choice: String = choice.into();
            element(WidgetKind::MenuItem)
                .prop(props::LABEL, choice.as_str())
                .child(text(choice).slot("headline"))
        })
        .collect();

    let menu = element(WidgetKind::Menu)
        .node_ref(&menu_ref)
        .prop(props::OPEN, false)
        .on(event_types::CLOSED, move |event| {
            machine
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .send(event_types::CLOSED);

            let EventData::MenuClosed { item: Some(item) } = &event.data else {
                return;
            };
            let chosen = Value::Text(item.clone());
            if binder.commit(&chosen) {
                binder
                    .node_ref()
                    .with_mut(|w| w.set_prop(props::LABEL, chosen));
            }
        })
        .children(items);

    element(WidgetKind::Container)
        .class("relative")
        .child(chip)
        .child(menu)
}
