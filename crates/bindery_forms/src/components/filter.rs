//! Filter chip set bound to a selection
//!
//! One chip per choice. The host holds the selection either as labels
//! ([`FilterKind::String`]) or as choice indices ([`FilterKind::Number`]); a
//! list for the multi-select modes, a single value for [`FilterMode::OnlyOne`].
//!
//! A single capture-phase click listener on the chip set runs ahead of the
//! chip's own toggle. It works out which chip was hit (clicks between chips
//! are ignored), applies the mode to the current flags, cancels the chip's
//! own toggle and writes the result back to every chip. The selection written
//! to the host is then re-read from the chips, not derived from the click.

use std::sync::Arc;

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, text, Binder, BindValue, Element, Event, Host, Lens, NodeRef, Value, WidgetKind,
};

/// How the selection is stored on the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Chip labels
    #[default]
    String,
    /// Chip indices into the choice list
    Number,
}

/// Selection constraint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Chips toggle freely
    #[default]
    ZeroOrMore,
    /// Deselecting the last selected chip is refused
    OneOrMore,
    /// Clicking a chip selects it and only it
    OnlyOne,
}

impl FilterMode {
    /// Flags after clicking chip `index`, `None` when the click is refused
    pub fn apply(&self, current: &[bool], index: usize) -> Option<Vec<bool>> {
        if index >= current.len() {
            return None;
        }
        match self {
            FilterMode::OnlyOne => Some((0..current.len()).map(|i| i == index).collect()),
            FilterMode::OneOrMore
                if current[index] && current.iter().filter(|on| **on).count() == 1 =>
            {
                None
            }
            FilterMode::ZeroOrMore | FilterMode::OneOrMore => {
                let mut next = current.to_vec();
                next[index] = !next[index];
                Some(next)
            }
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    #[serde(rename = "type", alias = "kind")]
    pub kind: FilterKind,
    pub mode: FilterMode,
    pub disabled: bool,
}

impl FilterOptions {
    pub fn kind(mut self, kind: FilterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Host-side value of chip `index`
    fn wire_value(&self, index: usize, choice: &str) -> Value {
        match self.kind {
            FilterKind::String => Value::Text(choice.to_string()),
            FilterKind::Number => Value::Number(index as f64),
        }
    }
}

pub fn filter<H, T, I, S>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    choices: I,
    options: FilterOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let choices: Arc<[String]> = choices.into_iter().map(Into::into).collect();
    let binder = Binder::new(host, lens);
    let current = host.get(lens).map(|v| v.to_value()).unwrap_or_default();

    let chip_refs: Arc<[NodeRef]> = choices.iter().map(|_| NodeRef::new()).collect();
    let chips: Vec<Element> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let selected = current.includes(&options.wire_value(index, choice));
            element(WidgetKind::FilterChip)
                .node_ref(&chip_refs[index])
                .prop(props::LABEL, choice.as_str())
                .prop(props::SELECTED, selected)
                .flag(props::DISABLED, options.disabled)
        })
        .collect();

    let on_click = move |event: &mut Event| {
        let Some(index) = chip_refs.iter().position(|r| r.id() == Some(event.target)) else {
            return;
        };
        // The chip must not toggle itself; the mode decides
        event.prevent_default();

        let flags: Vec<bool> = chip_refs.iter().map(is_selected).collect();
        let Some(next) = options.mode.apply(&flags, index) else {
            tracing::debug!(field = binder.lens().name(), index, "last selected chip kept");
            return;
        };
        for (chip, on) in chip_refs.iter().zip(next) {
            chip.with_mut(|w| w.set_prop(props::SELECTED, on));
        }

        let mut selected = chip_refs
            .iter()
            .zip(choices.iter())
            .enumerate()
            .filter(|(_, (chip, _))| is_selected(chip))
            .map(|(index, (_, choice))| options.wire_value(index, choice));

        let value = match options.mode {
            FilterMode::OnlyOne => selected.next().unwrap_or_default(),
            FilterMode::ZeroOrMore | FilterMode::OneOrMore => Value::List(selected.collect()),
        };
        binder.commit(&value);
    };

    element(WidgetKind::Container)
        .child(text(label).class("mb-2"))
        .child(
            element(WidgetKind::ChipSet)
                .on_capture(event_types::CLICK, on_click)
                .children(chips),
        )
}

fn is_selected(chip: &NodeRef) -> bool {
    chip.with(|w| w.flag(props::SELECTED)).unwrap_or(false)
}
