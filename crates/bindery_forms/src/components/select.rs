//! Select bound to one label of a choice list
//!
//! The widget is index driven: it displays `choices.index_of(host value)` and
//! reports the chosen index, which is mapped back to its label before it is
//! written. A host value outside the list shows no selection.

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, text, Binder, BindValue, Element, Host, IndexLookup, Lens, Slot, WidgetKind,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectVariant {
    #[default]
    Filled,
    Outlined,
}

impl SelectVariant {
    fn as_str(&self) -> &'static str {
        match self {
            SelectVariant::Filled => "filled",
            SelectVariant::Outlined => "outlined",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectOptions {
    pub variant: SelectVariant,
    /// Skip the open/close animation
    pub quick: bool,
    pub supporting_text: Option<String>,
    pub required: bool,
    pub disabled: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            variant: SelectVariant::Filled,
            quick: true,
            supporting_text: None,
            required: false,
            disabled: false,
        }
    }
}

impl SelectOptions {
    pub fn variant(mut self, variant: SelectVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn quick(mut self, quick: bool) -> Self {
        self.quick = quick;
        self
    }

    pub fn supporting_text(mut self, supporting_text: impl Into<String>) -> Self {
        self.supporting_text = Some(supporting_text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub fn select<H, T, I, S>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    choices: I,
    options: SelectOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lookup = IndexLookup::new(choices);
    let items: Vec<Element> = lookup
        .choices()
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            element(WidgetKind::SelectOption)
                .prop(props::VALUE, index)
                .prop(props::LABEL, choice.as_str())
                .child(text(choice.as_str()).slot("headline"))
        })
        .collect();

    Binder::new(host, lens)
        .slot(Slot::Prop(props::SELECTED_INDEX))
        .transform(lookup)
        .bind(element(WidgetKind::Select), event_types::CHANGE)
        .prop(props::LABEL, label)
        .prop(props::VARIANT, options.variant.as_str())
        .flag("quick", options.quick)
        .flag(props::REQUIRED, options.required)
        .flag(props::DISABLED, options.disabled)
        .prop_opt(props::SUPPORTING_TEXT, options.supporting_text)
        .children(items)
}
