//! Text fields bound to a string (or number shown as text)
//!
//! Every keystroke (`input`) writes the live text into the host. Optional
//! extras:
//!
//! - `reset`: a trailing clear button. It runs `on_reset` when given,
//!   otherwise it empties the field and the host value and refocuses the field.
//! - `validate`: runs after each write with the live text and sets the
//!   field's error and supporting text. It never blocks the write.
//! - `on_mount`: runs once with the live widget right after it is mounted.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, Binder, BindValue, Element, Event, Host, Lens, Slot, TextCoerce, Value, WidgetInstance,
    WidgetKind,
};

use super::label::parse_label;

/// Outcome of a validation hook
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Shown as the field error; `None` clears it
    pub error: Option<String>,
    pub supporting_text: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            supporting_text: None,
        }
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self {
            error: None,
            supporting_text: Some(text.into()),
        }
    }
}

pub type ResetCallback = Arc<dyn Fn() + Send + Sync>;
pub type Validator = Arc<dyn Fn(&str) -> Validation + Send + Sync>;
pub type MountCallback = Arc<dyn Fn(&mut WidgetInstance) + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFieldVariant {
    #[default]
    Filled,
    Outlined,
}

impl TextFieldVariant {
    fn as_str(&self) -> &'static str {
        match self {
            TextFieldVariant::Filled => "filled",
            TextFieldVariant::Outlined => "outlined",
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextFieldOptions {
    /// Input type (`text`, `email`, `number`, `password`, `textarea`, ...)
    #[serde(rename = "type")]
    pub input_type: String,
    pub variant: TextFieldVariant,
    /// Required even without a `*` in the label
    pub required: bool,
    pub disabled: bool,
    /// Show a trailing clear button
    pub reset: bool,
    pub supporting_text: Option<String>,
    pub prefix_text: Option<String>,
    pub suffix_text: Option<String>,
    /// Visible rows, multi-line fields only
    pub rows: Option<u32>,
    #[serde(skip)]
    pub on_reset: Option<ResetCallback>,
    #[serde(skip)]
    pub validate: Option<Validator>,
    #[serde(skip)]
    pub on_mount: Option<MountCallback>,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            variant: TextFieldVariant::Filled,
            required: false,
            disabled: false,
            reset: false,
            supporting_text: None,
            prefix_text: None,
            suffix_text: None,
            rows: None,
            on_reset: None,
            validate: None,
            on_mount: None,
        }
    }
}

impl fmt::Debug for TextFieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldOptions")
            .field("input_type", &self.input_type)
            .field("variant", &self.variant)
            .field("required", &self.required)
            .field("reset", &self.reset)
            .field("validate", &self.validate.is_some())
            .finish_non_exhaustive()
    }
}

impl TextFieldOptions {
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn variant(mut self, variant: TextFieldVariant) -> Self {
        self.variant = variant;
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

    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    pub fn prefix_text(mut self, text: impl Into<String>) -> Self {
        self.prefix_text = Some(text.into());
        self
    }

    pub fn suffix_text(mut self, text: impl Into<String>) -> Self {
        self.suffix_text = Some(text.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Run `callback` instead of clearing when the reset button is pressed
    pub fn on_reset<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.reset = true;
        self.on_reset = Some(Arc::new(callback));
        self
    }

    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Validation + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validator));
        self
    }

    pub fn on_mount<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut WidgetInstance) + Send + Sync + 'static,
    {
        self.on_mount = Some(Arc::new(callback));
        self
    }
}

/// Single-line text field
///
/// A `*` in `label` marks the field required and is not displayed.
pub fn text_field<H, T>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: TextFieldOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let spec = parse_label(label).or_required(options.required);
    let binder = Binder::new(host, lens)
        .slot(Slot::Prop(props::VALUE))
        .transform(TextCoerce);

    let mut field = binder
        .apply_initial(element(WidgetKind::TextField))
        .node_ref(binder.node_ref())
        .prop(props::LABEL, spec.text)
        .prop(props::TYPE, options.input_type.as_str())
        .prop(props::VARIANT, options.variant.as_str())
        .flag(props::REQUIRED, spec.required)
        .flag(props::DISABLED, options.disabled)
        .prop_opt(props::SUPPORTING_TEXT, options.supporting_text)
        .prop_opt("prefix_text", options.prefix_text)
        .prop_opt("suffix_text", options.suffix_text)
        .prop_opt("rows", options.rows.map(|r| r as usize))
        .on(event_types::INPUT, {
            let binder = binder.clone();
            let validate = options.validate.clone();
            move |_: &mut Event| {
                binder.commit_live();
                if let Some(validate) = &validate {
                    apply_validation(&binder, validate);
                }
            }
        });

    if let Some(hook) = options.on_mount {
        field = field.on_mount(move |w| hook(w));
    }

    if options.reset {
        let on_reset = options.on_reset;
        field = field.child(
            element(WidgetKind::IconButton)
                .slot("trailing-icon")
                .prop(props::LABEL, "Clear")
                .child(element(WidgetKind::Icon).prop(props::ICON, "close"))
                .on(event_types::CLICK, move |event| {
                    event.stop_propagation();
                    match &on_reset {
                        Some(callback) => callback(),
                        None => clear(&binder, event),
                    }
                }),
        );
    }

    field
}

/// Multi-line text field
pub fn text_area<H, T>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: TextFieldOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    text_field(label, host, lens, options.input_type("textarea"))
}

fn apply_validation<H, T>(binder: &Binder<H, T>, validate: &Validator)
where
    H: Send + 'static,
    T: BindValue,
{
    let Some(current) = binder.read_live() else {
        return;
    };
    let outcome = validate(&current.to_display_string());
    binder.node_ref().with_mut(|w| {
        match outcome.error {
            Some(message) => {
                w.set_prop(props::ERROR, true);
                w.set_prop(props::ERROR_TEXT, message);
            }
            None => {
                w.remove_prop(props::ERROR);
                w.remove_prop(props::ERROR_TEXT);
            }
        }
        match outcome.supporting_text {
            Some(hint) => w.set_prop(props::SUPPORTING_TEXT, hint),
            None => {
                w.remove_prop(props::SUPPORTING_TEXT);
            }
        }
    });
}

/// Empty the host value and hand focus back to the field
///
/// The widget then shows whatever the host holds: a host type with no empty
/// value refuses the write and keeps its value on both sides.
fn clear<H, T>(binder: &Binder<H, T>, event: &mut Event)
where
    H: Send + 'static,
    T: BindValue,
{
    binder.commit(&Value::Text(String::new()));
    let shown = binder.initial();
    binder.node_ref().with_mut(|w| match shown {
        Some(value) => w.set_prop(props::VALUE, value),
        None => {
            w.remove_prop(props::VALUE);
        }
    });
    if let Some(field) = binder.node_ref().id() {
        event.request_focus(field);
    }
}
