//! Switch bound to a boolean field
//!
//! By default the switch sits inert in the leading slot of a clickable list
//! row: clicking anywhere on the row writes the negation of what the switch
//! currently shows. With [`SwitchTrigger::Change`] a bare switch toggles
//! itself and its `change` event commits the new state.
//!
//! # Example
//!
//! ```rust
//! use bindery_forms::prelude::*;
//!
//! struct Settings {
//!     wifi: bool,
//! }
//!
//! let host = Host::new(Settings { wifi: false });
//! let mut renderer = HeadlessRenderer::new();
//! renderer.render(switch("Wi-Fi", &host, &lens!(Settings, wifi), SwitchOptions::default()));
//!
//! let row = renderer.find_one(WidgetKind::ListItem).unwrap();
//! renderer.click(row).unwrap();
//! assert!(host.read(|s| s.wifi));
//! ```

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{
    element, text, Binder, BindValue, Element, Host, Lens, Slot, Toggle, Transform, WidgetKind,
};

/// Event that commits a switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchTrigger {
    /// Click on the surrounding list row; the switch itself is inert
    #[default]
    Click,
    /// The switch's own `change` event
    Change,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SwitchOptions {
    pub trigger: SwitchTrigger,
    pub disabled: bool,
}

impl SwitchOptions {
    pub fn trigger(mut self, trigger: SwitchTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub fn switch<H, T>(
    headline: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: SwitchOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let binder = Binder::new(host, lens).slot(Slot::Prop(props::SELECTED));

    match options.trigger {
        SwitchTrigger::Change => binder
            .bind(
                element(WidgetKind::Switch).prop(props::SELECTED, false),
                event_types::CHANGE,
            )
            .flag(props::DISABLED, options.disabled)
            .prop(props::LABEL, headline),
        SwitchTrigger::Click => {
            let binder = binder.transform(Toggle);
            let inert = binder
                .apply_initial(element(WidgetKind::Switch).prop(props::SELECTED, false))
                .slot("start")
                .flag(props::INERT, true)
                .node_ref(binder.node_ref());

            element(WidgetKind::ListItem)
                .prop(props::TYPE, "button")
                .class("select-none cursor-pointer flex items-center gap-3")
                .flag(props::DISABLED, options.disabled)
                .on(event_types::CLICK, move |_| {
                    let Some(shown) = binder.read_live() else {
                        tracing::warn!(
                            field = binder.lens().name(),
                            "switch unavailable, click ignored"
                        );
                        return;
                    };
                    if binder.commit(&shown) {
                        // Keep the inert switch in step until the next render
                        let next = Toggle.from_widget(&shown);
                        binder.node_ref().with_mut(|w| w.set_prop(props::SELECTED, next));
                    }
                })
                .child(inert)
                .child(text(headline).slot("headline"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::{lens, options_from_json, Fragment};

    struct Flags {
        on: bool,
    }

    #[test]
    fn test_click_mode_shape() {
        let host = Host::new(Flags { on: true });
        let fragment =
            Fragment::from(switch("Dark", &host, &lens!(Flags, on), SwitchOptions::default()));

        let row = fragment.as_element().unwrap();
        assert_eq!(row.kind(), WidgetKind::ListItem);
        assert_eq!(row.listeners().len(), 1);

        let inner = fragment.find(WidgetKind::Switch).unwrap();
        assert_eq!(inner.slot_name(), Some("start"));
        assert_eq!(inner.get_prop(props::INERT), Some(&true.into()));
        assert_eq!(inner.get_prop(props::SELECTED), Some(&true.into()));
    }

    #[test]
    fn test_change_mode_is_bare_switch() {
        let host = Host::new(Flags { on: false });
        let el = switch(
            "Dark",
            &host,
            &lens!(Flags, on),
            SwitchOptions::default().trigger(SwitchTrigger::Change),
        );
        assert_eq!(el.kind(), WidgetKind::Switch);
        assert_eq!(el.listeners()[0].event_type, event_types::CHANGE);
    }

    #[test]
    fn test_options_from_json() {
        let options: SwitchOptions = options_from_json(r#"{ "trigger": "change" }"#).unwrap();
        assert_eq!(options.trigger, SwitchTrigger::Change);
        assert!(!options.disabled);
    }
}
