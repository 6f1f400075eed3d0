//! Checkbox bound to a boolean field

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{element, text, Binder, BindValue, Element, Host, Lens, Slot, WidgetKind};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckboxOptions {
    pub disabled: bool,
}

impl CheckboxOptions {
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A checkbox with a trailing label, committing on `change`
pub fn checkbox<H, T>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: CheckboxOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let control = Binder::new(host, lens)
        .slot(Slot::Prop(props::CHECKED))
        .bind(
            element(WidgetKind::Checkbox).prop(props::CHECKED, false),
            event_types::CHANGE,
        )
        .flag(props::DISABLED, options.disabled);

    element(WidgetKind::Container)
        .class("flex items-center gap-2")
        .child(control)
        .child(text(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::{lens, Fragment, HeadlessRenderer};

    struct Terms {
        accepted: bool,
    }

    #[test]
    fn test_checkbox_commits_on_change() {
        let host = Host::new(Terms { accepted: false });
        let mut renderer = HeadlessRenderer::new();
        renderer.render(checkbox(
            "Accept terms",
            &host,
            &lens!(Terms, accepted),
            CheckboxOptions::default(),
        ));

        let id = renderer.find_one(WidgetKind::Checkbox).unwrap();
        renderer.click(id).unwrap();
        assert!(host.read(|t| t.accepted));

        renderer.click(id).unwrap();
        assert!(!host.read(|t| t.accepted));
    }

    #[test]
    fn test_disabled_checkbox() {
        let host = Host::new(Terms { accepted: true });
        let fragment = Fragment::from(checkbox(
            "Accept terms",
            &host,
            &lens!(Terms, accepted),
            CheckboxOptions::default().disabled(true),
        ));
        let control = fragment.find(WidgetKind::Checkbox).unwrap();
        assert_eq!(control.get_prop(props::DISABLED), Some(&true.into()));
        assert_eq!(control.get_prop(props::CHECKED), Some(&true.into()));
    }
}
