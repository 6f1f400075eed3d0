//! Icon toggle button bound to a boolean field

use serde::Deserialize;

use bindery_core::events::event_types;
use bindery_core::widget::props;
use bindery_core::{element, Binder, BindValue, Element, Host, Lens, Slot, WidgetKind};

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleButtonOptions {
    /// Icon shown while off
    pub icon: String,
    /// Icon shown while on, `icon` when unset
    pub selected_icon: Option<String>,
    pub disabled: bool,
}

impl Default for ToggleButtonOptions {
    fn default() -> Self {
        Self {
            icon: "check_box_outline_blank".to_string(),
            selected_icon: Some("check_box".to_string()),
            disabled: false,
        }
    }
}

impl ToggleButtonOptions {
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn selected_icon(mut self, icon: impl Into<String>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub fn toggle_button<H, T>(
    label: &str,
    host: &Host<H>,
    lens: &Lens<H, T>,
    options: ToggleButtonOptions,
) -> Element
where
    H: Send + 'static,
    T: BindValue,
{
    let selected_icon = options.selected_icon.unwrap_or_else(|| options.icon.clone());

    Binder::new(host, lens)
        .slot(Slot::Prop(props::SELECTED))
        .bind(
            element(WidgetKind::IconButton)
                .flag(props::TOGGLE, true)
                .prop(props::SELECTED, false),
            event_types::CHANGE,
        )
        .prop(props::LABEL, label)
        .flag(props::DISABLED, options.disabled)
        .child(element(WidgetKind::Icon).prop(props::ICON, options.icon))
        .child(
            element(WidgetKind::Icon)
                .slot("selected")
                .prop(props::ICON, selected_icon),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::{lens, options_from_json, HeadlessRenderer};

    struct Editor {
        bold: bool,
    }

    #[test]
    fn test_toggle_flips_host() {
        let host = Host::new(Editor { bold: false });
        let mut renderer = HeadlessRenderer::new();
        renderer.render(toggle_button(
            "Bold",
            &host,
            &lens!(Editor, bold),
            ToggleButtonOptions::default().icon("format_bold"),
        ));

        let button = renderer.find_one(WidgetKind::IconButton).unwrap();
        renderer.click(button).unwrap();
        assert!(host.read(|e| e.bold));
    }

    #[test]
    fn test_selected_icon_defaults() {
        let options: ToggleButtonOptions =
            options_from_json(r#"{ "icon": "star", "selectedIcon": null }"#).unwrap();
        assert_eq!(options.icon, "star");
        assert_eq!(options.selected_icon, None);
        assert!(ToggleButtonOptions::default().selected_icon.is_some());
    }
}
