//! Host-bound form builder
//!
//! [`Form`] captures the host once so each field only names its lens:
//!
//! ```rust
//! use bindery_forms::prelude::*;
//!
//! #[derive(Default)]
//! struct Profile {
//!     name: String,
//!     newsletter: bool,
//! }
//!
//! let form = Form::new(Host::new(Profile::default()));
//! let fragment = form.column([
//!     form.text_field("Name*", &lens!(Profile, name), TextFieldOptions::default()),
//!     form.switch("Newsletter", &lens!(Profile, newsletter), SwitchOptions::default()),
//! ]);
//! assert_eq!(fragment.children_len(), 2);
//! ```

use bindery_core::widget::props;
use bindery_core::{element, BindValue, Element, Host, Lens, Result, WidgetKind};

use super::checkbox::{checkbox, CheckboxOptions};
use super::chip_select::{chip_select, ChipSelectOptions};
use super::filter::{filter, FilterOptions};
use super::input::{input, InputOptions};
use super::select::{select, SelectOptions};
use super::slider::{range_slider, slider, SliderOptions};
use super::switch::{switch, SwitchOptions};
use super::text_field::{text_area, text_field, TextFieldOptions};
use super::toggle_button::{toggle_button, ToggleButtonOptions};

/// Form builder bound to one host record
pub struct Form<H> {
    host: Host<H>,
    gap: f64,
}

impl<H> Clone for Form<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            gap: self.gap,
        }
    }
}

impl<H: Send + 'static> Form<H> {
    pub fn new(host: Host<H>) -> Self {
        Self { host, gap: 12.0 }
    }

    /// Spacing between rows of [`Form::column`]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn host(&self) -> &Host<H> {
        &self.host
    }

    pub fn switch<T: BindValue>(
        &self,
        headline: &str,
        lens: &Lens<H, T>,
        options: SwitchOptions,
    ) -> Element {
        switch(headline, &self.host, lens, options)
    }

    pub fn checkbox<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: CheckboxOptions,
    ) -> Element {
        checkbox(label, &self.host, lens, options)
    }

    pub fn slider<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: SliderOptions,
    ) -> Element {
        slider(label, &self.host, lens, options)
    }

    pub fn range_slider(
        &self,
        label: &str,
        lens: &Lens<H, (f64, f64)>,
        options: SliderOptions,
    ) -> Element {
        range_slider(label, &self.host, lens, options)
    }

    pub fn select<T, I, S>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        choices: I,
        options: SelectOptions,
    ) -> Element
    where
        T: BindValue,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        select(label, &self.host, lens, choices, options)
    }

    pub fn chip_select<T, I, S>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        choices: I,
        options: ChipSelectOptions,
    ) -> Element
    where
        T: BindValue,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        chip_select(label, &self.host, lens, choices, options)
    }

    pub fn text_field<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: TextFieldOptions,
    ) -> Element {
        text_field(label, &self.host, lens, options)
    }

    pub fn text_area<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: TextFieldOptions,
    ) -> Element {
        text_area(label, &self.host, lens, options)
    }

    pub fn filter<T, I, S>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        choices: I,
        options: FilterOptions,
    ) -> Element
    where
        T: BindValue,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        filter(label, &self.host, lens, choices, options)
    }

    pub fn toggle_button<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: ToggleButtonOptions,
    ) -> Element {
        toggle_button(label, &self.host, lens, options)
    }

    pub fn input<T: BindValue>(
        &self,
        label: &str,
        lens: &Lens<H, T>,
        options: InputOptions,
    ) -> Result<Element> {
        input(label, &self.host, lens, options)
    }

    /// Stack fields vertically
    pub fn column<I>(&self, fields: I) -> Element
    where
        I: IntoIterator<Item = Element>,
    {
        element(WidgetKind::Container)
            .class("flex flex-col")
            .prop(props::GAP, self.gap)
            .children(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::{lens, HeadlessRenderer};

    #[derive(Default)]
    struct Prefs {
        dark: bool,
        zoom: f64,
        theme: String,
    }

    #[test]
    fn test_form_shares_host_between_fields() {
        let form = Form::new(Host::new(Prefs {
            theme: "light".into(),
            ..Default::default()
        }))
        .gap(8.0);

        let mut renderer = HeadlessRenderer::new();
        renderer.render(form.column([
            form.switch("Dark mode", &lens!(Prefs, dark), SwitchOptions::default()),
            form.slider(
                "Zoom",
                &lens!(Prefs, zoom),
                SliderOptions::default().range(0.5, 3.0).step(0.5),
            ),
            form.select(
                "Theme",
                &lens!(Prefs, theme),
                ["light", "dark"],
                SelectOptions::default(),
            ),
        ]));

        let row = renderer.find_one(WidgetKind::ListItem).unwrap();
        renderer.click(row).unwrap();

        let zoom = renderer.find_one(WidgetKind::Slider).unwrap();
        renderer.slide(zoom, 2.5).unwrap();

        let theme = renderer.find_one(WidgetKind::Select).unwrap();
        renderer.choose(theme, 1).unwrap();

        let prefs = form.host().read(|p| (p.dark, p.zoom, p.theme.clone()));
        assert_eq!(prefs, (true, 2.5, "dark".to_string()));
        assert_eq!(form.host().revision(), 3);
    }

    #[test]
    fn test_form_input_is_unimplemented() {
        let form = Form::new(Host::new(Prefs::default()));
        assert!(form
            .input("Theme", &lens!(Prefs, theme), InputOptions::default())
            .is_err());
    }
}
