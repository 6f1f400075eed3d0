//! Bindery Form Builders
//!
//! Functions that turn "a field on a host record" into a widget bound to it.
//! Each builder takes a label, the [`Host`], a [`Lens`] onto the field and an
//! options bag, and returns an [`Element`] a renderer can mount:
//!
//! - [`switch`], [`checkbox`], [`toggle_button`]: boolean fields
//! - [`slider`], [`range_slider`]: numbers and number pairs, optionally debounced
//! - [`select`], [`chip_select`]: one label out of a choice list
//! - [`filter`]: a set of chips with zero-or-more, one-or-more or only-one selection
//! - [`text_field`], [`text_area`]: text, with reset and validation hooks
//!
//! [`Form`] binds the host once and exposes every builder as a method.
//!
//! # Example
//!
//! ```rust
//! use bindery_forms::prelude::*;
//!
//! struct Prefs {
//!     fruit: String,
//! }
//!
//! let host = Host::new(Prefs { fruit: "b".into() });
//! let fruit = lens!(Prefs, fruit);
//!
//! let mut renderer = HeadlessRenderer::new();
//! renderer.render(select("Fruit", &host, &fruit, ["a", "b", "c"], SelectOptions::default()));
//!
//! let widget = renderer.find_one(WidgetKind::Select).unwrap();
//! assert_eq!(renderer.prop(widget, "selected_index"), Some(Value::Number(1.0)));
//!
//! renderer.choose(widget, 2).unwrap();
//! assert_eq!(host.read(|p| p.fruit.clone()), "c");
//! ```
//!
//! [`Host`]: bindery_core::Host
//! [`Lens`]: bindery_core::Lens
//! [`Element`]: bindery_core::Element

pub mod components;

pub use components::*;

/// Builders plus the core types needed to use them
pub mod prelude {
    pub use crate::components::checkbox::{checkbox, CheckboxOptions};
    pub use crate::components::chip_select::{chip_select, ChipSelectOptions};
    pub use crate::components::field::{field, FieldBuilder};
    pub use crate::components::filter::{filter, FilterKind, FilterMode, FilterOptions};
    pub use crate::components::form::Form;
    pub use crate::components::input::{input, InputOptions};
    pub use crate::components::label::{label, parse_label, LabelSpec};
    pub use crate::components::select::{select, SelectOptions, SelectVariant};
    pub use crate::components::slider::{range_slider, slider, SliderOptions, SliderTrigger};
    pub use crate::components::switch::{switch, SwitchOptions, SwitchTrigger};
    pub use crate::components::text_field::{
        text_area, text_field, TextFieldOptions, TextFieldVariant, Validation,
    };
    pub use crate::components::toggle_button::{toggle_button, ToggleButtonOptions};

    pub use bindery_core::lens;
    pub use bindery_core::prelude::*;
}
