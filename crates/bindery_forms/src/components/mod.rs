//! Bound form components
//!
//! One module per builder. Every builder is the same binder contract with a
//! different widget, transform and trigger event.

pub mod checkbox;
pub mod chip_select;
pub mod field;
pub mod filter;
pub mod form;
pub mod input;
pub mod label;
pub mod select;
pub mod slider;
pub mod switch;
pub mod text_field;
pub mod toggle_button;

pub use checkbox::{checkbox, CheckboxOptions};
pub use chip_select::{chip_select, ChipSelectOptions};
pub use field::{field, FieldBuilder};
pub use filter::{filter, FilterKind, FilterMode, FilterOptions};
pub use form::Form;
pub use input::{input, InputOptions};
pub use label::{label, parse_label, LabelSpec};
pub use select::{select, SelectOptions, SelectVariant};
pub use slider::{range_slider, slider, SliderOptions, SliderTrigger};
pub use switch::{switch, SwitchOptions, SwitchTrigger};
pub use text_field::{text_area, text_field, TextFieldOptions, TextFieldVariant, Validation};
pub use toggle_button::{toggle_button, ToggleButtonOptions};
