//! Field labels and the required-marker convention
//!
//! A `*` anywhere in a label marks the field required. The markers are
//! stripped before display: `"Name*"` shows as `"Name"`.

use bindery_core::widget::props;
use bindery_core::{text, Element};

/// A label split into display text and required flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSpec {
    pub text: String,
    pub required: bool,
}

impl LabelSpec {
    /// Required if the label carried a marker or `force` is set
    pub fn or_required(mut self, force: bool) -> Self {
        self.required |= force;
        self
    }
}

pub fn parse_label(raw: &str) -> LabelSpec {
    LabelSpec {
        text: raw.replace('*', ""),
        required: raw.contains('*'),
    }
}

/// Text element for a field label
pub fn label(spec: &LabelSpec) -> Element {
    text(spec.text.clone()).flag(props::REQUIRED, spec.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_stripped_and_marks_required() {
        let spec = parse_label("Name*");
        assert_eq!(spec.text, "Name");
        assert!(spec.required);
    }

    #[test]
    fn test_plain_label_is_optional() {
        let spec = parse_label("Name");
        assert_eq!(spec.text, "Name");
        assert!(!spec.required);
        assert!(spec.or_required(true).required);
    }

    #[test]
    fn test_every_marker_is_stripped() {
        assert_eq!(parse_label("*E*mail*").text, "Email");
    }

    #[test]
    fn test_label_element_carries_flag() {
        let el = label(&parse_label("Age*"));
        assert_eq!(el.get_prop(props::TEXT), Some(&"Age".into()));
        assert_eq!(el.get_prop(props::REQUIRED), Some(&true.into()));
    }
}
