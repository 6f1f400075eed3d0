//! Field layout - label + form control + supporting/error text.

use bindery_core::widget::props;
use bindery_core::{element, text, Element, Fragment, WidgetKind};

use super::label::{label, parse_label, LabelSpec};

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldConfig {
    pub(crate) label: LabelSpec,
    pub(crate) disabled: bool,
    pub(crate) description: Option<String>,
    pub(crate) error: Option<String>,
    gap: Option<f64>,
    children: Vec<Fragment>,
}

/// Builder for a labelled field wrapper
#[derive(Clone, Debug)]
pub struct FieldBuilder {
    pub(crate) config: FieldConfig,
}

impl FieldBuilder {
    pub fn new(label_text: &str) -> Self {
        Self {
            config: FieldConfig {
                label: parse_label(label_text),
                ..Default::default()
            },
        }
    }

    pub fn required(mut self) -> Self {
        self.config.label.required = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Error text replaces the description while set
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.config.error = Some(error.into());
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.config.gap = Some(gap);
        self
    }

    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }

    pub fn child(mut self, child: impl Into<Fragment>) -> Self {
        self.config.children.push(child.into());
        self
    }

    pub fn build(self) -> Element {
        let config = self.config;
        let container = element(WidgetKind::Container)
            .class("flex flex-col gap-2")
            .prop_opt(props::GAP, config.gap)
            .flag(props::DISABLED, config.disabled)
            .child(label(&config.label))
            .children(config.children);

        if let Some(error) = config.error {
            container.child(text(error).flag(props::ERROR, true))
        } else if let Some(description) = config.description {
            container.child(text(description).class("text-xs"))
        } else {
            container
        }
    }
}

impl From<FieldBuilder> for Fragment {
    fn from(builder: FieldBuilder) -> Self {
        builder.build().into()
    }
}

pub fn field(label_text: &str) -> FieldBuilder {
    FieldBuilder::new(label_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_sets_required_and_error() {
        let field = field("Email").required().error("Required");
        assert!(field.config.label.required);
        assert_eq!(field.config.error.as_deref(), Some("Required"));
    }

    #[test]
    fn test_field_label_marker() {
        let field = field("Email*");
        assert_eq!(field.config.label.text, "Email");
        assert!(field.config.label.required);
    }

    #[test]
    fn test_error_replaces_description() {
        let el = field("Email")
            .description("We'll never share your email.")
            .error("Invalid address")
            .child(element(WidgetKind::TextField))
            .build();

        let fragment = Fragment::from(el);
        let children = fragment.as_element().unwrap().child_fragments();
        assert_eq!(children.len(), 3);
        let last = children[2].as_element().unwrap();
        assert_eq!(last.get_prop(props::TEXT), Some(&"Invalid address".into()));
        assert_eq!(last.get_prop(props::ERROR), Some(&true.into()));
    }
}
