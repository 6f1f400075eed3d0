//! Host <-> widget value transforms
//!
//! A transform is a pair of pure functions: how a host value is shown by the
//! widget, and how the widget's value becomes a host value again. This is the
//! whole per-widget difference between builders.

use std::sync::Arc;

use crate::value::Value;

pub trait Transform: Send + Sync + 'static {
    fn to_widget(&self, host: &Value) -> Value;
    fn from_widget(&self, widget: &Value) -> Value;
}

/// Value is shown and written back unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transform for Identity {
    fn to_widget(&self, host: &Value) -> Value {
        host.clone()
    }

    fn from_widget(&self, widget: &Value) -> Value {
        widget.clone()
    }
}

/// Writes back the negation of the displayed state
///
/// Used when the trigger is a click on an inert widget: the click itself does
/// not change the widget, so the new host value is the opposite of what it
/// currently shows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Toggle;

impl Transform for Toggle {
    fn to_widget(&self, host: &Value) -> Value {
        host.clone()
    }

    fn from_widget(&self, widget: &Value) -> Value {
        match widget {
            Value::Bool(b) => Value::Bool(!b),
            // absent state displays as off
            Value::Null => Value::Bool(true),
            other => other.clone(),
        }
    }
}

/// Text widgets display numbers and flags as strings
///
/// The written value stays text; numeric host types parse it back.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCoerce;

impl Transform for TextCoerce {
    fn to_widget(&self, host: &Value) -> Value {
        match host {
            Value::Null => Value::Null,
            other => Value::Text(other.to_display_string()),
        }
    }

    fn from_widget(&self, widget: &Value) -> Value {
        widget.clone()
    }
}

/// Choice label on the host side, index into the choice list on the widget side
#[derive(Clone, Debug)]
pub struct IndexLookup {
    choices: Arc<[String]>,
}

impl IndexLookup {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Position of `label`, -1 when it is not a choice
    pub fn index_of(&self, label: &str) -> i64 {
        self.choices
            .iter()
            .position(|c| c == label)
            .map_or(-1, |i| i as i64)
    }
}

impl Transform for IndexLookup {
    fn to_widget(&self, host: &Value) -> Value {
        match host {
            Value::Text(label) => Value::Number(self.index_of(label) as f64),
            Value::Null => Value::Null,
            other => Value::Number(self.index_of(&other.to_display_string()) as f64),
        }
    }

    fn from_widget(&self, widget: &Value) -> Value {
        let Some(index) = widget.as_number() else {
            return Value::Null;
        };
        if !index.is_finite() || index < 0.0 || index.fract() != 0.0 {
            return Value::Null;
        }
        self.choices
            .get(index as usize)
            .map_or(Value::Null, |label| Value::Text(label.clone()))
    }
}
