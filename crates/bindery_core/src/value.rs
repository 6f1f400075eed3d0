//! Widget-side values
//!
//! Widgets speak a small dynamic vocabulary ([`Value`]); host properties are
//! statically typed. [`BindValue`] converts between the two. A conversion that
//! fails is a shape mismatch between the host property and the widget it was
//! bound to.

use serde::{Deserialize, Serialize};

/// A value as displayed by, or read back from, a widget
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value; the widget shows its built-in default
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Two live positions (range sliders)
    Pair(f64, f64),
    List(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Value::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is, or contains, `needle`
    ///
    /// Scalars compare by equality, lists by membership.
    pub fn includes(&self, needle: &Value) -> bool {
        match self {
            Value::List(items) => items.iter().any(|item| item == needle),
            Value::Null => false,
            other => other == needle,
        }
    }

    /// Render the value the way a text field displays it
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::Pair(a, b) => format!("{}, {}", format_number(*a), format_number(*b)),
            Value::List(items) => items
                .iter()
                .map(Value::to_display_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Integral numbers print without a trailing `.0`
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Conversion between a host property type and a widget [`Value`]
pub trait BindValue: Clone + Send + Sync + 'static {
    fn to_value(&self) -> Value;

    /// `None` when the widget value has the wrong shape for this type
    fn from_value(value: &Value) -> Option<Self>;
}

impl BindValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl BindValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            Value::Number(_) | Value::Bool(_) => Some(value.to_display_string()),
            _ => None,
        }
    }
}

macro_rules! impl_bind_float {
    ($($ty:ty),*) => {
        $(
            impl BindValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(*self as f64)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => Some(*n as $ty),
                        Value::Text(s) => s.trim().parse().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_bind_int {
    ($($ty:ty),*) => {
        $(
            impl BindValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(*self as f64)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) if n.is_finite() => {
                            let rounded = n.round();
                            if rounded < <$ty>::MIN as f64 || rounded > <$ty>::MAX as f64 {
                                None
                            } else {
                                Some(rounded as $ty)
                            }
                        }
                        Value::Text(s) => s.trim().parse().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_bind_float!(f32, f64);
impl_bind_int!(i32, i64, u32, u64, usize);

impl BindValue for (f64, f64) {
    fn to_value(&self) -> Value {
        Value::Pair(self.0, self.1)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Pair(a, b) => Some((*a, *b)),
            Value::List(items) if items.len() == 2 => {
                Some((items[0].as_number()?, items[1].as_number()?))
            }
            _ => None,
        }
    }
}

impl<T> BindValue for Vec<T>
where
    T: BindValue,
{
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(BindValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            Value::Null => Some(Vec::new()),
            _ => None,
        }
    }
}

impl<T> BindValue for Option<T>
where
    T: BindValue,
{
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}
