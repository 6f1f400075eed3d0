//! Error types
//!
//! Binding itself never fails: a write with the wrong shape is logged and
//! skipped. Errors come from the edges: unimplemented builders, mount waits,
//! options parsing, and interactions driven through a renderer.

use std::time::Duration;

use thiserror::Error;

use crate::widget::{WidgetId, WidgetKind};

#[derive(Debug, Error)]
pub enum BindError {
    /// The builder exists but has no implementation
    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),

    #[error("widget was not mounted within {0:?}")]
    MountTimeout(Duration),

    #[error("no mounted widget of kind {0:?}")]
    NotFound(WidgetKind),

    #[error("no mounted widget with id {0:?}")]
    UnknownWidget(WidgetId),

    #[error("widget {id:?} is a {actual:?}, expected {expected}")]
    WrongKind {
        id: WidgetId,
        actual: WidgetKind,
        expected: &'static str,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, BindError>;

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        BindError::InvalidOptions(err.to_string())
    }
}

impl From<toml::de::Error> for BindError {
    fn from(err: toml::de::Error) -> Self {
        BindError::InvalidOptions(err.to_string())
    }
}
