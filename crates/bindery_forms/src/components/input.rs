//! Free-form input with suggestions
//!
//! Reserved builder: every call fails with [`BindError::NotImplemented`].

use serde::Deserialize;

use bindery_core::{BindError, BindValue, Element, Host, Lens, Result};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputOptions {
    pub available_values: Vec<String>,
}

pub fn input<H, T>(
    _label: &str,
    _host: &Host<H>,
    _lens: &Lens<H, T>,
    _options: InputOptions,
) -> Result<Element>
where
    H: Send + 'static,
    T: BindValue,
{
    Err(BindError::NotImplemented("INPUT"))
}
