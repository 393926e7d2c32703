//! Navigation endpoints

use serde::{Deserialize, Serialize};

use crate::params::{ParamValue, Params};
use crate::query::query_params;

/// A navigation target or origin: a page path plus its parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageOptions {
    pub path: String,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl PageOptions {
    pub fn new(path: impl Into<String>, params: Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// A page with no parameters
    pub fn from_path(path: impl Into<String>) -> Self {
        Self::new(path, Params::new())
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Path joined with the serialized query string
    pub fn to_url(&self) -> String {
        format!("{}{}", self.path, query_params(&self.params))
    }
}
