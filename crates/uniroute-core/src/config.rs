//! Router configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RouterError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Page reported when the stack has no entry at the requested depth
    pub root_path: String,
    /// Pages to go back when `navigate_back` is called without a delta
    pub default_back_delta: usize,
    /// Fire after-each hooks (with `to == from`) on the fail path too
    pub after_each_on_fail: bool,
}

impl RouterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if !self.root_path.starts_with('/') {
            return Err(RouterError::Config(format!(
                "root_path must start with '/': {}",
                self.root_path
            )));
        }
        if self.default_back_delta == 0 {
            return Err(RouterError::Config(
                "default_back_delta must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root_path: "/".to_string(),
            default_back_delta: 1,
            after_each_on_fail: true,
        }
    }
}
