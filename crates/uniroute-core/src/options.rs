//! Caller-facing navigation options

use serde_json::{Map, Value};
use std::fmt;

use uniroute_hooks::HostResult;
use uniroute_url::{ParamValue, Params};

use crate::host::Callback;

/// Options for `navigate_to`, `redirect_to`, `re_launch` and `switch_tab`
#[derive(Default)]
pub struct NavigateOptions {
    /// Target URL, optionally with an embedded query string
    pub url: String,
    /// Explicit params, merged over the URL's own
    pub params: Params,
    /// Host fields forwarded untouched
    pub extra: Map<String, Value>,
    pub success: Option<Callback>,
    pub fail: Option<Callback>,
    pub complete: Option<Callback>,
}

impl NavigateOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.success = Some(Box::new(f));
        self
    }

    pub fn on_fail<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.fail = Some(Box::new(f));
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.complete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for NavigateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateOptions")
            .field("url", &self.url)
            .field("params", &self.params)
            .field("extra", &self.extra)
            .field("success", &self.success.is_some())
            .field("fail", &self.fail.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

/// Options for `navigate_back`
#[derive(Default)]
pub struct NavigateBackOptions {
    /// Pages to go back; `None` or `0` uses the configured default
    pub delta: Option<usize>,
    pub extra: Map<String, Value>,
    pub success: Option<Callback>,
    pub fail: Option<Callback>,
    pub complete: Option<Callback>,
}

impl NavigateBackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta(mut self, delta: usize) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.success = Some(Box::new(f));
        self
    }

    pub fn on_fail<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.fail = Some(Box::new(f));
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HostResult) + Send + 'static,
    {
        self.complete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for NavigateBackOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateBackOptions")
            .field("delta", &self.delta)
            .field("extra", &self.extra)
            .field("success", &self.success.is_some())
            .field("fail", &self.fail.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}
