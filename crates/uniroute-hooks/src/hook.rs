//! Hook types and the `Next` continuation

use std::fmt;
use std::sync::Arc;

use uniroute_url::PageOptions;

/// Result object the host passes to its success/fail callbacks
pub type HostResult = serde_json::Value;

/// Runs before navigation. Receives `(to, from, next)`; navigation only
/// continues once `next.proceed()` is called.
pub type BeforeHook = Arc<dyn Fn(&PageOptions, &PageOptions, Next) + Send + Sync>;

/// Runs after navigation settles with `(to, from)`
pub type AfterHook = Arc<dyn Fn(&PageOptions, &PageOptions) + Send + Sync>;

/// Runs when the host reports a navigation failure
pub type FailHook = Arc<dyn Fn(&HostResult) + Send + Sync>;

pub fn before_hook<F>(f: F) -> BeforeHook
where
    F: Fn(&PageOptions, &PageOptions, Next) + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn after_hook<F>(f: F) -> AfterHook
where
    F: Fn(&PageOptions, &PageOptions) + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn fail_hook<F>(f: F) -> FailHook
where
    F: Fn(&HostResult) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Decision of a synchronous guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Proceed,
    Halt,
}

/// Adapt a synchronous guard into a before-hook.
pub fn guard<F>(f: F) -> BeforeHook
where
    F: Fn(&PageOptions, &PageOptions) -> Guard + Send + Sync + 'static,
{
    before_hook(move |to, from, next| {
        if f(to, from) == Guard::Proceed {
            next.proceed();
        }
    })
}

/// One-shot continuation handed to each before-hook.
///
/// `Next` is `Send`, so a hook may hold it across its own asynchronous work
/// and call it later. Dropping it without calling `proceed` halts the
/// navigation.
pub struct Next {
    continuation: Option<Box<dyn FnOnce() + Send>>,
}

impl Next {
    pub(crate) fn new<F>(continuation: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            continuation: Some(Box::new(continuation)),
        }
    }

    /// Continue with the following hook, or with the navigation itself
    pub fn proceed(mut self) {
        if let Some(continuation) = self.continuation.take() {
            continuation();
        }
    }
}

impl Drop for Next {
    fn drop(&mut self) {
        if self.continuation.is_some() {
            tracing::debug!("Before hook released its continuation, navigation halted");
        }
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("pending", &self.continuation.is_some())
            .finish()
    }
}
