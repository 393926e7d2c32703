//! Host page router interface
//!
//! The facade never renders pages or resolves routes itself. It hands the
//! rewritten options to these primitives and reads the live page stack
//! through `current_pages`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use uniroute_hooks::HostResult;
use uniroute_url::Params;

/// One-shot callback the host invokes when navigation settles
pub type Callback = Box<dyn FnOnce(HostResult) + Send>;

/// An entry of the host's page stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Route without a leading `/`, e.g. `pages/index/index`
    pub route: String,
    /// Options the page was opened with
    #[serde(default)]
    pub options: Params,
}

impl PageRecord {
    pub fn new(route: impl Into<String>, options: Params) -> Self {
        Self {
            route: route.into(),
            options,
        }
    }
}

/// Options passed to the forward primitives after rewriting
pub struct HostNavigateOptions {
    pub url: String,
    /// Pass-through host fields such as `animationType`
    pub extra: Map<String, Value>,
    pub success: Callback,
    pub fail: Callback,
    pub complete: Option<Callback>,
}

/// Options passed to the back primitive
pub struct HostNavigateBackOptions {
    pub delta: usize,
    pub extra: Map<String, Value>,
    pub success: Callback,
    pub fail: Callback,
    pub complete: Option<Callback>,
}

/// The host framework's navigation primitives.
///
/// Implementations settle each call by invoking exactly one of `success` or
/// `fail`, then `complete` if present. Settlement may happen later and on
/// another thread.
pub trait NavigationHost: Send + Sync {
    fn navigate_to(&self, options: HostNavigateOptions);

    fn redirect_to(&self, options: HostNavigateOptions);

    fn re_launch(&self, options: HostNavigateOptions);

    fn switch_tab(&self, options: HostNavigateOptions);

    fn navigate_back(&self, options: HostNavigateBackOptions);

    /// Current page stack, bottom first
    fn current_pages(&self) -> Vec<PageRecord>;
}
