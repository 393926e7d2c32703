//! Navigation facade
//!
//! Wraps the host primitives with param merging, the params interceptor and
//! the before/after/fail hook lifecycle. None of the entry points return
//! errors: outcomes reach the caller only through the host's success/fail
//! callbacks, after the hooks have run.

use std::sync::Arc;

use uniroute_hooks::{
    AfterHook, BeforeHook, FailHook, HookRegistry, HostResult, ParamsHandler, ParamsInterceptor,
};
use serde_json::{Map, Value};
use uniroute_url::{get_url_info, PageOptions, ParamValue, Params};

use crate::config::RouterConfig;
use crate::host::{
    Callback, HostNavigateBackOptions, HostNavigateOptions, NavigationHost, PageRecord,
};
use crate::options::{NavigateBackOptions, NavigateOptions};
use crate::ticket::{NavigationKind, NavigationTicket};

type ForwardPrimitive = fn(&dyn NavigationHost, HostNavigateOptions);

/// Navigation entry point holding the host, hook lists and params
/// interceptor. Clones share the same hooks and interceptor.
pub struct Router {
    host: Arc<dyn NavigationHost>,
    hooks: Arc<HookRegistry>,
    interceptor: Arc<ParamsInterceptor>,
    config: Arc<RouterConfig>,
}

impl Router {
    pub fn new(host: Arc<dyn NavigationHost>) -> Self {
        Self::with_config(host, RouterConfig::default())
    }

    pub fn with_config(host: Arc<dyn NavigationHost>, config: RouterConfig) -> Self {
        Self {
            host,
            hooks: Arc::new(HookRegistry::new()),
            interceptor: Arc::new(ParamsInterceptor::new()),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    // === Hook registration ===

    pub fn on_before_each(&self, hook: BeforeHook) {
        self.hooks.on_before_each(hook);
    }

    pub fn off_before_each(&self, hook: &BeforeHook) -> bool {
        self.hooks.off_before_each(hook)
    }

    pub fn on_after_each(&self, hook: AfterHook) {
        self.hooks.on_after_each(hook);
    }

    pub fn off_after_each(&self, hook: &AfterHook) -> bool {
        self.hooks.off_after_each(hook)
    }

    #[doc(alias = "on_fall_each")]
    pub fn on_fail_each(&self, hook: FailHook) {
        self.hooks.on_fail_each(hook);
    }

    #[doc(alias = "off_fall_each")]
    pub fn off_fail_each(&self, hook: &FailHook) -> bool {
        self.hooks.off_fail_each(hook)
    }

    /// Replace the active params handler
    pub fn set_params_handler(&self, handler: ParamsHandler) {
        self.interceptor.set(handler);
    }

    pub fn clear_params_handler(&self) {
        self.interceptor.clear();
    }

    // === Page stack ===

    /// Snapshot of the page `delta` entries below the top of the host's
    /// stack. Falls back to the root page when there is no such entry.
    pub fn current_page(&self, delta: usize) -> PageOptions {
        self.page_at(&self.host.current_pages(), delta)
    }

    fn page_at(&self, pages: &[PageRecord], delta: usize) -> PageOptions {
        pages
            .len()
            .checked_sub(delta)
            .and_then(|above| above.checked_sub(1))
            .and_then(|index| pages.get(index))
            .map(|page| {
                PageOptions::new(
                    format!("/{}", page.route.trim_start_matches('/')),
                    page.options.clone(),
                )
            })
            .unwrap_or_else(|| PageOptions::from_path(self.config.root_path.clone()))
    }

    // === Facade ===

    pub fn navigate_to(&self, options: NavigateOptions) {
        self.forward(NavigationKind::NavigateTo, options, |host, options| {
            host.navigate_to(options)
        });
    }

    pub fn redirect_to(&self, options: NavigateOptions) {
        self.forward(NavigationKind::RedirectTo, options, |host, options| {
            host.redirect_to(options)
        });
    }

    pub fn re_launch(&self, options: NavigateOptions) {
        self.forward(NavigationKind::ReLaunch, options, |host, options| {
            host.re_launch(options)
        });
    }

    pub fn switch_tab(&self, options: NavigateOptions) {
        self.forward(NavigationKind::SwitchTab, options, |host, options| {
            host.switch_tab(options)
        });
    }

    pub fn navigate_back(&self, options: NavigateBackOptions) {
        let NavigateBackOptions {
            delta,
            extra,
            success,
            fail,
            complete,
        } = options;

        let delta = delta
            .filter(|delta| *delta > 0)
            .unwrap_or(self.config.default_back_delta)
            .max(1);

        let pages = self.host.current_pages();
        let to = self.page_at(&pages, delta);
        let from = self.page_at(&pages, 0);

        let ticket = NavigationTicket::new(NavigationKind::NavigateBack);
        tracing::debug!(
            navigation_id = %ticket.id,
            kind = %ticket.kind,
            delta,
            from = %from.path,
            to = %to.path,
            "Navigation requested"
        );

        let settle = Settlement::new(&self.hooks, &self.config, ticket);
        let host = Arc::clone(&self.host);
        let chain_to = to.clone();
        let chain_from = from.clone();

        self.hooks.run_before(chain_to, chain_from, move || {
            settle.dispatched();
            host.navigate_back(HostNavigateBackOptions {
                delta,
                extra,
                success: settle.success(to, from.clone(), success),
                fail: settle.fail(from, fail),
                complete,
            });
        });
    }

    fn forward(&self, kind: NavigationKind, options: NavigateOptions, primitive: ForwardPrimitive) {
        let NavigateOptions {
            url,
            params: explicit,
            extra,
            success,
            fail,
            complete,
        } = options;

        let mut extra = extra;
        if !explicit.is_empty() {
            extra.insert("params".to_string(), params_to_json(&explicit));
        }

        let info = get_url_info(&url);
        let mut params = info.params;
        params.extend(explicit);
        let params = self.interceptor.apply(params);

        let to = PageOptions::new(info.path, params);
        let url = to.to_url();
        let from = self.current_page(0);

        let ticket = NavigationTicket::new(kind);
        tracing::debug!(
            navigation_id = %ticket.id,
            kind = %ticket.kind,
            url = %url,
            from = %from.path,
            "Navigation requested"
        );

        let settle = Settlement::new(&self.hooks, &self.config, ticket);
        let host = Arc::clone(&self.host);
        let chain_to = to.clone();
        let chain_from = from.clone();

        self.hooks.run_before(chain_to, chain_from, move || {
            settle.dispatched();
            primitive(
                &*host,
                HostNavigateOptions {
                    url,
                    extra,
                    success: settle.success(to.clone(), from, success),
                    fail: settle.fail(to, fail),
                    complete,
                },
            );
        });
    }
}

/// Caller's explicit params as the JSON object the host sees under `params`
fn params_to_json(params: &Params) -> Value {
    let object: Map<String, Value> = params
        .iter()
        .map(|(key, value)| {
            let value = match value {
                ParamValue::Number(n) => Value::from(*n),
                ParamValue::Text(s) => Value::String(s.clone()),
            };
            (key.clone(), value)
        })
        .collect();
    Value::Object(object)
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            hooks: Arc::clone(&self.hooks),
            interceptor: Arc::clone(&self.interceptor),
            config: Arc::clone(&self.config),
        }
    }
}

/// Builds the callbacks handed to the host for one navigation
#[derive(Clone)]
struct Settlement {
    hooks: Arc<HookRegistry>,
    after_each_on_fail: bool,
    ticket: NavigationTicket,
}

impl Settlement {
    fn new(hooks: &Arc<HookRegistry>, config: &RouterConfig, ticket: NavigationTicket) -> Self {
        Self {
            hooks: Arc::clone(hooks),
            after_each_on_fail: config.after_each_on_fail,
            ticket,
        }
    }

    fn dispatched(&self) {
        tracing::debug!(
            navigation_id = %self.ticket.id,
            kind = %self.ticket.kind,
            "Before-each hooks passed, calling host"
        );
    }

    /// After-each with `(to, from)`, then the caller's callback
    fn success(&self, to: PageOptions, from: PageOptions, user: Option<Callback>) -> Callback {
        let settle = self.clone();
        Box::new(move |result: HostResult| {
            tracing::debug!(
                navigation_id = %settle.ticket.id,
                kind = %settle.ticket.kind,
                elapsed_ms = settle.ticket.elapsed_ms(),
                "Navigation succeeded"
            );
            settle.hooks.run_after(&to, &from);
            if let Some(user) = user {
                user(result);
            }
        })
    }

    /// Fail-each with the host result, after-each with `(page, page)`, then
    /// the caller's callback
    fn fail(&self, page: PageOptions, user: Option<Callback>) -> Callback {
        let settle = self.clone();
        Box::new(move |result: HostResult| {
            tracing::debug!(
                navigation_id = %settle.ticket.id,
                kind = %settle.ticket.kind,
                elapsed_ms = settle.ticket.elapsed_ms(),
                result = %result,
                "Navigation failed"
            );
            settle.hooks.run_fail(&result);
            if settle.after_each_on_fail {
                settle.hooks.run_after(&page, &page);
            }
            if let Some(user) = user {
                user(result);
            }
        })
    }
}
