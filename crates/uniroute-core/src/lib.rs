//! uni-route Core
//!
//! Navigation facade over a host page router. Each of the five host
//! primitives (navigate-to, redirect, relaunch, tab-switch, back) is wrapped
//! so that:
//! 1. URL-embedded and explicit params are merged, then passed through the
//!    params interceptor
//! 2. before-each hooks run as a cooperative chain and may halt navigation
//! 3. after-each and fail-each hooks fire around the host's own callbacks

mod config;
mod error;
mod host;
mod options;
mod router;
mod ticket;

#[cfg(test)]
mod testing;

pub use config::RouterConfig;
pub use error::RouterError;
pub use host::{Callback, HostNavigateBackOptions, HostNavigateOptions, NavigationHost, PageRecord};
pub use options::{NavigateBackOptions, NavigateOptions};
pub use router::Router;
pub use ticket::{NavigationKind, NavigationTicket};

// Re-export the codec and hook building blocks
pub use uniroute_hooks::{
    after_hook, before_hook, fail_hook, guard, params_handler, AfterHook, BeforeHook, FailHook,
    Guard, HookRegistry, HostResult, Next, ParamsHandler, ParamsInterceptor,
};
pub use uniroute_url::{get_url_info, query_params, PageOptions, ParamValue, Params};

pub type Result<T> = std::result::Result<T, RouterError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
