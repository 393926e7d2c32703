//! uni-route hooks
//!
//! Lifecycle hooks layered around host navigation:
//! - before-each: cooperative guard chain, each hook calls `Next` to continue
//! - after-each: run once navigation settles
//! - fail-each: run when the host reports a failure
//!
//! Plus a single params interceptor applied to merged parameters before a
//! URL is rebuilt.

mod hook;
mod interceptor;
mod registry;

pub use hook::{
    after_hook, before_hook, fail_hook, guard, AfterHook, BeforeHook, FailHook, Guard,
    HostResult, Next,
};
pub use interceptor::{params_handler, ParamsHandler, ParamsInterceptor};
pub use registry::HookRegistry;
