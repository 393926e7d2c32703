//! Params interceptor

use parking_lot::RwLock;
use std::sync::Arc;

use uniroute_url::Params;

/// Transforms merged navigation parameters before the URL is rebuilt
pub type ParamsHandler = Arc<dyn Fn(Params) -> Params + Send + Sync>;

pub fn params_handler<F>(f: F) -> ParamsHandler
where
    F: Fn(Params) -> Params + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Holds at most one active params handler. Setting a new handler replaces
/// the previous one.
#[derive(Default)]
pub struct ParamsInterceptor {
    handler: RwLock<Option<ParamsHandler>>,
}

impl ParamsInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, handler: ParamsHandler) {
        let replaced = self.handler.write().replace(handler).is_some();
        tracing::info!(replaced, "Params handler set");
    }

    pub fn clear(&self) {
        if self.handler.write().take().is_some() {
            tracing::info!("Params handler cleared");
        }
    }

    pub fn is_set(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Run the active handler, or return `params` untouched
    pub fn apply(&self, params: Params) -> Params {
        // Clone out so the handler runs without the lock held
        let handler = self.handler.read().clone();
        match handler {
            Some(handler) => handler(params),
            None => params,
        }
    }
}
