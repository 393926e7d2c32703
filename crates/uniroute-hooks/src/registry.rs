//! Hook registry

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use uniroute_url::PageOptions;

use crate::hook::{AfterHook, BeforeHook, FailHook, HostResult, Next};

/// Ordered before/after/fail hook lists.
///
/// Hooks run in registration order. Running a list works on a snapshot taken
/// when the run starts, so a hook may register or remove hooks without
/// affecting the run it belongs to.
#[derive(Default)]
pub struct HookRegistry {
    before: RwLock<Vec<BeforeHook>>,
    after: RwLock<Vec<AfterHook>>,
    fail: RwLock<Vec<FailHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_before_each(&self, hook: BeforeHook) {
        self.before.write().push(hook);
    }

    /// Remove every registration of `hook`. Returns `true` if any was found.
    pub fn off_before_each(&self, hook: &BeforeHook) -> bool {
        remove_all(&self.before, hook)
    }

    pub fn on_after_each(&self, hook: AfterHook) {
        self.after.write().push(hook);
    }

    pub fn off_after_each(&self, hook: &AfterHook) -> bool {
        remove_all(&self.after, hook)
    }

    pub fn on_fail_each(&self, hook: FailHook) {
        self.fail.write().push(hook);
    }

    pub fn off_fail_each(&self, hook: &FailHook) -> bool {
        remove_all(&self.fail, hook)
    }

    pub fn before_len(&self) -> usize {
        self.before.read().len()
    }

    pub fn after_len(&self) -> usize {
        self.after.read().len()
    }

    pub fn fail_len(&self) -> usize {
        self.fail.read().len()
    }

    /// Run the before-hook chain, then `terminal` once every hook has called
    /// its `Next`. With no hooks registered `terminal` runs immediately.
    pub fn run_before<F>(&self, to: PageOptions, from: PageOptions, terminal: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let hooks: Arc<[BeforeHook]> = self.before.read().iter().cloned().collect();
        tracing::trace!(hooks = hooks.len(), to = %to.path, "Running before-each hooks");
        let terminal: Box<dyn FnOnce() + Send> = Box::new(terminal);
        let chain = Chain {
            hooks,
            to,
            from,
            terminal: Mutex::new(Some(terminal)),
        };
        run_chain(Arc::new(chain), 0);
    }

    pub fn run_after(&self, to: &PageOptions, from: &PageOptions) {
        let hooks = self.after.read().clone();
        for hook in &hooks {
            hook(to, from);
        }
    }

    pub fn run_fail(&self, result: &HostResult) {
        let hooks = self.fail.read().clone();
        for hook in &hooks {
            hook(result);
        }
    }
}

/// State shared by every link of one before-hook chain
struct Chain {
    hooks: Arc<[BeforeHook]>,
    to: PageOptions,
    from: PageOptions,
    terminal: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

const RUNNING: u8 = 0;
const PROCEEDED: u8 = 1;
const RETURNED: u8 = 2;

/// Drive the chain from `index`.
///
/// Hooks that call `Next` before returning are stepped through in this loop
/// instead of recursing, so stack depth does not grow with the hook count.
/// A `Next` called after its hook returned resumes the chain from there.
fn run_chain(chain: Arc<Chain>, mut index: usize) {
    loop {
        let Some(hook) = chain.hooks.get(index).cloned() else {
            if let Some(terminal) = chain.terminal.lock().take() {
                terminal();
            }
            return;
        };

        let state = Arc::new(AtomicU8::new(RUNNING));
        let next = {
            let chain = Arc::clone(&chain);
            let state = Arc::clone(&state);
            Next::new(move || {
                let resumed_late = state
                    .compare_exchange(RUNNING, PROCEEDED, Ordering::AcqRel, Ordering::Acquire)
                    .is_err();
                if resumed_late {
                    run_chain(chain, index + 1);
                }
            })
        };

        hook(&chain.to, &chain.from, next);

        let proceeded_in_hook = state
            .compare_exchange(RUNNING, RETURNED, Ordering::AcqRel, Ordering::Acquire)
            .is_err();
        if !proceeded_in_hook {
            return;
        }
        index += 1;
    }
}

fn remove_all<T: ?Sized>(list: &RwLock<Vec<Arc<T>>>, target: &Arc<T>) -> bool {
    let mut list = list.write();
    let before = list.len();
    list.retain(|entry| !Arc::ptr_eq(entry, target));
    list.len() < before
}
