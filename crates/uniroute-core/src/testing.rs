//! In-memory host used by the facade tests.
//!
//! Calls are queued instead of settled immediately, so tests decide when and
//! how each navigation completes. A successful settlement updates the page
//! stack the way the real host would.

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::VecDeque;

use uniroute_hooks::HostResult;
use uniroute_url::get_url_info;

use crate::host::{
    Callback, HostNavigateBackOptions, HostNavigateOptions, NavigationHost, PageRecord,
};
use crate::ticket::NavigationKind;

struct Dispatch {
    kind: NavigationKind,
    url: Option<String>,
    delta: Option<usize>,
    extra: Map<String, Value>,
}

struct Pending {
    kind: NavigationKind,
    url: Option<String>,
    delta: usize,
    success: Callback,
    fail: Callback,
    complete: Option<Callback>,
}

pub(crate) struct MockHost {
    pages: Mutex<Vec<PageRecord>>,
    pending: Mutex<VecDeque<Pending>>,
    history: Mutex<Vec<Dispatch>>,
}

impl MockHost {
    pub(crate) fn new(pages: Vec<PageRecord>) -> Self {
        Self {
            pages: Mutex::new(pages),
            pending: Mutex::new(VecDeque::new()),
            history: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_pages(routes: &[&str]) -> Self {
        Self::new(
            routes
                .iter()
                .map(|route| PageRecord::new(*route, Default::default()))
                .collect(),
        )
    }

    /// URLs of every forward call received, oldest first
    pub(crate) fn urls(&self) -> Vec<String> {
        self.history
            .lock()
            .iter()
            .filter_map(|d| d.url.clone())
            .collect()
    }

    pub(crate) fn kinds(&self) -> Vec<NavigationKind> {
        self.history.lock().iter().map(|d| d.kind).collect()
    }

    pub(crate) fn back_deltas(&self) -> Vec<usize> {
        self.history.lock().iter().filter_map(|d| d.delta).collect()
    }

    pub(crate) fn last_extra(&self) -> Option<Map<String, Value>> {
        self.history.lock().last().map(|d| d.extra.clone())
    }

    /// Calls not yet settled
    pub(crate) fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Settle the oldest pending call successfully
    pub(crate) fn succeed(&self, result: HostResult) {
        let Some(call) = self.pending.lock().pop_front() else {
            panic!("no pending navigation to settle");
        };

        self.apply(&call);
        (call.success)(result.clone());
        if let Some(complete) = call.complete {
            complete(result);
        }
    }

    /// Settle the oldest pending call as a failure
    pub(crate) fn fail(&self, result: HostResult) {
        let Some(call) = self.pending.lock().pop_front() else {
            panic!("no pending navigation to settle");
        };

        (call.fail)(result.clone());
        if let Some(complete) = call.complete {
            complete(result);
        }
    }

    fn apply(&self, call: &Pending) {
        let mut pages = self.pages.lock();
        let record = call.url.as_deref().map(|url| {
            let info = get_url_info(url);
            PageRecord::new(info.path.trim_start_matches('/'), info.params)
        });

        match (call.kind, record) {
            (NavigationKind::NavigateTo, Some(record)) => pages.push(record),
            (NavigationKind::RedirectTo, Some(record)) => {
                pages.pop();
                pages.push(record);
            }
            (NavigationKind::ReLaunch | NavigationKind::SwitchTab, Some(record)) => {
                pages.clear();
                pages.push(record);
            }
            (NavigationKind::NavigateBack, _) => {
                let keep = pages.len().saturating_sub(call.delta).max(1);
                pages.truncate(keep);
            }
            (_, None) => {}
        }
    }

    fn record(&self, kind: NavigationKind, options: HostNavigateOptions) {
        self.history.lock().push(Dispatch {
            kind,
            url: Some(options.url.clone()),
            delta: None,
            extra: options.extra,
        });
        self.pending.lock().push_back(Pending {
            kind,
            url: Some(options.url),
            delta: 0,
            success: options.success,
            fail: options.fail,
            complete: options.complete,
        });
    }
}

impl NavigationHost for MockHost {
    fn navigate_to(&self, options: HostNavigateOptions) {
        self.record(NavigationKind::NavigateTo, options);
    }

    fn redirect_to(&self, options: HostNavigateOptions) {
        self.record(NavigationKind::RedirectTo, options);
    }

    fn re_launch(&self, options: HostNavigateOptions) {
        self.record(NavigationKind::ReLaunch, options);
    }

    fn switch_tab(&self, options: HostNavigateOptions) {
        self.record(NavigationKind::SwitchTab, options);
    }

    fn navigate_back(&self, options: HostNavigateBackOptions) {
        self.history.lock().push(Dispatch {
            kind: NavigationKind::NavigateBack,
            url: None,
            delta: Some(options.delta),
            extra: options.extra,
        });
        self.pending.lock().push_back(Pending {
            kind: NavigationKind::NavigateBack,
            url: None,
            delta: options.delta,
            success: options.success,
            fail: options.fail,
            complete: options.complete,
        });
    }

    fn current_pages(&self) -> Vec<PageRecord> {
        self.pages.lock().clone()
    }
}
