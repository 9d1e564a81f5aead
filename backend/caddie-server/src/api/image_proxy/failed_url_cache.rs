use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Process-local memory of image URLs that could not be fetched, so
/// repeated requests short-circuit to 404 instead of re-running every
/// fetch strategy. Best effort only: it is not persisted and a restart
/// clears it.
#[derive(Debug, Default)]
pub struct FailedUrlCache {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    set: HashSet<String>,
    order: VecDeque<String>,
}

/// Oldest entries are evicted past this point.
const MAX_ENTRIES: usize = 1000;

impl FailedUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        match self.inner.lock() {
            Ok(inner) => inner.set.contains(url),
            Err(_) => false,
        }
    }

    pub fn insert(&self, url: String) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if inner.set.contains(&url) {
            return;
        }
        if inner.order.len() >= MAX_ENTRIES {
            if let Some(oldest) = inner.order.pop_front() {
                inner.set.remove(&oldest);
            }
        }
        inner.order.push_back(url.clone());
        inner.set.insert(url);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.order.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
