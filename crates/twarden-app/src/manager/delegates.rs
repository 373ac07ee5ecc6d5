//! Lifecycle delegate protocol and the weak delegate registry

use std::sync::{Arc, Mutex, Weak};

use twarden_core::LifecycleEvent;

/// Receives terminal lifecycle transitions from the manager.
///
/// All methods default to no-ops, so implementors override only the
/// transitions they care about.
pub trait SdkManagerDelegate: Send + Sync {
    /// The terminal is about to lose focus
    fn will_resign_active(&self) {}

    /// The terminal gained (or regained) focus
    fn did_become_active(&self) {}

    /// The app is coming back from the background
    fn will_enter_foreground(&self) {}

    /// The app moved to the background
    fn did_enter_background(&self) {}
}

/// Registry of weakly held delegates.
///
/// Holding only `Weak` refs means registration never extends a delegate's
/// lifetime; a dropped delegate is skipped and pruned on the next fan-out.
#[derive(Default)]
pub(crate) struct DelegateRegistry {
    delegates: Mutex<Vec<Weak<dyn SdkManagerDelegate>>>,
}

impl DelegateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a delegate. Re-adding the same `Arc` is a no-op.
    pub fn add(&self, delegate: Arc<dyn SdkManagerDelegate>) {
        let weak = Arc::downgrade(&delegate);
        let mut delegates = self.delegates.lock().unwrap();
        if !delegates.iter().any(|existing| existing.ptr_eq(&weak)) {
            delegates.push(weak);
        }
    }

    /// Unregister a delegate; it receives no further callbacks.
    pub fn remove(&self, delegate: &Arc<dyn SdkManagerDelegate>) {
        let weak = Arc::downgrade(delegate);
        self.delegates
            .lock()
            .unwrap()
            .retain(|existing| !existing.ptr_eq(&weak));
    }

    /// Number of delegates still alive
    pub fn len(&self) -> usize {
        self.delegates
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Fan out one lifecycle event to every live delegate, in registration
    /// order. Strong refs are collected before any callback runs, so a
    /// delegate may add or remove delegates from inside its callback.
    pub fn notify(&self, event: LifecycleEvent) {
        let live: Vec<Arc<dyn SdkManagerDelegate>> = {
            let mut delegates = self.delegates.lock().unwrap();
            delegates.retain(|w| w.strong_count() > 0);
            delegates.iter().filter_map(Weak::upgrade).collect()
        };

        for delegate in live {
            match event {
                LifecycleEvent::WillResignActive => delegate.will_resign_active(),
                LifecycleEvent::DidBecomeActive => delegate.did_become_active(),
                LifecycleEvent::WillEnterForeground => delegate.will_enter_foreground(),
                LifecycleEvent::DidEnterBackground => delegate.did_enter_background(),
            }
        }
    }
}
