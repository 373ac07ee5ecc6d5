//! Privacy snapshot control
//!
//! While the app is backgrounded the shell obscures the screen so sensitive
//! terminal content never sits visible on an unattended display. The manager
//! tracks the active spec here; the shell draws it.

use twarden_core::prelude::*;

use super::SdkManager;

/// What the snapshot overlay shows while the app is backgrounded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SnapshotSpec {
    /// Obscuring fill with no identifying content
    #[default]
    Blank,

    /// Dim centered title, for hosts that want branding over blankness
    Branded { title: String },
}

impl SdkManager {
    /// Whether backgrounding obscures the screen. On by default.
    pub fn use_snapshot_view(&self) -> bool {
        self.use_snapshot_view
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn set_use_snapshot_view(&self, use_snapshot: bool) {
        self.use_snapshot_view
            .store(use_snapshot, std::sync::atomic::Ordering::SeqCst);
        debug!(enabled = use_snapshot, "Snapshot view setting changed");
    }

    /// True while the snapshot overlay should be covering the screen
    pub fn snapshot_active(&self) -> bool {
        self.snapshot.lock().unwrap().is_some()
    }

    /// The spec currently covering the screen, for rendering
    pub fn active_snapshot(&self) -> Option<SnapshotSpec> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Raise the snapshot. No-op when disabled or already active.
    ///
    /// The spec comes from the `snapshot_create` hook when installed,
    /// otherwise `Blank`. The `snapshot_present` hook runs only when
    /// `snapshot_dismiss` is also installed; an unpaired hook is ignored.
    pub(crate) fn activate_snapshot(&self) {
        if !self.use_snapshot_view() || self.snapshot_active() {
            return;
        }

        let (create, present, dismiss) = {
            let hooks = self.hooks.lock().unwrap();
            (
                hooks.snapshot_create.clone(),
                hooks.snapshot_present.clone(),
                hooks.snapshot_dismiss.clone(),
            )
        };

        let spec = create.map(|hook| hook()).unwrap_or_default();
        *self.snapshot.lock().unwrap() = Some(spec.clone());
        info!("Privacy snapshot presented");

        match (present, dismiss.is_some()) {
            (Some(present), true) => present(&spec),
            (Some(_), false) => warn!("Unpaired snapshot presentation hook ignored"),
            _ => {}
        }
    }

    /// Drop the snapshot. No-op when none is active.
    pub(crate) fn deactivate_snapshot(&self) {
        let spec = self.snapshot.lock().unwrap().take();
        let Some(spec) = spec else {
            return;
        };
        info!("Privacy snapshot dismissed");

        let (present, dismiss) = {
            let hooks = self.hooks.lock().unwrap();
            (hooks.snapshot_present.is_some(), hooks.snapshot_dismiss.clone())
        };
        if let (true, Some(dismiss)) = (present, dismiss) {
            dismiss(&spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_activate_uses_create_hook_spec() {
        let manager = SdkManager::new();
        manager.set_snapshot_create_hook(|| SnapshotSpec::Branded {
            title: "Warden".to_string(),
        });

        manager.activate_snapshot();

        assert!(manager.snapshot_active());
        assert_eq!(
            manager.active_snapshot(),
            Some(SnapshotSpec::Branded {
                title: "Warden".to_string()
            })
        );
    }

    #[test]
    fn test_activate_defaults_to_blank() {
        let manager = SdkManager::new();

        manager.activate_snapshot();

        assert_eq!(manager.active_snapshot(), Some(SnapshotSpec::Blank));
    }

    #[test]
    fn test_disabled_snapshot_never_activates() {
        let manager = SdkManager::new();
        manager.set_use_snapshot_view(false);

        manager.activate_snapshot();

        assert!(!manager.snapshot_active());
    }

    #[test]
    fn test_repeat_activation_is_a_noop() {
        let manager = SdkManager::new();
        let created = Arc::new(AtomicUsize::new(0));
        let counter = created.clone();
        manager.set_snapshot_create_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            SnapshotSpec::Blank
        });

        manager.activate_snapshot();
        manager.activate_snapshot();

        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_paired_hooks_run_on_both_edges() {
        let manager = SdkManager::new();
        let presented = Arc::new(AtomicUsize::new(0));
        let dismissed = Arc::new(AtomicUsize::new(0));

        let p = presented.clone();
        manager.set_snapshot_present_hook(move |_spec| {
            p.fetch_add(1, Ordering::SeqCst);
        });
        let d = dismissed.clone();
        manager.set_snapshot_dismiss_hook(move |_spec| {
            d.fetch_add(1, Ordering::SeqCst);
        });

        manager.activate_snapshot();
        manager.deactivate_snapshot();

        assert_eq!(presented.load(Ordering::SeqCst), 1);
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unpaired_present_hook_is_ignored() {
        let manager = SdkManager::new();
        let presented = Arc::new(AtomicUsize::new(0));

        let p = presented.clone();
        manager.set_snapshot_present_hook(move |_spec| {
            p.fetch_add(1, Ordering::SeqCst);
        });

        manager.activate_snapshot();
        manager.deactivate_snapshot();

        assert_eq!(presented.load(Ordering::SeqCst), 0);
        assert!(!manager.snapshot_active());
    }

    #[test]
    fn test_deactivate_without_active_snapshot_is_a_noop() {
        let manager = SdkManager::new();
        let dismissed = Arc::new(AtomicUsize::new(0));

        let d = dismissed.clone();
        manager.set_snapshot_present_hook(|_spec| {});
        manager.set_snapshot_dismiss_hook(move |_spec| {
            d.fetch_add(1, Ordering::SeqCst);
        });

        manager.deactivate_snapshot();

        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }
}
