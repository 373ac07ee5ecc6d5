//! Loading view state and the process-wide loading view service
//!
//! The state carries everything the spinner widget needs to draw one frame;
//! the service is a process-wide slot holding the currently shown loading
//! view so any component can show, retime, or hide it.

use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

/// Number of spinner frames in one full rotation. The widget's frame set
/// must have this many entries so the rotation duration maps cleanly onto
/// per-frame intervals.
pub const SPINNER_FRAME_COUNT: u32 = 10;

/// Default time for one full spinner rotation
pub const DEFAULT_ROTATION: Duration = Duration::from_millis(1000);

/// State for the loading view (spinner + title + subtitle)
#[derive(Debug, Clone)]
pub struct LoadingViewState {
    /// Primary loading text
    pub title: String,
    /// Secondary line under the title
    pub subtitle: String,
    /// Animation frame counter for the spinner
    pub animation_frame: u64,
    rotating: bool,
    rotation: Duration,
    last_advance: Option<Instant>,
}

impl LoadingViewState {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            animation_frame: 0,
            rotating: false,
            rotation: DEFAULT_ROTATION,
            last_advance: None,
        }
    }

    /// Start (or retime) the spinner animation. `cycle` is the time one
    /// full rotation should take; zero falls back to the default.
    pub fn start_rotating(&mut self, cycle: Duration) {
        self.rotation = if cycle.is_zero() {
            DEFAULT_ROTATION
        } else {
            cycle
        };
        self.rotating = true;
        self.last_advance = None;
    }

    /// Freeze the spinner on its current frame
    pub fn stop_rotating(&mut self) {
        self.rotating = false;
        self.last_advance = None;
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Time between spinner frames for the current rotation speed
    pub fn frame_interval(&self) -> Duration {
        self.rotation / SPINNER_FRAME_COUNT
    }

    /// Advance the animation. Call once per event-loop tick; frames move
    /// only while rotating and only when the per-frame interval has passed,
    /// so the tick rate does not dictate the spinner speed.
    pub fn tick(&mut self, now: Instant) {
        if !self.rotating {
            return;
        }

        let last = match self.last_advance {
            Some(last) => last,
            None => {
                self.last_advance = Some(now);
                return;
            }
        };

        let interval = self.frame_interval();
        if interval.is_zero() {
            self.animation_frame = self.animation_frame.wrapping_add(1);
            self.last_advance = Some(now);
            return;
        }

        let elapsed = now.saturating_duration_since(last);
        let steps = (elapsed.as_micros() / interval.as_micros()) as u64;
        if steps > 0 {
            self.animation_frame = self.animation_frame.wrapping_add(steps);
            self.last_advance = Some(now);
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading view service
// ─────────────────────────────────────────────────────────────────────────────

static SERVICE: OnceLock<LoadingViewService> = OnceLock::new();

/// Process-wide slot for the currently shown loading view.
///
/// The shell renders whatever state is installed here as a modal overlay,
/// so hosts can show progress from any component without threading state
/// through the UI.
#[derive(Debug, Default)]
pub struct LoadingViewService {
    view: Mutex<Option<LoadingViewState>>,
}

impl LoadingViewService {
    /// A standalone service, for hosts that scope their own
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide service instance
    pub fn shared() -> &'static LoadingViewService {
        SERVICE.get_or_init(LoadingViewService::new)
    }

    /// Install a rotating loading view, replacing any current one
    pub fn show(&self, title: impl Into<String>, subtitle: impl Into<String>) {
        self.show_with_rotation(title, subtitle, DEFAULT_ROTATION);
    }

    /// Install a rotating loading view with an explicit rotation time
    pub fn show_with_rotation(
        &self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        cycle: Duration,
    ) {
        let mut state = LoadingViewState::new(title, subtitle);
        state.start_rotating(cycle);
        *self.view.lock().unwrap() = Some(state);
    }

    /// Mutate the current view in place; no-op when hidden
    pub fn update(&self, f: impl FnOnce(&mut LoadingViewState)) {
        if let Some(state) = self.view.lock().unwrap().as_mut() {
            f(state);
        }
    }

    /// Remove the current view
    pub fn hide(&self) {
        *self.view.lock().unwrap() = None;
    }

    pub fn is_visible(&self) -> bool {
        self.view.lock().unwrap().is_some()
    }

    /// Clone of the current view for rendering
    pub fn view(&self) -> Option<LoadingViewState> {
        self.view.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_not_rotating_until_started() {
        let mut state = LoadingViewState::new("Loading", "");
        let start = Instant::now();

        assert!(!state.is_rotating());
        state.tick(start + Duration::from_secs(5));
        assert_eq!(state.animation_frame, 0);
    }

    #[test]
    fn test_tick_advances_at_frame_interval() {
        let mut state = LoadingViewState::new("Loading", "");
        state.start_rotating(Duration::from_millis(1000));
        let start = Instant::now();

        // First tick stamps the baseline
        state.tick(start);
        assert_eq!(state.animation_frame, 0);

        // Half a frame interval: no advance
        state.tick(start + Duration::from_millis(50));
        assert_eq!(state.animation_frame, 0);

        // One full interval (1000ms / 10 frames = 100ms)
        state.tick(start + Duration::from_millis(100));
        assert_eq!(state.animation_frame, 1);
    }

    #[test]
    fn test_tick_catches_up_after_a_stall() {
        let mut state = LoadingViewState::new("Loading", "");
        state.start_rotating(Duration::from_millis(1000));
        let start = Instant::now();

        state.tick(start);
        state.tick(start + Duration::from_millis(350));

        assert_eq!(state.animation_frame, 3);
    }

    #[test]
    fn test_stop_rotating_freezes_frame() {
        let mut state = LoadingViewState::new("Loading", "");
        state.start_rotating(Duration::from_millis(1000));
        let start = Instant::now();

        state.tick(start);
        state.tick(start + Duration::from_millis(100));
        state.stop_rotating();
        state.tick(start + Duration::from_millis(1000));

        assert!(!state.is_rotating());
        assert_eq!(state.animation_frame, 1);
    }

    #[test]
    fn test_retiming_changes_frame_interval() {
        let mut state = LoadingViewState::new("Loading", "");
        state.start_rotating(Duration::from_millis(500));

        assert_eq!(state.frame_interval(), Duration::from_millis(50));

        state.start_rotating(Duration::ZERO);
        assert_eq!(state.frame_interval(), DEFAULT_ROTATION / SPINNER_FRAME_COUNT);
    }

    #[test]
    fn test_service_show_update_hide() {
        let service = LoadingViewService::new();

        assert!(!service.is_visible());

        service.show("Connecting", "host");
        assert!(service.is_visible());
        let view = service.view().unwrap();
        assert_eq!(view.title, "Connecting");
        assert!(view.is_rotating());

        service.update(|v| v.set_subtitle("retrying"));
        assert_eq!(service.view().unwrap().subtitle, "retrying");

        service.hide();
        assert!(!service.is_visible());
        assert!(service.view().is_none());
    }

    #[test]
    fn test_service_update_is_noop_when_hidden() {
        let service = LoadingViewService::new();

        service.update(|v| v.set_title("never applied"));

        assert!(service.view().is_none());
    }

    #[test]
    #[serial]
    fn test_shared_service_is_process_wide() {
        LoadingViewService::shared().show("Shared", "");

        assert!(LoadingViewService::shared().is_visible());

        LoadingViewService::shared().hide();
        assert!(!LoadingViewService::shared().is_visible());
    }
}
