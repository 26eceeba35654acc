//! Screen flow state machine.
//!
//! The widget moves through four screens: a splash, the input form, a short
//! transition animation, and the results view. This module models that flow
//! as an explicit state machine the host drives with events; no timers run
//! here. The dwell times are exposed so a host can schedule its own delays
//! and fades.
//!
//! The analysis result travels inside [`FlowEvent::AnalyzeRequested`] and is
//! carried by the machine until the results screen shows it.

use std::time::Duration;

use crate::types::AnalysisResult;

/// How long the splash screen stays before fading out.
pub const SPLASH_DWELL: Duration = Duration::from_millis(3000);
/// Splash fade-out duration.
pub const SPLASH_FADE: Duration = Duration::from_millis(1000);
/// Fade duration for the input/animation/results transitions.
pub const SCREEN_FADE: Duration = Duration::from_millis(500);
/// How long the transition animation screen stays.
pub const ANIMATION_DWELL: Duration = Duration::from_millis(2000);

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Input,
    Animating,
    Results,
}

impl Screen {
    /// Total time a host should wait before firing the screen's elapsed
    /// event, dwell plus fades. `None` for screens that only advance on
    /// user action.
    pub fn auto_advance_after(&self) -> Option<Duration> {
        match self {
            Screen::Splash => Some(SPLASH_DWELL + SPLASH_FADE),
            Screen::Animating => Some(SCREEN_FADE + ANIMATION_DWELL + SCREEN_FADE),
            Screen::Input | Screen::Results => None,
        }
    }
}

/// Events the host feeds into the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// The splash dwell elapsed.
    SplashElapsed,
    /// The user asked for analysis; carries the result to display.
    AnalyzeRequested(AnalysisResult),
    /// The transition animation elapsed.
    AnimationElapsed,
    /// The user asked to start over.
    RestartRequested,
}

/// The flow itself: current screen plus the result in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFlow {
    screen: Screen,
    result: Option<AnalysisResult>,
}

impl ScreenFlow {
    pub fn new() -> Self {
        ScreenFlow {
            screen: Screen::Splash,
            result: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The result to render, available only on the results screen.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self.screen {
            Screen::Results => self.result.as_ref(),
            _ => None,
        }
    }

    /// Applies an event. Events that do not apply to the current screen are
    /// ignored and the screen is unchanged.
    pub fn handle(&mut self, event: FlowEvent) -> Screen {
        match (self.screen, event) {
            (Screen::Splash, FlowEvent::SplashElapsed) => {
                self.screen = Screen::Input;
            }
            (Screen::Input, FlowEvent::AnalyzeRequested(result)) => {
                self.result = Some(result);
                self.screen = Screen::Animating;
            }
            (Screen::Animating, FlowEvent::AnimationElapsed) => {
                self.screen = Screen::Results;
            }
            (Screen::Results, FlowEvent::RestartRequested) => {
                self.result = None;
                self.screen = Screen::Input;
            }
            _ => {}
        }
        self.screen
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult::empty()
    }

    #[test]
    fn test_starts_on_splash() {
        let flow = ScreenFlow::new();
        assert_eq!(flow.screen(), Screen::Splash);
        assert!(flow.result().is_none());
    }

    #[test]
    fn test_happy_path() {
        let mut flow = ScreenFlow::new();
        assert_eq!(flow.handle(FlowEvent::SplashElapsed), Screen::Input);
        assert_eq!(
            flow.handle(FlowEvent::AnalyzeRequested(sample_result())),
            Screen::Animating
        );
        // Result is held but not yet visible while animating.
        assert!(flow.result().is_none());
        assert_eq!(flow.handle(FlowEvent::AnimationElapsed), Screen::Results);
        assert_eq!(flow.result(), Some(&sample_result()));
    }

    #[test]
    fn test_restart_clears_result() {
        let mut flow = ScreenFlow::new();
        flow.handle(FlowEvent::SplashElapsed);
        flow.handle(FlowEvent::AnalyzeRequested(sample_result()));
        flow.handle(FlowEvent::AnimationElapsed);

        assert_eq!(flow.handle(FlowEvent::RestartRequested), Screen::Input);
        flow.handle(FlowEvent::AnalyzeRequested(sample_result()));
        flow.handle(FlowEvent::AnimationElapsed);
        assert!(flow.result().is_some());
    }

    #[test]
    fn test_invalid_events_are_ignored() {
        let mut flow = ScreenFlow::new();
        assert_eq!(flow.handle(FlowEvent::AnimationElapsed), Screen::Splash);
        assert_eq!(flow.handle(FlowEvent::RestartRequested), Screen::Splash);

        flow.handle(FlowEvent::SplashElapsed);
        assert_eq!(flow.handle(FlowEvent::SplashElapsed), Screen::Input);
        assert_eq!(flow.handle(FlowEvent::AnimationElapsed), Screen::Input);
    }

    #[test]
    fn test_auto_advance_durations() {
        assert_eq!(
            Screen::Splash.auto_advance_after(),
            Some(Duration::from_millis(4000))
        );
        assert_eq!(
            Screen::Animating.auto_advance_after(),
            Some(Duration::from_millis(3000))
        );
        assert_eq!(Screen::Input.auto_advance_after(), None);
        assert_eq!(Screen::Results.auto_advance_after(), None);
    }
}
