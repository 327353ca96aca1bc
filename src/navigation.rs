//! Screen-stack navigation.
//!
//! The visible screen is the top of a non-empty stack. `navigate` pushes,
//! `go_back` pops unless only one entry remains. The splash screen is the
//! initial entry and advances to the home screen through a [`SplashTimer`].

use crate::content::{LessonId, SectionId};
use std::time::{Duration, Instant};

/// Identifies one of the fixed screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    Home,
    Settings,
    Section(SectionId),
    Lesson(LessonId),
    WordFrequency,
}

impl ScreenId {
    pub fn title(self) -> String {
        match self {
            ScreenId::Splash => "Qawaid".to_string(),
            ScreenId::Home => "Home".to_string(),
            ScreenId::Settings => "Settings".to_string(),
            ScreenId::Section(section) => section.title().to_string(),
            ScreenId::Lesson(lesson) => format!("{} · Lesson {}", lesson.section.title(), lesson.number),
            ScreenId::WordFrequency => "Word Frequency".to_string(),
        }
    }
}

/// Ordered history of visited screens. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<ScreenId>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator positioned on the splash screen.
    pub fn new() -> Self {
        Self::starting_at(ScreenId::Splash)
    }

    pub fn starting_at(screen: ScreenId) -> Self {
        Self { stack: vec![screen] }
    }

    // ===== Queries =====

    /// The visible screen.
    pub fn current(&self) -> ScreenId {
        // The stack is created with one entry and `go_back` never removes the last.
        *self.stack.last().unwrap_or(&ScreenId::Splash)
    }

    /// The screen `go_back` would reveal, if any.
    pub fn previous(&self) -> Option<ScreenId> {
        self.stack.len().checked_sub(2).map(|i| self.stack[i])
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Visited screens, oldest first.
    pub fn history(&self) -> &[ScreenId] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    // ===== Transitions =====

    pub fn navigate(&mut self, screen: ScreenId) {
        log::debug!("Navigate {:?} -> {:?}", self.current(), screen);
        self.stack.push(screen);
    }

    /// Pops the current screen. Returns false (and does nothing) on the last entry.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let left = self.stack.pop();
        log::debug!("Back from {:?} to {:?}", left, self.current());
        true
    }
}

/// One-shot timer driving the automatic splash -> home transition.
///
/// Polled from the frame loop; fires at most once and never after `cancel`.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    deadline: Instant,
    state: TimerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

impl SplashTimer {
    pub fn start(delay: Duration, now: Instant) -> Self {
        Self {
            deadline: now + delay,
            state: TimerState::Pending,
        }
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Pending && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            log::debug!("Splash timer cancelled");
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Pending
    }

    /// Time left before the deadline, or None once fired or cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.is_pending().then(|| self.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(number: u16) -> ScreenId {
        ScreenId::Lesson(LessonId::new(SectionId::Verbs, number))
    }

    #[test]
    fn test_starts_on_splash() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ScreenId::Splash);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.previous(), None);
    }

    #[test]
    fn test_back_on_single_entry_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), ScreenId::Splash);
    }

    #[test]
    fn test_navigate_then_back_restores() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Home);
        nav.navigate(ScreenId::Section(SectionId::Verbs));

        let before = nav.current();
        nav.navigate(lesson(3));
        assert_eq!(nav.current(), lesson(3));
        assert!(nav.go_back());
        assert_eq!(nav.current(), before);
    }

    #[test]
    fn test_same_screen_may_repeat() {
        let mut nav = Navigator::starting_at(ScreenId::Home);
        nav.navigate(ScreenId::Home);
        assert_eq!(nav.history(), &[ScreenId::Home, ScreenId::Home]);
    }

    #[test]
    fn test_timer_fires_once() {
        let t0 = Instant::now();
        let mut timer = SplashTimer::start(Duration::from_secs(2), t0);

        assert!(!timer.poll(t0 + Duration::from_millis(1999)));
        assert_eq!(timer.remaining(t0 + Duration::from_secs(1)), Some(Duration::from_secs(1)));
        assert!(timer.poll(t0 + Duration::from_secs(2)));
        assert!(!timer.poll(t0 + Duration::from_secs(5)));
        assert_eq!(timer.remaining(t0), None);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = SplashTimer::start(Duration::from_millis(10), t0);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.poll(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_lesson_title() {
        assert_eq!(lesson(5).title(), "Verbs · Lesson 5");
    }
}
