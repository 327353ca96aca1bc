//! Lesson preview expansion state.

use qawaid::LessonId;
use std::collections::HashSet;

/// Tracks which lesson previews are expanded on section screens.
#[derive(Debug, Clone, Default)]
pub struct LessonState {
    expanded: HashSet<LessonId>,
}

impl LessonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, lesson: LessonId) -> bool {
        self.expanded.contains(&lesson)
    }

    /// Flips the preview of `lesson`, returning the new state.
    pub fn toggle(&mut self, lesson: LessonId) -> bool {
        if !self.expanded.remove(&lesson) {
            self.expanded.insert(lesson);
            true
        } else {
            false
        }
    }
}
