use crate::constants::AUTO_ADVANCE_INTERVAL;
use crate::gesture::SwipeTracker;
use crate::timer::RepeatingTimer;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

/// State of one carousel: which slide is visible, which indicator matches it,
/// and the auto-advance timer.
///
/// The struct is pure state. The view layer reads the active markers to
/// decide what to draw and calls the `handle_*` methods when the user
/// interacts; it never touches the index arithmetic directly.
pub struct Carousel {
    slide_count: usize,
    current: usize,
    slide_active: Vec<bool>,
    indicator_active: Vec<bool>,
    timer: RepeatingTimer,
    swipe: SwipeTracker,
}

impl Carousel {
    /// Build a carousel over `slide_count` slides. One indicator is created
    /// per slide, so indicator and slide counts cannot drift apart. With
    /// zero slides the instance is inert: no marker is set, the timer never
    /// runs, and every operation is a no-op.
    pub fn new(slide_count: usize) -> Self {
        let mut carousel = Self {
            slide_count,
            current: 0,
            slide_active: vec![false; slide_count],
            indicator_active: vec![false; slide_count],
            timer: RepeatingTimer::new(AUTO_ADVANCE_INTERVAL),
            swipe: SwipeTracker::new(),
        };
        if slide_count > 0 {
            carousel.show_slide(0);
            carousel.timer.restart();
        }
        carousel
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_is_active(&self, index: usize) -> bool {
        self.slide_active.get(index).copied().unwrap_or(false)
    }

    pub fn indicator_is_active(&self, index: usize) -> bool {
        self.indicator_active.get(index).copied().unwrap_or(false)
    }

    pub fn auto_advance_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Make `index` the visible slide: its marker (and the matching
    /// indicator's) is set, every other marker is cleared.
    pub fn show_slide(&mut self, index: usize) {
        if self.slide_count == 0 {
            return;
        }
        debug_assert!(index < self.slide_count);
        for (i, active) in self.slide_active.iter_mut().enumerate() {
            *active = i == index;
        }
        for (i, active) in self.indicator_active.iter_mut().enumerate() {
            *active = i == index;
        }
        self.current = index;
    }

    /// Step to the neighboring slide, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) {
        if self.slide_count == 0 {
            return;
        }
        let next = match direction {
            Direction::Forward => (self.current + 1) % self.slide_count,
            Direction::Backward => (self.current + self.slide_count - 1) % self.slide_count,
        };
        self.show_slide(next);
    }

    pub fn reset_auto_advance(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.timer.restart();
    }

    // --- Triggers ---
    // Each user interaction composes a transition with a timer reset, except
    // hover, which only pauses/resumes.

    pub fn handle_next(&mut self) {
        self.advance(Direction::Forward);
        self.reset_auto_advance();
    }

    pub fn handle_previous(&mut self) {
        self.advance(Direction::Backward);
        self.reset_auto_advance();
    }

    pub fn handle_indicator(&mut self, index: usize) {
        if self.slide_count == 0 {
            return;
        }
        self.show_slide(index);
        self.reset_auto_advance();
    }

    pub fn pointer_entered(&mut self) {
        self.timer.cancel();
    }

    pub fn pointer_left(&mut self) {
        self.reset_auto_advance();
    }

    pub fn swipe_started(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn swipe_ended(&mut self, x: f32) {
        if let Some(direction) = self.swipe.finish(x) {
            self.advance(direction);
            self.reset_auto_advance();
        }
    }

    /// Advance the auto-advance timer by `dt` seconds, stepping forward once
    /// per expiry. The timer keeps running; an expiry is the scheduled tick
    /// itself, not a reason to reschedule.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let fires = self.timer.tick(dt);
        for _ in 0..fires {
            self.advance(Direction::Forward);
        }
        fires
    }
}
