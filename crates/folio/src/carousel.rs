//! Index-cycling project carousel with autoplay.

use folio_core::Project;

/// Carousel over the configured projects.
///
/// Timing runs on the app's frame clock: callers pass the current
/// elapsed milliseconds into every operation that starts or restarts
/// the autoplay window.
#[derive(Debug)]
pub struct Carousel {
    projects: Vec<Project>,
    current: usize,
    autoplay_ms: u64,
    /// Frame-clock timestamp of the last advance, manual or automatic.
    last_advance_ms: u64,
    paused: bool,
}

impl Carousel {
    pub fn new(projects: Vec<Project>, autoplay_ms: u64) -> Self {
        Self {
            projects,
            current: 0,
            autoplay_ms,
            last_advance_ms: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Index of the active slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active slide, if any projects are configured.
    pub fn current(&self) -> Option<&Project> {
        self.projects.get(self.current)
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self, now_ms: u64) {
        if self.projects.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.projects.len();
        self.last_advance_ms = now_ms;
    }

    /// Step back to the previous slide, wrapping at the start.
    pub fn prev(&mut self, now_ms: u64) {
        if self.projects.is_empty() {
            return;
        }
        self.current = (self.current + self.projects.len() - 1) % self.projects.len();
        self.last_advance_ms = now_ms;
    }

    /// Jump straight to a slide; out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize, now_ms: u64) {
        if index < self.projects.len() {
            self.current = index;
            self.last_advance_ms = now_ms;
        }
    }

    /// Suspend or resume autoplay. Resuming restarts the full autoplay
    /// window so the slide does not flip the instant focus returns.
    pub fn set_paused(&mut self, paused: bool, now_ms: u64) {
        if self.paused && !paused {
            self.last_advance_ms = now_ms;
        }
        self.paused = paused;
    }

    /// Advance automatically once the autoplay delay has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        if self.paused || self.projects.len() < 2 {
            return;
        }
        if now_ms.saturating_sub(self.last_advance_ms) >= self.autoplay_ms {
            self.next(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project {
                title: format!("Project {i}"),
                description: String::new(),
                url: None,
            })
            .collect()
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut carousel = Carousel::new(projects(3), 5000);
        assert_eq!(carousel.current_index(), 0);

        carousel.next(0);
        carousel.next(0);
        assert_eq!(carousel.current_index(), 2);
        carousel.next(0);
        assert_eq!(carousel.current_index(), 0);

        carousel.prev(0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(projects(3), 5000);
        carousel.go_to(2, 0);
        assert_eq!(carousel.current_index(), 2);
        carousel.go_to(7, 0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_autoplay_advances_after_delay() {
        let mut carousel = Carousel::new(projects(3), 5000);
        carousel.tick(4999);
        assert_eq!(carousel.current_index(), 0);
        carousel.tick(5000);
        assert_eq!(carousel.current_index(), 1);
        // The window restarts from the automatic advance.
        carousel.tick(9999);
        assert_eq!(carousel.current_index(), 1);
        carousel.tick(10_000);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_manual_navigation_resets_autoplay() {
        let mut carousel = Carousel::new(projects(3), 5000);
        carousel.next(4000);
        assert_eq!(carousel.current_index(), 1);
        // 5000 ms from start, but only 1000 ms since the manual advance.
        carousel.tick(5000);
        assert_eq!(carousel.current_index(), 1);
        carousel.tick(9000);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_paused_carousel_does_not_autoplay() {
        let mut carousel = Carousel::new(projects(3), 5000);
        carousel.set_paused(true, 0);
        carousel.tick(20_000);
        assert_eq!(carousel.current_index(), 0);

        // Unpausing restarts the window rather than firing immediately.
        carousel.set_paused(false, 20_000);
        carousel.tick(20_001);
        assert_eq!(carousel.current_index(), 0);
        carousel.tick(25_000);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_single_and_empty_are_stable() {
        let mut single = Carousel::new(projects(1), 5000);
        single.tick(100_000);
        assert_eq!(single.current_index(), 0);

        let mut empty = Carousel::new(Vec::new(), 5000);
        empty.next(0);
        empty.prev(0);
        empty.tick(100_000);
        assert!(empty.current().is_none());
    }
}
