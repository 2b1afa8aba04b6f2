pub const DURATION_MS: f64 = 2000.0;
pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Finished,
    Cancelled,
}

/// Counts up to `target` over a fixed number of frames.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    progress: f64,
    state: State,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self::with_duration(target, DURATION_MS)
    }

    pub fn with_duration(target: u32, duration_ms: f64) -> Self {
        let frames = (duration_ms / FRAME_MS).max(1.0);
        Self {
            target,
            increment: f64::from(target) / frames,
            progress: 0.0,
            state: State::Running,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Advances one frame and returns the value to display, or `None` once
    /// the animation has been cancelled.
    pub fn tick(&mut self) -> Option<u32> {
        match self.state {
            State::Cancelled => return None,
            State::Finished => return Some(self.target),
            State::Running => {}
        }
        self.progress += self.increment;
        let target = f64::from(self.target);
        if self.progress < target {
            Some((self.progress.ceil() as u32).min(self.target))
        } else {
            self.state = State::Finished;
            Some(self.target)
        }
    }

    pub fn cancel(&mut self) {
        self.state = State::Cancelled;
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == State::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animation: &mut CounterAnimation) -> Vec<u32> {
        let mut values = Vec::new();
        while !animation.is_finished() {
            values.push(animation.tick().expect("animation should be running"));
        }
        values
    }

    #[test]
    fn test_counter_ends_exactly_at_target() {
        let mut animation = CounterAnimation::new(24);
        let values = run(&mut animation);
        assert_eq!(values.last(), Some(&24));
        assert!(values.iter().all(|v| *v <= 24));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // 2000ms at 16ms per frame
        assert!(values.len() >= 125 && values.len() <= 126);
        assert_eq!(animation.tick(), Some(24));
    }

    #[test]
    fn test_small_and_zero_targets() {
        for target in [0, 1, 7, 12] {
            let mut animation = CounterAnimation::new(target);
            let values = run(&mut animation);
            assert_eq!(values.last(), Some(&target));
            assert!(values.iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn test_zero_duration_finishes_in_one_frame() {
        let mut animation = CounterAnimation::with_duration(24, 0.0);
        assert_eq!(animation.tick(), Some(24));
        assert!(animation.is_finished());
    }

    #[test]
    fn test_cancelled_counter_stops() {
        let mut animation = CounterAnimation::new(24);
        animation.tick();
        animation.cancel();
        assert!(animation.is_cancelled());
        assert_eq!(animation.tick(), None);
        assert!(!animation.is_finished());
    }
}
