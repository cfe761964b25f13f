//! Time-based tween toward a target offset

use std::time::Duration;

use mindband_contracts::{EasingKind, Transition};

/// Tween driven by an external clock so headless surfaces stay deterministic.
#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Duration,
    duration: Duration,
    easing: EasingKind,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
            easing: EasingKind::default(),
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin moving from `current` to `target` at clock time `now`.
    /// Replaces any tween in flight.
    pub fn start(
        &mut self,
        now: Duration,
        current: f32,
        target: f32,
        transition: Transition,
    ) {
        self.start = current;
        self.target = target;
        self.started_at = now;
        match transition {
            Transition::Immediate => {
                self.active = false;
                self.duration = Duration::ZERO;
            }
            Transition::Animated { duration, easing } => {
                self.active = !duration.is_zero();
                self.duration = duration;
                self.easing = easing;
            }
        }
    }

    /// Position at clock time `now`. Finishes the tween once its duration
    /// has elapsed.
    pub fn sample(&mut self, now: Duration) -> f32 {
        if !self.active {
            return self.target;
        }
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return self.target;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        self.start + (self.target - self.start) * self.easing.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn immediate_jumps() {
        let mut anim = SnapAnimator::new();
        anim.start(ms(0), 0.0, -600.0, Transition::Immediate);
        assert!(!anim.is_active());
        assert_eq!(anim.sample(ms(0)), -600.0);
    }

    #[test]
    fn linear_midpoint() {
        let mut anim = SnapAnimator::new();
        anim.start(
            ms(100),
            0.0,
            -300.0,
            Transition::animated(500, EasingKind::Linear),
        );
        assert_eq!(anim.sample(ms(350)), -150.0);
        assert!(anim.is_active());
        assert_eq!(anim.sample(ms(600)), -300.0);
        assert!(!anim.is_active());
    }
}
