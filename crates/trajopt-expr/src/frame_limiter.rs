use std::time::{Duration, Instant};

const CALLBACK_FPS: f64 = 60.0;

/// Throttles the solver's iteration callback to at most 60 invocations
/// per wall-clock second (spec §5), so callback overhead does not
/// dominate solve time on problems that iterate far faster than a
/// human could watch.
#[derive(Debug)]
pub struct FrameLimiter {
    min_frame_period: Duration,
    last_frame: Option<Instant>,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self {
            min_frame_period: Duration::from_secs_f64(1.0 / CALLBACK_FPS),
            last_frame: None,
        }
    }
}

impl FrameLimiter {
    /// Returns `true` if enough wall-clock time has passed since the
    /// last admitted frame that the callback should run now. Updates
    /// its internal clock as a side effect when it admits a frame.
    pub fn should_run(&mut self, now: Instant) -> bool {
        match self.last_frame {
            Some(last) if now.duration_since(last) < self.min_frame_period => false,
            _ => {
                self.last_frame = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_runs() {
        let mut limiter = FrameLimiter::default();
        assert!(limiter.should_run(Instant::now()));
    }

    #[test]
    fn frames_within_the_same_instant_are_throttled() {
        let mut limiter = FrameLimiter::default();
        let now = Instant::now();
        assert!(limiter.should_run(now));
        assert!(!limiter.should_run(now));
    }

    #[test]
    fn frame_after_period_elapses_is_admitted() {
        let mut limiter = FrameLimiter::default();
        let now = Instant::now();
        assert!(limiter.should_run(now));
        let later = now + Duration::from_millis(20);
        assert!(limiter.should_run(later));
    }
}
