/// What to do with an incoming event under a leading/trailing throttle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Run the handler now.
    Fire,
    /// Schedule one trailing run after this many milliseconds.
    Defer(u32),
    /// A trailing run is already scheduled.
    Drop,
}

/// Clock-agnostic throttle; callers pass timestamps in milliseconds.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            last_fired: None,
            trailing_pending: false,
        }
    }

    pub fn on_event(&mut self, now: f64) -> ThrottleDecision {
        if self.trailing_pending {
            return ThrottleDecision::Drop;
        }
        match self.last_fired {
            Some(last) if now - last < self.interval_ms => {
                self.trailing_pending = true;
                let remaining = (self.interval_ms - (now - last)).ceil().max(0.0);
                ThrottleDecision::Defer(remaining as u32)
            }
            _ => {
                self.last_fired = Some(now);
                ThrottleDecision::Fire
            }
        }
    }

    /// Marks the scheduled trailing run as done.
    pub fn on_trailing(&mut self, now: f64) {
        self.trailing_pending = false;
        self.last_fired = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.trailing_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_fires_immediately() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.on_event(1_000.0), ThrottleDecision::Fire);
    }

    #[test]
    fn burst_collapses_into_one_trailing_run() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.on_event(0.0), ThrottleDecision::Fire);
        assert_eq!(throttle.on_event(30.0), ThrottleDecision::Defer(70));
        assert!(throttle.is_pending());
        assert_eq!(throttle.on_event(60.0), ThrottleDecision::Drop);
        assert_eq!(throttle.on_event(90.0), ThrottleDecision::Drop);

        throttle.on_trailing(100.0);
        assert!(!throttle.is_pending());
        assert_eq!(throttle.on_event(150.0), ThrottleDecision::Defer(50));
    }

    #[test]
    fn events_spaced_past_interval_always_fire() {
        let mut throttle = Throttle::new(100);
        for step in 0..5 {
            assert_eq!(throttle.on_event(step as f64 * 100.0), ThrottleDecision::Fire);
        }
    }

    #[test]
    fn fractional_remaining_rounds_up() {
        let mut throttle = Throttle::new(100);
        throttle.on_event(0.0);
        assert_eq!(throttle.on_event(10.5), ThrottleDecision::Defer(90));
    }
}
