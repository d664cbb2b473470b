// Trails its target, settling after roughly lag_ms
#[derive(Clone, Debug, PartialEq)]
pub struct Scrub {
    current: f64,
    target: f64,
    lag_ms: f64,
    last_tick: Option<f64>,
}

// Within this many px the value snaps to the target.
const SNAP: f64 = 0.5;

impl Scrub {
    pub fn new(value: f64, lag_ms: f64) -> Self {
        Self {
            current: value,
            target: value,
            lag_ms,
            last_tick: None,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn reset(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    pub fn tick(&mut self, now: f64) -> f64 {
        let elapsed = match self.last_tick.replace(now) {
            Some(previous) => (now - previous).max(0.0),
            None => 0.0,
        };

        if self.lag_ms <= 0.0 {
            self.current = self.target;
            return self.current;
        }

        // four time constants per lag leaves under 2% of the gap
        let follow = 1.0 - (-4.0 * elapsed / self.lag_ms).exp();
        self.current += (self.target - self.current) * follow;
        if (self.target - self.current).abs() < SNAP {
            self.current = self.target;
        }
        self.current
    }
}
