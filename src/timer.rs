/// Repeating countdown driven by frame delta time.
///
/// An instance holds at most one pending expiry; `restart` cancels the
/// current one before scheduling the next, and `cancel` drops it outright.
pub struct RepeatingTimer {
    period: f32,
    elapsed: f32,
    active: bool,
}

impl RepeatingTimer {
    pub fn new(period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self {
            period,
            elapsed: 0.0,
            active: false,
        }
    }

    // Cancel any pending expiry, then schedule a fresh full period.
    pub fn restart(&mut self) {
        self.cancel();
        self.elapsed = 0.0;
        self.active = true;
    }

    // Drop the pending expiry without scheduling a new one.
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt` seconds and return how many times the timer expired.
    /// A frame longer than the period yields more than one expiry, keeping
    /// long stalls consistent with a free-running interval.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.elapsed += dt;
        let mut fires = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fires += 1;
        }
        fires
    }
}
