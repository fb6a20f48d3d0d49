// Value-debounce for noisy per-frame classification. Holds the previously
// emitted value until the minimum interval has elapsed, then adopts the
// latest input and resets the clock. Intermediate values are dropped, never
// queued.

use instant::Instant;

pub struct ThrottleGate<T> {
    emitted: Option<T>,
    last_emit_ms: f64,
    min_interval_ms: f64,
    clock_zero: Instant,
}

impl<T: Copy + PartialEq> ThrottleGate<T> {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            emitted: None,
            last_emit_ms: 0.0,
            min_interval_ms,
            clock_zero: Instant::now(),
        }
    }

    /// Feed the latest raw value and get back the gated one, using wall time.
    pub fn update(&mut self, latest: T) -> T {
        let now_ms = self.clock_zero.elapsed().as_secs_f64() * 1000.0;
        self.update_at(latest, now_ms)
    }

    /// Timestamp-explicit variant; `now_ms` must be monotonic. The first call
    /// always emits.
    pub fn update_at(&mut self, latest: T, now_ms: f64) -> T {
        let due = self.emitted.is_none() || now_ms - self.last_emit_ms >= self.min_interval_ms;
        if due {
            self.emitted = Some(latest);
            self.last_emit_ms = now_ms;
        }
        self.emitted.unwrap_or(latest)
    }

    pub fn emitted(&self) -> Option<T> {
        self.emitted
    }
}
