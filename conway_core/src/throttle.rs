// throttle.rs - Counter-based step cadence
//
// The host calls `tick` once per loop iteration (once per frame in the
// window). Pacing is in ticks, not wall-clock time.

#[derive(Clone, Debug)]
pub struct Throttle {
    delay: u32,
    counter: u32,
}

impl Throttle {
    pub fn new(delay: u32) -> Self {
        Self { delay, counter: 0 }
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
        self.counter = self.counter.min(delay);
    }

    /// Count one tick; true when a generation step is due.
    ///
    /// Fires once the counter has reached `delay`, then starts over, so a
    /// step happens every `delay + 1` ticks.
    pub fn tick(&mut self) -> bool {
        if self.counter >= self.delay {
            self.counter = 0;
            true
        } else {
            self.counter += 1;
            false
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
