use std::time::Instant;

/// Tracks elapsed time between successive stages of a run.
pub struct TimedContext {
    last_checkpoint: Instant
}

impl TimedContext {
    pub fn new() -> Self {
        Self { last_checkpoint: Instant::now() }
    }

    /// Seconds since the previous checkpoint (or since creation).
    pub fn checkpoint(&mut self) -> f32 {
        let new_checkpoint = Instant::now();
        let elapsed = new_checkpoint.duration_since(self.last_checkpoint).as_secs_f32();
        self.last_checkpoint = new_checkpoint;

        elapsed
    }
}

impl Default for TimedContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f`, returning its result and the seconds it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f32) {
    let start = Instant::now();
    let result = f();

    (result, start.elapsed().as_secs_f32())
}
