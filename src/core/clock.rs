use instant::Instant;

/// Elapsed seconds since the animation loop started. Never reset while running.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::start()
    }
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.duration_since(self.start).as_secs_f32()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }
}
