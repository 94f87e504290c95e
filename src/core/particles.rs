use crate::constants::{
    PARTICLE_DEPTH_MAX, PARTICLE_DEPTH_MIN, PARTICLE_SPAN, PARTICLE_SPEED_MIN,
    PARTICLE_SPEED_RANGE,
};
use glam::Vec3;
use rand::prelude::*;

/// A drifting point with an upward speed fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    speed: f32,
}

impl Particle {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self { position, speed }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let position = Vec3::new(
            random_horizontal(rng),
            rng.gen_range(-PARTICLE_SPAN..PARTICLE_SPAN),
            random_depth(rng),
        );
        let speed = PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_RANGE;
        Self { position, speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Rise by one step; past the top, re-enter at the bottom with a fresh
    /// horizontal and depth coordinate. Returns whether it recycled.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.position.y += self.speed;
        if self.position.y > PARTICLE_SPAN {
            self.position.y = -PARTICLE_SPAN;
            self.position.x = random_horizontal(rng);
            self.position.z = random_depth(rng);
            true
        } else {
            false
        }
    }
}

#[inline]
fn random_horizontal<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(-PARTICLE_SPAN..=PARTICLE_SPAN)
}

#[inline]
fn random_depth<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(PARTICLE_DEPTH_MIN..PARTICLE_DEPTH_MAX)
}

/// Fixed-size pool of ambient particles, recycled in place.
pub struct ParticlePool<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticlePool<StdRng> {
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::new(count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticlePool<R> {
    pub fn new(count: usize, mut rng: R) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(&mut rng)).collect();
        Self { particles, rng }
    }

    pub fn from_particles(particles: Vec<Particle>, rng: R) -> Self {
        Self { particles, rng }
    }

    /// Advance every particle one frame; returns how many were recycled.
    pub fn update(&mut self) -> usize {
        let mut recycled = 0;
        for p in &mut self.particles {
            if p.advance(&mut self.rng) {
                recycled += 1;
            }
        }
        recycled
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
