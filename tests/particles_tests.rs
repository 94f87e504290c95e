// Host-side tests for the ambient particle field.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod core {
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::config::{DeviceClass, SceneConfig};
use crate::core::particles::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_bounds(p: Vec3) -> bool {
    (-15.0..=15.0).contains(&p.x) && (-15.0..=15.0).contains(&p.y) && (-15.0..5.0).contains(&p.z)
}

#[test]
fn particle_past_the_top_recycles_on_the_same_tick() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut p = Particle::new(Vec3::new(3.0, 14.99, -2.0), 0.02);
    assert!(p.advance(&mut rng));
    assert_eq!(p.position.y, -15.0);
    assert!((-15.0..=15.0).contains(&p.position.x));
    assert!((-15.0..5.0).contains(&p.position.z));
    // speed survives the recycle
    assert_eq!(p.speed(), 0.02);
}

#[test]
fn particle_below_the_top_just_rises() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut p = Particle::new(Vec3::new(3.0, 14.99, -2.0), 0.005);
    assert!(!p.advance(&mut rng));
    assert!((p.position.y - 14.995).abs() < 1e-5);
    assert_eq!(p.position.x, 3.0);
    assert_eq!(p.position.z, -2.0);
}

#[test]
fn spawned_particles_start_inside_the_volume() {
    let pool = ParticlePool::with_seed(500, 42);
    assert_eq!(pool.len(), 500);
    for p in pool.particles() {
        assert!(in_bounds(p.position), "{:?}", p.position);
        assert!((0.003..0.013).contains(&p.speed()), "speed {}", p.speed());
    }
}

#[test]
fn volume_invariant_holds_over_many_ticks() {
    let mut pool = ParticlePool::with_seed(100, 7);
    let mut recycled = 0;
    for _ in 0..12_000 {
        recycled += pool.update();
        assert!(pool.positions().all(in_bounds));
    }
    // the slowest particle covers 36 units in 12k ticks, so all have wrapped
    assert!(recycled >= pool.len());
}

#[test]
fn update_reports_recycled_count() {
    let particles = vec![
        Particle::new(Vec3::new(0.0, 14.999, 0.0), 0.01),
        Particle::new(Vec3::new(1.0, 0.0, 0.0), 0.01),
        Particle::new(Vec3::new(2.0, 14.995, -1.0), 0.012),
    ];
    let mut pool = ParticlePool::from_particles(particles, StdRng::seed_from_u64(3));
    assert_eq!(pool.update(), 2);
    assert_eq!(pool.particles()[1].position, Vec3::new(1.0, 0.01, 0.0));
    assert_eq!(pool.update(), 0);
}

#[test]
fn empty_pool_is_a_no_op() {
    let mut pool = ParticlePool::with_seed(0, 9);
    assert!(pool.is_empty());
    assert_eq!(pool.update(), 0);
    assert_eq!(pool.positions().count(), 0);
}

#[test]
fn pool_size_follows_device_class() {
    let mobile = SceneConfig::detect(375.0, false);
    let desktop = SceneConfig::detect(1920.0, false);
    assert_eq!(mobile.device, DeviceClass::Mobile);
    assert_eq!(ParticlePool::with_seed(mobile.particle_count, 1).len(), 40);
    assert_eq!(ParticlePool::with_seed(desktop.particle_count, 1).len(), 100);
}
