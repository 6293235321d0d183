//! Firework particle simulation.
//!
//! Coordinates are Cocoa-style (origin bottom-left, y up). Physics
//! constants are expressed per 60 Hz frame; [`FireworksShow::step`] scales
//! them by the elapsed time so a late timer tick does not slow the show.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: (f64, f64, f64),
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy)]
struct Launch {
    at: f64,
    x: f64,
    y: f64,
}

/// One run of the fireworks overlay.
#[derive(Debug)]
pub struct FireworksShow {
    particles: Vec<Particle>,
    pending: Vec<Launch>,
    elapsed: f64,
    rng: StdRng,
}

impl FireworksShow {
    /// Schedule the bursts for an overlay of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Deterministic show for tests.
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, _height: f64, rng: StdRng) -> Self {
        let pending = FIREWORK_LAUNCH_FRACTIONS
            .iter()
            .enumerate()
            .map(|(i, frac)| Launch {
                at: i as f64 * FIREWORK_LAUNCH_STAGGER,
                x: width * frac,
                y: 0.0,
            })
            .collect();

        Self {
            particles: Vec::new(),
            pending,
            elapsed: 0.0,
            rng,
        }
    }

    /// Advance by `dt` seconds: fire due bursts, then move, pull down and
    /// fade every particle. Transparent particles are dropped.
    pub fn step(&mut self, dt: f64) {
        self.elapsed += dt;

        let now = self.elapsed;
        let (due, later): (Vec<Launch>, Vec<Launch>) =
            self.pending.iter().partition(|l| l.at <= now);
        self.pending = later;
        for launch in due {
            self.burst(launch.x, launch.y);
        }

        let frames = dt / FIREWORK_FRAME_INTERVAL;
        for p in &mut self.particles {
            p.x += p.vx * frames;
            p.y += p.vy * frames;
            p.vy -= FIREWORK_GRAVITY * frames;
            p.opacity -= FIREWORK_FADE * frames;
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }

    fn burst(&mut self, x: f64, y: f64) {
        self.particles.reserve(FIREWORK_PARTICLES_PER_BURST);
        for _ in 0..FIREWORK_PARTICLES_PER_BURST {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(FIREWORK_MIN_SPEED..FIREWORK_MAX_SPEED);
            let color = FIREWORK_PALETTE[self.rng.gen_range(0..FIREWORK_PALETTE.len())];
            let size = self.rng.gen_range(FIREWORK_MIN_SIZE..FIREWORK_MAX_SIZE);
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed * FIREWORK_VERTICAL_BOOST,
                color,
                size,
                opacity: 1.0,
            });
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The overlay is hidden once the show has run its course.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= FIREWORK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_burst_fires_on_first_tick() {
        let mut show = FireworksShow::with_seed(1000.0, 800.0, 1);
        assert!(show.particles().is_empty());
        show.step(FIREWORK_FRAME_INTERVAL);
        assert_eq!(show.particles().len(), FIREWORK_PARTICLES_PER_BURST);
    }

    #[test]
    fn bursts_are_staggered() {
        let mut show = FireworksShow::with_seed(1000.0, 800.0, 2);
        // 0.25s covers launches at 0.0, 0.1 and 0.2
        for _ in 0..15 {
            show.step(FIREWORK_FRAME_INTERVAL);
        }
        assert_eq!(show.particles().len(), 3 * FIREWORK_PARTICLES_PER_BURST);
    }

    #[test]
    fn particles_start_inside_ranges() {
        let mut show = FireworksShow::with_seed(1000.0, 800.0, 3);
        show.step(0.0);
        for p in show.particles() {
            assert!(p.size >= FIREWORK_MIN_SIZE && p.size < FIREWORK_MAX_SIZE);
            assert!(FIREWORK_PALETTE.contains(&p.color));
            assert!((p.x - 200.0).abs() < 1e-9);
        }
    }
}
