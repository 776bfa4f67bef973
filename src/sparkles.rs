//! Decorative sparkle and confetti particles
//!
//! A [`SparkleField`] integrates a set of drifting particles each frame
//! and blits one sprite per particle, cycling through the sprite list
//! with the particle's age so sparkles twinkle (the embedder may include
//! fully transparent textures in the cycle for the dark phase). The
//! field owns its own pseudo-random generator with a fixed seed,
//! deliberately decoupled from the quiz's lifeline randomness: restarts
//! replay the identical background.

use crate::render::{Canvas, Point, TextureId};

/// Fixed seed of the particle generator
const FIELD_SEED: u64 = 128;

/// A set of drifting decorative particles
#[derive(Debug)]
pub struct SparkleField {
    rng: fastrand::Rng,
    sprites: Vec<TextureId>,
    width: f32,
    height: f32,
    xs: Vec<f32>,
    ys: Vec<f32>,
    dxs: Vec<f32>,
    dys: Vec<f32>,
    age: Vec<f32>,
    life_dt: Vec<f32>,
}

impl SparkleField {
    /// Creates a particle field covering the given bounds
    ///
    /// With `gravity` set, every particle falls at a constant rate
    /// (confetti); otherwise particles drift in both axes (sparkles).
    pub fn new(sprites: Vec<TextureId>, count: usize, width: u32, height: u32, gravity: bool) -> Self {
        let mut rng = fastrand::Rng::with_seed(FIELD_SEED);
        let width = width as f32;
        let height = height as f32;

        let xs = (0..count).map(|_| rng.f32() * width).collect();
        let ys = (0..count).map(|_| rng.f32() * height).collect();
        let age = (0..count).map(|_| rng.f32()).collect();
        let dxs = (0..count).map(|_| 0.5 - rng.f32()).collect();
        let dys = if gravity {
            vec![1.0; count]
        } else {
            (0..count).map(|_| 0.5 - rng.f32()).collect()
        };

        Self {
            rng,
            sprites,
            width,
            height,
            xs,
            ys,
            dxs,
            dys,
            age,
            life_dt: vec![0.01; count],
        }
    }

    /// Number of particles in the field
    pub fn count(&self) -> usize {
        self.xs.len()
    }

    /// Integrates one frame of particle motion
    ///
    /// Positions wrap around the field bounds; velocities and aging
    /// rates receive a small random jitter each frame.
    pub fn advance(&mut self) {
        for i in 0..self.xs.len() {
            self.xs[i] = (self.xs[i] + self.dxs[i]).rem_euclid(self.width);
            self.ys[i] = (self.ys[i] + self.dys[i]).rem_euclid(self.height);
            self.age[i] += self.life_dt[i];

            self.dxs[i] += 0.01 * (0.5 - self.rng.f32());
            self.dys[i] += 0.01 * (0.5 - self.rng.f32());
            self.life_dt[i] += 0.001 * (0.5 - self.rng.f32());
        }
    }

    /// Blits every particle at its current position
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        if self.sprites.is_empty() {
            return;
        }
        let cycle = self.sprites.len() as f32;
        for i in 0..self.xs.len() {
            let phase = (self.age[i].sin() * cycle) as isize;
            let sprite = phase.rem_euclid(self.sprites.len() as isize) as usize;
            canvas.blit(
                self.sprites[sprite],
                Point::new(self.xs[i] as i32, self.ys[i] as i32),
            );
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn field() -> SparkleField {
        let sprites = (0..4).map(TextureId).collect();
        SparkleField::new(sprites, 16, 640, 480, false)
    }

    #[test]
    fn test_field_is_deterministic_under_its_fixed_seed() {
        let mut a = field();
        let mut b = field();
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.xs, b.xs);
        assert_eq!(a.ys, b.ys);
        assert_eq!(a.age, b.age);
    }

    #[test]
    fn test_positions_stay_within_bounds() {
        let mut field = field();
        for _ in 0..500 {
            field.advance();
        }
        assert!(field.xs.iter().all(|&x| (0.0..640.0).contains(&x)));
        assert!(field.ys.iter().all(|&y| (0.0..480.0).contains(&y)));
    }

    #[test]
    fn test_gravity_pulls_every_particle_down() {
        let sprites = vec![TextureId(0)];
        let field = SparkleField::new(sprites, 8, 640, 480, true);
        assert!(field.dys.iter().all(|&dy| dy == 1.0));
    }

    #[test]
    fn test_count_matches_construction() {
        assert_eq!(field().count(), 16);
    }
}
