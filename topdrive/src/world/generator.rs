use super::Obstacle;
use super::World;
use crate::utils::math::F32MathUtils;
use anyhow::Result;
use fastrand::Rng;
use glam::Vec2;
use log::debug;

pub struct WorldGenerator {
    pub size: Vec2,
    pub count: usize,
    pub min_side: f32,
    pub side_variation: f32,
    pub spawn_clearance: f32,
    pub spawn_offset: Vec2,
    rng: Rng,
}

impl WorldGenerator {
    pub fn new(size: Vec2, count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        Self { size, count, min_side: 40.0, side_variation: 120.0, spawn_clearance: 250.0, spawn_offset: Vec2::new(300.0, 150.0), rng }
    }

    pub fn generate(&mut self) -> Result<World> {
        let spawn = self.size / 2.0;
        let mut obstacles = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            // Snapped to whole units so the bounds check stays exact
            let size = Vec2::new(self.min_side + self.rng.f32() * self.side_variation, self.min_side + self.rng.f32() * self.side_variation);
            let size = size.floor().min(self.size.floor());
            let range = (self.size.floor() - size).max(Vec2::ZERO);
            let mut position = Vec2::new(self.rng.f32() * range.x, self.rng.f32() * range.y).floor();

            // Keep the spawn point free, the shifted rectangle still has to fit into the world
            if position.distance(spawn) < self.spawn_clearance {
                position += self.spawn_offset;
                position = Vec2::new(position.x.clamp_lenient(0.0, range.x), position.y.clamp_lenient(0.0, range.y));
            }

            debug!("Obstacle generated at {:?} with size {:?}", position, size);
            obstacles.push(Obstacle::new(position, size));
        }

        World::new(self.size, obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count_within_bounds() {
        let size = Vec2::new(2000.0, 1400.0);
        let world = WorldGenerator::new(size, 20, Some(7)).generate().unwrap();

        assert_eq!(world.size, size);
        assert_eq!(world.obstacles.len(), 20);

        for obstacle in &world.obstacles {
            assert!(obstacle.size.x >= 40.0 && obstacle.size.x <= 160.0);
            assert!(obstacle.size.y >= 40.0 && obstacle.size.y <= 160.0);
            assert!(obstacle.position.x >= 0.0 && obstacle.position.y >= 0.0);
            assert!(obstacle.position.x + obstacle.size.x <= size.x);
            assert!(obstacle.position.y + obstacle.size.y <= size.y);
        }
    }

    #[test]
    fn same_seed_gives_same_world() {
        let size = Vec2::new(2000.0, 1400.0);
        let a = WorldGenerator::new(size, 20, Some(42)).generate().unwrap();
        let b = WorldGenerator::new(size, 20, Some(42)).generate().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn small_world_keeps_obstacles_inside() {
        let size = Vec2::new(300.0, 200.0);

        for seed in 0..50 {
            let world = WorldGenerator::new(size, 10, Some(seed)).generate().unwrap();
            for obstacle in &world.obstacles {
                assert!(obstacle.position.x + obstacle.size.x <= size.x);
                assert!(obstacle.position.y + obstacle.size.y <= size.y);
            }
        }
    }

    #[test]
    fn zero_obstacles_is_valid() {
        let world = WorldGenerator::new(Vec2::new(500.0, 500.0), 0, None).generate().unwrap();
        assert!(world.obstacles.is_empty());
    }
}
