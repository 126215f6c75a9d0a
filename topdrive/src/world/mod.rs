use crate::utils::math::Vec2MathUtils;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use log::info;

pub mod generator;
pub mod loader;

/// Static bounded playfield. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub size: Vec2,
    pub obstacles: Vec<Obstacle>,
}

/// Axis-aligned rectangle, `position` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Vec2,
    pub size: Vec2,
}

impl World {
    pub fn new(size: Vec2, obstacles: Vec<Obstacle>) -> Result<Self> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            bail!("Invalid world size {:?}", size);
        }

        for (index, obstacle) in obstacles.iter().enumerate() {
            if !obstacle.position.is_finite() || !obstacle.size.is_finite() || obstacle.size.x <= 0.0 || obstacle.size.y <= 0.0 {
                bail!("Obstacle {} has invalid geometry {:?}", index, obstacle);
            }

            let max = obstacle.position + obstacle.size;
            if obstacle.position.x < 0.0 || obstacle.position.y < 0.0 || max.x > size.x || max.y > size.y {
                bail!("Obstacle {} lies outside the world bounds {:?}", index, size);
            }
        }

        info!("World {}x{} created with {} obstacles", size.x, size.y, obstacles.len());
        Ok(Self { size, obstacles })
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= 0.0 && center.y - radius >= 0.0 && center.x + radius <= self.size.x && center.y + radius <= self.size.y
    }
}

impl Obstacle {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        point.clamp_to_rect(self.position, self.size)
    }

    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        self.nearest_point(center).distance_squared(center) < radius * radius
    }
}
