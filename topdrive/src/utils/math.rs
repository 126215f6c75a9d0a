use glam::Vec2;
use std::f32::consts;

pub trait F32MathUtils {
    fn normalize_angle(&self) -> f32;
    fn clamp_lenient(&self, min: f32, max: f32) -> f32;
}

pub trait Vec2MathUtils {
    fn from_angle_unit(angle: f32) -> Vec2;
    fn clamp_to_rect(&self, position: Vec2, size: Vec2) -> Vec2;
}

impl F32MathUtils for f32 {
    fn normalize_angle(&self) -> f32 {
        let angle = self.rem_euclid(consts::TAU);

        if angle > consts::PI {
            angle - consts::TAU
        } else {
            angle
        }
    }

    /// Unlike [f32::clamp] this never panics, the lower bound wins when `min > max`.
    fn clamp_lenient(&self, min: f32, max: f32) -> f32 {
        self.min(max).max(min)
    }
}

impl Vec2MathUtils for Vec2 {
    fn from_angle_unit(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    fn clamp_to_rect(&self, position: Vec2, size: Vec2) -> Vec2 {
        let max = position + size;
        Vec2::new(self.x.clamp_lenient(position.x, max.x), self.y.clamp_lenient(position.y, max.y))
    }
}
