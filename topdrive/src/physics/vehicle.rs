use crate::utils::math::Vec2MathUtils;
use glam::Vec2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VehicleState {
    pub position: Vec2,
    pub heading: f32,
    pub velocity: Vec2,
    pub drifting: bool,
}

impl VehicleState {
    pub fn new(position: Vec2) -> Self {
        Self { position, heading: 0.0, velocity: Vec2::ZERO, drifting: false }
    }

    /// Unit vector the body is pointing at.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle_unit(self.heading)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Signed speed along the heading, negative when reversing.
    pub fn forward_speed(&self) -> f32 {
        self.velocity.dot(self.forward())
    }
}
