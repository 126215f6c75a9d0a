pub mod collision;
pub mod motion;
pub mod simulation;
pub mod vehicle;

/// Turn rate multiplier while the drift intent is held.
pub const DRIFT_TURN_MULTIPLIER: f32 = 1.8;

/// Fraction of the heading/velocity mismatch removed per tick.
pub const TRACTION_ALIGN_FACTOR: f32 = 0.12;
pub const TRACTION_ALIGN_FACTOR_DRIFTING: f32 = 0.02;

/// Below this speed the traction step is skipped.
pub const TRACTION_MIN_SPEED: f32 = 0.01;

/// Velocity multiplier applied on wall hits, lossy and reversing.
pub const BOUNCE_FACTOR: f32 = -0.3;

/// How much of the inward normal velocity is removed on obstacle impact.
pub const OBSTACLE_REBOUND_FACTOR: f32 = 1.5;

pub const MIN_CONTACT_DISTANCE: f32 = 0.001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleParameters {
    pub max_speed: f32,
    pub accel: f32,
    pub brake: f32,
    pub friction: f32,
    pub turn_speed: f32,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self { max_speed: 6.0, accel: 0.18, brake: 0.35, friction: 0.03, turn_speed: 0.035, radius: 18.0, width: 36.0, height: 22.0 }
    }
}
