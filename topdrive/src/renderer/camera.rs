use crate::utils::math::F32MathUtils;
use glam::Mat4;
use glam::Vec2;
use glam::Vec3;

/// Viewport into the world with the origin in the left-top corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub size: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn get_center_position(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Centers the viewport on `target` without showing anything past the world edges.
    /// A viewport larger than the world sticks to the left-top corner.
    pub fn follow(&mut self, target: Vec2, world_size: Vec2) {
        let position = target - self.size / 2.0;
        let max = world_size - self.size;

        self.position = Vec2::new(position.x.clamp_lenient(0.0, max.x), position.y.clamp_lenient(0.0, max.y));
    }

    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.size.x, self.size.y, 0.0, 0.1, 100.0)
    }

    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.position.x, -self.position.y, -1.0))
    }

    pub fn from_window_to_world_coordinates(&self, position: Vec2) -> Vec2 {
        position + self.position
    }

    pub fn from_world_to_window_coordinates(&self, position: Vec2) -> Vec2 {
        position - self.position
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const WORLD: Vec2 = Vec2::new(2000.0, 1400.0);

    #[test]
    fn follows_target_in_the_middle() {
        let mut camera = Camera::new(Vec2::ZERO, Vec2::new(800.0, 600.0));
        camera.follow(Vec2::new(1000.0, 700.0), WORLD);

        assert_eq!(camera.position, Vec2::new(600.0, 400.0));
        assert_eq!(camera.get_center_position(), Vec2::new(1000.0, 700.0));
    }

    #[test]
    fn stops_at_world_edges() {
        let mut camera = Camera::new(Vec2::ZERO, Vec2::new(800.0, 600.0));

        camera.follow(Vec2::new(50.0, 1390.0), WORLD);
        assert_eq!(camera.position, Vec2::new(0.0, 800.0));

        camera.follow(Vec2::new(1990.0, 20.0), WORLD);
        assert_eq!(camera.position, Vec2::new(1200.0, 0.0));
    }

    #[test]
    fn oversized_viewport_sticks_to_origin() {
        let mut camera = Camera::new(Vec2::ZERO, Vec2::new(2560.0, 1440.0));
        camera.follow(Vec2::new(1500.0, 900.0), WORLD);

        assert_eq!(camera.position, Vec2::ZERO);
    }

    #[test]
    fn coordinates_round_trip_through_camera() {
        let camera = Camera::new(Vec2::new(600.0, 400.0), Vec2::new(800.0, 600.0));
        let world = Vec2::new(1000.0, 700.0);
        let window = camera.from_world_to_window_coordinates(world);

        assert_eq!(window, Vec2::new(400.0, 300.0));
        assert_eq!(camera.from_window_to_world_coordinates(window), world);
    }

    #[test]
    fn matrices_map_viewport_to_clip_space() {
        let camera = Camera::new(Vec2::new(600.0, 400.0), Vec2::new(800.0, 600.0));
        let matrix = camera.get_projection_matrix() * camera.get_view_matrix();

        let left_top = matrix.project_point3(Vec3::new(600.0, 400.0, 0.0));
        let right_bottom = matrix.project_point3(Vec3::new(1400.0, 1000.0, 0.0));

        assert_abs_diff_eq!(left_top.x, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(left_top.y, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(right_bottom.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(right_bottom.y, -1.0, epsilon = 1e-5);
    }
}
