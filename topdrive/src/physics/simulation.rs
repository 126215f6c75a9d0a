use super::collision;
use super::motion;
use super::vehicle::VehicleState;
use super::VehicleParameters;
use crate::input::InputState;
use crate::world::World;
use log::debug;
use log::info;
use std::rc::Rc;

pub struct Simulation {
    pub vehicle: VehicleState,
    pub parameters: VehicleParameters,
    pub ticks: u64,
    world: Rc<World>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub wall_contacts: usize,
    pub obstacle_contacts: usize,
}

impl Simulation {
    pub fn new(world: Rc<World>, parameters: VehicleParameters) -> Self {
        let vehicle = VehicleState::new(world.center());
        Self { vehicle, parameters, ticks: 0, world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tick(&mut self, input: &InputState) -> TickReport {
        motion::integrate(&mut self.vehicle, &self.parameters, input);

        let radius = self.parameters.radius;
        let report = TickReport {
            wall_contacts: collision::resolve_walls(&mut self.vehicle, radius, &self.world),
            obstacle_contacts: collision::resolve_obstacles(&mut self.vehicle, radius, &self.world),
        };

        if report.contacts() > 0 {
            debug!("Tick {}: {} wall and {} obstacle contacts at {:?}", self.ticks, report.wall_contacts, report.obstacle_contacts, self.vehicle.position);
        }

        self.ticks += 1;
        report
    }

    pub fn reset(&mut self) {
        self.vehicle = VehicleState::new(self.world.center());
        info!("Vehicle reset to {:?}", self.vehicle.position);
    }
}

impl TickReport {
    pub fn contacts(&self) -> usize {
        self.wall_contacts + self.obstacle_contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Obstacle;
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    fn simulation(obstacles: Vec<Obstacle>) -> Simulation {
        let world = World::new(Vec2::new(2000.0, 1400.0), obstacles).unwrap();
        Simulation::new(Rc::new(world), VehicleParameters::default())
    }

    #[test]
    fn starts_at_world_center() {
        let simulation = simulation(Vec::new());

        assert_eq!(simulation.vehicle, VehicleState::new(Vec2::new(1000.0, 700.0)));
        assert_eq!(simulation.ticks, 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut simulation = simulation(Vec::new());
        let input = InputState { accelerate: true, steer_right: true, drift: true, ..Default::default() };

        for _ in 0..120 {
            simulation.tick(&input);
        }
        assert_ne!(simulation.vehicle.position, Vec2::new(1000.0, 700.0));

        simulation.reset();
        let once = simulation.vehicle;
        simulation.reset();

        assert_eq!(simulation.vehicle, once);
        assert_eq!(once.position, Vec2::new(1000.0, 700.0));
        assert_eq!(once.velocity, Vec2::ZERO);
        assert_eq!(once.heading, 0.0);
        assert!(!once.drifting);
        assert_eq!(simulation.world().size, Vec2::new(2000.0, 1400.0));
    }

    #[test]
    fn left_wall_crossing_bounces_back() {
        let mut simulation = simulation(Vec::new());
        simulation.vehicle.position = Vec2::new(20.0, 700.0);
        simulation.vehicle.velocity = Vec2::new(-5.0, 0.0);
        simulation.vehicle.heading = std::f32::consts::PI;

        let report = simulation.tick(&InputState::default());

        // Heading matches the velocity so friction is the only loss before the wall
        let speed = 5.0 * 0.97;
        assert_eq!(report.wall_contacts, 1);
        assert_eq!(simulation.vehicle.position.x, 18.0);
        assert_abs_diff_eq!(simulation.vehicle.velocity.x, 0.3 * speed, epsilon = 1e-4);
        assert_eq!(simulation.ticks, 1);
    }

    #[test]
    fn obstacle_contact_is_reported() {
        let mut simulation = simulation(vec![Obstacle::new(Vec2::new(1020.0, 650.0), Vec2::new(100.0, 100.0))]);
        simulation.vehicle.velocity = Vec2::new(6.0, 0.0);

        let report = simulation.tick(&InputState { accelerate: true, ..Default::default() });

        assert_eq!(report, TickReport { wall_contacts: 0, obstacle_contacts: 1 });
        assert!(simulation.vehicle.velocity.x < 0.0);
        assert!(simulation.vehicle.position.x <= 1020.0 - 18.0 + 1e-3);
    }
}
