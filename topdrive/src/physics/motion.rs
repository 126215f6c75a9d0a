use super::vehicle::VehicleState;
use super::VehicleParameters;
use super::DRIFT_TURN_MULTIPLIER;
use super::TRACTION_ALIGN_FACTOR;
use super::TRACTION_ALIGN_FACTOR_DRIFTING;
use super::TRACTION_MIN_SPEED;
use crate::input::InputState;

/// Advances heading, velocity and position by one tick. Collisions are resolved separately.
pub fn integrate(vehicle: &mut VehicleState, parameters: &VehicleParameters, input: &InputState) {
    vehicle.drifting = input.drift;

    apply_throttle(vehicle, parameters, input);
    clamp_speed(vehicle, parameters.max_speed);
    apply_steering(vehicle, parameters, input);

    vehicle.velocity *= 1.0 - parameters.friction;

    apply_traction(vehicle);
    vehicle.position += vehicle.velocity;
}

fn apply_throttle(vehicle: &mut VehicleState, parameters: &VehicleParameters, input: &InputState) {
    let forward = vehicle.forward();

    if input.accelerate {
        vehicle.velocity += forward * parameters.accel;
    }

    // Braking past zero speed turns into reversing
    if input.brake {
        vehicle.velocity -= forward * parameters.brake;
    }
}

pub fn clamp_speed(vehicle: &mut VehicleState, max_speed: f32) {
    let speed = vehicle.speed();

    if speed > max_speed {
        vehicle.velocity *= max_speed / speed;
    }
}

fn apply_steering(vehicle: &mut VehicleState, parameters: &VehicleParameters, input: &InputState) {
    let speed_factor = (vehicle.forward_speed().abs() / parameters.max_speed).max(0.0);
    let mut turn = parameters.turn_speed * speed_factor;

    if vehicle.drifting {
        turn *= DRIFT_TURN_MULTIPLIER;
    }

    if input.steer_left {
        vehicle.heading -= turn;
    }

    if input.steer_right {
        vehicle.heading += turn;
    }
}

fn apply_traction(vehicle: &mut VehicleState) {
    let speed = vehicle.speed();
    if speed <= TRACTION_MIN_SPEED {
        return;
    }

    let desired = vehicle.forward() * speed;
    let align = if vehicle.drifting { TRACTION_ALIGN_FACTOR_DRIFTING } else { TRACTION_ALIGN_FACTOR };

    vehicle.velocity += (desired - vehicle.velocity) * align;
}
