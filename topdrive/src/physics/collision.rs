use super::vehicle::VehicleState;
use super::BOUNCE_FACTOR;
use super::MIN_CONTACT_DISTANCE;
use super::OBSTACLE_REBOUND_FACTOR;
use crate::world::Obstacle;
use crate::world::World;

/// Keeps the bounding circle inside the world, returns the number of walls hit.
pub fn resolve_walls(vehicle: &mut VehicleState, radius: f32, world: &World) -> usize {
    let mut hits = 0;

    if vehicle.position.x - radius < 0.0 {
        vehicle.position.x = radius;
        vehicle.velocity.x *= BOUNCE_FACTOR;
        hits += 1;
    }

    if vehicle.position.y - radius < 0.0 {
        vehicle.position.y = radius;
        vehicle.velocity.y *= BOUNCE_FACTOR;
        hits += 1;
    }

    if vehicle.position.x + radius > world.size.x {
        vehicle.position.x = world.size.x - radius;
        vehicle.velocity.x *= BOUNCE_FACTOR;
        hits += 1;
    }

    if vehicle.position.y + radius > world.size.y {
        vehicle.position.y = world.size.y - radius;
        vehicle.velocity.y *= BOUNCE_FACTOR;
        hits += 1;
    }

    hits
}

/// Pushes the circle out of a single rectangle along the contact normal. Returns true on contact.
pub fn resolve_obstacle(vehicle: &mut VehicleState, radius: f32, obstacle: &Obstacle) -> bool {
    let nearest = obstacle.nearest_point(vehicle.position);
    let delta = vehicle.position - nearest;
    let distance_squared = delta.length_squared();

    if distance_squared >= radius * radius {
        return false;
    }

    // Center on or inside the rectangle gives no usable direction, delta stays zero then
    let mut distance = distance_squared.sqrt();
    if distance == 0.0 {
        distance = MIN_CONTACT_DISTANCE;
    }

    let normal = delta / distance;
    vehicle.position += normal * (radius - distance);

    let velocity_along_normal = vehicle.velocity.dot(normal);
    if velocity_along_normal < 0.0 {
        vehicle.velocity -= normal * velocity_along_normal * OBSTACLE_REBOUND_FACTOR;
    } else {
        vehicle.velocity *= BOUNCE_FACTOR;
    }

    true
}

/// Resolves every obstacle once, in world order, each against the already corrected position.
/// Adjacent obstacles may push the vehicle back into a previously resolved one within the same tick.
pub fn resolve_obstacles(vehicle: &mut VehicleState, radius: f32, world: &World) -> usize {
    let mut hits = 0;

    for obstacle in &world.obstacles {
        if resolve_obstacle(vehicle, radius, obstacle) {
            hits += 1;
        }
    }

    hits
}
