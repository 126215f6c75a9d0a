use super::Obstacle;
use super::World;
use crate::utils::json::*;
use anyhow::Context;
use anyhow::Result;
use glam::Vec2;
use std::fs;

pub fn load_world_file(path: &str) -> Result<World> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read world file {}", path))?;
    load_world(&content).with_context(|| format!("Failed to load world file {}", path))
}

pub fn load_world(content: &str) -> Result<World> {
    let data = parse_object(content)?;
    let width = read_value::<f64>(&data, "width")? as f32;
    let height = read_value::<f64>(&data, "height")? as f32;
    let mut obstacles = Vec::new();

    for obstacle in read_array(&data, "obstacles")? {
        let position = Vec2::new(read_value::<f64>(obstacle, "x")? as f32, read_value::<f64>(obstacle, "y")? as f32);
        let size = Vec2::new(read_value::<f64>(obstacle, "w")? as f32, read_value::<f64>(obstacle, "h")? as f32);

        obstacles.push(Obstacle::new(position, size));
    }

    World::new(Vec2::new(width, height), obstacles)
}
