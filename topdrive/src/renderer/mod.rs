use anyhow::Result;
use frame::Frame;
use glam::Vec2;

pub mod camera;
pub mod frame;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
}

/// Output collaborator, consumes captured frames and never touches the simulation.
pub trait Renderer {
    fn set_viewport(&mut self, size: Vec2);
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}

impl Edge {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}
