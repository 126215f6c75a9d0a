use super::camera::Camera;
use super::Edge;
use crate::physics::simulation::Simulation;
use crate::physics::VehicleParameters;
use crate::utils::color::Vec4Color;
use crate::utils::math::F32MathUtils;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;

pub const GRID_SIZE: f32 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub grid: Vec4,
    pub border: Vec4,
    pub obstacle_fill: Vec4,
    pub obstacle_stroke: Vec4,
    pub vehicle_body: Vec4,
    pub vehicle_roof: Vec4,
    pub vehicle_indicator: Vec4,
    pub hud_background: Vec4,
    pub hud_text: Vec4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub position: Vec2,
    pub size: Vec2,
    pub fill: Option<Vec4>,
    pub stroke: Option<Stroke>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Vec4,
    pub width: f32,
}

/// Vehicle transform plus body parts in vehicle space, x pointing forward.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSprite {
    pub position: Vec2,
    pub rotation: f32,
    pub parts: Vec<Rectangle>,
}

/// Screen-space text box, anchored in window coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct HudPanel {
    pub position: Vec2,
    pub size: Vec2,
    pub background: Vec4,
    pub lines: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HudStats {
    pub contacts: usize,
    pub tick_average: Option<f32>,
}

/// Everything a renderer needs for one frame, world-space unless noted otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub camera: Camera,
    pub grid: Vec<Edge>,
    pub grid_color: Vec4,
    pub border: Rectangle,
    pub obstacles: Vec<Rectangle>,
    pub vehicle: VehicleSprite,
    pub hud: Vec<HudPanel>,
}

impl Palette {
    pub fn new() -> Result<Self> {
        Ok(Self {
            grid: Vec4::new_rgb(0, 0, 0, 15),
            border: Vec4::from_hex("#222222")?,
            obstacle_fill: Vec4::from_hex("#888855")?,
            obstacle_stroke: Vec4::from_hex("#666633")?,
            vehicle_body: Vec4::from_hex("#00bb66")?,
            vehicle_roof: Vec4::from_hex("#006633")?,
            vehicle_indicator: Vec4::from_hex("#ffff33")?,
            hud_background: Vec4::new_rgb(0, 0, 0, 153),
            hud_text: Vec4::from_hex("#ffffff")?,
        })
    }
}

impl Frame {
    pub fn capture(simulation: &Simulation, camera: &Camera, palette: &Palette, stats: HudStats) -> Self {
        let world = simulation.world();

        let obstacles = world
            .obstacles
            .iter()
            .map(|p| Rectangle {
                position: p.position,
                size: p.size,
                fill: Some(palette.obstacle_fill),
                stroke: Some(Stroke { color: palette.obstacle_stroke, width: 2.0 }),
            })
            .collect();

        Self {
            camera: camera.clone(),
            grid: visible_grid(camera, world.size),
            grid_color: palette.grid,
            border: Rectangle { position: Vec2::ZERO, size: world.size, fill: None, stroke: Some(Stroke { color: palette.border, width: 6.0 }) },
            obstacles,
            vehicle: vehicle_sprite(simulation, palette),
            hud: hud_panels(simulation, camera, palette, stats),
        }
    }
}

fn visible_grid(camera: &Camera, world_size: Vec2) -> Vec<Edge> {
    let from = (camera.position / GRID_SIZE).floor().max(Vec2::ZERO) * GRID_SIZE;
    let to = (camera.position + camera.size).min(world_size);
    let mut edges = Vec::new();

    let mut x = from.x;
    while x <= to.x {
        edges.push(Edge::new(Vec2::new(x, 0.0), Vec2::new(x, world_size.y)));
        x += GRID_SIZE;
    }

    let mut y = from.y;
    while y <= to.y {
        edges.push(Edge::new(Vec2::new(0.0, y), Vec2::new(world_size.x, y)));
        y += GRID_SIZE;
    }

    edges
}

fn vehicle_sprite(simulation: &Simulation, palette: &Palette) -> VehicleSprite {
    let VehicleParameters { width, height, .. } = simulation.parameters;
    let part = |position: Vec2, size: Vec2, color: Vec4| Rectangle { position, size, fill: Some(color), stroke: None };

    VehicleSprite {
        position: simulation.vehicle.position,
        rotation: simulation.vehicle.heading,
        parts: vec![
            part(Vec2::new(-width / 2.0, -height / 2.0), Vec2::new(width, height), palette.vehicle_body),
            part(Vec2::new(-width / 4.0, -height / 4.0), Vec2::new(width / 2.0, height / 2.0), palette.vehicle_roof),
            part(Vec2::new(width / 2.0 - 6.0, -6.0), Vec2::new(6.0, 12.0), palette.vehicle_indicator),
        ],
    }
}

fn hud_panels(simulation: &Simulation, camera: &Camera, palette: &Palette, stats: HudStats) -> Vec<HudPanel> {
    let vehicle = &simulation.vehicle;
    let mut lines = vec![
        format!("Speed: {:.2}", vehicle.speed()),
        format!("Pos: {}, {}", vehicle.position.x.round(), vehicle.position.y.round()),
        format!("Heading: {:.0}", vehicle.heading.normalize_angle().to_degrees()),
    ];

    if vehicle.drifting {
        lines.push("Drifting".to_string());
    }

    if stats.contacts > 0 {
        lines.push(format!("Contacts: {}", stats.contacts));
    }

    if let Some(tick_average) = stats.tick_average {
        lines.push(format!("Tick: {:.3} ms", tick_average * 1000.0));
    }

    let status = HudPanel {
        position: Vec2::new(10.0, 10.0),
        size: Vec2::new(190.0, 16.0 * lines.len() as f32 + 16.0),
        background: palette.hud_background,
        lines,
    };

    let help = HudPanel {
        position: Vec2::new(camera.size.x - 260.0, 10.0),
        size: Vec2::new(250.0, 70.0),
        background: palette.hud_background.with_alpha(0.35),
        lines: vec!["Controls: Arrows / WASD".to_string(), "Drift: Space | Reset: R".to_string(), "Goal: drive without hitting obstacles".to_string()],
    };

    vec![status, help]
}
