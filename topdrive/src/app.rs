use crate::error_continue;
use crate::input::tracker::InputTracker;
use crate::input::InputCommand;
use crate::input::InputEvent;
use crate::physics::simulation::Simulation;
use crate::renderer::camera::Camera;
use crate::renderer::frame::Frame;
use crate::renderer::frame::HudStats;
use crate::renderer::frame::Palette;
use crate::renderer::Renderer;
use crate::utils::profiler::Profiler;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use instant::Instant;
use log::info;

pub const MAX_FRAME_DELTA: f32 = 0.1;
pub const MIN_TIMESTEP: f32 = 1e-4;

pub trait InputSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Platform side of the application: event source and renderer in one.
pub trait Frontend: InputSource + Renderer {}

impl<T> Frontend for T where T: InputSource + Renderer {}

pub struct ApplicationContext<F>
where
    F: Frontend,
{
    pub frontend: F,
    pub simulation: Simulation,
    pub input: InputTracker,
    pub camera: Camera,
    pub profiler: Profiler,

    palette: Palette,
    frame_timestamp: Instant,
    running: bool,
    timestep: f32,
    accumulator: f32,
    contacts: usize,
}

impl<F> ApplicationContext<F>
where
    F: Frontend,
{
    pub fn new(mut frontend: F, simulation: Simulation, viewport: Vec2, timestep: f32) -> Result<Self> {
        if !timestep.is_finite() || timestep < MIN_TIMESTEP {
            bail!("Invalid timestep {}, expected at least {}", timestep, MIN_TIMESTEP);
        }

        frontend.set_viewport(viewport);

        let mut camera = Camera::new(Vec2::ZERO, viewport);
        camera.follow(simulation.vehicle.position, simulation.world().size);

        Ok(Self {
            frontend,
            simulation,
            input: Default::default(),
            camera,
            profiler: Default::default(),

            palette: Palette::new()?,
            frame_timestamp: Instant::now(),
            running: true,
            timestep,
            accumulator: 0.0,
            contacts: 0,
        })
    }

    pub fn with_input(mut self, input: InputTracker) -> Self {
        self.input = input;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) {
        info!("Application started, timestep {:.4} s", self.timestep);
        self.frame_timestamp = Instant::now();

        while self.running {
            let now = Instant::now();
            let delta = (now - self.frame_timestamp).as_secs_f32();
            self.frame_timestamp = now;

            if let Err(err) = self.run_frame(delta) {
                error_continue!("Failed to process frame ({})", err);
            }
        }

        info!("Application stopped after {} ticks", self.simulation.ticks);
    }

    /// Processes pending events, runs every fixed tick that fits into the accumulated time and draws one frame.
    /// Returns the number of ticks executed.
    pub fn run_frame(&mut self, delta: f32) -> Result<usize> {
        while let Some(event) = self.frontend.poll_event() {
            match event {
                InputEvent::WindowSizeChange { size } => {
                    self.camera.size = size.as_vec2();
                    self.frontend.set_viewport(self.camera.size);
                }
                InputEvent::WindowClose => {
                    self.running = false;
                    return Ok(0);
                }
                _ => {}
            }

            match self.input.collect_event(&event) {
                Some(InputCommand::Reset) => self.simulation.reset(),
                Some(InputCommand::Exit) => {
                    self.running = false;
                    return Ok(0);
                }
                None => {}
            }
        }

        let input = self.input.snapshot();
        let max_ticks = (MAX_FRAME_DELTA / self.timestep).ceil() as usize;
        let mut ticks = 0;

        self.accumulator += delta.clamp(0.0, MAX_FRAME_DELTA);

        while self.accumulator >= self.timestep && ticks < max_ticks {
            self.profiler.start("tick");
            let report = self.simulation.tick(&input);
            self.profiler.stop("tick");

            self.contacts = report.contacts();
            self.accumulator -= self.timestep;
            ticks += 1;
        }

        self.camera.follow(self.simulation.vehicle.position, self.simulation.world().size);

        self.profiler.start("draw");
        let stats = HudStats { contacts: self.contacts, tick_average: self.profiler.average("tick") };
        let frame = Frame::capture(&self.simulation, &self.camera, &self.palette, stats);
        let result = self.frontend.draw(&frame);
        self.profiler.stop("draw");

        result?;
        Ok(ticks)
    }
}
