use std::thread;
use std::time::Duration;
use topdrive::anyhow::Result;
use topdrive::glam::Vec2;
use topdrive::log::info;
use topdrive::renderer::frame::Frame;
use topdrive::renderer::Renderer;

/// Renderer which writes the HUD into the log instead of drawing, paced to the target frame rate.
#[derive(Debug)]
pub struct ConsoleRenderer {
    pub frames: u64,
    pub report_interval: u64,
    pub frame_time: Option<Duration>,
    viewport: Vec2,
}

impl ConsoleRenderer {
    pub fn new(report_interval: u64, frame_time: Option<Duration>) -> Self {
        Self { frames: 0, report_interval: report_interval.max(1), frame_time, viewport: Vec2::ZERO }
    }
}

impl Renderer for ConsoleRenderer {
    fn set_viewport(&mut self, size: Vec2) {
        info!("Viewport set to {}x{}", size.x, size.y);
        self.viewport = size;
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        if self.frames % self.report_interval == 0 {
            let camera = frame.camera.position;
            let status = frame.hud.first().map(|p| p.lines.join(" | ")).unwrap_or_default();

            info!("Frame {}: camera {:.0}, {:.0}, {} obstacles, {}", self.frames, camera.x, camera.y, frame.obstacles.len(), status);
        }

        self.frames += 1;

        if let Some(frame_time) = self.frame_time {
            thread::sleep(frame_time);
        }

        Ok(())
    }
}
