use console::ConsoleRenderer;
use script::InputScript;
use topdrive::anyhow::Result;
use topdrive::app::InputSource;
use topdrive::glam::Vec2;
use topdrive::input::InputEvent;
use topdrive::renderer::frame::Frame;
use topdrive::renderer::Renderer;

pub mod console;
pub mod script;

pub struct HeadlessFrontend {
    pub script: InputScript,
    pub renderer: ConsoleRenderer,
}

impl HeadlessFrontend {
    pub fn new(script: InputScript, renderer: ConsoleRenderer) -> Self {
        Self { script, renderer }
    }
}

impl InputSource for HeadlessFrontend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.script.poll(self.renderer.frames)
    }
}

impl Renderer for HeadlessFrontend {
    fn set_viewport(&mut self, size: Vec2) {
        self.renderer.set_viewport(size);
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.renderer.draw(frame)
    }
}
