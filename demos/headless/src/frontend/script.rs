use std::collections::VecDeque;
use topdrive::input::InputEvent;
use topdrive::input::Key;

/// Timed sequence of input events, keyed by the frame they are delivered on.
#[derive(Debug, Default)]
pub struct InputScript {
    steps: VecDeque<(u64, InputEvent)>,
    length: u64,
}

impl InputScript {
    pub fn new(length: u64) -> Self {
        Self { steps: Default::default(), length }
    }

    pub fn press(mut self, frame: u64, key: Key) -> Self {
        self.push(frame, InputEvent::KeyPress { key, repeat: false });
        self
    }

    pub fn release(mut self, frame: u64, key: Key) -> Self {
        self.push(frame, InputEvent::KeyRelease { key });
        self
    }

    pub fn event(mut self, frame: u64, event: InputEvent) -> Self {
        self.push(frame, event);
        self
    }

    /// Returns the next event due at `frame`, once the script runs out the window is closed.
    pub fn poll(&mut self, frame: u64) -> Option<InputEvent> {
        if frame >= self.length {
            return Some(InputEvent::WindowClose);
        }

        match self.steps.front() {
            Some((due, _)) if *due <= frame => self.steps.pop_front().map(|(_, event)| event),
            _ => None,
        }
    }

    fn push(&mut self, frame: u64, event: InputEvent) {
        let index = self.steps.partition_point(|(due, _)| *due <= frame);
        self.steps.insert(index, (frame, event));
    }
}

/// A lap around the arena: throttle, a long right-hander with a drift, a reset and a short reverse.
pub fn demo_lap() -> InputScript {
    InputScript::new(900)
        .press(0, Key::ArrowUp)
        .press(90, Key::ArrowRight)
        .press(180, Key::Space)
        .release(260, Key::Space)
        .release(320, Key::ArrowRight)
        .press(360, Key::KeyA)
        .release(420, Key::KeyA)
        .event(450, InputEvent::WindowFocusLost)
        .press(480, Key::KeyW)
        .press(600, Key::KeyR)
        .release(610, Key::KeyW)
        .press(620, Key::ArrowDown)
        .press(700, Key::KeyD)
        .release(780, Key::ArrowDown)
        .release(780, Key::KeyD)
        .press(840, Key::Enter)
}
