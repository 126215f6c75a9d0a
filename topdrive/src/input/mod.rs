use glam::IVec2;

pub mod tracker;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    WindowSizeChange { size: IVec2 },
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    TouchStart { id: u64, position: IVec2 },
    TouchEnd { id: u64, position: IVec2 },
    WindowFocusLost,
    WindowClose,
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Space,

    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    KeyA,
    KeyD,
    KeyR,
    KeyS,
    KeyW,

    #[default]
    Unknown,
}

/// Held control intents, read once at the start of a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub drift: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Accelerate,
    Brake,
    SteerLeft,
    SteerRight,
    Drift,
    Reset,
    Exit,
}

/// One-shot requests produced by key presses, handled outside of the physics tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Reset,
    Exit,
}
