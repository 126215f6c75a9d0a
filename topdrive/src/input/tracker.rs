use super::Action;
use super::InputCommand;
use super::InputEvent;
use super::InputState;
use super::Key;
use log::debug;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub actions: FxHashMap<Key, Action>,
}

/// Raw held/not-held key state, no debouncing.
#[derive(Debug, Default)]
pub struct InputTracker {
    pub bindings: KeyBindings,
    held: FxHashSet<Key>,
    touches: FxHashSet<u64>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self { actions: Default::default() }
    }

    pub fn bind(&mut self, key: Key, action: Action) {
        self.actions.insert(key, action);
    }

    pub fn get(&self, key: Key) -> Option<Action> {
        self.actions.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::new();

        bindings.bind(Key::ArrowUp, Action::Accelerate);
        bindings.bind(Key::KeyW, Action::Accelerate);
        bindings.bind(Key::ArrowDown, Action::Brake);
        bindings.bind(Key::KeyS, Action::Brake);
        bindings.bind(Key::ArrowLeft, Action::SteerLeft);
        bindings.bind(Key::KeyA, Action::SteerLeft);
        bindings.bind(Key::ArrowRight, Action::SteerRight);
        bindings.bind(Key::KeyD, Action::SteerRight);
        bindings.bind(Key::Space, Action::Drift);
        bindings.bind(Key::KeyR, Action::Reset);
        bindings.bind(Key::Escape, Action::Exit);

        bindings
    }
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings, held: Default::default(), touches: Default::default() }
    }

    pub fn collect_event(&mut self, event: &InputEvent) -> Option<InputCommand> {
        match *event {
            InputEvent::KeyPress { key, repeat } => {
                if self.bindings.get(key).is_none() {
                    return None;
                }

                self.held.insert(key);

                if repeat {
                    return None;
                }

                match self.bindings.get(key) {
                    Some(Action::Reset) => Some(InputCommand::Reset),
                    Some(Action::Exit) => Some(InputCommand::Exit),
                    _ => None,
                }
            }
            InputEvent::KeyRelease { key } => {
                self.held.remove(&key);
                None
            }
            InputEvent::TouchStart { id, position } => {
                debug!("Touch {} started at {:?}", id, position);
                self.touches.insert(id);
                None
            }
            InputEvent::TouchEnd { id, position: _ } => {
                self.touches.remove(&id);
                None
            }
            InputEvent::WindowFocusLost => {
                self.clear();
                None
            }
            _ => None,
        }
    }

    pub fn is_active(&self, action: Action) -> bool {
        if action == Action::Accelerate && !self.touches.is_empty() {
            return true;
        }

        self.held.iter().any(|key| self.bindings.get(*key) == Some(action))
    }

    pub fn snapshot(&self) -> InputState {
        InputState {
            accelerate: self.is_active(Action::Accelerate),
            brake: self.is_active(Action::Brake),
            steer_left: self.is_active(Action::SteerLeft),
            steer_right: self.is_active(Action::SteerRight),
            drift: self.is_active(Action::Drift),
        }
    }

    /// Drops every held key and touch, used when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.touches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn press(key: Key) -> InputEvent {
        InputEvent::KeyPress { key, repeat: false }
    }

    #[test]
    fn arrows_and_wasd_map_to_same_intents() {
        let mut tracker = InputTracker::default();

        tracker.collect_event(&press(Key::KeyW));
        tracker.collect_event(&press(Key::ArrowLeft));
        tracker.collect_event(&press(Key::Space));

        assert_eq!(tracker.snapshot(), InputState { accelerate: true, steer_left: true, drift: true, ..Default::default() });

        tracker.collect_event(&press(Key::ArrowUp));
        tracker.collect_event(&InputEvent::KeyRelease { key: Key::KeyW });

        // Arrow up is still held
        assert!(tracker.snapshot().accelerate);

        tracker.collect_event(&InputEvent::KeyRelease { key: Key::ArrowUp });
        assert!(!tracker.snapshot().accelerate);
    }

    #[test]
    fn opposite_intents_are_both_reported() {
        let mut tracker = InputTracker::default();

        tracker.collect_event(&press(Key::KeyA));
        tracker.collect_event(&press(Key::KeyD));
        tracker.collect_event(&press(Key::KeyS));

        let state = tracker.snapshot();
        assert!(state.steer_left && state.steer_right && state.brake);
    }

    #[test]
    fn reset_and_exit_fire_once_per_press() {
        let mut tracker = InputTracker::default();

        assert_eq!(tracker.collect_event(&press(Key::KeyR)), Some(InputCommand::Reset));
        assert_eq!(tracker.collect_event(&InputEvent::KeyPress { key: Key::KeyR, repeat: true }), None);
        assert_eq!(tracker.collect_event(&press(Key::Escape)), Some(InputCommand::Exit));
        assert_eq!(tracker.collect_event(&press(Key::ArrowUp)), None);
    }

    #[test]
    fn touch_accelerates_while_held() {
        let mut tracker = InputTracker::default();

        tracker.collect_event(&InputEvent::TouchStart { id: 1, position: IVec2::new(10, 10) });
        tracker.collect_event(&InputEvent::TouchStart { id: 2, position: IVec2::new(20, 10) });
        tracker.collect_event(&InputEvent::TouchEnd { id: 1, position: IVec2::new(10, 10) });
        assert!(tracker.snapshot().accelerate);

        tracker.collect_event(&InputEvent::TouchEnd { id: 2, position: IVec2::new(20, 10) });
        assert!(!tracker.snapshot().accelerate);
    }

    #[test]
    fn unbound_keys_and_stray_releases_are_ignored() {
        let mut tracker = InputTracker::default();

        assert_eq!(tracker.collect_event(&press(Key::Enter)), None);
        assert_eq!(tracker.collect_event(&InputEvent::KeyRelease { key: Key::KeyD }), None);
        assert_eq!(tracker.snapshot(), InputState::default());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let mut bindings = KeyBindings::new();
        bindings.bind(Key::Enter, Action::Accelerate);

        let mut tracker = InputTracker::new(bindings);
        tracker.collect_event(&press(Key::ArrowUp));
        assert!(!tracker.snapshot().accelerate);

        tracker.collect_event(&press(Key::Enter));
        assert!(tracker.snapshot().accelerate);

        tracker.collect_event(&InputEvent::WindowFocusLost);
        assert_eq!(tracker.snapshot(), InputState::default());
    }
}
