use instant::Instant;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub struct Profiler {
    pub enabled: bool,
    pub data: FxHashMap<String, ProfilerData>,
    pub history_capacity: usize,
}

#[derive(Default)]
pub struct ProfilerData {
    pub history: VecDeque<f32>,
    pub timestamp: Option<Instant>,
}

impl Profiler {
    pub fn new() -> Self {
        Self { enabled: true, data: Default::default(), history_capacity: 120 }
    }

    pub fn start(&mut self, name: &str) {
        if !self.enabled {
            return;
        }

        match self.data.get_mut(name) {
            Some(data) => data.timestamp = Some(Instant::now()),
            None => {
                self.data.insert(name.to_string(), ProfilerData { history: Default::default(), timestamp: Some(Instant::now()) });
            }
        }
    }

    pub fn stop(&mut self, name: &str) {
        if let Some(data) = self.data.get_mut(name) {
            if let Some(timestamp) = data.timestamp.take() {
                data.history.push_back((Instant::now() - timestamp).as_secs_f32());
            }

            if data.history.len() > self.history_capacity {
                data.history.pop_front();
            }
        }
    }

    /// Average duration in seconds over the kept history.
    pub fn average(&self, name: &str) -> Option<f32> {
        let data = self.data.get(name)?;
        if data.history.is_empty() {
            return None;
        }

        Some(data.history.iter().sum::<f32>() / data.history.len() as f32)
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
