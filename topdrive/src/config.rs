use crate::error_return;
use crate::physics::VehicleParameters;
use crate::utils::json::*;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::str;
use tinyjson::JsonValue;

pub const MAX_OBSTACLE_COUNT: usize = 10_000;

#[derive(Debug, Default)]
pub struct ConfigLoader {
    pub path: String,
    pub data: ConfigData,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigData {
    pub world_size: Vec2,
    pub obstacle_count: usize,
    pub seed: Option<u64>,
    pub world_path: Option<String>,
    pub timestep: f32,
    pub vehicle: VehicleParameters,
}

impl ConfigLoader {
    pub fn new(path: &str) -> Self {
        let mut config = Self { path: path.to_string(), ..Default::default() };

        config.reload();
        config
    }

    /// Reads the file again, on any failure the defaults stay in place.
    pub fn reload(&mut self) {
        self.data = Default::default();

        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => error_return!("Failed to open configuration file {} ({})", self.path, err),
        };

        let mut buffer = Vec::new();
        if let Err(err) = file.read_to_end(&mut buffer) {
            error_return!("Failed to read configuration file ({})", err);
        }

        let content = match str::from_utf8(&buffer) {
            Ok(content) => content,
            Err(err) => error_return!("Failed to parse configuration content ({})", err),
        };

        match Self::parse_str(content) {
            Ok(data) => self.data = data,
            Err(err) => error_return!("Failed to parse configuration ({})", err),
        }

        info!("Configuration loaded from {}", self.path);
    }

    pub fn parse_str(content: &str) -> Result<ConfigData> {
        let data = parse_object(content)?;
        let mut config = ConfigData::default();

        config.parse(&data)?;
        Ok(config)
    }
}

impl ConfigData {
    fn parse(&mut self, data: &HashMap<String, JsonValue>) -> Result<()> {
        if let Some(width) = read_value_nullable::<f64>(data, "world_width")? {
            self.world_size.x = width as f32;
        }

        if let Some(height) = read_value_nullable::<f64>(data, "world_height")? {
            self.world_size.y = height as f32;
        }

        if let Some(count) = read_value_nullable::<f64>(data, "obstacle_count")? {
            if !(0.0..=MAX_OBSTACLE_COUNT as f64).contains(&count) {
                bail!("Invalid obstacle count {}, expected at most {}", count, MAX_OBSTACLE_COUNT);
            }

            self.obstacle_count = count as usize;
        }

        self.seed = read_value_nullable::<f64>(data, "seed")?.map(|p| p as u64);
        self.world_path = read_value_nullable::<String>(data, "world_path")?;

        if let Some(timestep) = read_value_nullable::<f64>(data, "timestep")? {
            self.timestep = timestep as f32;
        }

        if let Some(vehicle) = read_object_nullable(data, "vehicle")? {
            let parameters = &mut self.vehicle;
            let fields = [
                ("max_speed", &mut parameters.max_speed),
                ("accel", &mut parameters.accel),
                ("brake", &mut parameters.brake),
                ("friction", &mut parameters.friction),
                ("turn_speed", &mut parameters.turn_speed),
                ("radius", &mut parameters.radius),
                ("width", &mut parameters.width),
                ("height", &mut parameters.height),
            ];

            for (name, field) in fields {
                if let Some(value) = read_value_nullable::<f64>(vehicle, name)? {
                    *field = value as f32;
                }
            }
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if !self.world_size.is_finite() || self.world_size.x <= 0.0 || self.world_size.y <= 0.0 {
            bail!("Invalid world size {:?}", self.world_size);
        }

        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            bail!("Invalid timestep {}", self.timestep);
        }

        let vehicle = &self.vehicle;
        let positive = [("max_speed", vehicle.max_speed), ("radius", vehicle.radius), ("width", vehicle.width), ("height", vehicle.height)];
        let non_negative = [("accel", vehicle.accel), ("brake", vehicle.brake), ("turn_speed", vehicle.turn_speed)];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("Invalid vehicle {} {}, expected a positive value", name, value);
            }
        }

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                bail!("Invalid vehicle {} {}, expected a non-negative value", name, value);
            }
        }

        // Friction of 1 or more stops or flips the vehicle every tick
        if !(0.0..1.0).contains(&vehicle.friction) {
            bail!("Invalid vehicle friction {}, expected a value in [0, 1)", vehicle.friction);
        }

        Ok(())
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(2000.0, 1400.0),
            obstacle_count: 20,
            seed: None,
            world_path: None,
            timestep: 1.0 / 60.0,
            vehicle: VehicleParameters::default(),
        }
    }
}
