#![allow(clippy::too_many_arguments)]

pub mod app;
pub mod config;
pub mod input;
pub mod physics;
pub mod renderer;
pub mod utils;
pub mod world;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;
pub use rustc_hash;
pub use tinyjson;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { log::error!($($arg)+); continue; } };
}
