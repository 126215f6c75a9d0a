use frontend::console::ConsoleRenderer;
use frontend::script;
use frontend::HeadlessFrontend;
use std::env;
use std::rc::Rc;
use std::time::Duration;
use topdrive::anyhow::Result;
use topdrive::app::ApplicationContext;
use topdrive::config::ConfigLoader;
use topdrive::glam::Vec2;
use topdrive::input::tracker::InputTracker;
use topdrive::input::tracker::KeyBindings;
use topdrive::input::Action;
use topdrive::input::Key;
use topdrive::log::error;
use topdrive::log::info;
use topdrive::log::Level;
use topdrive::physics::simulation::Simulation;
use topdrive::world::generator::WorldGenerator;
use topdrive::world::loader;
use topdrive::VERSION;

mod frontend;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const REPORT_INTERVAL: u64 = 60;

fn main() {
    if let Err(err) = main_internal() {
        error!("{}", err);
    }
}

fn main_internal() -> Result<()> {
    #[cfg(debug_assertions)]
    simple_logger::init_with_level(Level::Info)?;

    #[cfg(not(debug_assertions))]
    simple_logger::init_with_level(Level::Error)?;

    info!("Topdrive {}", VERSION);

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = ConfigLoader::new(&config_path).data;

    let world = match &config.world_path {
        Some(path) => loader::load_world_file(path)?,
        None => WorldGenerator::new(config.world_size, config.obstacle_count, config.seed).generate()?,
    };

    let mut bindings = KeyBindings::default();
    bindings.bind(Key::Enter, Action::Reset);

    let simulation = Simulation::new(Rc::new(world), config.vehicle);
    let renderer = ConsoleRenderer::new(REPORT_INTERVAL, Duration::try_from_secs_f32(config.timestep).ok());
    let frontend = HeadlessFrontend::new(script::demo_lap(), renderer);

    let mut app = ApplicationContext::new(frontend, simulation, VIEWPORT, config.timestep)?.with_input(InputTracker::new(bindings));
    app.run();

    let vehicle = app.simulation.vehicle;
    info!("Finished after {} frames, vehicle at {:.1}, {:.1}", app.frontend.renderer.frames, vehicle.position.x, vehicle.position.y);

    if let Some(average) = app.profiler.average("tick") {
        info!("Average tick time {:.3} ms", average * 1000.0);
    }

    Ok(())
}
