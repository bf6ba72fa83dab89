//! Glimpse headless host
//!
//! Loads the showcase configuration and scene catalog, then drives the
//! scene manager through a scripted tour: idle home, every scene in catalog
//! order, one step back, and home again. Frames are rendered by the
//! headless renderer.

mod navigation;

use std::path::Path;

use clap::{value_parser, Arg, ArgAction, Command};
use glimpse_core::foundation::logging;
use glimpse_core::prelude::*;

use navigation::{navigate, NavCommand};

const DEFAULT_CONFIG: &str = "resources/showcase.toml";

/// Build the registry from the catalog file, or fall back to the built-in scenes
fn load_registry(catalog_path: &str) -> ShowcaseResult<SceneRegistry> {
    if !Path::new(catalog_path).exists() {
        log::warn!("Scene catalog {} not found, using built-in scenes", catalog_path);
        return Ok(SceneRegistry::builtin());
    }
    let catalog = SceneCatalog::load(catalog_path)?;
    SceneRegistry::from_catalog(&catalog, scenes::builtin_factory)
}

/// Frame at which each navigation command fires
fn tour_schedule(scene_count: usize, frames: u32) -> Vec<(u32, NavCommand)> {
    let mut commands = vec![NavCommand::Start];
    commands.extend(std::iter::repeat(NavCommand::Next).take(scene_count.saturating_sub(1)));
    commands.push(NavCommand::Previous);
    commands.push(NavCommand::Home);

    // One slice of idle time before the first command
    let slice = frames / (commands.len() as u32 + 1);
    commands
        .into_iter()
        .enumerate()
        .map(|(i, command)| ((i as u32 + 1) * slice, command))
        .collect()
}

/// Window size the tour switches to halfway through: half as wide, same height
fn narrowed_viewport(viewport: &ViewportConfig) -> (u32, u32) {
    ((viewport.width / 2).max(1), viewport.height)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("glimpse")
        .about("Headless tour through the Glimpse scene showcase")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Showcase configuration file (TOML or RON)"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("Scene catalog file, overriding the configured path"),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("N")
                .help("Number of frames to run")
                .value_parser(value_parser!(u32))
                .default_value("1200"),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .value_name("N")
                .help("Fixed frame rate of the simulated display")
                .value_parser(value_parser!(u32))
                .default_value("60"),
        )
        .arg(
            Arg::new("realtime")
                .long("realtime")
                .help("Use the wall clock instead of a fixed frame step")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Default log level (RUST_LOG still wins)"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ShowcaseConfig::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => ShowcaseConfig::load_from_file(DEFAULT_CONFIG)?,
        None => ShowcaseConfig::default(),
    };
    if let Some(catalog) = matches.get_one::<String>("catalog") {
        config.catalog_path = catalog.clone();
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }
    config.validate()?;

    logging::init_with_level(&config.logging.level);
    log::info!("Starting Glimpse showcase");

    let frames = matches.get_one::<u32>("frames").copied().unwrap_or(1200);
    let fps = matches.get_one::<u32>("fps").copied().unwrap_or(60);
    let clock: Box<dyn Clock> = if matches.get_flag("realtime") {
        Box::new(Timer::new())
    } else {
        Box::new(FixedStepClock::from_fps(fps))
    };

    let registry = load_registry(&config.catalog_path)?;
    let mut manager = SceneManager::with_clock(&config, clock);
    for scene_id in registry.ids() {
        if let Err(e) = pollster::block_on(manager.load_scene(&registry, scene_id)) {
            log::error!("Skipping scene '{}': {}", scene_id, e);
        }
    }
    log::info!("Scenes ready: {:?}", manager.scene_ids());

    let schedule = tour_schedule(manager.scene_ids().len(), frames);
    let resize_frame = frames / 2;
    let mut renderer = HeadlessRenderer::new();
    let stopwatch = Stopwatch::start_new();

    for frame in 0..frames {
        for (_, command) in schedule.iter().filter(|(at, _)| *at == frame) {
            navigate(&mut manager, *command)?;
        }
        if frame == resize_frame {
            let (width, height) = narrowed_viewport(&config.viewport);
            manager.on_resize(width, height);
        }

        manager.update();
        manager.render(&mut renderer);

        if frame % fps.max(1) == 0 {
            let camera = manager.camera();
            log::debug!(
                "Frame {} [{}]: camera at ({:.2}, {:.2}, {:.2})",
                frame,
                manager.active_scene_id().unwrap_or("home"),
                camera.position.x,
                camera.position.y,
                camera.position.z
            );
        }
    }

    log::info!(
        "Rendered {} frames ({} vertices) in {:.1}ms",
        renderer.frame_count(),
        renderer.total_vertices(),
        stopwatch.elapsed_millis()
    );
    manager.dispose_all();
    Ok(())
}
