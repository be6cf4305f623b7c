//! Camrig - headless host for persisted camera configurations
//!
//! Boots every camera found in the cameras directory, applies its stored
//! configuration to a headless backend, and reports the resulting state.

mod cli;
mod headless;
mod rig;
mod settings;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::CliArgs;
use rig::CameraRig;
use settings::AppSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting camrig...");

    let args = CliArgs::parse()?;

    let settings = AppSettings::load();
    if let Some(path) = AppSettings::settings_path().filter(|path| !path.exists()) {
        // Leave an editable copy of the defaults behind
        if let Err(e) = settings.save_to(&path) {
            warn!("Failed to write default settings: {}", e);
        }
    }
    let mut rig = CameraRig::new(settings.cameras_dir(), settings.scene_hints());

    let spawned = rig.discover().context("Failed to discover cameras")?;
    info!("{} camera(s) loaded from {:?}", spawned, rig.cameras_dir());

    // Extra camera names on the command line are created alongside
    for name in &args.cameras {
        if rig.get(name).is_none() {
            rig.spawn(name)?;
        }
    }

    if args.wall_map {
        let mut scene = settings.scene_hints();
        scene.probably_wall_map = true;
        rig.set_scene(scene);
    }

    for (name, change) in &args.changes {
        let done = rig.apply(name, *change)?;
        info!("{}: {:?} -> {:?}", name, change, done);
    }

    for instance in rig.instances() {
        let camera = &instance.camera;
        let target = camera
            .render_target
            .map(|desc| format!("{}x{} msaa {}", desc.width, desc.height, desc.msaa_samples))
            .unwrap_or_else(|| "none".to_string());
        info!(
            "{:<12} {:?} depth {:>6} fov {:>5.1} aspect {:.3} mask {:#010x} world cam {} target {} ({} allocs)",
            instance.name,
            instance.settings.camera_type(),
            camera.depth,
            camera.field_of_view,
            camera.aspect,
            camera.culling_mask.bits(),
            camera.world_cam,
            target,
            camera.reallocations,
        );
        if instance.settings.camera_type().is_positionable() {
            info!("{:<12} at {} facing {}", "", camera.position, camera.rotation);
        }
    }

    rig.save_all()?;
    info!("Saved {} camera(s)", rig.instances().len());

    Ok(())
}
