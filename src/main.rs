use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use scene_rigs::mesh::ObjMesh;
use scene_rigs::scenes::SceneConfig;

#[cfg(feature = "trace")]
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "scene_rigs", about = "Drifting objects, orbiting camera rigs and a sphere-to-cube mesh morph")]
struct Cli {
    /// Directory for the rolling log file.
    #[cfg(feature = "trace")]
    #[arg(long, default_value = ".")]
    log_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene file and tick it for a number of frames.
    Run {
        scene: String,
        #[arg(long, default_value_t = 60)]
        frames: u32,
        /// Seconds per frame.
        #[arg(long, default_value_t = 1.0 / 60.0)]
        delta: f32,
    },
    /// Morph a sphere OBJ into a cube.
    Morph {
        input: PathBuf,
        #[arg(long, short, default_value = "output.obj")]
        output: PathBuf,
        /// Snap to the corners of an equal-area cube instead of the shortest-travel morph.
        #[arg(long)]
        corners: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    let _guard = scene_rigs::log::init_logger(&cli.log_dir)?;

    match cli.command {
        Command::Run { scene, frames, delta } => run_scene(&scene, frames, delta),
        Command::Morph { input, output, corners } => morph_mesh(&input, &output, corners),
    }
}

fn run_scene(path: &str, frames: u32, delta: f32) -> Result<()> {
    let config = SceneConfig::from_file(path)
        .with_context(|| format!("Failed to load scene from {}", path))?;
    let mut scene = config.build()?;

    #[cfg(feature = "trace")]
    info!("Running {} frames of {} seconds", frames, delta);

    scene.stage.run(frames, delta)?;

    println!("Ran {} frames", scene.stage.frame_count());
    for (index, name) in scene.active_camera_names().iter().enumerate() {
        println!("rig {}: {}", index, name.as_deref().unwrap_or("<none>"));
    }
    for (index, drifter) in scene.drifters.iter().enumerate() {
        if let Some(transform) = scene.stage.transform(*drifter) {
            let p = transform.position;
            println!("drifter {}: ({:.3}, {:.3}, {:.3})", index, p.x, p.y, p.z);
        }
    }

    Ok(())
}

fn morph_mesh(input: &Path, output: &Path, corners: bool) -> Result<()> {
    let mut mesh = ObjMesh::from_file(input)?;
    println!("{}", mesh);

    if corners {
        mesh.snap_to_corners();
    } else {
        mesh.morph_to_cube();
    }

    mesh.write_to_file(output)?;
    println!("Output file written to {}", output.display());

    Ok(())
}
