//! Scene Player
//!
//! Loads a scene file, draws it for a few simulated frames with a spinning
//! override on the last entity, and prints the recorded canvas calls.
//!
//! Run with: cargo run -p easel_stage --example scene_player -- [scene.toml|scene.json]

use easel_stage::{OptionOverrides, Result, SceneConfig, Stage};

const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: u32 = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/house.toml").to_string());
    let scene = SceneConfig::load(&path)?;
    tracing::info!(path = %path, entities = scene.entities.len(), "scene loaded");

    let mut stage: Stage = scene.stage();
    stage.on_frame(|timing| {
        tracing::info!(frame = timing.frame, dt = timing.dt, fps = timing.fps, "frame");
    });

    let entities = scene.entities();
    let Some((spinner, rest)) = entities.split_last() else {
        tracing::warn!("scene has no entities");
        return Ok(());
    };

    for frame in 0..FRAMES {
        let timing = stage.tick(f64::from(frame) * FRAME_MS);
        let spin = OptionOverrides::new().rotation(timing.ftime as f32 * 0.36);

        stage
            .clear()
            .add_to_stage(rest, None)
            .add_to_stage(&**spinner, Some(&spin));

        if let Some(ctx) = stage.context_mut() {
            let commands = ctx.take_commands();
            println!("-- frame {} ({} calls)", timing.frame, commands.len());
            for command in &commands {
                println!("  {command:?}");
            }
        }
    }

    Ok(())
}
