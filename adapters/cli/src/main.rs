#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Orbital Defence experience.

mod config_file;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{ArgAction, Parser};
use orbital_defence_core::{SystemClock, WINDOW_TITLE};
use orbital_defence_rendering::{
    AssetManager, FrameInput, Presentation, RenderTarget, RenderingBackend, Rgba, Viewport,
};
use orbital_defence_rendering_macroquad::MacroquadBackend;
use orbital_defence_world::Game;
use tracing_subscriber::EnvFilter;

/// Orbit towers around the planet and shoot down inbound aliens.
#[derive(Parser, Debug)]
#[command(name = "orbital-defence")]
struct Args {
    /// TOML file overriding gameplay tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for alien spawn angles; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 960.0)]
    width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = 960.0)]
    height: f32,

    /// Synchronise presentation with the display refresh rate
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    vsync: bool,

    /// Show and log frame rate metrics
    #[arg(long)]
    show_fps: bool,

    /// Skip loading sprite images
    #[arg(long)]
    no_assets: bool,
}

/// Entry point for the Orbital Defence command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "window size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let config = config_file::load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let viewport = Viewport::new(args.width, args.height);
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        seed,
        "starting orbital defence"
    );

    let mut assets = AssetManager::new();
    for path in config.sprite_paths() {
        assets.queue_download(path);
    }

    let backend = MacroquadBackend::new()
        .with_vsync(args.vsync)
        .with_show_fps(args.show_fps)
        .with_sprite_loading(!args.no_assets);
    let presentation = Presentation::new(WINDOW_TITLE, Rgba::from_rgb_u8(0, 0, 0), viewport);

    backend.run(presentation, assets, move |assets| {
        let mut game = Game::new(config, &assets, SystemClock::new(), seed).with_viewport(viewport);
        move |input: FrameInput, target: &mut dyn RenderTarget| game.frame(input, target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_a_square_window() {
        let args = Args::parse_from(["orbital-defence"]);
        assert_eq!(args.width, 960.0);
        assert_eq!(args.height, 960.0);
        assert!(args.vsync);
        assert!(!args.show_fps);
        assert!(!args.no_assets);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_are_parsed() {
        let args = Args::parse_from([
            "orbital-defence",
            "--config",
            "tunables.toml",
            "--seed",
            "42",
            "--width",
            "640",
            "--vsync",
            "false",
            "--show-fps",
            "--no-assets",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("tunables.toml")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.width, 640.0);
        assert!(!args.vsync);
        assert!(args.show_fps);
        assert!(args.no_assets);
    }
}
