#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Orbital Defence.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.

mod fps;
mod target;
mod textures;
mod transform;

pub use fps::{FpsCounter, FpsMetrics};

use anyhow::Result;
use glam::Vec2;
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use orbital_defence_rendering::{
    AssetManager, CanvasRect, FrameInput, PerformanceOverlay, PointerInput, Presentation,
    RenderTarget, RenderingBackend, Viewport,
};
use std::time::Duration;

use self::{
    target::{to_macroquad_color, MacroquadTarget},
    textures::TextureCache,
};

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
    load_sprites: bool,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            show_fps: false,
            load_sprites: true,
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend shows and logs frame rate metrics.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Configures whether queued images are loaded from disk.
    ///
    /// When disabled every image resolves to a missing handle.
    #[must_use]
    pub fn with_sprite_loading(mut self, enabled: bool) -> Self {
        self.load_sprites = enabled;
        self
    }
}

/// `Q` or `Escape` ends the game loop.
fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

/// Collects this frame's click and surface size.
fn gather_frame_input(pointer: &mut PointerInput) -> FrameInput {
    let viewport = Viewport::new(
        macroquad::window::screen_width(),
        macroquad::window::screen_height(),
    );
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        pointer.register_click(Vec2::new(x, y), CanvasRect::new(Vec2::ZERO, viewport.size()));
    }
    FrameInput {
        click: pointer.take_click(),
        viewport,
    }
}

fn load_assets(assets: &mut AssetManager, textures: &mut TextureCache) {
    assets.download_all(
        |path| textures.load(path),
        |manager| {
            tracing::info!(
                loaded = manager.success_count(),
                failed = manager.error_count(),
                "assets ready"
            );
        },
    );
    tracing::debug!(textures = textures.len(), "texture cache populated");
}

impl RenderingBackend for MacroquadBackend {
    fn run<S, F>(self, presentation: Presentation, assets: AssetManager, start: S) -> Result<()>
    where
        S: FnOnce(AssetManager) -> F + 'static,
        F: FnMut(FrameInput, &mut dyn RenderTarget) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
            load_sprites,
        } = self;

        let Presentation {
            window_title,
            clear_color,
            viewport,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: viewport.width.round() as i32,
            window_height: viewport.height.round() as i32,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut assets = assets;
            let mut textures = TextureCache::default();
            if load_sprites {
                load_assets(&mut assets, &mut textures);
            } else {
                tracing::info!(queued = assets.queued().len(), "sprite loading disabled");
            }

            let mut frame = start(assets);
            let background = to_macroquad_color(clear_color);
            let mut pointer = PointerInput::default();
            let mut overlay = show_fps.then(FpsCounter::new);

            loop {
                if quit_requested() {
                    break;
                }

                macroquad::window::clear_background(background);
                let input = gather_frame_input(&mut pointer);
                let mut target = MacroquadTarget::new(&textures, clear_color);
                frame(input, &mut target);

                if let Some(overlay) = overlay.as_mut() {
                    let dt_seconds = macroquad::time::get_frame_time();
                    overlay.record_frame(Duration::from_secs_f32(dt_seconds.max(0.0)));
                    overlay.draw();
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}
