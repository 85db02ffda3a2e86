//! Frame-rate overlay.

use std::{collections::VecDeque, time::Duration};

use macroquad::{color::WHITE, text::draw_text};
use orbital_defence_rendering::PerformanceOverlay;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);
const TRAILING_WINDOW: Duration = Duration::from_secs(10);

/// Frame rate averages published once per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsMetrics {
    /// Frames per second over the last report interval.
    pub per_second: f32,
    /// Frames per second over the trailing ten seconds.
    pub trailing_ten_seconds: f32,
    /// Mean frame duration over the last report interval.
    pub avg_frame: Duration,
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
pub struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    frame_times: VecDeque<Duration>,
    window_duration: Duration,
    latest: Option<FpsMetrics>,
}

impl FpsCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published averages.
    #[must_use]
    pub const fn latest(&self) -> Option<FpsMetrics> {
        self.latest
    }

    /// Records a frame and returns fresh averages once a second has elapsed.
    pub fn sample(&mut self, frame: Duration) -> Option<FpsMetrics> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);

        self.frame_times.push_back(frame);
        self.window_duration += frame;
        while self.window_duration > TRAILING_WINDOW {
            let Some(removed) = self.frame_times.pop_front() else {
                break;
            };
            self.window_duration = self.window_duration.saturating_sub(removed);
        }

        if self.elapsed < REPORT_INTERVAL {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let per_second = self.frames as f32 / seconds;
        let window_seconds = self.window_duration.as_secs_f32();
        let trailing_ten_seconds = if window_seconds <= f32::EPSILON {
            per_second
        } else {
            self.frame_times.len() as f32 / window_seconds
        };
        let metrics = FpsMetrics {
            per_second,
            trailing_ten_seconds,
            avg_frame: self.elapsed / self.frames,
        };

        self.elapsed = Duration::ZERO;
        self.frames = 0;
        self.latest = Some(metrics);
        Some(metrics)
    }

    /// Draws the latest averages in the top-left corner.
    pub(crate) fn draw(&self) {
        let Some(metrics) = self.latest else {
            return;
        };
        let label = format!("FPS: {:.0}", metrics.per_second);
        let _ = draw_text(&label, 10.0, 24.0, 24.0, WHITE);
    }
}

impl PerformanceOverlay for FpsCounter {
    fn record_frame(&mut self, frame: Duration) {
        if let Some(metrics) = self.sample(frame) {
            tracing::info!(
                fps = metrics.per_second,
                trailing_fps = metrics.trailing_ten_seconds,
                frame_ms = metrics.avg_frame.as_secs_f64() * 1_000.0,
                "frame rate"
            );
        }
    }
}
