//! Progressive frame driver.
//!
//! A `RenderSession` owns all mutable render state: the per-pixel running
//! averages, the sample counter and the size of the surface they belong to.
//! The host calls [`RenderSession::render_frame`] once per display tick;
//! each call adds one sample per pixel until the budget is spent.

use std::time::{Duration, Instant};

use glint_math::Color;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::image_buffer::pixel_count;
use crate::{
    blend_sample, color_to_rgba, sample_pixel, Camera, PixelBuffer, RenderConfig, Scene,
    CLEAR_COLOR,
};

/// Statistics for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Samples per pixel accumulated after this frame
    pub samples: u32,
    /// Wall time spent tracing and writing the frame
    pub duration: Duration,
}

/// What a call to `render_frame` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    /// Surface changed size (or a reset was requested); output was cleared
    /// and no samples were taken
    Reset,
    /// One more sample per pixel was blended into the output
    Rendered(FrameStats),
    /// Budget already spent; output untouched
    Idle,
}

/// Accumulation state for one progressive render.
pub struct RenderSession {
    config: RenderConfig,
    accumulation: Vec<Color>,
    samples: u32,
    size: Option<(u32, u32)>,
    reset_pending: bool,
    rng: StdRng,
    last_frame: Option<FrameStats>,
}

impl RenderSession {
    /// Create a session seeded from OS entropy.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a deterministic session.
    pub fn with_seed(config: RenderConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RenderConfig, rng: StdRng) -> Self {
        Self {
            config,
            accumulation: Vec::new(),
            samples: 0,
            size: None,
            reset_pending: true,
            rng,
            last_frame: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Samples per pixel accumulated so far.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// True once the sample budget is spent.
    pub fn is_idle(&self) -> bool {
        !self.reset_pending && self.samples >= self.config.max_samples
    }

    /// Statistics of the most recent rendered frame.
    pub fn last_frame(&self) -> Option<FrameStats> {
        self.last_frame
    }

    /// Running averages in gamma space, top row first.
    pub fn accumulation(&self) -> &[Color] {
        &self.accumulation
    }

    /// Restart accumulation, e.g. from a host resize handler.
    ///
    /// The counter drops to zero now; the next `render_frame` clears the
    /// output and returns [`FrameStatus::Reset`].
    pub fn reset_accumulation(&mut self) {
        self.samples = 0;
        self.reset_pending = true;
    }

    /// Advance the render by one tick.
    pub fn render_frame(
        &mut self,
        scene: &Scene,
        camera: &dyn Camera,
        output: &mut dyn PixelBuffer,
    ) -> FrameStatus {
        let size = (output.width(), output.height());
        if self.reset_pending || self.size != Some(size) {
            self.restart(size, output);
            return FrameStatus::Reset;
        }

        if self.samples >= self.config.max_samples {
            return FrameStatus::Idle;
        }

        let start = Instant::now();
        let (width, height) = size;
        let sample_count = self.samples;
        let frame_seed = self.rng.next_u64();
        let config = &self.config;

        // Rows are independent; each gets its own stream so results do not
        // depend on thread scheduling.
        self.accumulation
            .par_chunks_mut(width.max(1) as usize)
            .enumerate()
            .for_each(|(row, averages)| {
                let y = height - 1 - row as u32;
                let mut rng = row_rng(frame_seed, row);
                for (x, average) in averages.iter_mut().enumerate() {
                    let sample =
                        sample_pixel(scene, camera, x as u32, y, width, height, config, &mut rng);
                    *average = blend_sample(*average, sample, sample_count);
                }
            });

        for (row, averages) in self.accumulation.chunks(width.max(1) as usize).enumerate() {
            let y = height - 1 - row as u32;
            for (x, average) in averages.iter().enumerate() {
                output.set_pixel(x as u32, y, color_to_rgba(*average));
            }
        }

        self.samples += 1;

        let stats = FrameStats {
            samples: self.samples,
            duration: start.elapsed(),
        };
        self.last_frame = Some(stats);
        log::debug!("Pathtracing frame {} took {:?}", stats.samples, stats.duration);

        if self.samples == self.config.max_samples {
            log::info!(
                "Sample budget of {} reached for {}x{} surface",
                self.config.max_samples,
                width,
                height
            );
        }

        FrameStatus::Rendered(stats)
    }

    fn restart(&mut self, (width, height): (u32, u32), output: &mut dyn PixelBuffer) {
        output.clear(CLEAR_COLOR);
        self.accumulation = vec![Color::ZERO; pixel_count(width, height)];
        self.samples = 0;
        self.size = Some((width, height));
        self.reset_pending = false;
        self.last_frame = None;
        log::info!("Accumulation reset for {}x{} surface", width, height);
    }
}

/// Independent generator for one image row of one frame.
fn row_rng(frame_seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(frame_seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
