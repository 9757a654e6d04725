use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glint_core::{load_scene, SceneDescription};
use glint_tracer::{FrameStatus, ImageBuffer, PinholeCamera, RenderConfig, RenderSession, Scene};

/// Progressive sphere path tracer.
///
/// Simulates a display loop: every tick renders one more sample per pixel
/// until the sample budget is spent, then the final frame is written out.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
struct Args {
    /// Scene file (JSON); the built-in demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Override the scene's sample budget
    #[arg(long)]
    samples: Option<u32>,

    /// Override the scene's maximum bounce depth
    #[arg(long)]
    depth: Option<u32>,

    /// Override the scene's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Resize the surface before a tick, as FRAME:WIDTHxHEIGHT (repeatable)
    #[arg(long = "resize", value_name = "FRAME:WxH")]
    resizes: Vec<ScheduledResize>,

    /// Sleep between ticks, mimicking a display refresh interval
    #[arg(long, default_value_t = 0)]
    frame_interval_ms: u64,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

/// A surface resize the host applies before the given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledResize {
    tick: u64,
    width: u32,
    height: u32,
}

impl FromStr for ScheduledResize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tick, size) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FRAME:WxH, got '{}'", s))?;
        let (width, height) = size
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", size))?;

        let tick = tick
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid frame '{}': {}", tick, e))?;
        let dimension = |field: &str, name: &str| match field.trim().parse::<u32>() {
            Ok(0) => Err(format!("{} must be at least 1", name)),
            Ok(value) => Ok(value),
            Err(e) => Err(format!("invalid {} '{}': {}", name, field, e)),
        };

        Ok(Self {
            tick,
            width: dimension(width, "width")?,
            height: dimension(height, "height")?,
        })
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting glint");

    let mut description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {:?}", path))?,
        None => SceneDescription::demo(),
    };
    if let Some(samples) = args.samples {
        description.render.max_samples = samples;
    }
    if let Some(depth) = args.depth {
        description.render.max_depth = depth;
    }
    if args.seed.is_some() {
        description.render.seed = args.seed;
    }

    if args.width == 0 || args.height == 0 {
        bail!("Surface must be at least 1x1, got {}x{}", args.width, args.height);
    }

    let scene = Scene::from_description(&description);
    let mut camera =
        PinholeCamera::from_description(&description.camera, aspect(args.width, args.height));
    let config = RenderConfig::from(&description.render);
    let mut session = match description.render.seed {
        Some(seed) => RenderSession::with_seed(config, seed),
        None => RenderSession::new(config),
    };
    let mut surface = ImageBuffer::new(args.width, args.height);

    log::info!(
        "Rendering {} objects at {}x{}, {} samples, depth {}",
        scene.len(),
        args.width,
        args.height,
        session.config().max_samples,
        session.config().max_depth
    );

    let start = Instant::now();
    let frame_interval = Duration::from_millis(args.frame_interval_ms);
    let mut tick = 0;
    loop {
        if tick >= args.max_ticks {
            log::warn!("Stopping after {} ticks with {} samples", tick, session.samples());
            break;
        }

        for resize in args.resizes.iter().filter(|r| r.tick == tick) {
            log::info!("Resizing surface to {}x{}", resize.width, resize.height);
            surface = ImageBuffer::new(resize.width, resize.height);
            camera.set_aspect(aspect(resize.width, resize.height));
        }

        match session.render_frame(&scene, &camera, &mut surface) {
            // A later resize restarts accumulation, so keep ticking until then
            FrameStatus::Idle if !args.resizes.iter().any(|r| r.tick > tick) => break,
            FrameStatus::Idle => {}
            FrameStatus::Reset => {}
            FrameStatus::Rendered(stats) => {
                log::info!(
                    "Sample {}/{} in {:?}",
                    stats.samples,
                    session.config().max_samples,
                    stats.duration
                );
            }
        }

        tick += 1;
        if !frame_interval.is_zero() {
            std::thread::sleep(frame_interval);
        }
    }

    log::info!("Rendered {} samples in {:?}", session.samples(), start.elapsed());
    if let Some(stats) = session.last_frame() {
        log::info!("Last frame took {:?}", stats.duration);
    }

    surface
        .save_png(&args.output)
        .with_context(|| format!("Failed to save {:?}", args.output))?;
    log::info!("Saved to {:?}", args.output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resize() {
        let resize: ScheduledResize = "12:640x480".parse().unwrap();
        assert_eq!(
            resize,
            ScheduledResize {
                tick: 12,
                width: 640,
                height: 480,
            }
        );
    }

    #[test]
    fn test_parse_resize_rejects_garbage() {
        assert!("640x480".parse::<ScheduledResize>().is_err());
        assert!("3:640".parse::<ScheduledResize>().is_err());
        assert!("x:640x480".parse::<ScheduledResize>().is_err());
    }

    #[test]
    fn test_parse_resize_rejects_bad_dimensions() {
        // Too large for u32, must not wrap around to 1
        assert!("0:4294967297x4".parse::<ScheduledResize>().is_err());
        assert!("0:0x4".parse::<ScheduledResize>().is_err());
        assert!("0:4x0".parse::<ScheduledResize>().is_err());
        assert!("0:4294967295x1".parse::<ScheduledResize>().is_ok());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "glint",
            "--width",
            "64",
            "--samples",
            "4",
            "--resize",
            "2:32x32",
            "--resize",
            "5:16x8",
        ])
        .unwrap();

        assert_eq!(args.width, 64);
        assert_eq!(args.height, 240);
        assert_eq!(args.samples, Some(4));
        assert_eq!(args.resizes.len(), 2);
        assert_eq!(args.output, PathBuf::from("output.png"));
    }
}
