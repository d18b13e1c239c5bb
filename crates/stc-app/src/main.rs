//! stc-track - run the STC tracker over an image sequence.
//!
//! Usage: `stc-track <frames-dir> <x> <y> <width> <height> [params.json]`
//!
//! The first frame initializes the tracker with the given box; every later
//! frame prints `index x y width height millis` on stdout.

mod sequence;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use stc_core::BoundingBox;
use stc_tracking::{StcParams, StcTracker};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

struct Args {
    frames_dir: PathBuf,
    initial_box: BoundingBox,
    params_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    if args.len() < 5 || args.len() > 6 {
        bail!("usage: stc-track <frames-dir> <x> <y> <width> <height> [params.json]");
    }
    let num = |i: usize, name: &str| -> Result<i32> {
        args[i]
            .parse()
            .with_context(|| format!("{} must be an integer, got {:?}", name, args[i]))
    };
    Ok(Args {
        frames_dir: PathBuf::from(&args[0]),
        initial_box: BoundingBox::new(num(1, "x")?, num(2, "y")?, num(3, "width")?, num(4, "height")?),
        params_path: args.get(5).map(PathBuf::from),
    })
}

fn load_params(path: Option<&PathBuf>) -> Result<StcParams> {
    let Some(path) = path else {
        return Ok(StcParams::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading params {}", path.display()))?;
    let params: StcParams = serde_json::from_str(&text)
        .with_context(|| format!("parsing params {}", path.display()))?;
    params.validate()?;
    Ok(params)
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;
    let params = load_params(args.params_path.as_ref())?;

    let frames = sequence::list_frames(&args.frames_dir)?;
    info!(frames = frames.len(), dir = %args.frames_dir.display(), "Loaded frame list");

    let mut tracker = StcTracker::new(params);
    let first = sequence::load_frame(&frames[0])?;
    tracker.initialize(args.initial_box, &first)?;

    let mut total_ms = 0.0;
    for (index, path) in frames.iter().enumerate().skip(1) {
        let frame = sequence::load_frame(path)?;
        let start = Instant::now();
        let bbox = tracker.update(&frame)?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        total_ms += ms;
        println!(
            "{} {} {} {} {} {:.3}",
            index, bbox.x, bbox.y, bbox.width, bbox.height, ms
        );
    }

    let tracked = frames.len() - 1;
    if tracked > 0 {
        info!(
            frames = tracked,
            mean_ms = total_ms / tracked as f64,
            "Tracking finished"
        );
    }
    Ok(())
}
