//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

mod curve;

use anyhow::{Context, Result};
use clap::Parser;
use curve::{clamp_dt, sample_curve, CurveKind};
use planar_kernel::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_POLYGON: &str = "-2 -2  -1 1  1 0  2 -2";

#[derive(Parser)]
#[command(name = "curve-demo")]
#[command(about = "Samples a curve from a control polygon and runs the geometric predicates on it")]
struct Args {
    /// File holding the control polygon, as a coordinate list or SVG path data
    #[arg(long)]
    polygon: Option<std::path::PathBuf>,

    /// Sampling step along the curve parameter
    #[arg(long, default_value_t = 0.05)]
    dt: Coord,

    /// Tolerance for the boundary-sensitive tests
    #[arg(long, default_value_t = 1e-3)]
    epsilon: f64,

    #[arg(long, value_enum, default_value_t = CurveKind::Chord)]
    curve: CurveKind,
}

fn load_polygon(args: &Args) -> Result<Vec<Vec2>> {
    let data = match &args.polygon {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_POLYGON.to_owned()
    };
    Ok(polygon_loader::polygon_from_string(&data)?)
}

// Indices of the first pair of non-adjacent polyline edges that meet
fn first_self_intersection(pts: &[Vec2]) -> Option<(usize, usize, Vec2)> {
    for i in 0..pts.len().saturating_sub(1) {
        for j in i+2..pts.len()-1 {
            if let Some(p) = segments_intersection(pts[i], pts[i+1], pts[j], pts[j+1]) {
                return Some((i, j, p));
            }
        }
    }
    None
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let ctl = load_polygon(&args)?;
    let dt = clamp_dt(args.dt);
    tracing::info!(points = ctl.len(), dt, epsilon = args.epsilon, curve = ?args.curve, "control polygon loaded");

    let then = std::time::Instant::now();

    let area = polygon_signed_area(&ctl);
    let simple = polygon_is_simple(&ctl, false);
    tracing::info!(area, simple, "control polygon");

    let hull = convex_hull(&ctl);
    tracing::info!(hull = ?hull, "convex hull");

    let samples = sample_curve(args.curve, &ctl, dt);
    match first_self_intersection(&samples) {
        Some((i, j, p)) => tracing::info!(samples = samples.len(), i, j, at = %p, "sampled curve crosses itself"),
        None => tracing::info!(samples = samples.len(), "sampled curve is simple")
    }

    let (first, last) = (ctl[0], ctl[ctl.len()-1]);
    for (i, &p) in ctl.iter().enumerate() {
        let (status, q) = segment_projection(first, last, p, args.epsilon);
        let on_chord = in_segment(first, last, p, args.epsilon);
        tracing::info!(i, point = %p, projection = %q, status = ?status, on_chord, "chord projection");
    }

    let now = std::time::Instant::now();
    tracing::info!("Total processing time: {:?}", now.duration_since(then));
    Ok(())
}
