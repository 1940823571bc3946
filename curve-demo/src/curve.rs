//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Evaluates and samples curves defined by a control polygon
//--------------------------------------------------------------------

use planar_kernel::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CurveKind {
    /// Straight line between the first and last control points
    Chord,
    /// Bezier curve over all control points
    Bezier
}

impl CurveKind {
    pub fn eval(self, t: Coord, ctl: &[Vec2]) -> Vec2 {
        match self {
            CurveKind::Chord => eval_chord(t, ctl),
            CurveKind::Bezier => eval_bezier(t, ctl)
        }
    }
}

fn eval_chord(t: Coord, ctl: &[Vec2]) -> Vec2 {
    Vec2::lerp(ctl[0], ctl[ctl.len()-1], t)
}

// de Casteljau
fn eval_bezier(t: Coord, ctl: &[Vec2]) -> Vec2 {
    let mut pts = ctl.to_vec();
    for k in (1..pts.len()).rev() {
        for i in 0..k {
            pts[i] = Vec2::lerp(pts[i], pts[i+1], t);
        }
    }
    pts[0]
}

pub const MIN_DT: Coord = 0.01;
pub const MAX_DT: Coord = 0.25;

// NaN falls back to the smallest step
pub fn clamp_dt(dt: Coord) -> Coord { dt.max(MIN_DT).min(MAX_DT) }

// Samples at t = 0, dt, 2dt, ... below 1, then appends the last control
// point so the curve always reaches it. The step is clamped first.
pub fn sample_curve(kind: CurveKind, ctl: &[Vec2], dt: Coord) -> Vec<Vec2> {
    if ctl.is_empty() { return Vec::new(); }
    let dt = clamp_dt(dt);

    let mut samples = Vec::new();
    let mut t = 0.0;
    while t < 1.0 {
        samples.push(kind.eval(t, ctl));
        t += dt;
    }
    samples.push(ctl[ctl.len()-1]);
    samples
}
