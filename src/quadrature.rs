//! Incremental circle generator.
//!
//! Uses the recurrence from section 5.4 of Numerical Recipes:
//!
//! ```text
//! cos(n*d) = 2 cos(d) cos((n-1)*d) - cos((n-2)*d)
//! sin(n*d) = 2 cos(d) sin((n-1)*d) - sin((n-2)*d)
//! ```
//!
//! After construction each point on the arc costs one multiply and one
//! subtract per channel, with no trig calls. Floating-point drift accumulates
//! over many steps; arcs are short-lived (one shape at a time) and the drift
//! is invisible at typical point counts.

use crate::beam::Beam;
use crate::sink::DacWriter;
use std::f32::consts::PI;

/// Stateful (cos, sin) pair generator stepping around a circle.
pub struct Quadrature {
    quad_cos: f32,
    quad_sin: f32,
    // 2 * cos(delta), the recurrence constant
    quad_cm: f32,
    // history: previous and previous-previous values
    quad_c1: f32,
    quad_c2: f32,
    quad_s1: f32,
    quad_s2: f32,
}

impl Quadrature {
    /// Start an arc at `start_degrees` with `points_per_cycle` samples per
    /// full 360 degree revolution.
    pub fn new(start_degrees: f32, points_per_cycle: f32) -> Self {
        let start_angle = 2.0 * PI * start_degrees / 360.0;
        let delta_angle = 2.0 * PI / points_per_cycle;

        Self {
            quad_cm: 2.0 * delta_angle.cos(),
            quad_c2: (start_angle - 2.0 * delta_angle).cos(),
            quad_c1: (start_angle - 1.0 * delta_angle).cos(),
            quad_cos: start_angle.cos(),
            quad_s2: (start_angle - 2.0 * delta_angle).sin(),
            quad_s1: (start_angle - 1.0 * delta_angle).sin(),
            quad_sin: start_angle.sin(),
        }
    }

    /// Advance one angular step.
    pub fn step(&mut self) {
        self.quad_cos = self.quad_cm * self.quad_c1 - self.quad_c2;
        self.quad_sin = self.quad_cm * self.quad_s1 - self.quad_s2;
        // Save for next time around
        self.quad_c2 = self.quad_c1;
        self.quad_c1 = self.quad_cos;
        self.quad_s2 = self.quad_s1;
        self.quad_s1 = self.quad_sin;
    }

    /// Cosine at the current step. Does not advance.
    #[inline]
    pub fn cos(&self) -> f32 {
        self.quad_cos
    }

    /// Sine at the current step. Does not advance.
    #[inline]
    pub fn sin(&self) -> f32 {
        self.quad_sin
    }
}

impl<W: DacWriter> Beam<W> {
    /// Draw a circular arc centered at `(cx, cy)`.
    ///
    /// `points_per_circle` sets the angular density (points per full
    /// revolution); the segment count is
    /// `points_per_circle * 360 / (end_degrees - start_degrees)`.
    /// Arcs with `end_degrees <= start_degrees` are degenerate and skipped.
    pub fn arc(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_degrees: i32,
        end_degrees: i32,
        points_per_circle: u32,
    ) {
        let span = end_degrees - start_degrees;
        if span <= 0 || points_per_circle == 0 {
            return;
        }

        let mut osc = Quadrature::new(start_degrees as f32, points_per_circle as f32);
        let r = radius as f32;
        let mut x = (osc.cos() * r) as i32 + cx;
        let mut y = (osc.sin() * r) as i32 + cy;
        self.moveto(x, y);

        let count = points_per_circle * 360 / span as u32;
        for _ in 0..count {
            osc.step();
            let xx = (osc.cos() * r) as i32 + cx;
            let yy = (osc.sin() * r) as i32 + cy;
            self.line(x, y, xx, yy);
            x = xx;
            y = yy;
        }
    }

    /// Draw a full circle. Point density scales with the radius, with a
    /// floor of 10 so tiny circles do not come out visibly faceted.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let points = (radius / 4).max(10) as u32;
        self.arc(cx, cy, radius, 0, 360, points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DisplayProfile;
    use crate::sink::CaptureWriter;

    #[test]
    fn test_getters_do_not_advance() {
        let osc = Quadrature::new(30.0, 100.0);
        let c = osc.cos();
        let s = osc.sin();
        assert_eq!(osc.cos(), c);
        assert_eq!(osc.sin(), s);
        assert!((c - (PI / 6.0).cos()).abs() < 1e-5);
        assert!((s - (PI / 6.0).sin()).abs() < 1e-5);
    }

    #[test]
    fn test_step_matches_direct_trig() {
        let mut osc = Quadrature::new(0.0, 64.0);
        let delta = 2.0 * PI / 64.0;
        for n in 1..=16 {
            osc.step();
            let angle = delta * n as f32;
            assert!((osc.cos() - angle.cos()).abs() < 1e-4, "cos at step {}", n);
            assert!((osc.sin() - angle.sin()).abs() < 1e-4, "sin at step {}", n);
        }
    }

    #[test]
    fn test_full_cycle_round_trip() {
        let n = 48;
        let mut osc = Quadrature::new(15.0, n as f32);
        let (c0, s0) = (osc.cos(), osc.sin());
        for _ in 0..n {
            osc.step();
        }
        assert!((osc.cos() - c0).abs() < 1e-3);
        assert!((osc.sin() - s0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_starts_at_three_oclock() {
        let mut beam = Beam::new(CaptureWriter::new(), &DisplayProfile::dac_12bit());
        beam.circle(100, 100, 40);
        let samples = &beam.writer().samples;
        assert_eq!(samples[0], (140, 100));
        // 10-point density floor does not apply: radius/4 = 10 exactly.
        // Every sample stays on the circle's bounding box.
        for &(x, y) in samples {
            assert!((x as i32 - 100).abs() <= 41, "x sample off circle: {}", x);
            assert!((y as i32 - 100).abs() <= 41, "y sample off circle: {}", y);
        }
        // Closed: the trace ends within a unit of where it began.
        let (lx, ly) = beam.writer().last().unwrap();
        assert!((lx as i32 - 140).abs() <= 1 && (ly as i32 - 100).abs() <= 1);
    }

    #[test]
    fn test_small_circle_density_floor() {
        // radius 8 would give only 2 points; the floor of 10 keeps it round.
        let mut beam = Beam::new(CaptureWriter::new(), &DisplayProfile::dac_12bit());
        beam.circle(500, 500, 8);
        let samples = &beam.writer().samples;
        // A 2-gon would collapse to a line; 10 points must reach all four
        // extremes of the circle to within a step.
        let min_y = samples.iter().map(|s| s.1).min().unwrap();
        let max_y = samples.iter().map(|s| s.1).max().unwrap();
        assert!(min_y <= 493 && max_y >= 507);
    }

    #[test]
    fn test_degenerate_arc_skipped() {
        let mut beam = Beam::new(CaptureWriter::new(), &DisplayProfile::dac_12bit());
        beam.arc(100, 100, 40, 90, 90, 36);
        assert!(beam.writer().samples.is_empty());
        beam.arc(100, 100, 40, 180, 90, 36);
        assert!(beam.writer().samples.is_empty());
    }
}
