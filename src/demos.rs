//! Demo scenes for the scope preview.
//!
//! Each demo redraws its whole frame through the beam every tick; a vector
//! display has no frame buffer, so the image *is* the sample stream.

use crate::beam::Beam;
use crate::font::{size_string, Glyph};
use crate::math3d::{project, Mat3, Vec3};
use crate::phosphor::PhosphorScreen;
use crate::rot::{Angle, VectorRot};
use std::f32::consts::TAU;
use std::time::{SystemTime, UNIX_EPOCH};

/// A scene drawn on the simulated scope
pub trait Demo {
    /// Update scene state (called each frame)
    /// - dt: delta time in seconds
    fn update(&mut self, dt: f32);

    /// Trace one frame through the beam
    fn render(&mut self, beam: &mut Beam<PhosphorScreen>);

    fn name(&self) -> &str;
}

// ============================================================================
// Clock
// ============================================================================

/// Analog clock: dial, rotated digits, sweeping hands. The classic scope
/// clock application this engine grew out of.
pub struct Clock {
    /// Seconds since local midnight, fractional.
    day_seconds: f64,
}

impl Clock {
    pub fn new() -> Self {
        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Self {
            day_seconds: epoch % 86_400.0,
        }
    }

    fn hand(beam: &mut Beam<PhosphorScreen>, cx: i32, cy: i32, scale: i32, turns: f64, len: i32) {
        // Local +y is "12 o'clock" at angle zero; a positive angle swings it
        // toward +x, which reads as clockwise on the dial.
        let rot = VectorRot::new(cx, cy, scale, Angle::from_degrees((turns * 360.0) as f32));
        beam.line(cx, cy, rot.rot_x(0, len), rot.rot_y(0, len));
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Clock {
    fn update(&mut self, dt: f32) {
        self.day_seconds = (self.day_seconds + dt as f64) % 86_400.0;
    }

    fn render(&mut self, beam: &mut Beam<PhosphorScreen>) {
        let cx = beam.max_x() / 2;
        let cy = beam.max_y() / 2;
        let radius = beam.max_x().min(beam.max_y()) * 4 / 10;
        // Fixed-point: one glyph/local unit = scale/64 device units.
        let scale = radius * 64 / 128;

        beam.circle(cx, cy, radius);

        // Minute ticks, long every five
        for tick in 0..60 {
            let rot = VectorRot::new(cx, cy, scale, Angle::from_degrees(tick as f32 * 6.0));
            let inner = if tick % 5 == 0 { 115 } else { 123 };
            beam.line(
                rot.rot_x(0, inner),
                rot.rot_y(0, inner),
                rot.rot_x(0, 128),
                rot.rot_y(0, 128),
            );
        }

        // Dial digits, each rotated to its own station
        for hour in 1..=12 {
            let label = hour.to_string();
            let rot = VectorRot::new(cx, cy, scale, Angle::from_degrees(hour as f32 * 30.0));
            // Center the one- or two-digit label on the dial ring; widths are
            // glyph-local units, which is what the rotation context consumes.
            let width: i32 = label.chars().filter_map(Glyph::lookup).map(|g| g.width).sum();
            let mut x = -width / 2;
            for c in label.chars() {
                beam.draw_character_rot(&rot, x, 90, c);
                x += Glyph::lookup(c).map_or(0, |g| g.width);
            }
        }

        let s = self.day_seconds;
        let seconds_turn = (s % 60.0) / 60.0;
        let minutes_turn = (s % 3600.0) / 3600.0;
        let hours_turn = (s % 43_200.0) / 43_200.0;

        Self::hand(beam, cx, cy, scale, hours_turn, 64);
        Self::hand(beam, cx, cy, scale, minutes_turn, 100);
        Self::hand(beam, cx, cy, scale, seconds_turn, 112);
    }

    fn name(&self) -> &str {
        "Clock"
    }
}

// ============================================================================
// Marquee
// ============================================================================

/// Text scrolling right to left across the middle of the screen.
pub struct Marquee {
    text: String,
    size: i32,
    offset: f32,
    speed: f32,
}

impl Marquee {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 8,
            offset: 0.0,
            speed: 900.0,
        }
    }
}

impl Demo for Marquee {
    fn update(&mut self, dt: f32) {
        self.offset += self.speed * dt;
        let span = (size_string(&self.text, self.size) + 2000) as f32;
        if self.offset > span {
            self.offset -= span;
        }
    }

    fn render(&mut self, beam: &mut Beam<PhosphorScreen>) {
        let y = beam.max_y() / 2;
        let x = beam.max_x() - self.offset as i32;
        beam.draw_string(&self.text, x, y, self.size);

        // Static centered caption underneath, laid out via size_string
        let caption = "beamtrace";
        let cx = (beam.max_x() - size_string(caption, 4)) / 2;
        beam.draw_string(caption, cx, y - 800, 4);
    }

    fn name(&self) -> &str {
        "Marquee"
    }
}

// ============================================================================
// Wireframe
// ============================================================================

/// Tumbling wireframe cube, projected and traced edge by edge.
pub struct Wireframe {
    angle: f32,
    vertices: [Vec3; 8],
    edges: [(usize, usize); 12],
}

impl Wireframe {
    pub fn new() -> Self {
        let h = 1.0;
        Self {
            angle: 0.0,
            vertices: [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
            edges: [
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
        }
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Wireframe {
    fn update(&mut self, dt: f32) {
        self.angle += dt * 0.8;
    }

    fn render(&mut self, beam: &mut Beam<PhosphorScreen>) {
        let m = Mat3::rotation_xyz(self.angle, self.angle * 0.7, self.angle * 0.3);
        let cx = beam.max_x() as f32 / 2.0;
        let cy = beam.max_y() as f32 / 2.0;
        let fov = beam.max_x() as f32 * 0.9;

        let mut projected = [(0, 0); 8];
        for (i, v) in self.vertices.iter().enumerate() {
            let mut p = v.rotated(&m);
            p.z += 4.0;
            match project(p, fov, cx, cy) {
                Some((x, y)) => projected[i] = (x as i32, y as i32),
                None => return,
            }
        }

        for &(a, b) in &self.edges {
            let (x0, y0) = projected[a];
            let (x1, y1) = projected[b];
            beam.line(x0, y0, x1, y1);
        }
    }

    fn name(&self) -> &str {
        "Wireframe"
    }
}

// ============================================================================
// Radar
// ============================================================================

/// Range rings with a rotating sweep line.
pub struct Radar {
    sweep: f32,
}

impl Radar {
    pub fn new() -> Self {
        Self { sweep: 0.0 }
    }
}

impl Default for Radar {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Radar {
    fn update(&mut self, dt: f32) {
        self.sweep = (self.sweep + dt * 0.5) % 1.0;
    }

    fn render(&mut self, beam: &mut Beam<PhosphorScreen>) {
        let cx = beam.max_x() / 2;
        let cy = beam.max_y() / 2;
        let radius = beam.max_x().min(beam.max_y()) * 45 / 100;

        for ring in 1..=3 {
            beam.circle(cx, cy, radius * ring / 3);
        }

        let theta = self.sweep * TAU;
        let (sx, sy) = (
            cx + (theta.cos() * radius as f32) as i32,
            cy + (theta.sin() * radius as f32) as i32,
        );
        beam.line(cx, cy, sx, sy);
    }

    fn name(&self) -> &str {
        "Radar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DisplayProfile;

    fn beam() -> Beam<PhosphorScreen> {
        let profile = DisplayProfile::dac_12bit();
        Beam::new(
            PhosphorScreen::new(256, 256, profile.max_x, profile.max_y),
            &profile,
        )
    }

    #[test]
    fn test_demos_render_without_panicking() {
        let mut demos: Vec<Box<dyn Demo>> = vec![
            Box::new(Clock::new()),
            Box::new(Marquee::new("HELLO SCOPE")),
            Box::new(Wireframe::new()),
            Box::new(Radar::new()),
        ];
        let mut b = beam();
        for demo in &mut demos {
            demo.update(0.016);
            demo.render(&mut b);
            assert!(!demo.name().is_empty());
        }
    }

    #[test]
    fn test_wireframe_lights_phosphor() {
        let mut demo = Wireframe::new();
        let mut b = beam();
        demo.render(&mut b);
        let lit = (0..256)
            .flat_map(|y| (0..256).map(move |x| (x, y)))
            .filter(|&(x, y)| b.writer().intensity_at(x, y).unwrap_or(0) > 0)
            .count();
        assert!(lit > 50, "cube should trace a visible outline, lit={}", lit);
    }
}
