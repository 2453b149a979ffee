//! Software phosphor screen.
//!
//! A [`DacWriter`] that accumulates beam samples into an intensity buffer,
//! the way a CRT phosphor accumulates beam energy. The preview window decays
//! it every frame and uploads the green-phosphor RGBA rendering; tests use it
//! to ask "what did the scope actually see".
//!
//! This lives outside the engine on purpose: the rasterizer never assumes any
//! persistence exists.

use crate::sink::DacWriter;

/// Beam energy added per sample hit.
const HIT_ENERGY: u8 = 72;

pub struct PhosphorScreen {
    width: u32,
    height: u32,
    max_x: i32,
    max_y: i32,
    intensity: Vec<u8>,
    rgba: Vec<u8>,
}

impl PhosphorScreen {
    /// A screen of `width` x `height` pixels showing the DAC range
    /// `[0, max_x] x [0, max_y]`.
    pub fn new(width: u32, height: u32, max_x: i32, max_y: i32) -> Self {
        let pixels = (width * height) as usize;
        Self {
            width,
            height,
            max_x,
            max_y,
            intensity: vec![0; pixels],
            rgba: vec![0; pixels * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Phosphor persistence decay; call once per frame.
    /// factor: 0.0 = instant black, 1.0 = infinite persistence.
    pub fn decay(&mut self, factor: f32) {
        let factor = (factor.clamp(0.0, 1.0) * 256.0) as u16;
        for v in &mut self.intensity {
            *v = ((*v as u16 * factor) >> 8) as u8;
        }
    }

    /// Intensity at a pixel, for probing in tests.
    pub fn intensity_at(&self, px: u32, py: u32) -> Option<u8> {
        if px < self.width && py < self.height {
            Some(self.intensity[(py * self.width + px) as usize])
        } else {
            None
        }
    }

    /// Map a DAC coordinate pair to a pixel. DAC y grows upward, screen y
    /// grows downward.
    #[inline]
    fn pixel_for(&self, x: u16, y: u16) -> (u32, u32) {
        let px = x as i64 * (self.width as i64 - 1) / self.max_x as i64;
        let py = y as i64 * (self.height as i64 - 1) / self.max_y as i64;
        (px as u32, self.height - 1 - py as u32)
    }

    /// Render the intensity buffer as RGBA8888 bytes (little-endian ABGR
    /// order, matching an SDL streaming texture). Green phosphor tint.
    pub fn render_rgba(&mut self) -> &[u8] {
        for (chunk, &v) in self.rgba.chunks_exact_mut(4).zip(&self.intensity) {
            chunk[0] = 255; // A
            chunk[1] = v / 3; // B
            chunk[2] = v; // G
            chunk[3] = v / 4; // R
        }
        &self.rgba
    }
}

impl DacWriter for PhosphorScreen {
    fn write_xy(&mut self, x: u16, y: u16) {
        let (px, py) = self.pixel_for(x, y);
        let idx = (py * self.width + px) as usize;
        self.intensity[idx] = self.intensity[idx].saturating_add(HIT_ENERGY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lands_on_expected_pixel() {
        let mut screen = PhosphorScreen::new(512, 512, 4095, 4095);
        screen.write_xy(0, 0);
        screen.write_xy(4095, 4095);
        // DAC origin is bottom-left; pixel origin is top-left.
        assert_eq!(screen.intensity_at(0, 511), Some(HIT_ENERGY));
        assert_eq!(screen.intensity_at(511, 0), Some(HIT_ENERGY));
        assert_eq!(screen.intensity_at(0, 0), Some(0));
    }

    #[test]
    fn test_repeat_hits_accumulate_and_saturate() {
        let mut screen = PhosphorScreen::new(64, 64, 1023, 1023);
        for _ in 0..10 {
            screen.write_xy(512, 512);
        }
        let (px, py) = screen.pixel_for(512, 512);
        assert_eq!(screen.intensity_at(px, py), Some(255));
    }

    #[test]
    fn test_decay_fades_to_black() {
        let mut screen = PhosphorScreen::new(64, 64, 1023, 1023);
        screen.write_xy(100, 100);
        for _ in 0..64 {
            screen.decay(0.8);
        }
        assert!(screen.intensity.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_probe_out_of_bounds() {
        let screen = PhosphorScreen::new(64, 64, 1023, 1023);
        assert_eq!(screen.intensity_at(64, 0), None);
    }
}
