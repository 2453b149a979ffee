//! Stroke-font text rendering.
//!
//! Glyphs are pen-up/pen-down polyline tables, the natural font form for a
//! vector display. Coordinates are scaled by `size * 3 / 4` in integer math;
//! the 3/4 factor normalizes the table's native units to device units.

mod data;

use crate::beam::Beam;
use crate::rot::VectorRot;
use crate::sink::DacWriter;

/// Sentinel x value that lifts the pen: the next stroke point is a move, not
/// a line. Never a real coordinate (all glyph x values are non-negative).
pub const PEN_UP: i32 = -1;

/// One stroke-font glyph: advance width plus an ordered polyline table.
pub struct Glyph {
    pub width: i32,
    pub strokes: &'static [(i32, i32)],
}

impl Glyph {
    /// Bounds-checked glyph lookup. The table is dense from `' '` through
    /// `'~'`; anything else yields `None` rather than an out-of-range index.
    pub fn lookup(c: char) -> Option<&'static Glyph> {
        if (' '..='~').contains(&c) {
            data::GLYPHS.get(c as usize - ' ' as usize)
        } else {
            None
        }
    }
}

/// Advance width of `s` at the given size, without touching the beam.
/// Characters outside the printable range contribute nothing, matching what
/// `draw_string` would actually draw.
pub fn size_string(s: &str, size: i32) -> i32 {
    s.chars()
        .filter_map(Glyph::lookup)
        .map(|g| g.width * size * 3 / 4)
        .sum()
}

/// Vertical advance between text lines at the given size.
pub fn vspace(size: i32) -> i32 {
    // cap height 21 plus descender depth 7, with a quarter line of leading
    let char_height = 21 + 7;
    (size as f32 * 1.25 * char_height as f32) as i32
}

impl<W: DacWriter> Beam<W> {
    /// Draw one character with its glyph origin at `(x, y)` (baseline left).
    /// Returns the horizontal advance. Unsupported characters draw nothing
    /// and advance zero.
    pub fn draw_character(&mut self, c: char, x: i32, y: i32, size: i32) -> i32 {
        let Some(glyph) = Glyph::lookup(c) else {
            return 0;
        };

        let mut next_moveto = true;
        for &(dx, dy) in glyph.strokes {
            if dx == PEN_UP {
                next_moveto = true;
                continue;
            }

            let px = x + dx * size * 3 / 4;
            let py = y + dy * size * 3 / 4;

            if next_moveto {
                self.moveto(px, py);
            } else {
                self.lineto(px, py);
            }
            next_moveto = false;
        }

        glyph.width * size * 3 / 4
    }

    /// Draw a string left to right from baseline `(x, y)`. Returns the final
    /// x position for continuation or centering.
    pub fn draw_string(&mut self, s: &str, x: i32, y: i32, size: i32) -> i32 {
        let mut x = x;
        for c in s.chars() {
            x += self.draw_character(c, x, y, size);
        }
        x
    }

    /// Draw one character through a 2D rotation context. `(x, y)` offsets the
    /// glyph in the rotation's local frame before mapping; scale comes from
    /// the context itself. Used for dial markings and rotated labels.
    pub fn draw_character_rot(&mut self, rot: &VectorRot, x: i32, y: i32, c: char) {
        let Some(glyph) = Glyph::lookup(c) else {
            return;
        };

        let mut next_moveto = true;
        for &(dx, dy) in glyph.strokes {
            if dx == PEN_UP {
                next_moveto = true;
                continue;
            }

            let lx = x + dx;
            let ly = y + dy;
            let px = rot.rot_x(lx, ly);
            let py = rot.rot_y(lx, ly);

            if next_moveto {
                self.moveto(px, py);
            } else {
                self.lineto(px, py);
            }
            next_moveto = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DisplayProfile;
    use crate::sink::CaptureWriter;

    fn beam() -> Beam<CaptureWriter> {
        Beam::new(CaptureWriter::new(), &DisplayProfile::dac_12bit())
    }

    #[test]
    fn test_table_integrity() {
        for (i, glyph) in (0u8..).zip(data_iter()) {
            let c = (b' ' + i) as char;
            assert!(glyph.width > 0, "glyph {:?} has no advance", c);
            let mut pen_down = false;
            for &(x, _y) in glyph.strokes {
                if x == PEN_UP {
                    assert!(pen_down, "glyph {:?} lifts an already-up pen", c);
                    pen_down = false;
                } else {
                    assert!(x >= 0, "glyph {:?} has x colliding with sentinel", c);
                    pen_down = true;
                }
            }
        }
    }

    fn data_iter() -> impl Iterator<Item = &'static Glyph> {
        (' '..='~').map(|c| Glyph::lookup(c).unwrap())
    }

    #[test]
    fn test_lookup_rejects_out_of_range() {
        assert!(Glyph::lookup('\n').is_none());
        assert!(Glyph::lookup('\u{7f}').is_none());
        assert!(Glyph::lookup('é').is_none());
    }

    #[test]
    fn test_space_advances_without_touching_sink() {
        let mut b = beam();
        let advance = b.draw_character(' ', 100, 100, 4);
        assert_eq!(advance, 16 * 4 * 3 / 4);
        assert!(b.writer().samples.is_empty());
        assert_eq!((b.x(), b.y()), (0, 0));
    }

    #[test]
    fn test_unsupported_character_skipped() {
        let mut b = beam();
        assert_eq!(b.draw_character('\t', 100, 100, 4), 0);
        assert!(b.writer().samples.is_empty());
    }

    #[test]
    fn test_size_string_matches_drawn_advances() {
        let s = "Hi there!";
        let size = 2;
        let mut b = beam();
        let mut sum = 0;
        for c in s.chars() {
            sum += b.draw_character(c, 200 + sum, 300, size);
        }
        assert_eq!(size_string(s, size), sum);
    }

    #[test]
    fn test_size_string_never_moves_beam() {
        let b = beam();
        let _ = size_string("LAYOUT ONLY", 3);
        assert!(b.writer().samples.is_empty());
        assert_eq!((b.x(), b.y()), (0, 0));
    }

    #[test]
    fn test_draw_string_returns_final_x() {
        let mut b = beam();
        let end = b.draw_string("AB 12", 500, 500, 2);
        assert_eq!(end, 500 + size_string("AB 12", 2));
    }

    #[test]
    fn test_character_strokes_land_near_origin() {
        // 'I' at size 4 is a single vertical bar: x fixed, y spanning 0..21
        // scaled by 3 (= 4 * 3 / 4).
        let mut b = beam();
        b.draw_character('I', 1000, 1000, 4);
        let samples = &b.writer().samples;
        assert!(!samples.is_empty());
        for &(x, y) in samples {
            assert_eq!(x, 1000 + 4 * 3);
            assert!((1000..=1063).contains(&(y as i32)));
        }
        assert_eq!((b.x(), b.y()), (1000 + 12, 1000));
    }
}
