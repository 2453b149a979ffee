//! Simplex stroke-font table for the printable ASCII range.
//!
//! Glyph-local coordinates: x right, y up, baseline at y = 0, cap height 21,
//! x-height 14, descenders to -7. `(-1, -1)` lifts the pen; every real
//! coordinate has x >= 0, so the sentinel is unambiguous.

use super::Glyph;

// Pen-up marker between polylines.
const U: (i32, i32) = (super::PEN_UP, super::PEN_UP);

pub(super) static GLYPHS: [Glyph; 95] = [
    // ' '
    Glyph { width: 16, strokes: &[] },
    // '!'
    Glyph { width: 10, strokes: &[(5, 21), (5, 7), U, (5, 2), (4, 1), (5, 0), (6, 1), (5, 2)] },
    // '"'
    Glyph { width: 16, strokes: &[(4, 21), (4, 14), U, (12, 21), (12, 14)] },
    // '#'
    Glyph { width: 21, strokes: &[(11, 25), (4, 0), U, (17, 25), (10, 0), U, (4, 12), (18, 12), U, (3, 6), (17, 6)] },
    // '$'
    Glyph { width: 20, strokes: &[(8, 25), (8, 0), U, (12, 25), (12, 0), U, (17, 18), (15, 20), (12, 21), (8, 21), (5, 20), (3, 18), (3, 16), (4, 14), (5, 13), (7, 12), (13, 10), (15, 9), (16, 8), (17, 6), (17, 3), (15, 1), (12, 0), (8, 0), (5, 1), (3, 3)] },
    // '%'
    Glyph { width: 24, strokes: &[(21, 21), (3, 0), U, (8, 21), (10, 19), (10, 17), (9, 15), (7, 14), (5, 14), (3, 16), (3, 18), (4, 20), (6, 21), (8, 21), U, (17, 7), (15, 6), (14, 4), (14, 2), (16, 0), (18, 0), (20, 1), (21, 3), (21, 5), (19, 7), (17, 7)] },
    // '&'
    Glyph { width: 26, strokes: &[(23, 12), (23, 13), (22, 14), (21, 14), (20, 13), (19, 11), (17, 6), (15, 3), (13, 1), (11, 0), (7, 0), (5, 1), (4, 2), (3, 4), (3, 6), (4, 8), (5, 9), (12, 13), (13, 14), (14, 16), (14, 18), (13, 20), (11, 21), (9, 20), (8, 18), (8, 16), (9, 13), (11, 10), (16, 3), (18, 1), (20, 0), (22, 0), (23, 1), (23, 2)] },
    // '\''
    Glyph { width: 10, strokes: &[(5, 19), (4, 20), (5, 21), (6, 20), (6, 18), (5, 16), (4, 15)] },
    // '('
    Glyph { width: 14, strokes: &[(11, 25), (9, 23), (7, 20), (5, 16), (4, 11), (4, 7), (5, 2), (7, -2), (9, -5), (11, -7)] },
    // ')'
    Glyph { width: 14, strokes: &[(3, 25), (5, 23), (7, 20), (9, 16), (10, 11), (10, 7), (9, 2), (7, -2), (5, -5), (3, -7)] },
    // '*'
    Glyph { width: 16, strokes: &[(8, 21), (8, 9), U, (3, 18), (13, 12), U, (13, 18), (3, 12)] },
    // '+'
    Glyph { width: 26, strokes: &[(13, 18), (13, 0), U, (4, 9), (22, 9)] },
    // ','
    Glyph { width: 10, strokes: &[(6, 1), (5, 0), (4, 1), (5, 2), (6, 1), (6, -1), (5, -3), (4, -4)] },
    // '-'
    Glyph { width: 26, strokes: &[(4, 9), (22, 9)] },
    // '.'
    Glyph { width: 10, strokes: &[(5, 2), (4, 1), (5, 0), (6, 1), (5, 2)] },
    // '/'
    Glyph { width: 22, strokes: &[(20, 25), (2, -7)] },
    // '0'
    Glyph { width: 20, strokes: &[(9, 21), (6, 20), (4, 17), (3, 12), (3, 9), (4, 4), (6, 1), (9, 0), (11, 0), (14, 1), (16, 4), (17, 9), (17, 12), (16, 17), (14, 20), (11, 21), (9, 21)] },
    // '1'
    Glyph { width: 20, strokes: &[(6, 17), (8, 18), (11, 21), (11, 0)] },
    // '2'
    Glyph { width: 20, strokes: &[(4, 16), (4, 17), (5, 19), (6, 20), (8, 21), (12, 21), (14, 20), (15, 19), (16, 17), (16, 15), (15, 13), (13, 10), (3, 0), (17, 0)] },
    // '3'
    Glyph { width: 20, strokes: &[(5, 21), (16, 21), (10, 13), (13, 13), (15, 12), (16, 11), (17, 8), (17, 6), (16, 3), (14, 1), (11, 0), (8, 0), (5, 1), (4, 2), (3, 4)] },
    // '4'
    Glyph { width: 20, strokes: &[(13, 21), (3, 7), (18, 7), U, (13, 21), (13, 0)] },
    // '5'
    Glyph { width: 20, strokes: &[(15, 21), (5, 21), (4, 12), (5, 13), (8, 14), (11, 14), (14, 13), (16, 11), (17, 8), (17, 6), (16, 3), (14, 1), (11, 0), (8, 0), (5, 1), (4, 2), (3, 4)] },
    // '6'
    Glyph { width: 20, strokes: &[(16, 18), (15, 20), (12, 21), (10, 21), (7, 20), (5, 17), (4, 12), (4, 7), (5, 3), (7, 1), (10, 0), (11, 0), (14, 1), (16, 3), (17, 6), (17, 7), (16, 10), (14, 12), (11, 13), (10, 13), (7, 12), (5, 10), (4, 7)] },
    // '7'
    Glyph { width: 20, strokes: &[(17, 21), (7, 0), U, (3, 21), (17, 21)] },
    // '8'
    Glyph { width: 20, strokes: &[(8, 21), (5, 20), (4, 18), (4, 16), (5, 14), (7, 13), (11, 12), (14, 11), (16, 9), (17, 7), (17, 4), (16, 2), (15, 1), (12, 0), (8, 0), (5, 1), (4, 2), (3, 4), (3, 7), (4, 9), (6, 11), (9, 12), (13, 13), (15, 14), (16, 16), (16, 18), (15, 20), (12, 21), (8, 21)] },
    // '9'
    Glyph { width: 20, strokes: &[(16, 14), (15, 11), (13, 9), (10, 8), (9, 8), (6, 9), (4, 11), (3, 14), (3, 15), (4, 18), (6, 20), (9, 21), (10, 21), (13, 20), (15, 18), (16, 14), (16, 9), (15, 4), (13, 1), (10, 0), (8, 0), (5, 1), (4, 3)] },
    // ':'
    Glyph { width: 10, strokes: &[(5, 14), (4, 13), (5, 12), (6, 13), (5, 14), U, (5, 2), (4, 1), (5, 0), (6, 1), (5, 2)] },
    // ';'
    Glyph { width: 10, strokes: &[(5, 14), (4, 13), (5, 12), (6, 13), (5, 14), U, (6, 1), (5, 0), (4, 1), (5, 2), (6, 1), (6, -1), (5, -3), (4, -4)] },
    // '<'
    Glyph { width: 24, strokes: &[(20, 18), (4, 9), (20, 0)] },
    // '='
    Glyph { width: 26, strokes: &[(4, 12), (22, 12), U, (4, 6), (22, 6)] },
    // '>'
    Glyph { width: 24, strokes: &[(4, 18), (20, 9), (4, 0)] },
    // '?'
    Glyph { width: 18, strokes: &[(3, 16), (3, 17), (4, 19), (5, 20), (7, 21), (11, 21), (13, 20), (14, 19), (15, 17), (15, 15), (14, 13), (13, 12), (9, 10), (9, 7), U, (9, 2), (8, 1), (9, 0), (10, 1), (9, 2)] },
    // '@'
    Glyph { width: 27, strokes: &[(18, 13), (17, 15), (15, 16), (12, 16), (10, 15), (9, 14), (8, 11), (8, 8), (9, 6), (11, 5), (14, 5), (16, 6), (17, 8), U, (18, 16), (17, 8), (17, 6), (19, 5), (21, 5), (23, 7), (24, 10), (24, 12), (23, 15), (22, 17), (20, 19), (18, 20), (15, 21), (12, 21), (9, 20), (7, 19), (5, 17), (4, 15), (3, 12), (3, 9), (4, 6), (5, 4), (7, 2), (9, 1), (12, 0), (15, 0), (18, 1), (20, 2)] },
    // 'A'
    Glyph { width: 18, strokes: &[(9, 21), (1, 0), U, (9, 21), (17, 0), U, (4, 7), (14, 7)] },
    // 'B'
    Glyph { width: 21, strokes: &[(4, 21), (4, 0), U, (4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 15), (17, 13), (16, 12), (13, 11), U, (4, 11), (13, 11), (16, 10), (17, 9), (18, 7), (18, 4), (17, 2), (16, 1), (13, 0), (4, 0)] },
    // 'C'
    Glyph { width: 21, strokes: &[(18, 16), (17, 18), (15, 20), (13, 21), (9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5)] },
    // 'D'
    Glyph { width: 21, strokes: &[(4, 21), (4, 0), U, (4, 21), (11, 21), (14, 20), (16, 18), (17, 16), (18, 13), (18, 8), (17, 5), (16, 3), (14, 1), (11, 0), (4, 0)] },
    // 'E'
    Glyph { width: 19, strokes: &[(4, 21), (4, 0), U, (4, 21), (17, 21), U, (4, 11), (12, 11), U, (4, 0), (17, 0)] },
    // 'F'
    Glyph { width: 18, strokes: &[(4, 21), (4, 0), U, (4, 21), (17, 21), U, (4, 11), (12, 11)] },
    // 'G'
    Glyph { width: 21, strokes: &[(18, 16), (17, 18), (15, 20), (13, 21), (9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (18, 8), U, (13, 8), (18, 8)] },
    // 'H'
    Glyph { width: 22, strokes: &[(4, 21), (4, 0), U, (18, 21), (18, 0), U, (4, 11), (18, 11)] },
    // 'I'
    Glyph { width: 8, strokes: &[(4, 21), (4, 0)] },
    // 'J'
    Glyph { width: 16, strokes: &[(12, 21), (12, 5), (11, 2), (10, 1), (8, 0), (6, 0), (4, 1), (3, 2), (2, 5), (2, 7)] },
    // 'K'
    Glyph { width: 21, strokes: &[(4, 21), (4, 0), U, (18, 21), (4, 7), U, (9, 12), (18, 0)] },
    // 'L'
    Glyph { width: 17, strokes: &[(4, 21), (4, 0), U, (4, 0), (16, 0)] },
    // 'M'
    Glyph { width: 24, strokes: &[(4, 21), (4, 0), U, (4, 21), (12, 0), U, (20, 21), (12, 0), U, (20, 21), (20, 0)] },
    // 'N'
    Glyph { width: 22, strokes: &[(4, 21), (4, 0), U, (4, 21), (18, 0), U, (18, 21), (18, 0)] },
    // 'O'
    Glyph { width: 22, strokes: &[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21)] },
    // 'P'
    Glyph { width: 21, strokes: &[(4, 21), (4, 0), U, (4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 14), (17, 12), (16, 11), (13, 10), (4, 10)] },
    // 'Q'
    Glyph { width: 22, strokes: &[(9, 21), (7, 20), (5, 18), (4, 16), (3, 13), (3, 8), (4, 5), (5, 3), (7, 1), (9, 0), (13, 0), (15, 1), (17, 3), (18, 5), (19, 8), (19, 13), (18, 16), (17, 18), (15, 20), (13, 21), (9, 21), U, (12, 4), (18, -2)] },
    // 'R'
    Glyph { width: 21, strokes: &[(4, 21), (4, 0), U, (4, 21), (13, 21), (16, 20), (17, 19), (18, 17), (18, 15), (17, 13), (16, 12), (13, 11), (4, 11), U, (11, 11), (18, 0)] },
    // 'S'
    Glyph { width: 20, strokes: &[(17, 18), (15, 20), (12, 21), (8, 21), (5, 20), (3, 18), (3, 16), (4, 14), (5, 13), (7, 12), (13, 10), (15, 9), (16, 8), (17, 6), (17, 3), (15, 1), (12, 0), (8, 0), (5, 1), (3, 3)] },
    // 'T'
    Glyph { width: 16, strokes: &[(8, 21), (8, 0), U, (1, 21), (15, 21)] },
    // 'U'
    Glyph { width: 22, strokes: &[(4, 21), (4, 6), (5, 3), (7, 1), (10, 0), (12, 0), (15, 1), (17, 3), (18, 6), (18, 21)] },
    // 'V'
    Glyph { width: 18, strokes: &[(1, 21), (9, 0), U, (17, 21), (9, 0)] },
    // 'W'
    Glyph { width: 24, strokes: &[(2, 21), (7, 0), U, (12, 21), (7, 0), U, (12, 21), (17, 0), U, (22, 21), (17, 0)] },
    // 'X'
    Glyph { width: 20, strokes: &[(3, 21), (17, 0), U, (17, 21), (3, 0)] },
    // 'Y'
    Glyph { width: 18, strokes: &[(1, 21), (9, 11), (9, 0), U, (17, 21), (9, 11)] },
    // 'Z'
    Glyph { width: 20, strokes: &[(17, 21), (3, 0), U, (3, 21), (17, 21), U, (3, 0), (17, 0)] },
    // '['
    Glyph { width: 14, strokes: &[(4, 25), (4, -7), U, (5, 25), (5, -7), U, (4, 25), (11, 25), U, (4, -7), (11, -7)] },
    // '\\'
    Glyph { width: 14, strokes: &[(0, 21), (14, -3)] },
    // ']'
    Glyph { width: 14, strokes: &[(9, 25), (9, -7), U, (10, 25), (10, -7), U, (3, 25), (10, 25), U, (3, -7), (10, -7)] },
    // '^'
    Glyph { width: 16, strokes: &[(3, 15), (8, 20), (13, 15)] },
    // '_'
    Glyph { width: 16, strokes: &[(0, -2), (16, -2)] },
    // '`'
    Glyph { width: 10, strokes: &[(6, 21), (5, 20), (4, 18), (4, 16), (5, 15), (6, 16), (5, 17)] },
    // 'a'
    Glyph { width: 19, strokes: &[(15, 14), (15, 0), U, (15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'b'
    Glyph { width: 19, strokes: &[(4, 21), (4, 0), U, (4, 11), (6, 13), (8, 14), (11, 14), (13, 13), (15, 11), (16, 8), (16, 6), (15, 3), (13, 1), (11, 0), (8, 0), (6, 1), (4, 3)] },
    // 'c'
    Glyph { width: 18, strokes: &[(15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'd'
    Glyph { width: 19, strokes: &[(15, 21), (15, 0), U, (15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'e'
    Glyph { width: 18, strokes: &[(3, 8), (15, 8), (15, 10), (14, 12), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'f'
    Glyph { width: 12, strokes: &[(10, 21), (8, 21), (6, 20), (5, 17), (5, 0), U, (2, 14), (9, 14)] },
    // 'g'
    Glyph { width: 19, strokes: &[(15, 14), (15, -2), (14, -5), (13, -6), (11, -7), (8, -7), (6, -6), U, (15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'h'
    Glyph { width: 19, strokes: &[(4, 21), (4, 0), U, (4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)] },
    // 'i'
    Glyph { width: 8, strokes: &[(3, 21), (4, 20), (5, 21), (4, 22), (3, 21), U, (4, 14), (4, 0)] },
    // 'j'
    Glyph { width: 10, strokes: &[(5, 21), (6, 20), (7, 21), (6, 22), (5, 21), U, (6, 14), (6, -3), (5, -6), (3, -7), (1, -7)] },
    // 'k'
    Glyph { width: 17, strokes: &[(4, 21), (4, 0), U, (14, 14), (4, 4), U, (8, 8), (15, 0)] },
    // 'l'
    Glyph { width: 8, strokes: &[(4, 21), (4, 0)] },
    // 'm'
    Glyph { width: 30, strokes: &[(4, 14), (4, 0), U, (4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0), U, (15, 10), (18, 13), (20, 14), (23, 14), (25, 13), (26, 10), (26, 0)] },
    // 'n'
    Glyph { width: 19, strokes: &[(4, 14), (4, 0), U, (4, 10), (7, 13), (9, 14), (12, 14), (14, 13), (15, 10), (15, 0)] },
    // 'o'
    Glyph { width: 19, strokes: &[(8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3), (16, 6), (16, 8), (15, 11), (13, 13), (11, 14), (8, 14)] },
    // 'p'
    Glyph { width: 19, strokes: &[(4, 14), (4, -7), U, (4, 11), (6, 13), (8, 14), (11, 14), (13, 13), (15, 11), (16, 8), (16, 6), (15, 3), (13, 1), (11, 0), (8, 0), (6, 1), (4, 3)] },
    // 'q'
    Glyph { width: 19, strokes: &[(15, 14), (15, -7), U, (15, 11), (13, 13), (11, 14), (8, 14), (6, 13), (4, 11), (3, 8), (3, 6), (4, 3), (6, 1), (8, 0), (11, 0), (13, 1), (15, 3)] },
    // 'r'
    Glyph { width: 13, strokes: &[(4, 14), (4, 0), U, (4, 8), (5, 11), (7, 13), (9, 14), (12, 14)] },
    // 's'
    Glyph { width: 17, strokes: &[(14, 11), (13, 13), (10, 14), (7, 14), (4, 13), (3, 11), (4, 9), (6, 8), (11, 7), (13, 6), (14, 4), (14, 3), (13, 1), (10, 0), (7, 0), (4, 1), (3, 3)] },
    // 't'
    Glyph { width: 12, strokes: &[(5, 21), (5, 4), (6, 1), (8, 0), (10, 0), U, (2, 14), (9, 14)] },
    // 'u'
    Glyph { width: 19, strokes: &[(4, 14), (4, 4), (5, 1), (7, 0), (10, 0), (12, 1), (15, 4), U, (15, 14), (15, 0)] },
    // 'v'
    Glyph { width: 16, strokes: &[(2, 14), (8, 0), U, (14, 14), (8, 0)] },
    // 'w'
    Glyph { width: 22, strokes: &[(3, 14), (7, 0), U, (11, 14), (7, 0), U, (11, 14), (15, 0), U, (19, 14), (15, 0)] },
    // 'x'
    Glyph { width: 17, strokes: &[(3, 14), (14, 0), U, (14, 14), (3, 0)] },
    // 'y'
    Glyph { width: 16, strokes: &[(2, 14), (8, 0), U, (14, 14), (8, 0), (6, -4), (4, -6), (2, -7), (1, -7)] },
    // 'z'
    Glyph { width: 17, strokes: &[(14, 14), (3, 0), U, (3, 14), (14, 14), U, (3, 0), (14, 0)] },
    // '{'
    Glyph { width: 14, strokes: &[(9, 25), (7, 23), (6, 20), (6, 14), (5, 11), (4, 9), (5, 7), (6, 4), (6, -2), (7, -5), (9, -7)] },
    // '|'
    Glyph { width: 8, strokes: &[(4, 25), (4, -7)] },
    // '}'
    Glyph { width: 14, strokes: &[(5, 25), (7, 23), (8, 20), (8, 14), (9, 11), (10, 9), (9, 7), (8, 4), (8, -2), (7, -5), (5, -7)] },
    // '~'
    Glyph { width: 24, strokes: &[(3, 6), (3, 8), (4, 11), (6, 12), (8, 12), (10, 11), (14, 8), (16, 7), (18, 7), (20, 8), (21, 10), (21, 12)] },
];
