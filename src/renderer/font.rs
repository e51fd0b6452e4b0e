//! Small numeric "font"
//!
//! Each digit is a 4x6 cell including one spacing column on the right and
//! one empty row at the bottom. Cells are drawn as 10 px square points.

use glam::DVec2;

/// Cells per glyph, horizontally and vertically
pub const GLYPH_COLUMNS: usize = 4;
pub const GLYPH_ROWS: usize = 6;

/// Size of one glyph cell (the font's "pixel") in screen pixels
pub const CELL_SIZE: f64 = 10.0;

/// Horizontal distance between consecutive digits
pub const ADVANCE: f64 = CELL_SIZE * GLYPH_COLUMNS as f64;

/// Digits 0-9 side by side, 'o' = lit cell
const DIGIT_BITMAP: [&[u8; 40]; GLYPH_ROWS] = [
    b" o   o   o  oo  o o ooo ooo ooo  o  ooo ",
    b"o o oo  o o   o o o o   o     o o o o o ",
    b"ooo  o    o  o  ooo oo  ooo   o  o  ooo ",
    b"o o  o   o    o   o   o o o  o  o o   o ",
    b" o   o  ooo oo    o oo  ooo  o   o  oo  ",
    b"                                        ",
];

/// Lit cells of one digit as (column, row)
pub fn digit_cells(digit: u8) -> impl Iterator<Item = (usize, usize)> {
    let base = usize::from(digit % 10) * GLYPH_COLUMNS;
    (0..GLYPH_COLUMNS).flat_map(move |c| {
        (0..GLYPH_ROWS).filter_map(move |r| (DIGIT_BITMAP[r][base + c] == b'o').then_some((c, r)))
    })
}

/// Append the center of every lit cell of `number` to `out`
///
/// Digits are laid out right to left starting at `anchor` (the center of the
/// least significant digit's first cell, y growing downward). Zero still prints
/// one digit.
pub fn number_pixels(anchor: DVec2, number: u32, out: &mut Vec<DVec2>) {
    let mut number = number;
    let mut x = anchor.x;
    loop {
        let digit = (number % 10) as u8;
        for (c, r) in digit_cells(digit) {
            out.push(DVec2::new(x + c as f64 * CELL_SIZE, anchor.y + r as f64 * CELL_SIZE));
        }
        number /= 10;
        x -= ADVANCE;
        if number == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_one() {
        let cells: Vec<_> = digit_cells(1).collect();
        // Column 0 only has the serif on row 1
        assert!(cells.contains(&(0, 1)));
        // Stem on column 1, rows 0..=4
        for r in 0..5 {
            assert!(cells.contains(&(1, r)));
        }
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_spacing_column_and_row_blank() {
        for d in 0..10 {
            for (c, r) in digit_cells(d) {
                assert!(c < GLYPH_COLUMNS - 1);
                assert!(r < GLYPH_ROWS - 1);
            }
        }
    }

    #[test]
    fn test_zero_prints_one_digit() {
        let mut out = Vec::new();
        number_pixels(DVec2::new(160.0, 540.0), 0, &mut out);
        assert_eq!(out.len(), digit_cells(0).count());
        assert!(out.iter().all(|p| p.x >= 160.0 && p.x < 160.0 + ADVANCE));
    }

    #[test]
    fn test_digits_right_to_left() {
        let mut out = Vec::new();
        number_pixels(DVec2::new(160.0, 0.0), 21, &mut out);
        let ones = digit_cells(1).count();
        // Least significant digit first, at the anchor
        assert!(out[..ones].iter().all(|p| p.x >= 160.0));
        // Tens digit one advance to the left
        assert!(out[ones..].iter().all(|p| p.x >= 120.0 && p.x < 160.0));
        assert_eq!(out.len(), ones + digit_cells(2).count());
    }
}
