//! Raster rendering of the clue table, and of the filled cells when the grid is included.

use image::{Rgb, RgbImage};

use crate::clue::Clues;
use crate::error::GenerateError;
use crate::grid::Grid;
use crate::group::Axis;
use crate::location::Location;

/// Side of one table cell, in pixels.
pub const CELL: u32 = 24;
/// Largest width or height of a rendered table, in pixels.
pub const MAX_SIDE: u32 = 1 << 15;
/// Pixels per font dot.
const SCALE: u32 = 3;

/// Shade of filled cells.
pub const FILLED_IN_COLOR: Rgb<u8> = Rgb([0xFF, 0x00, 0x00]);
const BACKGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const INK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

// 3x5 digits, one row per entry, most significant bit leftmost
const GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const GLYPH_WIDTH: u32 = 3 * SCALE;
const GLYPH_HEIGHT: u32 = 5 * SCALE;
const GLYPH_GAP: u32 = SCALE;

fn fill_rect(img: &mut RgbImage, (x, y): (u32, u32), (w, h): (u32, u32), color: Rgb<u8>) {
    for px in x..(x + w).min(img.width()) {
        for py in y..(y + h).min(img.height()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn outline_rect(img: &mut RgbImage, (x, y): (u32, u32), (w, h): (u32, u32)) {
    if w == 0 || h == 0 {
        return;
    }

    fill_rect(img, (x, y), (w + 1, 1), INK);
    fill_rect(img, (x, y + h), (w + 1, 1), INK);
    fill_rect(img, (x, y), (1, h + 1), INK);
    fill_rect(img, (x + w, y), (1, h + 1), INK);
}

/// Draw `value` centred in the `CELL`-sized slot whose top left corner is `(x, y)`.
fn draw_number(img: &mut RgbImage, value: usize, (x, y): (u32, u32)) {
    let digits: Vec<usize> = value.to_string().bytes().map(|b| usize::from(b - b'0')).collect();
    let count = digits.len() as u32;
    let text_width = count * GLYPH_WIDTH + count.saturating_sub(1) * GLYPH_GAP;

    let left = (x + CELL / 2).saturating_sub(text_width / 2);
    let top = y + (CELL - GLYPH_HEIGHT) / 2;

    for (i, digit) in digits.into_iter().enumerate() {
        let glyph_left = left + i as u32 * (GLYPH_WIDTH + GLYPH_GAP);
        for (row, bits) in GLYPHS[digit].iter().enumerate() {
            for col in 0..3 {
                if bits & (0b100 >> col) != 0 {
                    fill_rect(img, (glyph_left + col * SCALE, top + row as u32 * SCALE), (SCALE, SCALE), INK);
                }
            }
        }
    }
}

/// Pixels along one side: `slots` clue slots, `cells` grid cells and the closing line.
fn side(slots: usize, cells: usize) -> Option<u32> {
    let side = u32::try_from(slots.checked_add(cells)?).ok()?
        .checked_mul(CELL)?
        .checked_add(1)?;
    (side <= MAX_SIDE).then_some(side)
}

/// Render the puzzle table: row clues right-aligned in a left margin, column clues bottom-aligned in a top margin,
/// and one square per grid cell. Filled cells are shaded in [`FILLED_IN_COLOR`] only when `include_grid` is set.
///
/// Fails with [`GenerateError::ImageTooLarge`] if either side would exceed [`MAX_SIDE`] pixels.
pub fn render(grid: &Grid, clues: &Clues, include_grid: bool) -> Result<RgbImage, GenerateError> {
    let (row_slots, col_slots) = (clues.max_count(Axis::Row), clues.max_count(Axis::Col));
    let (Some(img_width), Some(img_height)) = (side(row_slots, grid.width()), side(col_slots, grid.height())) else {
        return Err(GenerateError::ImageTooLarge { width: grid.width(), height: grid.height() });
    };

    // every count below is bounded by MAX_SIDE / CELL
    let (row_slots, col_slots) = (row_slots as u32, col_slots as u32);
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let margin_left = row_slots * CELL;
    let margin_top = col_slots * CELL;
    let mut img = RgbImage::from_pixel(img_width, img_height, BACKGROUND);

    for (y, line) in clues.rows.iter().enumerate() {
        let top = margin_top + y as u32 * CELL;
        outline_rect(&mut img, (0, top), (margin_left, CELL));
        let first_slot = row_slots - line.len() as u32;
        for (i, clue) in line.iter().enumerate() {
            draw_number(&mut img, *clue, ((first_slot + i as u32) * CELL, top));
        }
    }

    for (x, line) in clues.cols.iter().enumerate() {
        let left = margin_left + x as u32 * CELL;
        outline_rect(&mut img, (left, 0), (CELL, margin_top));
        let first_slot = col_slots - line.len() as u32;
        for (i, clue) in line.iter().enumerate() {
            draw_number(&mut img, *clue, (left, (first_slot + i as u32) * CELL));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let corner = (margin_left + x * CELL, margin_top + y * CELL);
            let filled = grid.get(Location(x as usize, y as usize)).is_some_and(|cell| cell.is_filled());
            if include_grid && filled {
                fill_rect(&mut img, corner, (CELL, CELL), FILLED_IN_COLOR);
            }
            outline_rect(&mut img, corner, (CELL, CELL));
        }
    }

    Ok(img)
}
